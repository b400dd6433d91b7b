//! Form field value objects

/// What a field accepts while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Characters a numeric input accepts (digits, sign, decimal point, exponent)
    Quantity,
}

impl FieldKind {
    /// Whether `c` may be typed into a field of this kind
    pub fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Quantity => c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'),
        }
    }
}

/// Represents a single form field with its configuration and raw value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    /// Create a new free-text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self::new(name, label, placeholder, FieldKind::Text)
    }

    /// Create a new quantity field
    pub fn quantity(name: &str, label: &str, placeholder: &str) -> Self {
        Self::new(name, label, placeholder, FieldKind::Quantity)
    }

    fn new(name: &str, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value: String::new(),
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value.
    /// Returns false when the field kind rejects the character.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.kind.accepts(c) {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Remove the last character from the field value.
    /// Returns false when the field was already empty.
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }
}
