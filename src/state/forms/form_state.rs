//! Calculator form state machine

use super::field::FormField;
use crate::calculator::{calculate, CalculationResult, ValidationError};

/// Number of input fields (product name, total units, units per package)
pub const FIELD_COUNT: usize = 3;
/// Focus index of the buttons row, after the last input field
pub const BUTTONS_ROW: usize = FIELD_COUNT;
/// Number of buttons on the action row
pub const BUTTON_COUNT: usize = 2;

/// Result of the last submission
pub type Outcome = Result<CalculationResult, ValidationError>;

/// Observable state of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// All fields blank, no result, no error
    Empty,
    /// Input changed since the last submission (a previous outcome may still be shown)
    Editing,
    /// Last submission produced a result
    Computed,
    /// Last submission was rejected
    Invalid,
}

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Calculate,
    Clear,
}

impl FormButton {
    /// Buttons in display order, left to right
    pub const ALL: [FormButton; BUTTON_COUNT] = [FormButton::Clear, FormButton::Calculate];

    pub fn label(self) -> &'static str {
        match self {
            FormButton::Calculate => "Calculate",
            FormButton::Clear => "Clear",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FormButton::Calculate => FormButton::Clear,
            FormButton::Clear => FormButton::Calculate,
        }
    }
}

/// Raw text currently held by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInput<'a> {
    pub product_name: &'a str,
    pub total_units_raw: &'a str,
    pub units_per_package_raw: &'a str,
}

/// The unit-to-package form: three raw inputs plus the last outcome
#[derive(Debug, Clone)]
pub struct CalculatorForm {
    pub product_name: FormField,
    pub total_units: FormField,
    pub units_per_package: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
    outcome: Option<Outcome>,
    edited_since_submit: bool,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self {
            product_name: FormField::text("product_name", "Product name", "Ex: Coca-Cola 2L"),
            total_units: FormField::quantity(
                "total_units",
                "Total units wanted",
                "Ex: 100",
            ),
            units_per_package: FormField::quantity(
                "units_per_package",
                "Units per package/box",
                "Ex: 6",
            ),
            active_field_index: 0,
            selected_button: FormButton::default(),
            outcome: None,
            edited_since_submit: false,
        }
    }

    pub fn input(&self) -> FormInput<'_> {
        FormInput {
            product_name: self.product_name.as_text(),
            total_units_raw: self.total_units.as_text(),
            units_per_package_raw: self.units_per_package.as_text(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        match &self.outcome {
            None if self.fields().iter().all(|f| f.is_empty()) => FormPhase::Empty,
            None => FormPhase::Editing,
            Some(_) if self.edited_since_submit => FormPhase::Editing,
            Some(Ok(_)) => FormPhase::Computed,
            Some(Err(_)) => FormPhase::Invalid,
        }
    }

    /// Result of the last submission, kept until the next submit or clear
    pub fn result(&self) -> Option<&CalculationResult> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    /// Error of the last submission, kept until the next submit or clear
    pub fn error(&self) -> Option<ValidationError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err().copied())
    }

    pub fn fields(&self) -> [&FormField; FIELD_COUNT] {
        [&self.product_name, &self.total_units, &self.units_per_package]
    }

    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.product_name),
            1 => Some(&mut self.total_units),
            2 => Some(&mut self.units_per_package),
            // Buttons row has no FormField
            _ => None,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (BUTTONS_ROW + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = BUTTONS_ROW;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    /// Type a character into the active field.
    ///
    /// A previous result or error stays visible; only a new submit or a
    /// clear replaces it.
    pub fn input_char(&mut self, c: char) -> bool {
        let changed = self.active_field_mut().is_some_and(|field| {
            let accepted = field.push_char(c);
            if !accepted {
                tracing::trace!(field = %field.name, ?c, "character rejected");
            }
            accepted
        });
        if changed {
            self.edited_since_submit = true;
        }
        changed
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) -> bool {
        let changed = self.active_field_mut().is_some_and(FormField::pop_char);
        if changed {
            self.edited_since_submit = true;
        }
        changed
    }

    /// Run the calculator on the current input and store its outcome
    pub fn submit(&mut self) -> &Outcome {
        let input = self.input();
        let outcome = calculate(
            input.product_name,
            input.total_units_raw,
            input.units_per_package_raw,
        );

        match &outcome {
            Ok(result) => tracing::debug!(
                product = %result.product_name,
                total_units = result.total_units,
                units_per_package = result.units_per_package,
                packages_needed = result.packages_needed,
                "calculation succeeded"
            ),
            Err(err) => tracing::debug!(error = ?err, "calculation rejected"),
        }

        self.edited_since_submit = false;
        self.outcome.insert(outcome)
    }

    /// Reset every field, the outcome and focus
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new()
    }
}
