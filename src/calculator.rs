//! Package count calculation
//!
//! Validates the raw form input and derives how many whole packages are
//! needed to hold the requested number of units.

use thiserror::Error;

/// Outcome of a successful calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    /// Product name, trimmed and never empty
    pub product_name: String,
    /// Units requested (> 0)
    pub total_units: u64,
    /// Units that fit in one package (> 0)
    pub units_per_package: u64,
    /// Whole packages required, always `ceil(total_units / units_per_package)`
    pub packages_needed: u64,
}

/// Reason a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Quantities must be positive numbers greater than zero.")]
    InvalidQuantity,
}

/// Validate the raw inputs and compute the package count.
///
/// The first failing check wins: blank fields are reported before
/// unparsable or non-positive quantities.
pub fn calculate(
    product_name: &str,
    total_units_raw: &str,
    units_per_package_raw: &str,
) -> Result<CalculationResult, ValidationError> {
    let product_name = product_name.trim();
    if product_name.is_empty() || total_units_raw.is_empty() || units_per_package_raw.is_empty()
    {
        return Err(ValidationError::MissingField);
    }

    let total_units = positive_quantity(total_units_raw)?;
    let units_per_package = positive_quantity(units_per_package_raw)?;

    Ok(CalculationResult {
        product_name: product_name.to_string(),
        total_units,
        units_per_package,
        packages_needed: total_units.div_ceil(units_per_package),
    })
}

fn positive_quantity(raw: &str) -> Result<u64, ValidationError> {
    match parse_leading_int(raw) {
        Some(LeadingInt::Positive(n)) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

/// Integer read from the start of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingInt {
    /// Zero or a positive value
    Positive(u64),
    /// A non-zero value carrying a minus sign
    Negative,
    /// Digits were present but the magnitude exceeds `u64`
    Overflow,
}

/// Read a base-10 integer prefix.
///
/// Leading whitespace is skipped and one `+` or `-` sign is accepted. The
/// longest run of ASCII digits that follows is the value; anything after it
/// is ignored, so `"12abc"` reads as 12 and `"3.9"` as 3. Returns `None` when
/// no digit follows the optional sign.
pub fn parse_leading_int(raw: &str) -> Option<LeadingInt> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let parsed = rest[..digits_len].bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    });

    Some(match parsed {
        None => LeadingInt::Overflow,
        Some(0) => LeadingInt::Positive(0),
        Some(_) if negative => LeadingInt::Negative,
        Some(n) => LeadingInt::Positive(n),
    })
}
