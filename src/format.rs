//! Number formatting for the result panel

use crate::calculator::CalculationResult;

/// Separator used when the config does not set one
pub const DEFAULT_THOUSANDS_SEPARATOR: &str = ".";

/// Group the digits of `value` in threes from the right.
///
/// ```ignore
/// assert_eq!(group_thousands(1234567, "."), "1.234.567");
/// ```
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    grouped
}

/// One-line summary of a result, used for the clipboard
pub fn result_summary(result: &CalculationResult, separator: &str) -> String {
    format!(
        "{}: {} packages ({} units, {} per package)",
        result.product_name,
        group_thousands(result.packages_needed, separator),
        group_thousands(result.total_units, separator),
        group_thousands(result.units_per_package, separator),
    )
}
