//! Character variety sections - uppercase, lowercase, digits, special characters.
//!
//! Each class is scored on its own: one point when present, a remark otherwise.

use crate::rules::RuleSet;
use secrecy::{ExposeSecret, SecretString};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use super::SectionResult;

fn class_section(
    password: &SecretString,
    matches: impl Fn(char) -> bool,
    missing: &str,
) -> SectionResult {
    if password.expose_secret().chars().any(matches) {
        SectionResult::Passed(1)
    } else {
        SectionResult::Failed(format!("Password should contain at least one {}.", missing))
    }
}

/// Checks for at least one uppercase letter.
///
/// # Returns
/// - `Passed(1)` if any character is uppercase
/// - `Failed(remark)` otherwise
pub fn uppercase_section(password: &SecretString, _rules: &RuleSet) -> SectionResult {
    class_section(password, char::is_uppercase, "uppercase letter")
}

/// Checks for at least one lowercase letter.
///
/// # Returns
/// - `Passed(1)` if any character is lowercase
/// - `Failed(remark)` otherwise
pub fn lowercase_section(password: &SecretString, _rules: &RuleSet) -> SectionResult {
    class_section(password, char::is_lowercase, "lowercase letter")
}

/// Checks for at least one decimal digit.
///
/// Any character of general category `Nd` counts, so `٣` does but `½`,
/// `Ⅻ` and `²` do not.
pub fn digit_section(password: &SecretString, _rules: &RuleSet) -> SectionResult {
    class_section(password, is_decimal_digit, "digit")
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Only characters from the rule set's special set count.
pub fn special_character_section(password: &SecretString, rules: &RuleSet) -> SectionResult {
    class_section(password, |c| rules.is_special(c), "special character")
}
