//! Length section - rewards longer passwords.

use crate::rules::RuleSet;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Scores the password length in characters.
///
/// # Returns
/// - `Passed(2)` for at least 12 characters
/// - `Passed(1)` for 8 to 11 characters
/// - `Failed(remark)` for anything shorter
pub fn length_section(password: &SecretString, _rules: &RuleSet) -> SectionResult {
    match password.expose_secret().chars().count() {
        n if n >= LONG_LENGTH => SectionResult::Passed(2),
        n if n >= MIN_LENGTH => SectionResult::Passed(1),
        _ => SectionResult::Failed(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        )),
    }
}
