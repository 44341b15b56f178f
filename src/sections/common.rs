//! Common password section - checks the candidate against the blocked list.

use crate::rules::RuleSet;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is one of the blocked common passwords.
///
/// Unlike the scoring sections this is an override: a match zeroes the score.
///
/// # Returns
/// - `Some(remark)` if password is blocked
/// - `None` otherwise
pub fn common_password_section(password: &SecretString, rules: &RuleSet) -> Option<String> {
    if rules.is_common(password.expose_secret()) {
        return Some("Password is too common. Choose a more unique password.".to_string());
    }
    None
}
