//! Password evaluation sections
//!
//! Each section checks one strength criterion.

mod common;
mod length;
mod variety;

pub use common::common_password_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_character_section, uppercase_section};

use crate::rules::RuleSet;
use secrecy::SecretString;

/// Outcome of a scoring section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionResult {
    /// Criterion met, worth the given points.
    Passed(u8),
    /// Criterion not met, with the remark to report.
    Failed(String),
}

/// Signature shared by every scoring section.
pub type Section = fn(&SecretString, &RuleSet) -> SectionResult;
