//! Password strength checking library
//!
//! Scores a candidate password against a fixed rule set: length, character
//! variety, and a list of blocked common passwords.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-check` terminal front-end
//! - `serde`: Derives `Serialize` for evaluation results
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLOCKLIST_PATH`: File of additional blocked passwords, one per
//!   line, read by [`RuleSet::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef123456!".into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
//! assert_eq!(evaluation.score().value(), 6);
//! assert!(evaluation.remarks().is_empty());
//! ```

// Internal modules
mod evaluator;
mod rules;
mod sections;
mod types;

// Public API
pub use evaluator::{evaluate, evaluate_password_strength, evaluate_with_rules};
pub use rules::{
    BLOCKLIST_PATH_ENV, BlocklistError, COMMON_PASSWORDS, RuleSet, SPECIAL_CHARACTERS,
    get_blocklist_path,
};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};
