//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::rules::RuleSet;
use crate::sections::{
    Section, SectionResult, common_password_section, digit_section, length_section,
    lowercase_section, special_character_section, uppercase_section,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Evaluates a plain string against the standard rule set.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    evaluate_password_strength(&SecretString::new(password.into()))
}

/// Evaluates password strength against the standard rule set.
///
/// Never fails: every input, including the empty string, yields an evaluation.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate_with_rules(password, RuleSet::standard())
}

/// Evaluates password strength against a caller-provided rule set.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `rules` - Blocked passwords and special characters to score against
///
/// # Returns
/// A `PasswordEvaluation` containing strength, score and remarks.
pub fn evaluate_with_rules(password: &SecretString, rules: &RuleSet) -> PasswordEvaluation {
    let mut remarks = Vec::new();
    let mut score: u8 = 0;

    // Orchestrator: remarks follow section order
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_character_section),
    ];

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    for (section_name, section_fn) in sections {
        match section_fn(password, rules) {
            SectionResult::Passed(points) => {
                score += points;
            }
            SectionResult::Failed(remark) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Criterion not met: {}", section_name);
                remarks.push(remark);
            }
        }
    }

    // Applied last: discards all credit, keeps earlier remarks
    if let Some(remark) = common_password_section(password, rules) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Common password override applied");
        score = 0;
        remarks.push(remark);
    }

    let evaluation = PasswordEvaluation::new(PasswordScore::new(score), remarks);

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Password evaluated: {} ({}), {} remark(s)",
        evaluation.strength(),
        evaluation.score(),
        evaluation.remarks().len()
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LENGTH: &str = "Password should be at least 8 characters long.";
    const UPPER: &str = "Password should contain at least one uppercase letter.";
    const LOWER: &str = "Password should contain at least one lowercase letter.";
    const DIGIT: &str = "Password should contain at least one digit.";
    const SPECIAL: &str = "Password should contain at least one special character.";
    const COMMON: &str = "Password is too common. Choose a more unique password.";

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");

        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.score().value(), 0);
        assert_eq!(evaluation.remarks(), [LENGTH, UPPER, LOWER, DIGIT, SPECIAL]);
    }

    #[test]
    fn test_evaluate_common_password() {
        let evaluation = evaluate("password");

        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.score().value(), 0);
        assert_eq!(evaluation.remarks(), [UPPER, DIGIT, SPECIAL, COMMON]);
    }

    #[test]
    fn test_evaluate_common_password_case_insensitive() {
        let evaluation = evaluate("QWERTY");

        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.score().value(), 0);
        assert_eq!(evaluation.remarks(), [LENGTH, LOWER, DIGIT, SPECIAL, COMMON]);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate("Abc12345");

        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert_eq!(evaluation.score().value(), 4);
        assert_eq!(evaluation.remarks(), [SPECIAL]);
    }

    #[test]
    fn test_evaluate_very_strong_password() {
        let evaluation = evaluate("Abcdef123456!");

        assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
        assert_eq!(evaluation.score().value(), 6);
        assert!(evaluation.remarks().is_empty());
    }

    #[test]
    fn test_evaluate_moderate_password() {
        // length 8 (+1), lowercase (+1)
        let evaluation = evaluate("abcdefgh");

        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.score().value(), 2);
        assert_eq!(evaluation.remarks(), [UPPER, DIGIT, SPECIAL]);
    }

    #[test]
    fn test_evaluate_short_password_with_all_classes() {
        let evaluation = evaluate("aB3!");

        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert_eq!(evaluation.score().value(), 4);
        assert_eq!(evaluation.remarks(), [LENGTH]);
    }

    #[test]
    fn test_evaluate_fraction_is_not_a_digit() {
        // length 9 (+1), lowercase (+1); '½' earns nothing
        let evaluation = evaluate("abcdefgh½");

        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.score().value(), 2);
        assert_eq!(evaluation.remarks(), [UPPER, DIGIT, SPECIAL]);
    }

    #[test]
    fn test_evaluate_non_ascii_decimal_digit() {
        // length 8 (+1), upper, lower, digit '٣' (+3)
        let evaluation = evaluate("Abcdefg٣");

        assert_eq!(evaluation.score().value(), 4);
        assert_eq!(evaluation.remarks(), [SPECIAL]);
    }

    #[test]
    fn test_evaluate_very_strong_thresholds() {
        // 8-11 characters need all four classes
        assert_eq!(evaluate("Abcde12!").strength(), PasswordStrength::VeryStrong);
        assert_eq!(evaluate("Abcdef12").strength(), PasswordStrength::Strong);
        // 12+ characters need three of four
        assert_eq!(evaluate("Abcdefgh1234").strength(), PasswordStrength::VeryStrong);
        assert_eq!(evaluate("abcdefgh1234").strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_evaluate_remarks_match_score() {
        // Without the override, each failed criterion costs exactly its points
        for pwd in ["", "a", "abcdefgh", "Abc12345", "ABCDEFGHIJKL", "Abcdef123456!", "ñ1?"] {
            let evaluation = evaluate(pwd);
            let length_points = match pwd.chars().count() {
                n if n >= 12 => 2,
                n if n >= 8 => 1,
                _ => 0,
            };
            let class_remarks = evaluation
                .remarks()
                .iter()
                .filter(|r| r.as_str() != LENGTH)
                .count() as u8;
            assert_eq!(
                evaluation.score().value(),
                length_points + 4 - class_remarks,
                "password {pwd:?}"
            );
        }
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = [
            "",
            "a",
            "password",
            "Password",
            "admin",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "🔐🔐🔐🔐🔐🔐🔐🔐🔐🔐🔐🔐",
            "ÜberLänge-Passwort_2024",
        ];

        for pwd in test_passwords {
            let score = evaluate(pwd).score().value();
            assert!(
                score <= PasswordScore::MAX,
                "Score {} out of bounds for password '{}'",
                score,
                pwd
            );
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for pwd in ["", "QWERTY", "Abc12345", "Abcdef123456!"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_evaluate_with_extended_rules() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Tr0ub4dor&3").expect("Failed to write");
        let rules = RuleSet::with_blocklist_file(temp_file.path()).unwrap();

        let pwd = SecretString::new("tr0ub4dor&3".into());
        let evaluation = evaluate_with_rules(&pwd, &rules);
        assert_eq!(evaluation.score().value(), 0);
        assert_eq!(evaluation.remarks().last().map(String::as_str), Some(COMMON));

        // Standard rules do not know it
        let evaluation = evaluate_password_strength(&pwd);
        assert_eq!(evaluation.score().value(), 4);
    }
}
