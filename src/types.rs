//! Evaluation result types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Strength verdict derived from a [`PasswordScore`].
///
/// Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PasswordStrength {
    #[cfg_attr(feature = "serde", serde(rename = "Weak"))]
    Weak,
    #[cfg_attr(feature = "serde", serde(rename = "Moderate"))]
    Moderate,
    #[cfg_attr(feature = "serde", serde(rename = "Strong"))]
    Strong,
    #[cfg_attr(feature = "serde", serde(rename = "Very Strong"))]
    VeryStrong,
}

impl PasswordStrength {
    /// Classifies a score: `>= 5` very strong, `>= 3` strong, `>= 2` moderate.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            5.. => PasswordStrength::VeryStrong,
            3..=4 => PasswordStrength::Strong,
            2 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }

    /// Human-readable label, e.g. `"Very Strong"`.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "🚨",
            PasswordStrength::Moderate => "🤔",
            PasswordStrength::Strong => "👍",
            PasswordStrength::VeryStrong => "💪",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Password score in `0..=PasswordScore::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Highest attainable score: 2 for length plus 1 per character class.
    pub const MAX: u8 = 6;

    /// Creates a score, saturating at [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Score as a fraction of the maximum, for progress display.
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Outcome of evaluating one candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PasswordEvaluation {
    strength: PasswordStrength,
    score: PasswordScore,
    remarks: Vec<String>,
}

impl PasswordEvaluation {
    pub(crate) fn new(score: PasswordScore, remarks: Vec<String>) -> Self {
        Self {
            strength: PasswordStrength::from_score(score),
            score,
            remarks,
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    /// Unmet criteria, in evaluation order. Empty when every criterion passed.
    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }
}
