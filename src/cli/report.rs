//! Rendering of evaluations for the terminal.

use console::{StyledObject, style};
use pwd_check::{PasswordEvaluation, PasswordScore, PasswordStrength};
use serde::Serialize;

const BAR_WIDTH: usize = 30;

#[derive(Serialize)]
struct JsonReport<'a> {
    strength: PasswordStrength,
    score: PasswordScore,
    max_score: u8,
    remarks: &'a [String],
}

fn styled_label(strength: PasswordStrength) -> StyledObject<&'static str> {
    let label = style(strength.label()).bold();
    match strength {
        PasswordStrength::Weak => label.red(),
        PasswordStrength::Moderate => label.yellow(),
        PasswordStrength::Strong => label.green(),
        PasswordStrength::VeryStrong => label.green().bright(),
    }
}

/// Bar filled in proportion to `score / MAX`, followed by the raw score.
pub fn progress_bar(score: PasswordScore) -> String {
    let filled = (score.fraction() * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        score
    )
}

pub fn render_text(evaluation: &PasswordEvaluation) -> String {
    let strength = evaluation.strength();
    let mut out = format!(
        "Password Strength: {} {}\n{}",
        styled_label(strength),
        strength.emoji(),
        progress_bar(evaluation.score())
    );

    if !evaluation.remarks().is_empty() {
        out.push_str(&format!("\n{}", style("Remarks:").yellow()));
        for remark in evaluation.remarks() {
            out.push_str("\n- ");
            out.push_str(remark);
        }
    }
    out
}

pub fn render_json(evaluation: &PasswordEvaluation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        strength: evaluation.strength(),
        score: evaluation.score(),
        max_score: PasswordScore::MAX,
        remarks: evaluation.remarks(),
    })
}
