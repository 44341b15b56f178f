//! Terminal front-end: argument parsing and password acquisition.

mod report;

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use inquire::{Password, PasswordDisplayMode};
use pwd_check::{BlocklistError, RuleSet, evaluate_with_rules};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "pwd-check", version, about = "🔐 Check the strength of a password")]
pub struct Args {
    /// Password to check. Prompted for when omitted.
    #[arg(conflicts_with = "stdin")]
    pub password: Option<String>,

    /// Read the password from the first line of standard input
    #[arg(long)]
    pub stdin: bool,

    /// File of additional blocked passwords, one per line
    #[arg(long, env = "PWD_BLOCKLIST_PATH")]
    pub blocklist: Option<PathBuf>,

    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Please enter a password to check its strength.")]
    EmptyPassword,
    #[error(transparent)]
    Blocklist(#[from] BlocklistError),
    #[error("Failed to read password: {0}")]
    Prompt(#[from] inquire::InquireError),
    #[error("Failed to read standard input: {0}")]
    Stdin(#[from] io::Error),
    #[error("Failed to encode evaluation: {0}")]
    Json(#[from] serde_json::Error),
}

/// Evaluates the password selected by `args` and prints the verdict.
pub fn run(args: &Args) -> Result<(), CliError> {
    let custom_rules;
    let rules = match &args.blocklist {
        Some(path) => {
            custom_rules = RuleSet::with_blocklist_file(path)?;
            &custom_rules
        }
        None => RuleSet::standard(),
    };

    let password = read_password(args)?;
    if password.expose_secret().is_empty() {
        return Err(CliError::EmptyPassword);
    }

    let evaluation = evaluate_with_rules(&password, rules);
    let output = if args.json {
        report::render_json(&evaluation)?
    } else {
        report::render_text(&evaluation)
    };
    println!("{}", output);

    Ok(())
}

fn read_password(args: &Args) -> Result<SecretString, CliError> {
    if let Some(password) = &args.password {
        return Ok(SecretString::new(password.as_str().into()));
    }

    if args.stdin {
        return read_password_line(&mut io::stdin().lock());
    }

    let password = Password::new("🔐 Password:")
        .with_display_mode(PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;
    Ok(SecretString::new(password.into()))
}

/// Reads one line, dropping the line terminator.
fn read_password_line<R: BufRead>(reader: &mut R) -> Result<SecretString, CliError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);
    Ok(SecretString::new(password.into()))
}
