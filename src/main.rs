//! Interactive shell around the scoring library: prompt for one
//! password, evaluate it, render the report.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use pwd_meter::evaluate_password_strength;
use secrecy::SecretString;
use thiserror::Error;

/// Failure to acquire a password from the terminal, distinct from
/// scoring (which never fails).
#[derive(Error, Debug)]
enum PromptError {
    #[error("end of input before a password was entered")]
    Eof,
    #[error("failed to read from the terminal")]
    Read(#[from] io::Error),
}

fn read_password() -> Result<SecretString, PromptError> {
    print!("Enter a password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(SecretString::new(line.into()))
}

fn main() -> Result<()> {
    let password = read_password().context("could not acquire a password")?;
    let report = evaluate_password_strength(&password);

    println!("\nPassword Analysis:");
    for warning in &report.warnings {
        println!("[WARNING] {warning}");
    }
    println!(
        "\nPassword Strength: {}% ({})",
        report.score.value(),
        report.strength()
    );
    Ok(())
}
