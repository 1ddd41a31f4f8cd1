use crate::errors::{AppError, AppResult};
use crate::ui::messages::error;
use crate::utils::numbers::parse_value;
use std::io::{self, Write};

/// Print a label and read one trimmed line from stdin.
/// A closed stdin surfaces as UnexpectedEof, which the shell loop treats
/// as a normal exit.
pub fn prompt(label: &str) -> AppResult<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin().read_line(&mut line)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }

    Ok(line.trim().to_string())
}

/// Yes/no confirmation; anything but y/yes is a no.
pub fn confirm(label: &str) -> AppResult<bool> {
    let answer = prompt(label)?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Prompt for a numeric value until it parses. Enter skips (None).
pub fn prompt_value_or_skip(label: &str) -> AppResult<Option<f64>> {
    loop {
        let raw = prompt(label)?;
        if raw.is_empty() {
            return Ok(None);
        }
        match parse_value(&raw) {
            Ok(v) => return Ok(Some(v)),
            Err(e) => error(format!("Oops! {}. Let's try that again.", e)),
        }
    }
}

/// Prompt for a required numeric value until it parses.
pub fn prompt_value(label: &str) -> AppResult<f64> {
    loop {
        match prompt_value_or_skip(label)? {
            Some(v) => return Ok(v),
            None => error("A number is required here."),
        }
    }
}
