use crate::errors::{AppError, AppResult};

/// Parse a numeric value typed by the user.
/// The retry policy belongs to the caller; this never loops.
pub fn parse_value(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(trimmed.to_string()))
}

/// Parse a day count for a trailing window.
pub fn parse_window_days(input: &str) -> AppResult<u32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| AppError::InvalidInput(trimmed.to_string()))
}
