use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Parses a UTC datetime from the wire format `"YYYY-MM-DD HH:MM"`.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed datetime
/// - `Err(AppError::BadRequest)` - Value does not match the expected format
pub fn parse_datetime_utc(value: &str) -> Result<DateTime<Utc>, AppError> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M").map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid datetime '{}', expected format YYYY-MM-DD HH:MM",
            value
        ))
    })?;

    Ok(naive.and_utc())
}
