use gradebook::StudentId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{input}' is not a valid choice. Expected a number from 1 to {max}.")]
    InvalidChoice { input: String, max: u32 },

    #[error("Invalid ID format: '{0}'.")]
    InvalidId(String),

    #[error("Invalid grade format: '{0}'.")]
    InvalidGrade(String),
}

/// Parses a 1-based menu selection bounded by `max`.
pub fn parse_choice(input: &str, max: u32) -> Result<u32, ParseError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidChoice {
            input: trimmed.to_string(),
            max,
        }),
    }
}

pub fn parse_student_id(input: &str) -> Result<StudentId, ParseError> {
    input
        .parse::<StudentId>()
        .map_err(|_| ParseError::InvalidId(input.trim().to_string()))
}

/// Parses a grade as a finite number. Range checking is left to the roster.
pub fn parse_grade(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidGrade(trimmed.to_string())),
    }
}
