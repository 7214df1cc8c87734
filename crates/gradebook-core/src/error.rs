use crate::models::ids::StudentId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GradebookError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradebookError {
    #[error("Grade must be between 0 and 100")]
    InvalidGrade { value: f64 },

    #[error("Student not found with ID: {id}")]
    StudentNotFound { id: StudentId },

    #[error("Student name cannot be empty")]
    InvalidName,

    #[error("No student ids left to assign")]
    IdsExhausted,
}
