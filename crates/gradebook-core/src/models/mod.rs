//! # Models Module
//!
//! Data structures describing a single tracked student.
//!
//! - [`ids`] - The [`StudentId`](ids::StudentId) newtype handed out by the roster
//! - [`grade`] - Grade range validation and the [`LetterGrade`](grade::LetterGrade) classification
//! - [`student`] - The [`Student`](student::Student) record and its derived statistics

pub mod grade;
pub mod ids;
pub mod student;
