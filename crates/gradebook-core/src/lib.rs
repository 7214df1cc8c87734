//! # Gradebook Core Library
//!
//! An in-memory student roster that records numeric grades and derives
//! per-student and class-wide statistics.
//!
//! ## Layout
//!
//! - **[`models`]**: the [`Student`] record, its [`StudentId`], and the
//!   [`LetterGrade`] classification.
//! - **[`roster`]**: the [`Roster`], which owns all students, assigns ids, and
//!   composes class statistics.
//! - **[`gradebook`]**: the [`GradeBook`] trait every front-end is written against.
//! - **[`report`]**: the printable [`ClassSummary`].
//!
//! ```
//! use gradebook::Roster;
//!
//! let mut roster = Roster::new();
//! let alice = roster.add_student("Alice")?;
//! roster.add_grade(alice, 80.0)?;
//! roster.add_grade(alice, 90.0)?;
//! assert_eq!(roster.class_average(), 85.0);
//! # Ok::<(), gradebook::GradebookError>(())
//! ```

pub mod error;
pub mod gradebook;
pub mod models;
pub mod report;
pub mod roster;

pub use error::{GradebookError, Result};
pub use gradebook::GradeBook;
pub use models::grade::LetterGrade;
pub use models::ids::StudentId;
pub use models::student::Student;
pub use report::{ClassSummary, StudentLine};
pub use roster::Roster;
