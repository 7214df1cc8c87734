use crate::error::Result;
use crate::models::ids::StudentId;
use crate::models::student::Student;
use crate::report::ClassSummary;
use crate::roster::Roster;

/// Defines the capability set a front-end needs from a student store.
///
/// Front-ends are written against this trait rather than a concrete
/// [`Roster`], so the same store can back a text menu, a dashboard, or any
/// other presentation.
pub trait GradeBook {
    /// Creates a student and returns the id assigned to them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the name.
    fn create_student(&mut self, name: &str) -> Result<StudentId>;

    /// Returns all students in insertion order.
    fn list_students(&self) -> Vec<&Student>;

    fn student(&self, id: StudentId) -> Option<&Student>;

    fn student_by_name(&self, name: &str) -> Option<&Student>;

    /// Records a grade for an existing student.
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist or the grade is out of range.
    fn record_grade(&mut self, id: StudentId, value: f64) -> Result<()>;

    fn summarize(&self) -> ClassSummary;
}

impl GradeBook for Roster {
    fn create_student(&mut self, name: &str) -> Result<StudentId> {
        self.add_student(name)
    }

    fn list_students(&self) -> Vec<&Student> {
        self.students().collect()
    }

    fn student(&self, id: StudentId) -> Option<&Student> {
        self.find_by_id(id)
    }

    fn student_by_name(&self, name: &str) -> Option<&Student> {
        self.find_by_name(name)
    }

    fn record_grade(&mut self, id: StudentId, value: f64) -> Result<()> {
        self.add_grade(id, value)
    }

    fn summarize(&self) -> ClassSummary {
        self.summary()
    }
}
