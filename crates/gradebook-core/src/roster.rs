use crate::error::{GradebookError, Result};
use crate::models::ids::StudentId;
use crate::models::student::Student;
use crate::report::{ClassSummary, StudentLine};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The collection of all tracked students.
///
/// The roster owns every [`Student`], hands out sequential ids starting at 1,
/// and derives class-wide statistics by composing per-student statistics.
/// Ids only ever grow, so iterating the id-keyed map yields students in
/// insertion order.
#[derive(Debug, Clone)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
    /// `None` once the last representable id has been handed out.
    next_id: Option<StudentId>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: Some(StudentId::FIRST),
        }
    }
}

impl Roster {
    /// Creates an empty roster whose first student will receive id 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns an iterator over all students in insertion order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Creates a new student and returns the id assigned to them.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the student. Leading and trailing whitespace
    ///   is trimmed before storing.
    ///
    /// # Return
    ///
    /// The freshly assigned [`StudentId`].
    ///
    /// # Errors
    ///
    /// Returns [`GradebookError::InvalidName`] if the trimmed name is empty.
    /// No id is consumed in that case. Returns [`GradebookError::IdsExhausted`]
    /// once every `u32` id has been assigned.
    pub fn add_student(&mut self, name: &str) -> Result<StudentId> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected student with blank name.");
            return Err(GradebookError::InvalidName);
        }

        let Some(id) = self.next_id else {
            warn!("Rejected student '{}': no ids left.", name);
            return Err(GradebookError::IdsExhausted);
        };
        self.next_id = id.next();
        self.students.insert(id, Student::new(id, name));
        debug!("Added student '{}' with id {}.", name, id);
        Ok(id)
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Finds the first student, in insertion order, whose name matches
    /// `name` case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&Student> {
        let needle = name.to_lowercase();
        self.students
            .values()
            .find(|s| s.name().to_lowercase() == needle)
    }

    /// Records a grade for the student with the given id.
    ///
    /// # Errors
    ///
    /// * [`GradebookError::StudentNotFound`] if no student has `id`.
    /// * [`GradebookError::InvalidGrade`] if `value` lies outside `[0, 100]`.
    ///
    /// The roster is unchanged on either error.
    pub fn add_grade(&mut self, id: StudentId, value: f64) -> Result<()> {
        let student = self.students.get_mut(&id).ok_or_else(|| {
            warn!("Grade {} rejected: no student with id {}.", value, id);
            GradebookError::StudentNotFound { id }
        })?;

        student.add_grade(value).inspect_err(|_| {
            warn!("Grade {} rejected for student {}: out of range.", value, id);
        })?;
        debug!("Recorded grade {} for student {}.", value, id);
        Ok(())
    }

    /// Mean of per-student averages, or `0.0` for an empty roster.
    ///
    /// Every student weighs equally regardless of how many grades they have.
    pub fn class_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: f64 = self.students.values().map(Student::average).sum();
        total / self.students.len() as f64
    }

    /// Maximum of per-student highest grades, or `0.0` for an empty roster.
    pub fn class_highest(&self) -> f64 {
        self.students
            .values()
            .map(Student::highest)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Minimum of per-student lowest grades, or `0.0` for an empty roster.
    ///
    /// A student without grades contributes their `0.0` sentinel.
    pub fn class_lowest(&self) -> f64 {
        self.students
            .values()
            .map(Student::lowest)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    pub fn summary(&self) -> ClassSummary {
        ClassSummary {
            student_count: self.students.len(),
            average: self.class_average(),
            highest: self.class_highest(),
            lowest: self.class_lowest(),
            students: self.students.values().map(StudentLine::from).collect(),
        }
    }
}
