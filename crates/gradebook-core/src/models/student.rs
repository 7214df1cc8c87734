use super::grade::{LetterGrade, is_valid_grade};
use super::ids::StudentId;
use crate::error::{GradebookError, Result};
use crate::report::StudentLine;
use std::fmt;

/// A tracked student and the ordered sequence of grades recorded for them.
///
/// Grades are append-only and always lie in `[0, 100]`. Statistics are
/// derived from the grade sequence on every call rather than cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    grades: Vec<f64>,
}

impl Student {
    /// Creates a student with no grades.
    ///
    /// Ids are assigned by the roster; this constructor does not validate the name.
    pub(crate) fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accepted grades in the order they were added.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Appends a grade to this student's record.
    ///
    /// # Arguments
    ///
    /// * `value` - The grade to record; must lie in the closed interval `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`GradebookError::InvalidGrade`] if `value` is out of range or NaN.
    /// The grade sequence is left untouched in that case.
    pub fn add_grade(&mut self, value: f64) -> Result<()> {
        if !is_valid_grade(value) {
            return Err(GradebookError::InvalidGrade { value });
        }
        self.grades.push(value);
        Ok(())
    }

    /// Arithmetic mean of all grades, or `0.0` if none have been recorded.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Highest recorded grade, or `0.0` if none have been recorded.
    pub fn highest(&self) -> f64 {
        self.grades.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Lowest recorded grade, or `0.0` if none have been recorded.
    pub fn lowest(&self) -> f64 {
        self.grades.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_average(self.average())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&StudentLine::from(self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_with(grades: &[f64]) -> Student {
        let mut student = Student::new(StudentId(1), "Alice");
        for &g in grades {
            student.add_grade(g).unwrap();
        }
        student
    }

    #[test]
    fn new_student_has_no_grades_and_zero_statistics() {
        let student = Student::new(StudentId(3), "Carol");
        assert_eq!(student.id(), StudentId(3));
        assert_eq!(student.name(), "Carol");
        assert!(student.grades().is_empty());
        assert_eq!(student.grade_count(), 0);
        assert_eq!(student.average(), 0.0);
        assert_eq!(student.highest(), 0.0);
        assert_eq!(student.lowest(), 0.0);
        assert_eq!(student.letter_grade(), LetterGrade::F);
    }

    #[test]
    fn add_grade_accepts_boundaries() {
        let student = student_with(&[0.0, 100.0]);
        assert_eq!(student.grades(), &[0.0, 100.0]);
        assert_eq!(student.highest(), 100.0);
        assert_eq!(student.lowest(), 0.0);
    }

    #[test]
    fn average_tracks_every_accepted_grade() {
        let mut student = Student::new(StudentId(1), "Alice");
        let values = [80.0, 90.0, 55.5, 100.0, 0.0, 72.25];
        let mut accepted = Vec::new();
        for value in values {
            student.add_grade(value).unwrap();
            accepted.push(value);
            let expected = accepted.iter().sum::<f64>() / accepted.len() as f64;
            assert!((student.average() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn out_of_range_grade_is_rejected_without_mutation() {
        let mut student = student_with(&[80.0, 90.0]);
        let before = student.clone();

        for bad in [-1.0, 101.0, f64::NAN] {
            let result = student.add_grade(bad);
            assert!(matches!(result, Err(GradebookError::InvalidGrade { .. })));
        }

        assert_eq!(student, before);
        assert_eq!(student.average(), 85.0);
        assert_eq!(student.highest(), 90.0);
        assert_eq!(student.lowest(), 80.0);
        assert_eq!(student.letter_grade(), LetterGrade::B);
    }

    #[test]
    fn statistics_follow_grade_sequence() {
        let student = student_with(&[70.0, 95.0, 82.0]);
        assert!((student.average() - 82.333_333).abs() < 1e-5);
        assert_eq!(student.highest(), 95.0);
        assert_eq!(student.lowest(), 70.0);
        assert_eq!(student.letter_grade(), LetterGrade::B);
    }

    #[test]
    fn letter_grade_uses_average() {
        assert_eq!(student_with(&[90.0]).letter_grade(), LetterGrade::A);
        assert_eq!(student_with(&[80.0]).letter_grade(), LetterGrade::B);
        assert_eq!(student_with(&[69.999]).letter_grade(), LetterGrade::D);
        assert_eq!(student_with(&[100.0, 79.9998]).letter_grade(), LetterGrade::B);
    }

    #[test]
    fn display_renders_one_line_report() {
        let student = student_with(&[80.0, 90.0]);
        assert_eq!(
            student.to_string(),
            "ID: 1 | Name: Alice | Grades: 2 | Average: 85.00 | Letter: B"
        );
    }
}
