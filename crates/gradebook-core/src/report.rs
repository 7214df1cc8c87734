use crate::models::grade::LetterGrade;
use crate::models::ids::StudentId;
use crate::models::student::Student;
use std::fmt;

/// One row of the individual-student section of a [`ClassSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct StudentLine {
    pub id: StudentId,
    pub name: String,
    pub grade_count: usize,
    pub average: f64,
    pub letter: LetterGrade,
}

impl From<&Student> for StudentLine {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id(),
            name: student.name().to_string(),
            grade_count: student.grade_count(),
            average: student.average(),
            letter: student.letter_grade(),
        }
    }
}

impl fmt::Display for StudentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Grades: {} | Average: {:.2} | Letter: {}",
            self.id, self.name, self.grade_count, self.average, self.letter
        )
    }
}

/// Snapshot of class-wide statistics followed by one line per student.
///
/// The `Display` implementation produces the printable report. An empty
/// summary renders as a single "no students" line instead of zeroed totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary {
    pub student_count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub students: Vec<StudentLine>,
}

impl ClassSummary {
    pub fn is_empty(&self) -> bool {
        self.student_count == 0
    }
}

impl fmt::Display for ClassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No students in the system.");
        }

        writeln!(f, "=== CLASS SUMMARY REPORT ===")?;
        writeln!(f, "Total Students: {}", self.student_count)?;
        writeln!(f, "Class Average: {:.2}", self.average)?;
        writeln!(f, "Highest Grade: {:.2}", self.highest)?;
        writeln!(f, "Lowest Grade: {:.2}", self.lowest)?;
        writeln!(f)?;
        writeln!(f, "=== INDIVIDUAL STUDENT REPORTS ===")?;
        for line in &self.students {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, name: &str, count: usize, average: f64) -> StudentLine {
        StudentLine {
            id: StudentId(id),
            name: name.to_string(),
            grade_count: count,
            average,
            letter: LetterGrade::from_average(average),
        }
    }

    #[test]
    fn empty_summary_renders_placeholder() {
        let summary = ClassSummary {
            student_count: 0,
            average: 0.0,
            highest: 0.0,
            lowest: 0.0,
            students: Vec::new(),
        };
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "No students in the system.\n");
    }

    #[test]
    fn populated_summary_renders_header_and_lines_in_order() {
        let summary = ClassSummary {
            student_count: 2,
            average: 77.5,
            highest: 90.0,
            lowest: 70.0,
            students: vec![line(1, "Alice", 2, 85.0), line(2, "Bob", 1, 70.0)],
        };

        let expected = "\
=== CLASS SUMMARY REPORT ===
Total Students: 2
Class Average: 77.50
Highest Grade: 90.00
Lowest Grade: 70.00

=== INDIVIDUAL STUDENT REPORTS ===
ID: 1 | Name: Alice | Grades: 2 | Average: 85.00 | Letter: B
ID: 2 | Name: Bob | Grades: 1 | Average: 70.00 | Letter: C
";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn student_line_matches_student_display() {
        let mut student = Student::new(StudentId(4), "Dana");
        student.add_grade(61.0).unwrap();
        let line = StudentLine::from(&student);
        assert_eq!(line.to_string(), student.to_string());
        assert_eq!(line.letter, LetterGrade::D);
    }
}
