use gradebook::{GradeBook, Result};
use tracing::info;

/// Demonstration roster used by the dashboard: three students with three grades each.
pub const SAMPLE_STUDENTS: [(&str, [f64; 3]); 3] = [
    ("John Smith", [85.5, 92.0, 78.5]),
    ("Jane Doe", [95.0, 87.5, 91.0]),
    ("Bob Johnson", [72.0, 68.5, 75.0]),
];

/// Adds the sample students and their grades to `book`.
pub fn seed_sample_data(book: &mut impl GradeBook) -> Result<()> {
    for (name, grades) in SAMPLE_STUDENTS {
        let id = book.create_student(name)?;
        for grade in grades {
            book.record_grade(id, grade)?;
        }
    }
    info!(
        "Seeded {} sample students with {} grades.",
        SAMPLE_STUDENTS.len(),
        SAMPLE_STUDENTS.iter().map(|(_, g)| g.len()).sum::<usize>()
    );
    Ok(())
}
