use std::fmt;

/// Lowest accepted grade value, inclusive.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade value, inclusive.
pub const MAX_GRADE: f64 = 100.0;

/// Returns `true` if `value` lies in the closed interval `[MIN_GRADE, MAX_GRADE]`.
///
/// NaN is never in range.
#[inline]
pub fn is_valid_grade(value: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&value)
}

/// Five-bucket classification of a numeric average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Maps an average to its letter using the fixed thresholds
    /// A ≥ 90, B ≥ 80, C ≥ 70, D ≥ 60, otherwise F.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            LetterGrade::A
        } else if average >= 80.0 {
            LetterGrade::B
        } else if average >= 70.0 {
            LetterGrade::C
        } else if average >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
