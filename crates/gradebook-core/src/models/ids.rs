use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier handed out by a [`Roster`](crate::roster::Roster) when a student is created.
///
/// Ids start at 1 and are never reused within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(pub u32);

impl StudentId {
    pub const FIRST: StudentId = StudentId(1);

    /// The id after this one, or `None` once the id space is exhausted.
    pub(crate) fn next(self) -> Option<StudentId> {
        self.0.checked_add(1).map(StudentId)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(StudentId)
    }
}
