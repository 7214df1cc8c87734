//! Interactive front-ends. Each one is an adapter over [`gradebook::GradeBook`]
//! and owns all user-facing I/O; none of them hold roster state of their own.

pub mod console;
pub mod dashboard;
pub mod terminal;

pub use console::ConsoleMenu;
pub use dashboard::Dashboard;
pub use terminal::Terminal;
