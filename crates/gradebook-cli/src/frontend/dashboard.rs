use super::terminal::Terminal;
use crate::error::Result;
use crate::utils::parser;
use gradebook::{GradeBook, Student};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Grades Count",
    "Average",
    "Highest",
    "Lowest",
    "Letter Grade",
];

const BUTTONS: [&str; 5] = [
    "Add Student",
    "Add Grade",
    "Refresh",
    "Show Summary",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    AddStudent,
    AddGrade,
    Refresh,
    ShowSummary,
    Exit,
}

impl Button {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Button::AddStudent),
            2 => Some(Button::AddGrade),
            3 => Some(Button::Refresh),
            4 => Some(Button::ShowSummary),
            5 => Some(Button::Exit),
            _ => None,
        }
    }
}

/// Renders the student table with one row per student, in roster order.
pub fn render_table(students: &[&Student]) -> String {
    let rows: Vec<[String; 7]> = students
        .iter()
        .map(|s| {
            [
                s.id().to_string(),
                s.name().to_string(),
                s.grade_count().to_string(),
                format!("{:.2}", s.average()),
                format!("{:.2}", s.highest()),
                format!("{:.2}", s.lowest()),
                s.letter_grade().to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        let joined = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("| {} |", joined)
    };
    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut table = String::new();
    table.push_str(&separator);
    table.push('\n');
    table.push_str(&format_row(&header));
    table.push('\n');
    table.push_str(&separator);
    table.push('\n');
    if rows.is_empty() {
        let inner = separator.chars().count() - 4;
        table.push_str(&format!("| {:<inner$} |\n", "(no students)", inner = inner));
    }
    for row in &rows {
        table.push_str(&format_row(row));
        table.push('\n');
    }
    table.push_str(&separator);
    table.push('\n');
    table
}

/// Terminal stand-in for a windowed interface: a title bar, a student table
/// redrawn after every action, a summary pane, and a row of numbered buttons.
///
/// Prompts behave like modal dialogs: an empty answer cancels the action.
pub struct Dashboard<'a, G, R, W> {
    book: &'a mut G,
    term: Terminal<R, W>,
    summary_pane: Option<String>,
    status: Option<String>,
}

impl<'a, G: GradeBook, R: BufRead, W: Write> Dashboard<'a, G, R, W> {
    pub fn new(book: &'a mut G, input: R, output: W) -> Self {
        Self {
            book,
            term: Terminal::new(input, output),
            summary_pane: None,
            status: None,
        }
    }

    /// Sets the message shown beneath the table on the first redraw.
    pub fn with_status(mut self, message: impl Into<String>) -> Self {
        self.status = Some(message.into());
        self
    }

    pub fn run(mut self) -> Result<W> {
        info!("Starting dashboard.");
        loop {
            self.redraw()?;
            let Some(line) = self.term.prompt("Select action: ")? else {
                info!("Input closed; closing dashboard.");
                break;
            };

            let button = parser::parse_choice(&line, BUTTONS.len() as u32)
                .ok()
                .and_then(Button::from_number);
            debug!("Dashboard button {:?} from input {:?}.", button, line);

            match button {
                Some(Button::AddStudent) => self.add_student()?,
                Some(Button::AddGrade) => self.add_grade()?,
                Some(Button::Refresh) => {}
                Some(Button::ShowSummary) => {
                    self.summary_pane = Some(self.book.summarize().to_string());
                }
                Some(Button::Exit) => break,
                None => self.status = Some(format!("Unknown action '{}'.", line.trim())),
            }
        }
        Ok(self.term.into_output())
    }

    fn redraw(&mut self) -> Result<()> {
        self.term.say("")?;
        self.term.say("=== Student Grade Management System ===")?;
        let table = render_table(&self.book.list_students());
        self.term.write_raw(&table)?;

        if let Some(summary) = &self.summary_pane {
            self.term.say("--- Summary ---")?;
            self.term.write_raw(summary)?;
        }
        if let Some(status) = self.status.take() {
            self.term.say(format!(">> {}", status))?;
        }

        let buttons = BUTTONS
            .iter()
            .enumerate()
            .map(|(i, label)| format!("[{}] {}", i + 1, label))
            .collect::<Vec<_>>()
            .join("  ");
        self.term.say(buttons)?;
        Ok(())
    }

    /// Shows a modal prompt. Returns `None` if it was dismissed.
    fn modal(&mut self, message: &str) -> Result<Option<String>> {
        let answer = self.term.prompt(message)?;
        Ok(answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()))
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(name) = self.modal("Enter student name: ")? else {
            return Ok(());
        };
        self.status = Some(match self.book.create_student(&name) {
            Ok(_) => "Student added successfully!".to_string(),
            Err(e) => e.to_string(),
        });
        Ok(())
    }

    fn add_grade(&mut self) -> Result<()> {
        let Some(raw_id) = self.modal("Enter student ID: ")? else {
            return Ok(());
        };
        let Ok(id) = parser::parse_student_id(&raw_id) else {
            self.status = Some("Invalid number format!".to_string());
            return Ok(());
        };
        let Some(name) = self.book.student(id).map(|s| s.name().to_string()) else {
            self.status = Some("Student not found!".to_string());
            return Ok(());
        };

        let Some(raw_grade) = self.modal(&format!("Enter grade for {} (0-100): ", name))? else {
            return Ok(());
        };
        let Ok(grade) = parser::parse_grade(&raw_grade) else {
            self.status = Some("Invalid number format!".to_string());
            return Ok(());
        };

        self.status = Some(match self.book.record_grade(id, grade) {
            Ok(()) => "Grade added successfully!".to_string(),
            Err(e) => e.to_string(),
        });
        Ok(())
    }
}
