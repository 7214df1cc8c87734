use super::terminal::Terminal;
use crate::error::Result;
use crate::utils::parser;
use gradebook::{GradeBook, GradebookError, StudentId};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU_ENTRIES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddStudent,
    AddGrade,
    ListStudents,
    StudentDetails,
    ClassSummary,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddStudent),
            2 => Some(MenuChoice::AddGrade),
            3 => Some(MenuChoice::ListStudents),
            4 => Some(MenuChoice::StudentDetails),
            5 => Some(MenuChoice::ClassSummary),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The numbered text menu.
pub struct ConsoleMenu<'a, G, R, W> {
    book: &'a mut G,
    term: Terminal<R, W>,
}

impl<'a, G: GradeBook, R: BufRead, W: Write> ConsoleMenu<'a, G, R, W> {
    pub fn new(book: &'a mut G, input: R, output: W) -> Self {
        Self {
            book,
            term: Terminal::new(input, output),
        }
    }

    /// Runs the menu until the user picks "Exit" or input is exhausted.
    pub fn run(mut self) -> Result<W> {
        info!("Starting console menu.");
        self.term.say("=== STUDENT GRADE MANAGEMENT SYSTEM ===")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.term.prompt("Enter your choice: ")? else {
                info!("Input closed; leaving console menu.");
                break;
            };

            let choice = parser::parse_choice(&line, MENU_ENTRIES)
                .ok()
                .and_then(MenuChoice::from_number);
            debug!("Menu selection {:?} from input {:?}.", choice, line);

            match choice {
                Some(MenuChoice::AddStudent) => self.add_student()?,
                Some(MenuChoice::AddGrade) => self.add_grade()?,
                Some(MenuChoice::ListStudents) => self.list_students()?,
                Some(MenuChoice::StudentDetails) => self.student_details()?,
                Some(MenuChoice::ClassSummary) => self.class_summary()?,
                Some(MenuChoice::Exit) => {
                    self.term
                        .say("Thank you for using the Grade Management System!")?;
                    break;
                }
                None => self.term.say("Invalid choice. Please try again.")?,
            }
        }

        Ok(self.term.into_output())
    }

    fn print_menu(&mut self) -> Result<()> {
        self.term.say("\n--- MAIN MENU ---")?;
        self.term.say("1. Add New Student")?;
        self.term.say("2. Add Grade to Student")?;
        self.term.say("3. View All Students")?;
        self.term.say("4. View Student Details")?;
        self.term.say("5. View Class Summary")?;
        self.term.say("6. Exit")?;
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(name) = self.term.prompt("Enter student name: ")? else {
            return Ok(());
        };

        match self.book.create_student(&name) {
            Ok(id) => self
                .term
                .say(format!("Student added successfully! (ID: {})", id))?,
            Err(GradebookError::InvalidName) => {
                self.term.say("Invalid name. Please try again.")?
            }
            Err(e) => self.term.say(e)?,
        }
        Ok(())
    }

    /// Prompts for an id and resolves it to an existing student.
    fn prompt_existing_student(&mut self) -> Result<Option<StudentId>> {
        let Some(raw) = self.term.prompt("Enter student ID: ")? else {
            return Ok(None);
        };
        let id = match parser::parse_student_id(&raw) {
            Ok(id) => id,
            Err(e) => {
                self.term.say(e)?;
                return Ok(None);
            }
        };
        if self.book.student(id).is_none() {
            self.term.say("Student not found!")?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn add_grade(&mut self) -> Result<()> {
        let Some(id) = self.prompt_existing_student()? else {
            return Ok(());
        };
        let Some(raw) = self.term.prompt("Enter grade (0-100): ")? else {
            return Ok(());
        };
        let Ok(grade) = parser::parse_grade(&raw) else {
            self.term.say("Invalid grade format!")?;
            return Ok(());
        };

        match self.book.record_grade(id, grade) {
            Ok(()) => self.term.say("Grade added successfully!")?,
            Err(e) => self.term.say(e)?,
        }
        Ok(())
    }

    fn list_students(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .book
            .list_students()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if lines.is_empty() {
            self.term.say("No students found.")?;
            return Ok(());
        }

        self.term.say("\n--- ALL STUDENTS ---")?;
        for line in lines {
            self.term.say(line)?;
        }
        Ok(())
    }

    fn student_details(&mut self) -> Result<()> {
        let Some(id) = self.prompt_existing_student()? else {
            return Ok(());
        };
        let Some(student) = self.book.student(id) else {
            return Ok(());
        };

        let details = [
            "\n--- STUDENT DETAILS ---".to_string(),
            format!("Name: {}", student.name()),
            format!("ID: {}", student.id()),
            format!("Grades: {:?}", student.grades()),
            format!("Number of Grades: {}", student.grade_count()),
            format!("Average: {:.2}", student.average()),
            format!("Highest Grade: {:.2}", student.highest()),
            format!("Lowest Grade: {:.2}", student.lowest()),
            format!("Letter Grade: {}", student.letter_grade()),
        ];
        for line in details {
            self.term.say(line)?;
        }
        Ok(())
    }

    fn class_summary(&mut self) -> Result<()> {
        let summary = self.book.summarize();
        self.term.say("")?;
        self.term.write_raw(&summary.to_string())?;
        Ok(())
    }
}
