use std::io::{BufRead, Write};

use colored::*;

use crate::core::enrollment::{validate_course, validate_name};
use crate::core::{Enrollment, Field, Result, RosterError};

pub const MENU: &str = "
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------
";

pub const MENU_CHOICES: [&str; 4] = ["1", "2", "3", "4"];

const SEPARATOR_WIDTH: usize = 50;

/// Terminal dialogue over any line reader and writer
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt and read one line without its line terminator.
    ///
    /// Returns `EndOfInput` once the reader is exhausted.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RosterError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", MENU)?;
        Ok(())
    }

    /// Read a menu choice.
    ///
    /// Empty or unknown choices are reported here and still handed back, the
    /// caller decides what an unrecognised choice means.
    pub fn read_menu_choice(&mut self) -> Result<String> {
        let choice = self.prompt("Enter your menu choice number: ")?;

        let problem = if choice.is_empty() {
            Some(RosterError::NoChoice)
        } else if !MENU_CHOICES.contains(&choice.as_str()) {
            Some(RosterError::InvalidChoice(choice.clone()))
        } else {
            None
        };

        if let Some(e) = problem {
            self.show_error(&e.to_string(), Some(&e))?;
        }

        Ok(choice)
    }

    pub fn show_roster(&mut self, roster: &[Enrollment]) -> Result<()> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        writeln!(self.output, "{}", separator)?;
        writeln!(self.output, "{}", "   -    Student Roster    -   ".cyan().bold())?;
        for enrollment in roster {
            writeln!(self.output, "{}", enrollment)?;
        }
        writeln!(self.output, "{}", separator)?;
        Ok(())
    }

    /// Ask for one registration and append it to the roster.
    ///
    /// The first invalid field aborts the registration and the roster comes
    /// back unchanged.
    pub fn read_enrollment(&mut self, mut roster: Vec<Enrollment>) -> Result<Vec<Enrollment>> {
        match self.collect_enrollment() {
            Ok(enrollment) => {
                writeln!(
                    self.output,
                    "You have registered {} {} for {}.",
                    enrollment.first_name, enrollment.last_name, enrollment.course_name
                )?;
                roster.push(enrollment);
            }
            Err(e) if e.is_validation() => {
                self.show_error(&e.to_string(), Some(&e))?;
            }
            Err(e) => {
                self.show_error("There was a general error with your input data!", Some(&e))?;
            }
        }

        Ok(roster)
    }

    fn collect_enrollment(&mut self) -> Result<Enrollment> {
        let first_name = self.prompt("Enter the student's first name: ")?;
        validate_name(&first_name, Field::FirstName)?;

        let last_name = self.prompt("Enter the student's last name: ")?;
        validate_name(&last_name, Field::LastName)?;

        let course_name = self.prompt("Please enter the name of the course: ")?;
        validate_course(&course_name)?;

        Enrollment::new(&first_name, &last_name, &course_name)
    }

    pub fn show_error(&mut self, message: &str, error: Option<&RosterError>) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", " !!! Error Warning !!! ".red().bold())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", message)?;
        writeln!(self.output)?;
        if let Some(e) = error {
            writeln!(self.output, "{}", "-- Technical Details of Error --".yellow())?;
            writeln!(self.output, "{}", e)?;
            writeln!(self.output, "Category: {}", e.category())?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}
