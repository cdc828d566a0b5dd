use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Input field of an enrollment record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    CourseName,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::FirstName => write!(f, "student's first name"),
            Field::LastName => write!(f, "student's last name"),
            Field::CourseName => write!(f, "course name"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("The JSON file {} does not exist!", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("The {0} should not be empty.")]
    EmptyField(Field),

    #[error("The {0} should only contain letters.")]
    NonAlphabetic(Field),

    #[error("No choice made. Please enter a choice!")]
    NoChoice,

    #[error("Please only choose 1, 2, 3, or 4")]
    InvalidChoice(String),

    #[error("Input ended unexpectedly")]
    EndOfInput,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// Short category name shown in the technical details of an error block
    pub fn category(&self) -> &'static str {
        match self {
            RosterError::NotFound(_) => "NotFound",
            RosterError::Io(_) => "Io",
            RosterError::Parse(_) => "Parse",
            RosterError::Serialization(_) => "Serialization",
            RosterError::EmptyField(_)
            | RosterError::NonAlphabetic(_)
            | RosterError::NoChoice
            | RosterError::InvalidChoice(_) => "Validation",
            RosterError::EndOfInput => "Input",
            RosterError::Config(_) => "Config",
        }
    }

    /// Bad user input that aborts the current operation
    pub fn is_validation(&self) -> bool {
        self.category() == "Validation"
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
