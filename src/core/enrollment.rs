use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Field, Result, RosterError};

/// Represents a single student/course registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enrollment {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl Enrollment {
    /// Build a validated enrollment.
    ///
    /// Fields are checked in prompt order and the first failure is returned.
    pub fn new(first_name: &str, last_name: &str, course_name: &str) -> Result<Self> {
        validate_name(first_name, Field::FirstName)?;
        validate_name(last_name, Field::LastName)?;
        validate_course(course_name)?;

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            course_name: course_name.to_string(),
        })
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

/// A name must be non-empty and purely alphabetic
pub fn validate_name(value: &str, field: Field) -> Result<()> {
    if value.is_empty() {
        return Err(RosterError::EmptyField(field));
    }
    if !value.chars().all(char::is_alphabetic) {
        return Err(RosterError::NonAlphabetic(field));
    }
    Ok(())
}

pub fn validate_course(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RosterError::EmptyField(Field::CourseName));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enrollment() {
        let enrollment = Enrollment::new("Jane", "Doe", "Algorithms").unwrap();
        assert_eq!(enrollment.first_name, "Jane");
        assert_eq!(enrollment.last_name, "Doe");
        assert_eq!(enrollment.course_name, "Algorithms");
    }

    #[test]
    fn test_non_ascii_letters_are_alphabetic() {
        assert!(Enrollment::new("José", "Müller", "Python 100").is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let err = Enrollment::new("", "", "").unwrap_err();
        assert!(matches!(err, RosterError::EmptyField(Field::FirstName)));

        let err = Enrollment::new("Jane", "Doe2", "").unwrap_err();
        assert!(matches!(err, RosterError::NonAlphabetic(Field::LastName)));

        let err = Enrollment::new("Jane", "Doe", "").unwrap_err();
        assert!(matches!(err, RosterError::EmptyField(Field::CourseName)));
    }

    #[test]
    fn test_names_reject_digits_and_spaces() {
        assert!(validate_name("Jane1", Field::FirstName).is_err());
        assert!(validate_name("Mary Ann", Field::FirstName).is_err());
        assert!(validate_name("O'Neil", Field::LastName).is_err());
    }

    #[test]
    fn test_display() {
        let enrollment = Enrollment::new("Jane", "Doe", "Algorithms").unwrap();
        assert_eq!(enrollment.to_string(), "Jane Doe is enrolled in Algorithms");
    }

    #[test]
    fn test_json_field_names() {
        let enrollment = Enrollment::new("Jane", "Doe", "Algorithms").unwrap();
        let value = serde_json::to_value(&enrollment).unwrap();
        assert_eq!(value["FirstName"], "Jane");
        assert_eq!(value["LastName"], "Doe");
        assert_eq!(value["CourseName"], "Algorithms");
    }
}
