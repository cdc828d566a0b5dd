use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::enrollment::Enrollment;
use super::error::{Result, RosterError};

/// Default name of the roster file, relative to the working directory
pub const DEFAULT_ROSTER_FILE: &str = "Enrollments.json";

const INDENT: &[u8] = b"    ";

/// JSON file-based roster storage
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole roster, preserving file order
    pub fn load(&self) -> Result<Vec<Enrollment>> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RosterError::NotFound(self.path.clone()),
            _ => RosterError::Io(e),
        })?;

        let roster: Vec<Enrollment> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                if e.is_io() {
                    RosterError::Io(e.into())
                } else {
                    RosterError::Parse(e)
                }
            })?;

        log::debug!("Loaded {} enrollments from {}", roster.len(), self.path.display());
        Ok(roster)
    }

    /// Overwrite the file with the whole roster.
    ///
    /// The JSON is built in memory first so a serialization failure leaves the
    /// existing file untouched.
    pub fn save(&self, roster: &[Enrollment]) -> Result<()> {
        let json = to_json(roster)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(&self.path)?;
        file.write_all(&json)?;
        file.flush()?;

        log::debug!("Saved {} enrollments to {}", roster.len(), self.path.display());
        Ok(())
    }
}

/// Pretty JSON with four-space indentation
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser).map_err(RosterError::Serialization)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("course-registration-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    fn sample_roster() -> Vec<Enrollment> {
        vec![
            Enrollment::new("Jane", "Doe", "Algorithms").unwrap(),
            Enrollment::new("John", "Smith", "Python 100").unwrap(),
            Enrollment::new("Ada", "Lovelace", "Algorithms").unwrap(),
        ]
    }

    #[test]
    fn test_save_and_load() {
        let store = RosterStore::new(temp_path("Enrollments.json"));
        let roster = sample_roster();

        store.save(&roster).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, roster);
    }

    #[test]
    fn test_load_preserves_file_order() {
        let path = temp_path("Enrollments.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"[
                {"FirstName": "Bob", "LastName": "Brown", "CourseName": "Math"},
                {"FirstName": "Amy", "LastName": "Adams", "CourseName": "Art"}
            ]"#,
        )
        .unwrap();

        let loaded = RosterStore::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].first_name, "Bob");
        assert_eq!(loaded[1].first_name, "Amy");
    }

    #[test]
    fn test_load_missing_file() {
        let store = RosterStore::new(temp_path("missing.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"[{"FirstName": "Jane"}]"#).unwrap();

        let err = RosterStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let store = RosterStore::new(temp_path("Enrollments.json"));
        store
            .save(&[Enrollment::new("Jane", "Doe", "Algorithms").unwrap()])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n    {\n        \"FirstName\": \"Jane\""));
    }

    #[test]
    fn test_save_overwrites() {
        let store = RosterStore::new(temp_path("Enrollments.json"));
        store.save(&sample_roster()).unwrap();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
    }
}
