//! Roster - Student spreadsheet parsing
//!
//! This crate turns uploaded spreadsheet bytes (XLSX or CSV) into an
//! ordered list of students. The required columns are `Nombres` (name) and
//! `Identificacion` (identifier); a missing column fails loudly before any
//! page is rendered. Identifiers are always coerced to strings so numeric
//! cells never leak float formatting (`111.0`) into rendered output.
//!
//! # Example
//!
//! ```ignore
//! use roster::parse_roster;
//!
//! let students = parse_roster(&spreadsheet_bytes)?;
//! for student in &students {
//!     println!("{} / {}", student.name, student.identifier);
//! }
//! ```

mod reader;

pub use reader::parse_roster;

use thiserror::Error;

/// Header of the required name column
pub const NAME_COLUMN: &str = "Nombres";

/// Header of the required identifier column
pub const ID_COLUMN: &str = "Identificacion";

/// One spreadsheet row reduced to the fields a diploma needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Full name, as printed on the page and used for the archive member name
    pub name: String,
    /// Identifier, already coerced to a string
    pub identifier: String,
}

impl Student {
    /// Create a student record
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}

/// Errors that can occur while reading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Required column '{0}' not found in the sheet header")]
    MissingColumn(&'static str),

    #[error("Workbook contains no worksheet")]
    NoWorksheet,

    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_new() {
        let student = Student::new("Ana", "111");
        assert_eq!(student.name, "Ana");
        assert_eq!(student.identifier, "111");
    }

    #[test]
    fn test_missing_column_message_names_the_column() {
        let err = RosterError::MissingColumn(NAME_COLUMN);
        assert_eq!(
            err.to_string(),
            "Required column 'Nombres' not found in the sheet header"
        );
    }
}
