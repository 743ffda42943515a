//! Student name validation
//!
//! Names are free text, trimmed, and bounded by the `VARCHAR(255)` column.

use std::fmt;

use super::ValidationError;

/// Maximum length for student names, in characters
pub const MAX_STUDENT_NAME_LEN: usize = 255;

/// Validated student name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName(String);

impl StudentName {
    /// Create a new student name.
    ///
    /// # Rules
    /// - Leading and trailing whitespace is trimmed
    /// - Must not be empty after trimming
    /// - Max 255 characters
    ///
    /// # Example
    /// ```
    /// use roster_server::models::StudentName;
    ///
    /// assert_eq!(StudentName::new("  Alice ").unwrap().as_str(), "Alice");
    /// assert!(StudentName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "student name",
            });
        }

        if trimmed.chars().count() > MAX_STUDENT_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "student name",
                max: MAX_STUDENT_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_free_text() {
        assert!(StudentName::new("Alice").is_ok());
        assert!(StudentName::new("Zoë O'Brien-Smith").is_ok());
        assert!(StudentName::new("<b>bold</b>").is_ok());
        assert!(StudentName::new("李雷").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let name = StudentName::new("\t Bob \n").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }

    #[test]
    fn rejects_empty() {
        let err = StudentName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));

        let err = StudentName::new("    ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        let name_255 = "a".repeat(255);
        assert!(StudentName::new(&name_255).is_ok());

        let name_256 = "a".repeat(256);
        let err = StudentName::new(&name_256).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn display_is_trimmed_name() {
        let name = StudentName::new(" Dana ").unwrap();
        assert_eq!(name.to_string(), "Dana");
    }

    #[test]
    fn max_length_counts_chars_not_bytes() {
        // 255 two-byte characters is 510 bytes but still fits the column
        let name = "é".repeat(255);
        assert!(StudentName::new(&name).is_ok());
    }
}
