//! Name validation for catalog records
//!
//! Usernames and people/planet names share the same column width.

use super::ValidationError;

/// Maximum length for usernames and entity names
pub const MAX_NAME_LEN: usize = 80;

fn validate(field: &'static str, s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    Ok(trimmed.to_owned())
}

/// Validated username (unique per user)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a username, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use holocron_server::models::Username;
    ///
    /// assert_eq!(Username::new("  luke ").unwrap().as_str(), "luke");
    /// assert!(Username::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate("username", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated name of a person or planet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate("name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = EntityName::new("  Tatooine\n").unwrap();
        assert_eq!(name.as_str(), "Tatooine");
    }

    #[test]
    fn rejects_empty() {
        let err = Username::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "username" }));

        let err = EntityName::new(" \t ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn max_length() {
        let name_80 = "a".repeat(80);
        assert!(EntityName::new(&name_80).is_ok());

        let name_81 = "a".repeat(81);
        let err = EntityName::new(&name_81).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 80, .. }));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 80 two-byte characters
        let name = "é".repeat(80);
        assert!(Username::new(&name).is_ok());
    }
}
