use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_name, validate_phone_number};
use crate::error::ValidationError;

/// Author entity - a persisted author row.
///
/// Fields are private so every write goes through a validating setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: i64,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Rebuild an author from a stored row, re-running the field validators.
    pub fn from_storage(
        id: i64,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        validate_name(&name)?;
        validate_phone_number(phone_number.as_deref())?;
        Ok(Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `None` until the row has been updated once.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> Result<(), ValidationError> {
        validate_phone_number(phone_number.as_deref())?;
        self.phone_number = phone_number;
        Ok(())
    }

    /// Apply a patch. Every supplied field is validated before any is assigned.
    pub fn apply(&mut self, changes: AuthorChanges) -> Result<(), ValidationError> {
        changes.validate()?;
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(phone_number) = changes.phone_number {
            self.phone_number = phone_number;
        }
        Ok(())
    }

    /// Storage-side stamp for a committed update.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

/// A validated author that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAuthor {
    name: String,
    phone_number: Option<String>,
}

impl NewAuthor {
    /// Create a new author candidate, validating each field.
    pub fn new(name: impl Into<String>, phone_number: Option<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_phone_number(phone_number.as_deref())?;
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Promote to a stored author once storage has assigned an id and timestamp.
    pub fn into_author(self, id: i64, created_at: DateTime<Utc>) -> Author {
        Author {
            id,
            name: self.name,
            phone_number: self.phone_number,
            created_at,
            updated_at: None,
        }
    }
}

/// Partial update for an author.
///
/// `phone_number: Some(None)` clears the number; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<Option<String>>,
}

impl AuthorChanges {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(phone_number) = &self.phone_number {
            validate_phone_number(phone_number.as_deref())?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(name: &str) -> Author {
        NewAuthor::new(name, Some("5551234567".into()))
            .unwrap()
            .into_author(1, Utc::now())
    }

    #[test]
    fn test_new_author_valid() {
        let author = NewAuthor::new("Jane Doe", Some("5551234567".into())).unwrap();
        assert_eq!(author.name(), "Jane Doe");
        assert_eq!(author.phone_number(), Some("5551234567"));
    }

    #[test]
    fn test_new_author_blank_name() {
        let err = NewAuthor::new("   ", None).unwrap_err();
        assert_eq!(err.to_string(), "Author name cannot be empty.");
    }

    #[test]
    fn test_new_author_bad_phone() {
        let err = NewAuthor::new("Jane", Some("555-123-4567".into())).unwrap_err();
        assert_eq!(err.field, "phone_number");
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut author = stored("Jane");
        assert!(author.set_name("  ").is_err());
        assert_eq!(author.name(), "Jane");

        assert!(author.set_phone_number(Some("12345".into())).is_err());
        assert_eq!(author.phone_number(), Some("5551234567"));
    }

    #[test]
    fn test_setter_same_value_is_idempotent() {
        let mut author = stored("Jane");
        author.set_name("Jane").unwrap();
        author.set_name("Jane").unwrap();
        assert_eq!(author.name(), "Jane");
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut author = stored("Jane");
        let changes = AuthorChanges {
            name: Some("Janet".into()),
            phone_number: Some(Some("bad".into())),
        };
        assert!(author.apply(changes).is_err());
        assert_eq!(author.name(), "Jane");

        let changes = AuthorChanges {
            name: Some("Janet".into()),
            phone_number: Some(None),
        };
        author.apply(changes).unwrap();
        assert_eq!(author.name(), "Janet");
        assert_eq!(author.phone_number(), None);
    }

    #[test]
    fn test_changes_null_clears_missing_keeps() {
        let clear: AuthorChanges = serde_json::from_str(r#"{"phone_number": null}"#).unwrap();
        assert_eq!(clear.phone_number, Some(None));

        let keep: AuthorChanges = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(keep.phone_number, None);
        assert!(!keep.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(stored("Jane").to_string(), "Author(id=1, name=Jane)");
    }

    #[test]
    fn test_from_storage_rejects_invalid_row() {
        assert!(Author::from_storage(1, "".into(), None, Utc::now(), None).is_err());
    }
}
