use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_category, validate_content, validate_summary, validate_title};
use crate::error::ValidationError;

/// Post category. Stored and serialized as `Fiction` / `Non-Fiction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_category(s)
    }
}

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: i64,
    title: String,
    content: String,
    category: Category,
    summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Rebuild a post from a stored row, re-running the field validators.
    pub fn from_storage(
        id: i64,
        title: String,
        content: String,
        category: &str,
        summary: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        validate_title(&title)?;
        validate_content(&content)?;
        let category = validate_category(category)?;
        validate_summary(summary.as_deref())?;
        Ok(Self {
            id,
            title,
            content,
            category,
            summary,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        validate_content(&content)?;
        self.content = content;
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = validate_category(category)?;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        validate_summary(summary.as_deref())?;
        self.summary = summary;
        Ok(())
    }

    /// Apply a patch. Every supplied field is validated before any is assigned.
    pub fn apply(&mut self, changes: PostChanges) -> Result<(), ValidationError> {
        let category = changes.validate()?;
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(summary) = changes.summary {
            self.summary = summary;
        }
        Ok(())
    }

    /// Storage-side stamp for a committed update.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Post(id={}, title={})", self.id, self.title)
    }
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    title: String,
    content: String,
    category: Category,
    summary: Option<String>,
}

impl NewPost {
    /// Create a new post candidate. Fields are checked in declaration order and the
    /// first violation is returned.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        summary: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        validate_title(&title)?;
        validate_content(&content)?;
        let category = validate_category(category)?;
        validate_summary(summary.as_deref())?;
        Ok(Self {
            title,
            content,
            category,
            summary,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn into_post(self, id: i64, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            summary: self.summary,
            created_at,
            updated_at: None,
        }
    }
}

/// Partial update for a post.
///
/// `category` stays a raw string so the category validator sees exactly what the
/// caller sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<Option<String>>,
}

impl PostChanges {
    /// Validate every supplied field, returning the parsed category if one was given.
    pub fn validate(&self) -> Result<Option<Category>, ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validate_content(content)?;
        }
        let category = self.category.as_deref().map(validate_category).transpose()?;
        if let Some(summary) = &self.summary {
            validate_summary(summary.as_deref())?;
        }
        Ok(category)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.summary.is_none()
    }
}
