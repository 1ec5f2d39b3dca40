use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post. Always stored as two separate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name, e.g. `"Alex Smith"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty() || self.last_name.trim().is_empty()
    }
}

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(author: Author, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: Utc::now(),
        }
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

/// The mutable subset of a post. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    /// Reject updates that change nothing or blank out a required field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(
                "Request body contains no updatable fields".to_string(),
            ));
        }
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation("`title` must not be empty".to_string()));
        }
        if self
            .content
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            return Err(DomainError::Validation(
                "`content` must not be empty".to_string(),
            ));
        }
        if self.author.as_ref().is_some_and(Author::is_blank) {
            return Err(DomainError::Validation(
                "`author` requires both firstName and lastName".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            Author::new("Alex", "Smith"),
            "Title".to_string(),
            "Body".to_string(),
        )
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut post = sample();
        let before = post.clone();

        post.apply(PostChanges {
            title: Some("foooooooobar".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "foooooooobar");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created, before.created);
    }

    #[test]
    fn test_validate_rejects_empty_changes() {
        let err = PostChanges::default().validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank_author() {
        let changes = PostChanges {
            author: Some(Author::new("Bob", " ")),
            ..Default::default()
        };
        assert!(changes.validate().is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Author::new("Chris", "Jones").full_name(), "Chris Jones");
    }

    #[test]
    fn test_author_serializes_as_structure() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["author"]["first_name"], "Alex");
        assert_eq!(value["author"]["last_name"], "Smith");
    }
}
