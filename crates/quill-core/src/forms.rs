//! Form shapes and validation for post submissions.
//!
//! The create and edit forms share one data shape; each field is enumerated
//! explicitly here rather than discovered by introspection, so templates and
//! validation always agree on what the form contains.

use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// Error message attached to a missing required field.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// The submitted fields of the create/edit post forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// Field-level validation errors for a [`PostForm`], one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl PostForm {
    /// A form pre-filled from an existing post, for the edit page.
    pub fn prefilled(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    /// Check that both fields are present and non-empty.
    ///
    /// Whitespace-only input counts as empty. Submitted values are stored
    /// verbatim on success; trimming is only applied for the emptiness check.
    pub fn validate(&self) -> Result<(), PostFormErrors> {
        let mut errors = PostFormErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some(REQUIRED_MESSAGE.to_string());
        }
        if self.content.trim().is_empty() {
            errors.content = Some(REQUIRED_MESSAGE.to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, content: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn accepts_non_empty_fields() {
        assert!(form("Hello", "World").validate().is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let errors = form("", "World").validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some(REQUIRED_MESSAGE));
        assert!(errors.content.is_none());
    }

    #[test]
    fn rejects_empty_content() {
        let errors = form("Hello", "").validate().unwrap_err();
        assert!(errors.title.is_none());
        assert_eq!(errors.content.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        let errors = form("   ", "\n\t").validate().unwrap_err();
        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
    }

    #[test]
    fn keeps_submitted_values_verbatim() {
        let f = form("  padded title  ", "body");
        assert!(f.validate().is_ok());
        assert_eq!(f.title, "  padded title  ");
    }
}
