//! User-facing messages.

use certgen_core::EditorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message the page should show the user (the bridge uses `alert`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub const EMPTY_FIELD_NAME: &str =
    "Please enter a field name (e.g., name, event, date, signature) in the text box first.";
pub const EMPTY_LAYOUT: &str = "No layout to save. Please add some fields first.";
pub const SAVE_OK: &str = "Layout saved successfully!";
pub const SAVE_FAILED: &str = "Error saving layout. Please try again.";
pub const RESTORED_FIELDS: &str =
    "Previously added fields have been restored. You can add more fields below.";

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Message for an error, or `None` when it should stay silent.
    pub fn for_error(err: &EditorError) -> Option<Self> {
        if !err.is_user_visible() {
            return None;
        }
        let message = match err {
            EditorError::EmptyFieldName => EMPTY_FIELD_NAME,
            EditorError::EmptyLayout => EMPTY_LAYOUT,
            _ => SAVE_FAILED,
        };
        Some(Self::error(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_context_is_silent() {
        assert_eq!(Notice::for_error(&EditorError::MissingSession), None);
        assert_eq!(Notice::for_error(&EditorError::NotFound), None);
    }

    #[test]
    fn persistence_errors_are_generic() {
        let notice = Notice::for_error(&EditorError::Network("connection reset".into())).unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, SAVE_FAILED);
    }
}
