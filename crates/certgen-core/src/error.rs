use thiserror::Error;

/// Everything that can go wrong in the editor or viewer. None of it is
/// fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("field name is empty")]
    EmptyFieldName,
    #[error("layout has no fields")]
    EmptyLayout,
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode payload: {0}")]
    Decode(String),
    #[error("could not determine session id")]
    MissingSession,
    #[error("resource not found")]
    NotFound,
}

/// How an error should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blocked before any side effect, shown to the user right away.
    UserInput,
    /// Request failed, shown as a generic message. State is untouched.
    Persistence,
    /// Expected absence. Logged, never shown.
    MissingContext,
}

impl EditorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditorError::EmptyFieldName | EditorError::EmptyLayout => ErrorKind::UserInput,
            EditorError::Network(_) | EditorError::Decode(_) => ErrorKind::Persistence,
            EditorError::MissingSession | EditorError::NotFound => ErrorKind::MissingContext,
        }
    }

    pub fn is_user_visible(&self) -> bool {
        !matches!(self.kind(), ErrorKind::MissingContext)
    }
}
