use thiserror::Error;

/// Errors emitted while loading article content.
#[derive(Debug, Error)]
pub(crate) enum ArticleError {
    /// Filesystem operation failed.
    #[error("article IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("article JSON failed")]
    Json(#[from] serde_json::Error),
    /// The article has neither a title nor paragraphs.
    #[error("article is empty")]
    Empty,
}

/// Errors emitted while resolving a style parameter value for rendering.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum StyleValueError {
    /// Value is not a positive pixel length such as `18px`.
    #[error("invalid length `{value}`")]
    InvalidLength { value: String },
    /// Value is not a hex color such as `#RRGGBB`.
    #[error("invalid color `{value}`")]
    InvalidColor { value: String },
}
