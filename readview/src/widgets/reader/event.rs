use super::storage::ArticleLoad;

/// UI events emitted towards the reader widget.
#[derive(Debug, Clone)]
pub(crate) enum ReaderEvent {
    /// Request loading the configured article.
    Reload,
    /// Article load completed.
    ContentLoaded(ArticleLoad),
    /// Article load failed.
    ContentFailed(String),
}

/// Effect events produced by the reader reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum ReaderEffect {
    /// Background load produced a payload.
    ContentLoaded(ArticleLoad),
    /// Background load failed.
    ContentFailed(String),
}
