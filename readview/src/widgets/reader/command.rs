use super::storage::ArticleLoad;
use crate::shared::options::ArticleSettings;

/// Internal commands dispatched to the reader reducer.
#[derive(Debug, Clone)]
pub(crate) enum ReaderCommand {
    /// Request loading the configured article.
    Reload,
    /// Article load completed.
    ContentLoaded(ArticleLoad),
    /// Article load failed.
    ContentFailed(String),
    /// Replace the applied settings with a complete record.
    ReplaceSettings(ArticleSettings),
}
