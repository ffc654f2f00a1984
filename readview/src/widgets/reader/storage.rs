use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ArticleError;
use super::model::ArticleContent;

/// Environment variable naming a JSON article to display instead of the
/// bundled one.
pub(crate) const ARTICLE_PATH_ENV: &str = "READVIEW_ARTICLE";

/// Status describing where the displayed article came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArticleLoadStatus {
    Loaded,
    Bundled,
    Invalid(String),
}

/// Result of resolving the article to display.
#[derive(Debug, Clone)]
pub(crate) struct ArticleLoad {
    content: ArticleContent,
    status: ArticleLoadStatus,
}

impl ArticleLoad {
    /// Build an article load result from explicit parts.
    pub(crate) fn new(
        content: ArticleContent,
        status: ArticleLoadStatus,
    ) -> Self {
        Self { content, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ArticleContent, ArticleLoadStatus) {
        (self.content, self.status)
    }
}

/// Resolve the article configured through [`ARTICLE_PATH_ENV`].
pub(crate) fn load_article() -> Result<ArticleLoad, ArticleError> {
    match configured_article_path() {
        Some(path) => load_article_from_path(&path),
        None => Ok(ArticleLoad::new(
            ArticleContent::bundled(),
            ArticleLoadStatus::Bundled,
        )),
    }
}

fn configured_article_path() -> Option<PathBuf> {
    std::env::var_os(ARTICLE_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Read an article file; unreadable files are errors, malformed ones fall
/// back to the bundled article with an `Invalid` status.
pub(crate) fn load_article_from_path(
    path: &Path,
) -> Result<ArticleLoad, ArticleError> {
    let data = fs::read_to_string(path)?;

    match parse_article(&data) {
        Ok(content) => Ok(ArticleLoad::new(content, ArticleLoadStatus::Loaded)),
        Err(err) => Ok(ArticleLoad::new(
            ArticleContent::bundled(),
            ArticleLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn parse_article(data: &str) -> Result<ArticleContent, ArticleError> {
    let content = serde_json::from_str::<ArticleContent>(data)?;
    if content.is_empty() {
        return Err(ArticleError::Empty);
    }

    Ok(content)
}
