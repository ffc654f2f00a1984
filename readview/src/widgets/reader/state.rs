use super::model::ArticleContent;
use super::style::ArticleStyle;
use crate::shared::options::ArticleSettings;
use crate::shared::style_params::StyleParams;

/// Applied settings, derived style parameters, and the displayed article.
#[derive(Debug)]
pub(crate) struct ReaderState {
    applied: ArticleSettings,
    params: StyleParams,
    style: ArticleStyle,
    content: ArticleContent,
}

impl ReaderState {
    pub(crate) fn applied(&self) -> &ArticleSettings {
        &self.applied
    }

    pub(crate) fn params(&self) -> &StyleParams {
        &self.params
    }

    pub(crate) fn style(&self) -> ArticleStyle {
        self.style
    }

    pub(crate) fn content(&self) -> &ArticleContent {
        &self.content
    }

    /// Replace the applied record wholesale and recompute derived styling.
    pub(crate) fn replace_settings(&mut self, settings: ArticleSettings) {
        self.applied = settings;
        self.params = StyleParams::from_settings(&self.applied);
        self.style = ArticleStyle::resolve(&self.params);
    }

    pub(crate) fn replace_content(&mut self, content: ArticleContent) {
        self.content = content;
    }
}

impl Default for ReaderState {
    fn default() -> Self {
        let applied = ArticleSettings::default();
        let params = StyleParams::from_settings(&applied);

        Self {
            applied,
            params,
            style: ArticleStyle::resolve(&params),
            content: ArticleContent::bundled(),
        }
    }
}
