use serde::Deserialize;

use super::style::ArticleStyle;

const BUNDLED_TITLE: &str = "Human, the lighthouse keeper";

const BUNDLED_PARAGRAPHS: &[&str] = &[
    "Every evening the keeper climbed the spiral stairs, counted the steps \
     out of habit, and lit the lamp a few minutes before the sun touched \
     the water. Ships rarely passed anymore, yet the light went on as if a \
     whole fleet were waiting for it.",
    "He kept a ledger of weather and visitors. The weather column filled \
     quickly; the visitors column held a gull with a bent wing, a lost \
     cyclist, and once a letter carrier who stayed for tea because the \
     road had washed out.",
    "Reading was what filled the long hours between rounds. He liked large \
     print on pale paper and wide margins he could rest his thumbs on. When \
     his eyes grew tired he moved the lamp closer and the words seemed to \
     settle into place again.",
    "People from the mainland asked whether the solitude was hard. He \
     answered that the sea talks all night and the light answers it, so \
     there is always a conversation to listen to.",
];

/// Article content rendered by the reading view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ArticleContent {
    title: String,
    #[serde(default)]
    paragraphs: Vec<String>,
}

impl ArticleContent {
    pub(crate) fn new(title: String, paragraphs: Vec<String>) -> Self {
        Self { title, paragraphs }
    }

    /// Return the article bundled with the application.
    pub(crate) fn bundled() -> Self {
        Self::new(
            String::from(BUNDLED_TITLE),
            BUNDLED_PARAGRAPHS
                .iter()
                .map(|paragraph| paragraph.to_string())
                .collect(),
        )
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Return whether there is nothing to render.
    pub(crate) fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self
                .paragraphs
                .iter()
                .all(|paragraph| paragraph.trim().is_empty())
    }
}

/// Read-only view model for the article view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReaderViewModel<'a> {
    pub(crate) content: &'a ArticleContent,
    pub(crate) style: ArticleStyle,
}

#[cfg(test)]
mod tests {
    use super::ArticleContent;

    #[test]
    fn given_bundled_article_when_inspected_then_is_not_empty() {
        let article = ArticleContent::bundled();

        assert!(!article.is_empty());
        assert!(!article.paragraphs().is_empty());
    }

    #[test]
    fn given_blank_title_and_paragraphs_when_checked_then_is_empty() {
        let article = ArticleContent::new(
            String::from("  "),
            vec![String::new(), String::from("\n")],
        );

        assert!(article.is_empty());
    }
}
