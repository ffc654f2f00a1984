pub(crate) mod command;
pub(crate) mod errors;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod storage;
pub(crate) mod style;
pub(crate) mod view;

pub(crate) use command::ReaderCommand;
pub(crate) use event::{ReaderEffect, ReaderEvent};
use iced::Task;
use model::ReaderViewModel;
use state::ReaderState;

use crate::shared::options::ArticleSettings;
use crate::shared::style_params::StyleParams;

/// Reader widget: owns the applied reading settings and renders the article
/// with the style parameters derived from them.
pub(crate) struct ReaderWidget {
    state: ReaderState,
}

impl ReaderWidget {
    /// Create a reader with default settings and the bundled article.
    pub(crate) fn new() -> Self {
        Self {
            state: ReaderState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ReaderCommand,
    ) -> Task<ReaderEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a read-only view model for the article view.
    pub(crate) fn vm(&self) -> ReaderViewModel<'_> {
        ReaderViewModel {
            content: self.state.content(),
            style: self.state.style(),
        }
    }

    /// Return the currently applied settings record.
    pub(crate) fn applied_settings(&self) -> &ArticleSettings {
        self.state.applied()
    }

    /// Return the style parameters derived from the applied settings.
    pub(crate) fn style_params(&self) -> &StyleParams {
        self.state.params()
    }
}
