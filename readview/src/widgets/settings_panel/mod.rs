pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::SettingsPanelCommand;
pub(crate) use event::{SettingsPanelEffect, SettingsPanelEvent};
use iced::Task;
use model::SettingsPanelViewModel;
pub(crate) use reducer::SettingsPanelCtx;
use state::SettingsPanelState;

use crate::shared::options::ArticleSettings;

/// Settings panel widget: owns the draft settings and the panel visibility.
pub(crate) struct SettingsPanelWidget {
    state: SettingsPanelState,
}

impl SettingsPanelWidget {
    /// Construct a closed panel whose draft mirrors `applied`.
    pub(crate) fn new(applied: &ArticleSettings) -> Self {
        Self {
            state: SettingsPanelState::new(applied),
        }
    }

    /// Reduce a command into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        command: SettingsPanelCommand,
        ctx: &SettingsPanelCtx,
    ) -> Task<SettingsPanelEffect> {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SettingsPanelViewModel<'_> {
        SettingsPanelViewModel {
            is_open: self.state.is_open(),
            draft: self.state.draft(),
        }
    }

    /// Return whether the panel is open.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Return the draft settings for tests.
    #[cfg(test)]
    pub(crate) fn draft(&self) -> &ArticleSettings {
        self.state.draft()
    }

    /// Reduce `command` and return the emitted effect instead of a task.
    #[cfg(test)]
    pub(crate) fn apply_command(
        &mut self,
        command: SettingsPanelCommand,
        ctx: &SettingsPanelCtx,
    ) -> Option<SettingsPanelEffect> {
        reducer::apply_command(&mut self.state, command, ctx)
    }
}
