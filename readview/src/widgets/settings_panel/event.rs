use iced::Point;

use crate::shared::options::{ArticleOption, ArticleSettings, SettingsField};

/// UI events emitted by the settings panel views and its pointer listener.
#[derive(Debug, Clone)]
pub(crate) enum SettingsPanelEvent {
    TogglePressed,
    OptionSelected {
        field: SettingsField,
        option: ArticleOption,
    },
    ApplyPressed,
    ResetPressed,
    /// Pointer moved somewhere in the window while the panel is open.
    PointerMoved { position: Point },
    /// Primary button pressed somewhere in the window.
    PointerPressed,
}

/// Effect events produced by the settings panel reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsPanelEffect {
    /// Replace the applied settings with this complete record.
    CommitSettings(ArticleSettings),
}
