use iced::Point;

use crate::shared::options::{ArticleOption, SettingsField};

/// Internal commands dispatched to the settings panel reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsPanelCommand {
    /// Flip between Open and Closed.
    Toggle,
    /// Change one draft dimension.
    Select {
        field: SettingsField,
        option: ArticleOption,
    },
    /// Commit the draft as the applied record.
    Apply,
    /// Revert draft and applied settings to defaults.
    Reset,
    /// Remember the last known pointer position.
    TrackPointer { position: Point },
    /// Close the panel when the press lands outside of it.
    PointerPressed,
}
