use iced::{Point, Size};

use crate::geometry;
use crate::shared::options::{ArticleOption, ArticleSettings, SettingsField};

/// Open/closed state of the panel.
///
/// The pointer position only exists while the panel is open, so closing the
/// panel discards it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum PanelVisibility {
    Closed,
    Open { cursor: Option<Point> },
}

/// Internal runtime state for the settings panel.
#[derive(Debug)]
pub(super) struct SettingsPanelState {
    visibility: PanelVisibility,
    draft: ArticleSettings,
}

impl SettingsPanelState {
    /// Start closed with a draft copied from the applied settings.
    pub(super) fn new(applied: &ArticleSettings) -> Self {
        Self {
            visibility: PanelVisibility::Closed,
            draft: *applied,
        }
    }

    pub(super) fn is_open(&self) -> bool {
        matches!(self.visibility, PanelVisibility::Open { .. })
    }

    pub(super) fn draft(&self) -> &ArticleSettings {
        &self.draft
    }

    pub(super) fn cursor(&self) -> Option<Point> {
        match self.visibility {
            PanelVisibility::Open { cursor } => cursor,
            PanelVisibility::Closed => None,
        }
    }

    pub(super) fn toggle(&mut self) {
        self.visibility = match self.visibility {
            PanelVisibility::Closed => PanelVisibility::Open { cursor: None },
            PanelVisibility::Open { .. } => PanelVisibility::Closed,
        };
    }

    pub(super) fn select(
        &mut self,
        field: SettingsField,
        option: ArticleOption,
    ) {
        self.draft.set(field, option);
    }

    /// Return the record to commit; the draft is kept as is.
    pub(super) fn apply(&self) -> ArticleSettings {
        self.draft
    }

    /// Revert the draft to defaults and return the record to commit.
    pub(super) fn reset(&mut self) -> ArticleSettings {
        self.draft = ArticleSettings::default();
        self.draft
    }

    pub(super) fn update_cursor(&mut self, position: Point) {
        if let PanelVisibility::Open { cursor } = &mut self.visibility {
            *cursor = Some(position);
        }
    }

    /// Close the panel when the last known pointer position lies outside
    /// the panel bounds. Returns whether the panel was closed.
    pub(super) fn press_at_cursor(&mut self, area: Size) -> bool {
        let Some(position) = self.cursor() else {
            return false;
        };

        if geometry::is_inside_open_panel(area, position) {
            return false;
        }

        self.visibility = PanelVisibility::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size};

    use super::SettingsPanelState;
    use crate::shared::options::{
        ArticleSettings, SettingsField, find_option,
    };

    const AREA: Size = Size::new(1280.0, 800.0);

    #[test]
    fn given_open_panel_when_toggled_then_cursor_is_discarded() {
        let mut state = SettingsPanelState::new(&ArticleSettings::default());
        state.toggle();
        state.update_cursor(Point::new(100.0, 100.0));

        state.toggle();
        state.toggle();

        assert!(state.is_open());
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn given_closed_panel_when_pointer_moves_then_cursor_is_not_tracked() {
        let mut state = SettingsPanelState::new(&ArticleSettings::default());

        state.update_cursor(Point::new(100.0, 100.0));

        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn given_open_panel_without_cursor_when_pressed_then_stays_open() {
        let mut state = SettingsPanelState::new(&ArticleSettings::default());
        state.toggle();

        let closed = state.press_at_cursor(AREA);

        assert!(!closed);
        assert!(state.is_open());
    }

    #[test]
    fn given_modified_draft_when_reset_then_returns_defaults() {
        let mut state = SettingsPanelState::new(&ArticleSettings::default());
        let narrow = find_option(SettingsField::ContentWidth, "948px")
            .expect("narrow width should exist");
        state.select(SettingsField::ContentWidth, narrow);

        let committed = state.reset();

        assert_eq!(committed, ArticleSettings::default());
        assert_eq!(state.draft(), &ArticleSettings::default());
    }

    #[test]
    fn given_changed_draft_when_applied_then_returns_that_draft() {
        let mut state = SettingsPanelState::new(&ArticleSettings::default());
        let serif = find_option(SettingsField::FontFamily, "Merriweather")
            .expect("Merriweather should exist");
        let narrow = find_option(SettingsField::ContentWidth, "948px")
            .expect("narrow width should exist");
        state.select(SettingsField::FontFamily, serif);
        state.select(SettingsField::ContentWidth, narrow);

        let committed = state.apply();

        assert_eq!(&committed, state.draft());
        assert_eq!(committed.font_family(), serif);
        assert_eq!(committed.content_width(), narrow);
        assert_ne!(committed, ArticleSettings::default());
    }
}
