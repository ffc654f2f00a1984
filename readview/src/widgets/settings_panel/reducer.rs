use iced::{Size, Task};

use super::command::SettingsPanelCommand;
use super::event::SettingsPanelEffect;
use super::state::SettingsPanelState;

/// Read-only context for settings panel reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsPanelCtx {
    /// Window area the panel is laid out in.
    pub(crate) area: Size,
}

/// Reduce a settings panel command into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SettingsPanelState,
    command: SettingsPanelCommand,
    ctx: &SettingsPanelCtx,
) -> Task<SettingsPanelEffect> {
    match apply_command(state, command, ctx) {
        Some(effect) => Task::done(effect),
        None => Task::none(),
    }
}

/// Update `state` for `command` and return the effect it emits, if any.
pub(crate) fn apply_command(
    state: &mut SettingsPanelState,
    command: SettingsPanelCommand,
    ctx: &SettingsPanelCtx,
) -> Option<SettingsPanelEffect> {
    match command {
        SettingsPanelCommand::Toggle => {
            state.toggle();
            log::debug!("settings panel open: {}", state.is_open());
            None
        },
        SettingsPanelCommand::Select { field, option } => {
            state.select(field, option);
            None
        },
        SettingsPanelCommand::Apply => {
            Some(SettingsPanelEffect::CommitSettings(state.apply()))
        },
        SettingsPanelCommand::Reset => {
            Some(SettingsPanelEffect::CommitSettings(state.reset()))
        },
        SettingsPanelCommand::TrackPointer { position } => {
            state.update_cursor(position);
            None
        },
        SettingsPanelCommand::PointerPressed => {
            if state.press_at_cursor(ctx.area) {
                log::debug!("settings panel closed by outside press");
            }
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size};

    use super::SettingsPanelCtx;
    use crate::shared::options::{
        ArticleSettings, SettingsField, find_option,
    };
    use crate::widgets::settings_panel::{
        SettingsPanelCommand, SettingsPanelEffect, SettingsPanelWidget,
    };

    const CTX: SettingsPanelCtx = SettingsPanelCtx {
        area: Size::new(1280.0, 800.0),
    };

    fn open_widget() -> SettingsPanelWidget {
        let mut widget = SettingsPanelWidget::new(&ArticleSettings::default());
        let _task = widget.reduce(SettingsPanelCommand::Toggle, &CTX);
        widget
    }

    fn press_at(widget: &mut SettingsPanelWidget, position: Point) {
        let _move_task = widget
            .reduce(SettingsPanelCommand::TrackPointer { position }, &CTX);
        let _press_task =
            widget.reduce(SettingsPanelCommand::PointerPressed, &CTX);
    }

    #[test]
    fn given_new_widget_when_inspected_then_panel_is_closed() {
        let widget = SettingsPanelWidget::new(&ArticleSettings::default());

        assert!(!widget.is_open());
        assert!(!widget.vm().is_open);
    }

    #[test]
    fn given_closed_panel_when_toggled_twice_then_panel_is_closed() {
        let mut widget = SettingsPanelWidget::new(&ArticleSettings::default());

        let _open = widget.reduce(SettingsPanelCommand::Toggle, &CTX);
        assert!(widget.is_open());
        let _close = widget.reduce(SettingsPanelCommand::Toggle, &CTX);

        assert!(!widget.is_open());
    }

    #[test]
    fn given_open_panel_when_pressed_outside_then_panel_closes() {
        let mut widget = open_widget();

        press_at(&mut widget, Point::new(900.0, 400.0));

        assert!(!widget.is_open());
    }

    #[test]
    fn given_open_panel_when_pressed_inside_then_panel_stays_open() {
        let mut widget = open_widget();

        press_at(&mut widget, Point::new(200.0, 400.0));

        assert!(widget.is_open());
    }

    #[test]
    fn given_open_panel_when_toggle_button_pressed_then_listener_keeps_it_open()
    {
        let mut widget = open_widget();

        press_at(&mut widget, Point::new(450.0, 30.0));

        assert!(widget.is_open());
    }

    #[test]
    fn given_closed_panel_when_pressed_anywhere_then_panel_stays_closed() {
        let mut widget = SettingsPanelWidget::new(&ArticleSettings::default());

        press_at(&mut widget, Point::new(200.0, 400.0));

        assert!(!widget.is_open());
    }

    #[test]
    fn given_selection_when_reduced_then_only_that_dimension_changes() {
        let mut widget = open_widget();
        let before = *widget.draft();
        let serif = find_option(SettingsField::FontFamily, "Merriweather")
            .expect("Merriweather should exist");

        let _task = widget.reduce(
            SettingsPanelCommand::Select {
                field: SettingsField::FontFamily,
                option: serif,
            },
            &CTX,
        );

        let after = widget.draft();
        assert_eq!(after.font_family(), serif);
        for field in SettingsField::ALL {
            if field != SettingsField::FontFamily {
                assert_eq!(after.get(field), before.get(field));
            }
        }
    }

    #[test]
    fn given_outside_press_when_panel_closes_then_draft_is_unchanged() {
        let mut widget = open_widget();
        let large = find_option(SettingsField::FontSize, "38px")
            .expect("38px should exist");
        let _task = widget.reduce(
            SettingsPanelCommand::Select {
                field: SettingsField::FontSize,
                option: large,
            },
            &CTX,
        );

        press_at(&mut widget, Point::new(1000.0, 600.0));

        assert!(!widget.is_open());
        assert_eq!(widget.draft().font_size(), large);
    }

    #[test]
    fn given_apply_when_reduced_then_panel_stays_open_and_draft_is_kept() {
        let mut widget = open_widget();
        let narrow = find_option(SettingsField::ContentWidth, "948px")
            .expect("narrow width should exist");
        let _select = widget.reduce(
            SettingsPanelCommand::Select {
                field: SettingsField::ContentWidth,
                option: narrow,
            },
            &CTX,
        );

        let _apply = widget.reduce(SettingsPanelCommand::Apply, &CTX);

        assert!(widget.is_open());
        assert_eq!(widget.draft().content_width(), narrow);
    }

    #[test]
    fn given_modified_draft_when_reset_then_draft_matches_defaults() {
        let mut widget = open_widget();
        let dark = find_option(SettingsField::BackgroundColor, "#000000")
            .expect("black background should exist");
        let _select = widget.reduce(
            SettingsPanelCommand::Select {
                field: SettingsField::BackgroundColor,
                option: dark,
            },
            &CTX,
        );

        let _reset = widget.reduce(SettingsPanelCommand::Reset, &CTX);

        assert_eq!(widget.draft(), &ArticleSettings::default());
    }

    #[test]
    fn given_changed_draft_when_applied_then_commits_that_draft() {
        let mut widget = open_widget();
        let large = find_option(SettingsField::FontSize, "38px")
            .expect("38px should exist");
        let purple = find_option(SettingsField::BackgroundColor, "#5F41D2")
            .expect("purple background should exist");
        for (field, option) in [
            (SettingsField::FontSize, large),
            (SettingsField::BackgroundColor, purple),
        ] {
            let effect = widget.apply_command(
                SettingsPanelCommand::Select { field, option },
                &CTX,
            );
            assert_eq!(effect, None);
        }
        let mut expected = ArticleSettings::default();
        expected.set(SettingsField::FontSize, large);
        expected.set(SettingsField::BackgroundColor, purple);

        let effect = widget.apply_command(SettingsPanelCommand::Apply, &CTX);

        assert_eq!(effect, Some(SettingsPanelEffect::CommitSettings(expected)));
        assert_ne!(expected, ArticleSettings::default());
    }

    #[test]
    fn given_non_default_applied_settings_when_reset_then_commits_defaults() {
        let mut applied = ArticleSettings::default();
        let serif = find_option(SettingsField::FontFamily, "Merriweather")
            .expect("Merriweather should exist");
        applied.set(SettingsField::FontFamily, serif);
        let mut widget = SettingsPanelWidget::new(&applied);

        let effect = widget.apply_command(SettingsPanelCommand::Reset, &CTX);

        assert_eq!(
            effect,
            Some(SettingsPanelEffect::CommitSettings(
                ArticleSettings::default()
            ))
        );
        assert_eq!(widget.draft(), &ArticleSettings::default());
    }

    #[test]
    fn given_non_commit_commands_when_reduced_then_no_effect_is_emitted() {
        let mut widget = SettingsPanelWidget::new(&ArticleSettings::default());

        for command in [
            SettingsPanelCommand::Toggle,
            SettingsPanelCommand::TrackPointer {
                position: Point::new(900.0, 400.0),
            },
            SettingsPanelCommand::PointerPressed,
        ] {
            assert_eq!(widget.apply_command(command, &CTX), None);
        }
        assert!(!widget.is_open());
    }
}
