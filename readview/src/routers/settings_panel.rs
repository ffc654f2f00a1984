use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::reader::ReaderCommand;
use crate::widgets::settings_panel::{
    SettingsPanelCommand, SettingsPanelCtx, SettingsPanelEffect,
    SettingsPanelEvent,
};

/// Route a settings panel UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: SettingsPanelEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a settings panel command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: SettingsPanelCommand,
) -> Task<AppEvent> {
    let ctx = panel_ctx(app);

    app.widgets
        .settings_panel
        .reduce(command, &ctx)
        .map(AppEvent::SettingsPanelEffect)
}

fn panel_ctx(app: &App) -> SettingsPanelCtx {
    SettingsPanelCtx {
        area: app.state.window_size,
    }
}

/// Route a settings panel effect to the reader.
pub(crate) fn route_effect(
    app: &mut App,
    effect: SettingsPanelEffect,
) -> Task<AppEvent> {
    match effect {
        SettingsPanelEffect::CommitSettings(settings) => {
            let task = routers::reader::route_command(
                app,
                ReaderCommand::ReplaceSettings(settings),
            );
            log::debug!(
                "reading style updated: {}",
                app.widgets
                    .reader
                    .style_params()
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            task
        },
    }
}

fn map_event_to_command(event: SettingsPanelEvent) -> SettingsPanelCommand {
    use {SettingsPanelCommand as C, SettingsPanelEvent as E};

    match event {
        E::TogglePressed => C::Toggle,
        E::OptionSelected { field, option } => C::Select { field, option },
        E::ApplyPressed => C::Apply,
        E::ResetPressed => C::Reset,
        E::PointerMoved { position } => C::TrackPointer { position },
        E::PointerPressed => C::PointerPressed,
    }
}
