use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::reader::{ReaderCommand, ReaderEffect, ReaderEvent};

/// Route a reader UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: ReaderEvent) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a reader command directly (used by other routers).
pub(crate) fn route_command(
    app: &mut App,
    command: ReaderCommand,
) -> Task<AppEvent> {
    app.widgets
        .reader
        .reduce(command)
        .map(AppEvent::ReaderEffect)
}

/// Route a reader effect event back into the widget as a UI event.
pub(crate) fn route_effect(effect: ReaderEffect) -> Task<AppEvent> {
    match effect {
        ReaderEffect::ContentLoaded(load) => {
            Task::done(AppEvent::ReaderUi(ReaderEvent::ContentLoaded(load)))
        },
        ReaderEffect::ContentFailed(message) => {
            Task::done(AppEvent::ReaderUi(ReaderEvent::ContentFailed(message)))
        },
    }
}

fn map_event_to_command(event: ReaderEvent) -> ReaderCommand {
    use {ReaderCommand as C, ReaderEvent as E};

    match event {
        E::Reload => C::Reload,
        E::ContentLoaded(load) => C::ContentLoaded(load),
        E::ContentFailed(message) => C::ContentFailed(message),
    }
}
