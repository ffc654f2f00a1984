use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::reader::ReaderEvent;

pub(crate) mod reader;
pub(crate) mod settings_panel;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => {
            reader::route_event(app, ReaderEvent::Reload)
        },
        // Reader widget
        AppEvent::ReaderUi(event) => reader::route_event(app, event),
        AppEvent::ReaderEffect(effect) => reader::route_effect(effect),
        // Settings panel widget
        AppEvent::SettingsPanelUi(event) => {
            settings_panel::route_event(app, event)
        },
        AppEvent::SettingsPanelEffect(effect) => {
            settings_panel::route_effect(app, effect)
        },
        // Direct operations
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
