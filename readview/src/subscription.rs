use iced::{Event, Subscription, event, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::settings_panel::SettingsPanelEvent;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Outside-press listener lives only while the panel is open.
    if app.widgets.settings_panel.is_open() {
        subs.push(event::listen_with(settings_panel_pointer_event));
    }

    Subscription::batch(subs)
}

fn settings_panel_pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let event = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            SettingsPanelEvent::PointerMoved { position }
        },
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            SettingsPanelEvent::PointerPressed
        },
        _ => return None,
    };

    Some(AppEvent::SettingsPanelUi(event))
}
