#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::reader::{ReaderEffect, ReaderEvent, ReaderWidget};
use crate::widgets::settings_panel::{
    SettingsPanelEffect, SettingsPanelEvent, SettingsPanelWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1440.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Reader widget
    ReaderUi(ReaderEvent),
    ReaderEffect(ReaderEffect),
    // Settings panel widget
    SettingsPanelUi(SettingsPanelEvent),
    SettingsPanelEffect(SettingsPanelEffect),
    // Direct operations
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = Self::with_window_size(Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        });

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Build the application state for a window of `window_size`.
    pub(crate) fn with_window_size(window_size: Size) -> Self {
        let reader = ReaderWidget::new();
        let settings_panel =
            SettingsPanelWidget::new(reader.applied_settings());

        App {
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            state: State::new(window_size),
            widgets: Widgets {
                reader,
                settings_panel,
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Readview")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
