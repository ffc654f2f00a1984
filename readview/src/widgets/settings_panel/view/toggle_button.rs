use iced::widget::container;
use iced::{Element, Length, Padding, Size, Theme};

use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::geometry::{self, TOGGLE_SIZE};
use crate::shared::ui::icons::{ARROW_LEFT, ARROW_RIGHT};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::settings_panel::event::SettingsPanelEvent;

const TOGGLE_ICON_SIZE: f32 = 20.0;

/// Props for the panel toggle button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToggleButtonProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) area: Size,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the toggle positioned next to the panel edge.
pub(crate) fn view(
    props: ToggleButtonProps<'_>,
) -> Element<'_, SettingsPanelEvent, Theme, iced::Renderer> {
    let bounds = geometry::toggle_bounds(props.area, props.is_open);
    let icon = if props.is_open {
        ARROW_LEFT
    } else {
        ARROW_RIGHT
    };

    let button = icon_button::view(IconButtonProps {
        icon,
        theme: props.theme,
        size: TOGGLE_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
    })
    .map(|_| SettingsPanelEvent::TogglePressed);

    container(button)
        .padding(Padding {
            top: bounds.y,
            right: 0.0,
            bottom: 0.0,
            left: bounds.x,
        })
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}
