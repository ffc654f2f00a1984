use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

const ICON_BUTTON_PADDING: f32 = 0.0;
const ICON_BUTTON_RADIUS: f32 = 6.0;
const ICON_BUTTON_BORDER_WIDTH: f32 = 1.0;

/// Render a square icon button on a raised surface.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let icon_color = palette.dim_foreground;
    let icon_hover_color = palette.blue;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                icon_hover_color
            } else {
                icon_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| surface_style(&palette, status))
        .into()
}

fn surface_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let border_color = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => palette.blue,
        _ => palette.overlay,
    };

    button::Style {
        background: Some(palette.dim_black.into()),
        border: iced::Border {
            width: ICON_BUTTON_BORDER_WIDTH,
            color: border_color,
            radius: ICON_BUTTON_RADIUS.into(),
        },
        ..Default::default()
    }
}
