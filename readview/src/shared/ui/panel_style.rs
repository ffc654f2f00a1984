use iced::widget::container;

use super::theme::ThemeProps;

/// Return a styled container closure for the settings panel surface.
pub(crate) fn panel_surface_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.dim_black.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 0.25,
            color: palette.overlay,
            radius: iced::border::Radius::new(0.0),
        },
        ..Default::default()
    }
}

/// Return a styled container closure for a thin horizontal separator.
pub(crate) fn separator_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let mut color = theme.theme.iced_palette().dim_white;
    color.a = 0.3;
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}
