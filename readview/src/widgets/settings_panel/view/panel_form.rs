use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, Space, button, column, container, pick_list, radio, row, text,
};
use iced::{Element, Length, Theme, alignment};

use crate::geometry::PANEL_WIDTH;
use crate::shared::options::{ControlKind, SettingsField};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::panel_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::settings_panel::event::SettingsPanelEvent;
use crate::widgets::settings_panel::model::SettingsPanelViewModel;

const FORM_PADDING_X: f32 = 24.0;
const FORM_PADDING_TOP: f32 = 84.0;
const FORM_PADDING_BOTTOM: f32 = 24.0;
const FORM_SECTION_SPACING: f32 = 20.0;
const FORM_LABEL_SPACING: f32 = 8.0;
const FORM_CONTROL_PADDING: f32 = 8.0;
const RADIO_SIZE: f32 = 16.0;
const RADIO_SPACING: f32 = 16.0;
const RADIO_LABEL_SPACING: f32 = 6.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

const ACTION_BUTTON_HEIGHT: f32 = 36.0;
const ACTION_BUTTON_PADDING_X: f32 = 20.0;
const ACTION_BUTTON_SPACING: f32 = 12.0;
const ACTION_BUTTON_RADIUS: f32 = 4.0;

/// Visual variants for the form action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionVariant {
    Clear,
    Accent,
}

/// Props for the settings panel form.
pub(crate) struct PanelFormProps<'a> {
    pub(crate) vm: SettingsPanelViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the open panel: heading, one control per dimension, and actions.
pub(crate) fn view(
    props: PanelFormProps<'_>,
) -> Element<'_, SettingsPanelEvent, Theme, iced::Renderer> {
    let heading = text("Set parameters")
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);

    let mut form = Column::new()
        .push(heading)
        .spacing(FORM_SECTION_SPACING)
        .width(Length::Fill);

    for field in SettingsField::ALL {
        form = form.push(field_section(&props, field));
        // Text settings above, page settings below.
        if field == SettingsField::FontColor {
            form = form.push(separator(&props));
        }
    }

    form = form
        .push(Space::new().height(Length::Fill))
        .push(actions_row(&props));

    container(form)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .padding(iced::Padding {
            top: FORM_PADDING_TOP,
            right: FORM_PADDING_X,
            bottom: FORM_PADDING_BOTTOM,
            left: FORM_PADDING_X,
        })
        .style(panel_style::panel_surface_style(props.theme))
        .into()
}

fn field_section<'a>(
    props: &PanelFormProps<'a>,
    field: SettingsField,
) -> Element<'a, SettingsPanelEvent, Theme, iced::Renderer> {
    let label = text(field.title())
        .font(props.fonts.ui.label_font_type)
        .size(props.fonts.ui.label_size);

    let control = match field.control() {
        ControlKind::Select => select_control(props, field),
        ControlKind::Radio => radio_control(props, field),
    };

    column![label, control]
        .spacing(FORM_LABEL_SPACING)
        .width(Length::Fill)
        .into()
}

fn select_control<'a>(
    props: &PanelFormProps<'a>,
    field: SettingsField,
) -> Element<'a, SettingsPanelEvent, Theme, iced::Renderer> {
    pick_list(
        field.options(),
        Some(props.vm.draft.get(field)),
        move |option| SettingsPanelEvent::OptionSelected { field, option },
    )
    .font(props.fonts.ui.font_type)
    .text_size(props.fonts.ui.size)
    .padding(FORM_CONTROL_PADDING)
    .width(Length::Fill)
    .into()
}

fn radio_control<'a>(
    props: &PanelFormProps<'a>,
    field: SettingsField,
) -> Element<'a, SettingsPanelEvent, Theme, iced::Renderer> {
    let selected = props.vm.draft.get(field);

    field
        .options()
        .iter()
        .fold(row![].spacing(RADIO_SPACING), |choices, option| {
            choices.push(
                radio(option.title(), *option, Some(selected), move |option| {
                    SettingsPanelEvent::OptionSelected { field, option }
                })
                .size(RADIO_SIZE)
                .spacing(RADIO_LABEL_SPACING)
                .text_size(props.fonts.ui.size),
            )
        })
        .align_y(alignment::Vertical::Center)
        .into()
}

fn separator<'a>(
    props: &PanelFormProps<'a>,
) -> Element<'a, SettingsPanelEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(panel_style::separator_style(props.theme))
        .into()
}

fn actions_row<'a>(
    props: &PanelFormProps<'a>,
) -> Element<'a, SettingsPanelEvent, Theme, iced::Renderer> {
    let reset = action_button(
        "Reset",
        ActionVariant::Clear,
        SettingsPanelEvent::ResetPressed,
        props.theme,
    );
    let apply = action_button(
        "Apply",
        ActionVariant::Accent,
        SettingsPanelEvent::ApplyPressed,
        props.theme,
    );

    row![reset, apply]
        .spacing(ACTION_BUTTON_SPACING)
        .width(Length::Fill)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    variant: ActionVariant,
    event: SettingsPanelEvent,
    theme: ThemeProps<'a>,
) -> Element<'a, SettingsPanelEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(text(label).align_x(alignment::Horizontal::Center))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(event)
        .padding([0.0, ACTION_BUTTON_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .style(move |_, status| button_style(&palette, status, variant))
        .into()
}

fn button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    variant: ActionVariant,
) -> button::Style {
    let is_active =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let (background, text_color, border_color) = match variant {
        ActionVariant::Clear => {
            let background = if is_active {
                Some(palette.overlay)
            } else {
                None
            };
            (background, palette.foreground, palette.dim_white)
        },
        ActionVariant::Accent => {
            let background = if is_active {
                palette.dim_blue
            } else {
                palette.blue
            };
            (Some(background), palette.dim_black, background)
        },
    };

    button::Style {
        background: background.map(Into::into),
        text_color,
        border: iced::Border {
            width: 1.0,
            color: border_color,
            radius: ACTION_BUTTON_RADIUS.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::{ActionVariant, button_style};
    use crate::shared::ui::theme::AppTheme;

    #[test]
    fn given_idle_clear_button_when_styled_then_background_is_transparent() {
        let theme = AppTheme::default();

        let style = button_style(
            theme.iced_palette(),
            ButtonStatus::Active,
            ActionVariant::Clear,
        );

        assert!(style.background.is_none());
    }

    #[test]
    fn given_hovered_accent_button_when_styled_then_background_dims() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let idle =
            button_style(palette, ButtonStatus::Active, ActionVariant::Accent);
        let hovered =
            button_style(palette, ButtonStatus::Hovered, ActionVariant::Accent);

        assert_eq!(idle.background, Some(Background::Color(palette.blue)));
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette.dim_blue))
        );
    }
}
