use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::reader::view::article_view;
use crate::widgets::settings_panel::view::{panel_form, toggle_button};

/// Render the root application view: the article with the settings panel
/// and its toggle layered on top.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props: ThemeProps<'_> = ThemeProps::new(&app.theme);
    let panel_vm = app.widgets.settings_panel.vm();

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![article_view::view(article_view::ArticleViewProps {
            vm: app.widgets.reader.vm(),
            theme: theme_props,
        })];

    if panel_vm.is_open {
        layers.push(
            panel_form::view(panel_form::PanelFormProps {
                vm: panel_vm,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(AppEvent::SettingsPanelUi),
        );
    }

    layers.push(
        toggle_button::view(toggle_button::ToggleButtonProps {
            is_open: panel_vm.is_open,
            area: app.state.window_size,
            theme: theme_props,
        })
        .map(AppEvent::SettingsPanelUi),
    );

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
