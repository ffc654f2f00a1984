use iced::widget::text::LineHeight;
use iced::widget::{Column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::scroll_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::reader::model::ReaderViewModel;

const ARTICLE_PADDING_X: f32 = 48.0;
const ARTICLE_PADDING_Y: f32 = 72.0;
const ARTICLE_PARAGRAPH_SPACING: f32 = 18.0;
const ARTICLE_TITLE_SCALE: f32 = 1.8;
const ARTICLE_LINE_HEIGHT: f32 = 1.5;

/// Props for the article view.
pub(crate) struct ArticleViewProps<'a> {
    pub(crate) vm: ReaderViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the article using the resolved reading style.
pub(crate) fn view<'a, Message: 'a>(
    props: ArticleViewProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let style = props.vm.style;

    let title = text(props.vm.content.title())
        .font(style.font)
        .size(style.font_size * ARTICLE_TITLE_SCALE)
        .color(style.text_color)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left);

    let body = props.vm.content.paragraphs().iter().fold(
        Column::new().spacing(ARTICLE_PARAGRAPH_SPACING),
        |column, paragraph| {
            column.push(
                text(paragraph.as_str())
                    .font(style.font)
                    .size(style.font_size)
                    .line_height(LineHeight::Relative(ARTICLE_LINE_HEIGHT))
                    .color(style.text_color)
                    .width(Length::Fill),
            )
        },
    );

    let article = Column::new()
        .push(title)
        .push(body)
        .spacing(ARTICLE_PARAGRAPH_SPACING * 2.0)
        .width(Length::Fill);

    let centered = container(article)
        .max_width(style.max_width)
        .padding([ARTICLE_PADDING_Y, ARTICLE_PADDING_X]);

    let palette = props.theme.theme.iced_palette().clone();
    let scroll = scrollable::Scrollable::new(
        container(centered)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(scroll_style::thin_scroll_style(palette));

    container(scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(style.background.into()),
            text_color: Some(style.text_color),
            ..Default::default()
        })
        .into()
}
