use iced::Font;
use iced::font::{Family, Weight};

/// Fonts for panel controls and the labels above them.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
    pub(crate) label_font_type: Font,
    pub(crate) label_size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
            label_font_type: Font {
                weight: Weight::Semibold,
                ..Font::default()
            },
            label_size: 13.0,
        }
    }
}

/// Heading shown at the top of the settings panel.
#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::ExtraBold,
                family: Family::SansSerif,
                ..Font::default()
            },
            size: 24.0,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}
