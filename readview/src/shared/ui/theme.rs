use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw hex palette for the application chrome (panel, buttons, controls).
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_black: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_white: String,
    pub(crate) dim_foreground: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            dim_black: String::from("#0F1115"),
            dim_blue: String::from("#2F638F"),
            dim_white: String::from("#6C7385"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#232530"),
        }
    }
}

/// Palette resolved into `iced` colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_white: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            dim_black: parse_hex_color(&p.dim_black),
            dim_blue: parse_hex_color(&p.dim_blue),
            dim_white: parse_hex_color(&p.dim_white),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

fn parse_hex_color(value: &str) -> Color {
    hex_to_color(value).unwrap_or_else(|| {
        log::warn!("invalid palette color: {value}");
        Color::BLACK
    })
}

/// Decode a `#RRGGBB` string into an `iced` color.
pub(crate) fn hex_to_color(value: &str) -> Option<Color> {
    let digits = value.trim().strip_prefix('#')?;
    let mut rgb = [0u8; 3];
    hex::decode_to_slice(digits, &mut rgb).ok()?;

    let [r, g, b] = rgb;
    Some(Color::from_rgb8(r, g, b))
}

/// Application chrome theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a raw palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{AppTheme, ColorPalette, IcedColorPalette, hex_to_color};

    #[test]
    fn given_invalid_hex_entry_when_resolving_palette_then_falls_back_to_black()
    {
        let raw = ColorPalette {
            overlay: String::from("not-a-color"),
            ..ColorPalette::default()
        };

        let palette = IcedColorPalette::from(&raw);

        assert_eq!(palette.overlay, Color::BLACK);
    }

    #[test]
    fn given_default_palette_when_building_theme_then_colors_are_resolved() {
        let theme = AppTheme::default();

        assert_eq!(
            theme.iced_palette().blue,
            Color::from_rgb8(0x4F, 0xA6, 0xED)
        );
        assert_eq!(
            theme.iced_palette().background,
            Color::from_rgb8(0x16, 0x18, 0x22)
        );
    }

    #[test]
    fn given_rrggbb_string_when_decoded_then_channels_match() {
        assert_eq!(
            hex_to_color("#feafe8"),
            Some(Color::from_rgb8(0xFE, 0xAF, 0xE8))
        );
        assert_eq!(hex_to_color("#FFFFFF"), Some(Color::WHITE));
    }

    #[test]
    fn given_malformed_hex_when_decoded_then_returns_none() {
        assert_eq!(hex_to_color("FEAFE8"), None);
        assert_eq!(hex_to_color("#FFF"), None);
        assert_eq!(hex_to_color("#GGGGGG"), None);
        assert_eq!(hex_to_color("#FEAFE8FF"), None);
    }
}
