use iced::font::Family;
use iced::{Color, Font};

use super::errors::StyleValueError;
use crate::shared::style_params::{StyleParams, StyleVar};
use crate::shared::ui::theme::hex_to_color;

/// Style parameters resolved into values the `iced` renderer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArticleStyle {
    pub(crate) font: Font,
    pub(crate) font_size: f32,
    pub(crate) text_color: Color,
    pub(crate) background: Color,
    pub(crate) max_width: f32,
}

impl ArticleStyle {
    /// Resolve every parameter, falling back to the default option's
    /// resolution for any value that cannot be interpreted.
    pub(crate) fn resolve(params: &StyleParams) -> Self {
        let fallback = StyleParams::default();

        Self {
            font: font_for_family(params.get(StyleVar::FontFamily)),
            font_size: resolve_or_fallback(
                params,
                &fallback,
                StyleVar::FontSize,
                parse_px,
            ),
            text_color: resolve_or_fallback(
                params,
                &fallback,
                StyleVar::FontColor,
                parse_color,
            ),
            background: resolve_or_fallback(
                params,
                &fallback,
                StyleVar::BackgroundColor,
                parse_color,
            ),
            max_width: resolve_or_fallback(
                params,
                &fallback,
                StyleVar::ContainerWidth,
                parse_px,
            ),
        }
    }
}

fn resolve_or_fallback<T: Default>(
    params: &StyleParams,
    fallback: &StyleParams,
    var: StyleVar,
    parse: fn(&str) -> Result<T, StyleValueError>,
) -> T {
    match parse(params.get(var)) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("style parameter {} unresolved: {err}", var.name());
            parse(fallback.get(var)).unwrap_or_default()
        },
    }
}

/// Build a font that names `family`; the renderer falls back to its
/// default face when the family is not installed.
pub(crate) fn font_for_family(family: &'static str) -> Font {
    Font {
        family: Family::Name(family),
        ..Font::default()
    }
}

/// Parse a positive pixel length such as `24px`.
pub(crate) fn parse_px(value: &str) -> Result<f32, StyleValueError> {
    let invalid = || StyleValueError::InvalidLength {
        value: value.to_string(),
    };

    let number = value.trim().strip_suffix("px").ok_or_else(invalid)?;
    let parsed = number.trim().parse::<f32>().map_err(|_| invalid())?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}

/// Parse a `#RRGGBB` color.
pub(crate) fn parse_color(value: &str) -> Result<Color, StyleValueError> {
    hex_to_color(value).ok_or_else(|| StyleValueError::InvalidColor {
        value: value.to_string(),
    })
}
