use super::options::ArticleSettings;

/// Named style variables consumed by the article renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum StyleVar {
    FontFamily,
    FontSize,
    FontColor,
    ContainerWidth,
    BackgroundColor,
}

impl StyleVar {
    pub(crate) const ALL: [StyleVar; 5] = [
        StyleVar::FontFamily,
        StyleVar::FontSize,
        StyleVar::FontColor,
        StyleVar::ContainerWidth,
        StyleVar::BackgroundColor,
    ];

    /// Return the variable name as exposed to the rendering surface.
    pub(crate) fn name(self) -> &'static str {
        match self {
            StyleVar::FontFamily => "--font-family",
            StyleVar::FontSize => "--font-size",
            StyleVar::FontColor => "--font-color",
            StyleVar::ContainerWidth => "--container-width",
            StyleVar::BackgroundColor => "--bg-color",
        }
    }

    fn index(self) -> usize {
        match self {
            StyleVar::FontFamily => 0,
            StyleVar::FontSize => 1,
            StyleVar::FontColor => 2,
            StyleVar::ContainerWidth => 3,
            StyleVar::BackgroundColor => 4,
        }
    }
}

/// Style parameter bindings derived from applied settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleParams {
    values: [&'static str; 5],
}

impl StyleParams {
    /// Derive one binding per settings field value.
    pub(crate) fn from_settings(settings: &ArticleSettings) -> Self {
        let mut values = [""; 5];
        values[StyleVar::FontFamily.index()] = settings.font_family().value();
        values[StyleVar::FontSize.index()] = settings.font_size().value();
        values[StyleVar::FontColor.index()] = settings.font_color().value();
        values[StyleVar::ContainerWidth.index()] =
            settings.content_width().value();
        values[StyleVar::BackgroundColor.index()] =
            settings.background_color().value();

        Self { values }
    }

    /// Return the value bound to `var`.
    pub(crate) fn get(&self, var: StyleVar) -> &'static str {
        self.values[var.index()]
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub(crate) fn iter(
        &self,
    ) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        StyleVar::ALL
            .into_iter()
            .map(|var| (var.name(), self.get(var)))
    }
}

impl Default for StyleParams {
    fn default() -> Self {
        Self::from_settings(&ArticleSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{StyleParams, StyleVar};
    use crate::shared::options::{
        ArticleSettings, SettingsField, find_option,
    };

    #[test]
    fn given_default_settings_when_deriving_params_then_values_match_fields() {
        let params = StyleParams::from_settings(&ArticleSettings::default());

        assert_eq!(params.get(StyleVar::FontFamily), "Open Sans");
        assert_eq!(params.get(StyleVar::FontSize), "18px");
        assert_eq!(params.get(StyleVar::FontColor), "#000000");
        assert_eq!(params.get(StyleVar::ContainerWidth), "1394px");
        assert_eq!(params.get(StyleVar::BackgroundColor), "#FFFFFF");
    }

    #[test]
    fn given_changed_background_when_deriving_params_then_only_bg_var_differs()
    {
        let mut settings = ArticleSettings::default();
        let purple = find_option(SettingsField::BackgroundColor, "#5F41D2")
            .expect("purple background should exist");
        settings.set(SettingsField::BackgroundColor, purple);

        let params = StyleParams::from_settings(&settings);
        let defaults = StyleParams::default();

        for var in StyleVar::ALL {
            if var == StyleVar::BackgroundColor {
                assert_eq!(params.get(var), "#5F41D2");
            } else {
                assert_eq!(params.get(var), defaults.get(var));
            }
        }
    }

    #[test]
    fn given_params_when_iterated_then_names_follow_fixed_order() {
        let names: Vec<_> =
            StyleParams::default().iter().map(|(name, _)| name).collect();

        assert_eq!(
            names,
            vec![
                "--font-family",
                "--font-size",
                "--font-color",
                "--container-width",
                "--bg-color",
            ]
        );
    }
}
