use std::fmt;

/// One selectable choice of a settings dimension: a display title paired
/// with the value handed to the article renderer.
///
/// Options are only constructed by the static catalogs in this module, so a
/// value held anywhere else in the app is always a member of its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ArticleOption {
    title: &'static str,
    value: &'static str,
}

impl ArticleOption {
    const fn new(title: &'static str, value: &'static str) -> Self {
        Self { title, value }
    }

    /// Return the human readable title.
    pub(crate) fn title(&self) -> &'static str {
        self.title
    }

    /// Return the underlying style value.
    pub(crate) fn value(&self) -> &'static str {
        self.value
    }
}

impl fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title)
    }
}

pub(crate) const FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Open Sans", "Open Sans"),
    ArticleOption::new("Ubuntu", "Ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond"),
    ArticleOption::new("Days One", "Days One"),
    ArticleOption::new("Merriweather", "Merriweather"),
];

pub(crate) const FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("18px", "18px"),
    ArticleOption::new("24px", "24px"),
    ArticleOption::new("38px", "38px"),
];

pub(crate) const FONT_COLOR_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Black", "#000000"),
    ArticleOption::new("White", "#FFFFFF"),
    ArticleOption::new("Gray", "#C4C4C4"),
    ArticleOption::new("Pink", "#FEAFE8"),
    ArticleOption::new("Bright pink", "#FD24AF"),
    ArticleOption::new("Yellow", "#FFC802"),
    ArticleOption::new("Green", "#80D994"),
    ArticleOption::new("Blue", "#6FC1FD"),
    ArticleOption::new("Purple", "#5F41D2"),
];

pub(crate) const BACKGROUND_COLOR_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("White", "#FFFFFF"),
    ArticleOption::new("Black", "#000000"),
    ArticleOption::new("Gray", "#C4C4C4"),
    ArticleOption::new("Pink", "#FEAFE8"),
    ArticleOption::new("Bright pink", "#FD24AF"),
    ArticleOption::new("Yellow", "#FFC802"),
    ArticleOption::new("Green", "#80D994"),
    ArticleOption::new("Blue", "#6FC1FD"),
    ArticleOption::new("Purple", "#5F41D2"),
];

pub(crate) const CONTENT_WIDTH_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Wide", "1394px"),
    ArticleOption::new("Narrow", "948px"),
];

/// How a dimension is presented in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlKind {
    /// Dropdown selector.
    Select,
    /// Exclusive choice group.
    Radio,
}

/// The five customizable dimensions of the reading view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    pub(crate) const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    /// Return the label shown above the field's control.
    pub(crate) fn title(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "Font",
            SettingsField::FontSize => "Font size",
            SettingsField::FontColor => "Font color",
            SettingsField::BackgroundColor => "Background color",
            SettingsField::ContentWidth => "Content width",
        }
    }

    /// Return the closed set of options for this dimension.
    pub(crate) fn options(self) -> &'static [ArticleOption] {
        match self {
            SettingsField::FontFamily => FONT_FAMILY_OPTIONS,
            SettingsField::FontSize => FONT_SIZE_OPTIONS,
            SettingsField::FontColor => FONT_COLOR_OPTIONS,
            SettingsField::BackgroundColor => BACKGROUND_COLOR_OPTIONS,
            SettingsField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    pub(crate) fn control(self) -> ControlKind {
        match self {
            SettingsField::FontSize => ControlKind::Radio,
            _ => ControlKind::Select,
        }
    }
}

/// A complete set of reading view settings, one option per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArticleSettings {
    font_family: ArticleOption,
    font_size: ArticleOption,
    font_color: ArticleOption,
    background_color: ArticleOption,
    content_width: ArticleOption,
}

impl ArticleSettings {
    pub(crate) fn font_family(&self) -> ArticleOption {
        self.font_family
    }

    pub(crate) fn font_size(&self) -> ArticleOption {
        self.font_size
    }

    pub(crate) fn font_color(&self) -> ArticleOption {
        self.font_color
    }

    pub(crate) fn background_color(&self) -> ArticleOption {
        self.background_color
    }

    pub(crate) fn content_width(&self) -> ArticleOption {
        self.content_width
    }

    /// Return the option currently held by `field`.
    pub(crate) fn get(&self, field: SettingsField) -> ArticleOption {
        match field {
            SettingsField::FontFamily => self.font_family,
            SettingsField::FontSize => self.font_size,
            SettingsField::FontColor => self.font_color,
            SettingsField::BackgroundColor => self.background_color,
            SettingsField::ContentWidth => self.content_width,
        }
    }

    /// Replace the option held by `field`, leaving other fields untouched.
    pub(crate) fn set(&mut self, field: SettingsField, option: ArticleOption) {
        let slot = match field {
            SettingsField::FontFamily => &mut self.font_family,
            SettingsField::FontSize => &mut self.font_size,
            SettingsField::FontColor => &mut self.font_color,
            SettingsField::BackgroundColor => &mut self.background_color,
            SettingsField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLOR_OPTIONS[0],
            background_color: BACKGROUND_COLOR_OPTIONS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

/// Find an option of `field` by its value.
#[cfg(test)]
pub(crate) fn find_option(
    field: SettingsField,
    value: &str,
) -> Option<ArticleOption> {
    field
        .options()
        .iter()
        .copied()
        .find(|option| option.value() == value)
}
