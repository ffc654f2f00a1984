pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod panel_style;
pub(crate) mod scroll_style;
pub(crate) mod theme;
