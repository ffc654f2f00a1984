pub(crate) mod options;
pub(crate) mod style_params;
pub(crate) mod ui;
