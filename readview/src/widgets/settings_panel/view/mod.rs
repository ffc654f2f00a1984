pub(crate) mod panel_form;
pub(crate) mod toggle_button;
