pub(crate) mod reader;
pub(crate) mod settings_panel;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) reader: reader::ReaderWidget,
    pub(crate) settings_panel: settings_panel::SettingsPanelWidget,
}
