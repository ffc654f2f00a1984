use crate::shared::options::ArticleSettings;

/// Read-only view model for the settings panel views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsPanelViewModel<'a> {
    pub(crate) is_open: bool,
    pub(crate) draft: &'a ArticleSettings,
}
