use super::model::SettingsData;
use crate::ui::widgets::settings_panel;

/// Events for the settings feature: panel edits and storage results.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    Panel(settings_panel::SettingsPanelEvent),
    Reload,
    ReloadLoaded(SettingsData),
    KeyValidated(bool),
    SaveCompleted(SettingsData),
    SaveFailed(String),
}
