use vellum_ai::{
    ConfigStore, ConfigStoreError, api_key_entry, selected_provider_name,
    set_api_key, set_provider,
};

use super::model::{ProviderChoice, SettingsData};
use crate::theme::ThemePreset;

/// Entry holding the persisted theme preset name.
pub(crate) const THEME_ENTRY: &str = "app-theme";

/// Assemble the settings payload from persisted entries.
///
/// Absent or unrecognized entries fall back to defaults so a fresh
/// profile opens with a fully populated panel.
pub(crate) fn load_settings(store: &dyn ConfigStore) -> SettingsData {
    let mut settings = SettingsData::default();

    settings.set_provider(ProviderChoice::from_provider_name(
        &selected_provider_name(store),
    ));

    for choice in ProviderChoice::all() {
        let entry = api_key_entry(choice.provider().name());
        if let Some(key) = store.get(&entry) {
            settings.set_key_for(choice, key);
        }
    }

    let theme = store
        .get(THEME_ENTRY)
        .and_then(|name| ThemePreset::from_storage_name(&name))
        .unwrap_or_default();
    settings.set_theme(theme);

    settings
}

/// Persist every settings entry through the config store.
pub(crate) fn save_settings(
    store: &dyn ConfigStore,
    settings: &SettingsData,
) -> Result<(), ConfigStoreError> {
    set_provider(store, settings.provider().provider())?;

    for choice in ProviderChoice::all() {
        set_api_key(
            store,
            choice.provider().name(),
            settings.key_for(choice),
        )?;
    }

    store.set(THEME_ENTRY, settings.theme().storage_name())?;

    Ok(())
}
