use super::model::{KeyValidation, ProviderChoice, SettingsData};
use crate::theme::ThemePreset;

/// Stored and draft settings state for the settings panel.
#[derive(Debug)]
pub(crate) struct SettingsState {
    baseline: SettingsData,
    draft: SettingsData,
    validation: KeyValidation,
    dirty: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        SettingsState::from_settings(SettingsData::default())
    }
}

impl SettingsState {
    /// Create state from a persisted settings payload.
    pub(crate) fn from_settings(settings: SettingsData) -> Self {
        Self {
            baseline: settings.clone(),
            draft: settings,
            validation: KeyValidation::Unknown,
            dirty: false,
        }
    }

    /// Return persisted settings currently used as dirty baseline.
    #[cfg(test)]
    pub(crate) fn baseline(&self) -> &SettingsData {
        &self.baseline
    }

    /// Return editable settings draft.
    pub(crate) fn draft(&self) -> &SettingsData {
        &self.draft
    }

    /// Return whether the draft differs from the persisted baseline.
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn validation(&self) -> KeyValidation {
        self.validation
    }

    pub(crate) fn set_validation(&mut self, validation: KeyValidation) {
        self.validation = validation;
    }

    /// Return the draft API key of the draft provider.
    pub(crate) fn active_draft_key(&self) -> &str {
        self.draft.key_for(self.draft.provider())
    }

    /// Replace persisted and draft values using freshly loaded settings.
    pub(crate) fn replace_with_settings(&mut self, settings: SettingsData) {
        self.baseline = settings.clone();
        self.draft = settings;
        self.validation = KeyValidation::Unknown;
        self.dirty = false;
    }

    pub(crate) fn mark_saved(&mut self, settings: SettingsData) {
        self.replace_with_settings(settings);
    }

    pub(crate) fn reset(&mut self) {
        let baseline = self.baseline.clone();
        self.replace_with_settings(baseline);
    }

    pub(crate) fn set_provider_choice(&mut self, provider: ProviderChoice) {
        self.draft.set_provider(provider);
        // The panel now shows a different key, so any verdict is stale.
        self.validation = KeyValidation::Unknown;
        self.update_dirty();
    }

    /// Overwrite the draft key of the provider currently selected.
    pub(crate) fn set_active_key(&mut self, key: String) {
        let provider = self.draft.provider();
        self.draft.set_key_for(provider, key);
        self.validation = KeyValidation::Unknown;
        self.update_dirty();
    }

    pub(crate) fn set_theme(&mut self, theme: ThemePreset) {
        self.draft.set_theme(theme);
        self.update_dirty();
    }

    fn update_dirty(&mut self) {
        self.dirty = self.draft != self.baseline;
    }
}
