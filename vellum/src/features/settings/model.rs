use vellum_ai::Provider;

use crate::theme::ThemePreset;

/// Provider choices offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ProviderChoice {
    #[default]
    Gemini,
    OpenAi,
}

impl ProviderChoice {
    pub(crate) fn all() -> [ProviderChoice; 2] {
        [ProviderChoice::Gemini, ProviderChoice::OpenAi]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ProviderChoice::Gemini => "Gemini",
            ProviderChoice::OpenAi => "OpenAI",
        }
    }

    pub(crate) fn provider(self) -> Provider {
        match self {
            ProviderChoice::Gemini => Provider::Gemini,
            ProviderChoice::OpenAi => Provider::OpenAi,
        }
    }

    /// Map a persisted provider name back to a choice.
    ///
    /// Unrecognized names fall back to the default so the panel always
    /// shows a selectable provider.
    pub(crate) fn from_provider_name(name: &str) -> Self {
        match Provider::from_name(name) {
            Some(Provider::Gemini) => ProviderChoice::Gemini,
            Some(Provider::OpenAi) => ProviderChoice::OpenAi,
            None => ProviderChoice::default(),
        }
    }
}

/// Outcome of the most recent API key check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum KeyValidation {
    #[default]
    Unknown,
    Checking,
    Valid,
    Invalid,
}

/// Persisted settings payload edited through the settings panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SettingsData {
    provider: ProviderChoice,
    gemini_key: String,
    openai_key: String,
    theme: ThemePreset,
}

impl SettingsData {
    pub(crate) fn provider(&self) -> ProviderChoice {
        self.provider
    }

    pub(crate) fn set_provider(&mut self, provider: ProviderChoice) {
        self.provider = provider;
    }

    pub(crate) fn theme(&self) -> ThemePreset {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: ThemePreset) {
        self.theme = theme;
    }

    /// Return the stored API key for one provider choice.
    pub(crate) fn key_for(&self, choice: ProviderChoice) -> &str {
        match choice {
            ProviderChoice::Gemini => &self.gemini_key,
            ProviderChoice::OpenAi => &self.openai_key,
        }
    }

    pub(crate) fn set_key_for(
        &mut self,
        choice: ProviderChoice,
        key: String,
    ) {
        match choice {
            ProviderChoice::Gemini => self.gemini_key = key,
            ProviderChoice::OpenAi => self.openai_key = key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProviderChoice;

    #[test]
    fn given_known_provider_names_when_mapping_then_choice_matches() {
        assert_eq!(
            ProviderChoice::from_provider_name("gemini"),
            ProviderChoice::Gemini,
        );
        assert_eq!(
            ProviderChoice::from_provider_name("openai"),
            ProviderChoice::OpenAi,
        );
    }

    #[test]
    fn given_unknown_provider_name_when_mapping_then_defaults_to_gemini() {
        assert_eq!(
            ProviderChoice::from_provider_name("anthropic"),
            ProviderChoice::Gemini,
        );
    }
}
