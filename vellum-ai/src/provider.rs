/// AI providers the generation client can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    /// Return the storage and routing name of the provider.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
        }
    }

    /// Resolve a persisted provider name, if it names a known provider.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gemini" => Some(Provider::Gemini),
            "openai" => Some(Provider::OpenAi),
            _ => None,
        }
    }

    /// Return every provider, in selection order.
    pub fn all() -> [Provider; 2] {
        [Provider::Gemini, Provider::OpenAi]
    }
}

#[cfg(test)]
mod tests {
    use super::Provider;

    #[test]
    fn given_known_names_when_resolving_then_round_trips() {
        for provider in Provider::all() {
            assert_eq!(Provider::from_name(provider.name()), Some(provider));
        }
    }

    #[test]
    fn given_unknown_name_when_resolving_then_returns_none() {
        assert_eq!(Provider::from_name("anthropic"), None);
        assert_eq!(Provider::from_name(""), None);
        assert_eq!(Provider::from_name("Gemini"), None);
    }
}
