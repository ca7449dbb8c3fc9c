//! Fetch service configuration

/// Configuration handed to the weather service at construction.
///
/// A present credential selects the live OpenWeatherMap API; an absent
/// one selects the deterministic mock provider.
#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    pub credential: Option<String>,
}

impl ServiceConfig {
    /// Build a config, treating an empty or whitespace-only key as absent.
    pub fn new(credential: Option<String>) -> Self {
        Self {
            credential: credential.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn is_live(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credential_selects_mock_mode() {
        assert!(!ServiceConfig::new(None).is_live());
        assert!(!ServiceConfig::new(Some("".into())).is_live());
        assert!(!ServiceConfig::new(Some("   ".into())).is_live());
        assert!(ServiceConfig::new(Some("abc123".into())).is_live());
    }
}
