//! Configuration types.

use crate::error::ConfigError;

/// Default logo size cap (5 MiB).
pub const DEFAULT_MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

/// Company name shown when none has been submitted yet.
pub const DEFAULT_FALLBACK_COMPANY: &str = "Your Company";

/// Onboarding configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingConfig {
    /// Largest accepted logo upload, in bytes.
    pub max_logo_bytes: u64,
    /// Minimum trimmed length of the "about" text.
    pub about_min_chars: usize,
    /// Maximum trimmed length of the "about" text.
    pub about_max_chars: usize,
    /// Company name used by the job-post wizard when the draft has none.
    pub fallback_company_name: String,
    /// Undo depth kept by each rich-text editor.
    pub editor_history_limit: usize,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,
            about_min_chars: 50,
            about_max_chars: 500,
            fallback_company_name: DEFAULT_FALLBACK_COMPANY.to_string(),
            editor_history_limit: 100,
        }
    }
}

impl OnboardingConfig {
    /// Build a config from `ONBOARDING_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_logo_bytes = parse_or(
            &lookup,
            "ONBOARDING_MAX_LOGO_BYTES",
            defaults.max_logo_bytes,
        )?;
        let about_min_chars = parse_or(
            &lookup,
            "ONBOARDING_ABOUT_MIN_CHARS",
            defaults.about_min_chars,
        )?;
        let about_max_chars = parse_or(
            &lookup,
            "ONBOARDING_ABOUT_MAX_CHARS",
            defaults.about_max_chars,
        )?;
        let editor_history_limit = parse_or(
            &lookup,
            "ONBOARDING_EDITOR_HISTORY",
            defaults.editor_history_limit,
        )?;
        let fallback_company_name = lookup("ONBOARDING_FALLBACK_COMPANY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.fallback_company_name);

        if about_min_chars > about_max_chars {
            return Err(ConfigError::InvalidValue {
                key: "ONBOARDING_ABOUT_MIN_CHARS".to_string(),
                message: format!(
                    "minimum ({about_min_chars}) exceeds maximum ({about_max_chars})"
                ),
            });
        }

        Ok(Self {
            max_logo_bytes,
            about_min_chars,
            about_max_chars,
            fallback_company_name,
            editor_history_limit,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = OnboardingConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, OnboardingConfig::default());
        assert_eq!(config.max_logo_bytes, 5 * 1024 * 1024);
        assert_eq!(config.fallback_company_name, "Your Company");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = OnboardingConfig::from_lookup(lookup_from(&[
            ("ONBOARDING_MAX_LOGO_BYTES", "1024"),
            ("ONBOARDING_ABOUT_MIN_CHARS", " 10 "),
            ("ONBOARDING_FALLBACK_COMPANY", "Acme"),
        ]))
        .unwrap();
        assert_eq!(config.max_logo_bytes, 1024);
        assert_eq!(config.about_min_chars, 10);
        assert_eq!(config.about_max_chars, 500);
        assert_eq!(config.fallback_company_name, "Acme");
    }

    #[test]
    fn garbage_value_is_rejected_with_key() {
        let err = OnboardingConfig::from_lookup(lookup_from(&[(
            "ONBOARDING_EDITOR_HISTORY",
            "lots",
        )]))
        .unwrap_err();
        let ConfigError::InvalidValue { key, .. } = err;
        assert_eq!(key, "ONBOARDING_EDITOR_HISTORY");
    }

    #[test]
    fn inverted_about_bounds_are_rejected() {
        let result = OnboardingConfig::from_lookup(lookup_from(&[
            ("ONBOARDING_ABOUT_MIN_CHARS", "600"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn blank_fallback_company_keeps_default() {
        let config =
            OnboardingConfig::from_lookup(lookup_from(&[("ONBOARDING_FALLBACK_COMPANY", "  ")]))
                .unwrap();
        assert_eq!(config.fallback_company_name, DEFAULT_FALLBACK_COMPANY);
    }
}
