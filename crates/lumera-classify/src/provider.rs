//! AI provider settings resolution.
//!
//! Provider selection and credentials can live in two places: the persisted
//! site settings (editable from the back office) and the process environment.
//! Resolution precedence is {persisted setting, environment default}, applied
//! per key, so a studio can override just the model while keeping the key
//! from the environment. The resolved settings are injected into the
//! classifier rather than read ad hoc.

use std::collections::HashMap;

use lumera_core::AppError;

pub const SETTING_AI_PROVIDER: &str = "ai_provider";
pub const SETTING_AI_API_KEY: &str = "ai_api_key";
pub const SETTING_AI_MODEL: &str = "ai_model";
pub const SETTING_AI_ENDPOINT: &str = "ai_endpoint";

const DEFAULT_PROVIDER: &str = "openai";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Environment-sourced defaults (from [`lumera_core::Config`]).
#[derive(Debug, Clone, Default)]
pub struct ProviderDefaults {
    pub provider: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

/// Fully resolved provider settings, ready to build a classifier from.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

/// Resolve provider settings with persisted values taking precedence over
/// environment defaults. Fails when no API key is available from either
/// source; every other field has a built-in default.
pub fn resolve_provider_settings(
    persisted: &HashMap<String, String>,
    defaults: &ProviderDefaults,
) -> Result<ProviderSettings, AppError> {
    let pick = |key: &str, env_value: &Option<String>| -> Option<String> {
        persisted
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .or_else(|| env_value.clone().filter(|v| !v.trim().is_empty()))
    };

    let provider = pick(SETTING_AI_PROVIDER, &defaults.provider)
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string())
        .to_lowercase();

    let api_key = pick(SETTING_AI_API_KEY, &defaults.api_key).ok_or_else(|| {
        AppError::ClassificationUnavailable(
            "No AI API key configured in settings or environment".to_string(),
        )
    })?;

    let model = pick(SETTING_AI_MODEL, &defaults.model).unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = pick(SETTING_AI_ENDPOINT, &defaults.endpoint)
        .unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string());

    Ok(ProviderSettings {
        provider,
        api_key,
        model,
        endpoint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults_with_key() -> ProviderDefaults {
        ProviderDefaults {
            provider: Some("openai".to_string()),
            api_key: Some("env-key".to_string()),
            model: Some("gpt-4o-mini".to_string()),
            endpoint: None,
        }
    }

    #[test]
    fn test_persisted_setting_beats_environment() {
        let mut persisted = HashMap::new();
        persisted.insert(SETTING_AI_API_KEY.to_string(), "db-key".to_string());
        persisted.insert(SETTING_AI_MODEL.to_string(), "gpt-4o".to_string());

        let settings = resolve_provider_settings(&persisted, &defaults_with_key()).unwrap();
        assert_eq!(settings.api_key, "db-key");
        assert_eq!(settings.model, "gpt-4o");
        // Provider falls through to the environment default
        assert_eq!(settings.provider, "openai");
    }

    #[test]
    fn test_environment_fallback() {
        let settings = resolve_provider_settings(&HashMap::new(), &defaults_with_key()).unwrap();
        assert_eq!(settings.api_key, "env-key");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.endpoint, DEFAULT_OPENAI_ENDPOINT);
    }

    #[test]
    fn test_blank_persisted_value_is_ignored() {
        let mut persisted = HashMap::new();
        persisted.insert(SETTING_AI_API_KEY.to_string(), "   ".to_string());

        let settings = resolve_provider_settings(&persisted, &defaults_with_key()).unwrap();
        assert_eq!(settings.api_key, "env-key");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = resolve_provider_settings(&HashMap::new(), &ProviderDefaults::default());
        assert!(matches!(
            result,
            Err(AppError::ClassificationUnavailable(_))
        ));
    }

    #[test]
    fn test_provider_is_lowercased() {
        let mut persisted = HashMap::new();
        persisted.insert(SETTING_AI_PROVIDER.to_string(), "OpenAI".to_string());
        persisted.insert(SETTING_AI_API_KEY.to_string(), "k".to_string());

        let settings = resolve_provider_settings(&persisted, &ProviderDefaults::default()).unwrap();
        assert_eq!(settings.provider, "openai");
    }
}
