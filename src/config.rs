use std::{env, fmt::Display, str::FromStr};
use secrecy::SecretString;

use crate::{auth::CredentialSource, services::response_sanitizer::SanitizerStrategy};

pub const DEFAULT_GENERATION_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GENERATION_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub production: bool,
    pub cors_allowed_origins: Vec<String>,
    pub max_content_bytes: usize,
    pub credential_source: CredentialSource,
    pub generation_api_key: Option<SecretString>,
    pub access_token: Option<SecretString>,
    pub generation_api_base: String,
    pub generation_model: String,
    pub generation_timeout_secs: u64,
    pub generation_max_retries: u32,
    pub generation_json_mode: bool,
    pub sanitizer_strategy: SanitizerStrategy,
}

fn secret_var(key: &str) -> Option<SecretString> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

/// Parses a set variable, warning and keeping `default` when it does not parse.
fn parse_setting<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = raw else {
        return default;
    };

    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Ignoring {}={:?} ({}); using the default", key, value, e);
            default
        }
    }
}

fn timeout_setting(raw: Option<String>) -> u64 {
    match parse_setting("GENERATION_TIMEOUT_SECS", raw, DEFAULT_GENERATION_TIMEOUT_SECS) {
        0 => {
            log::warn!(
                "GENERATION_TIMEOUT_SECS=0 would fail every request; using {}",
                DEFAULT_GENERATION_TIMEOUT_SECS
            );
            DEFAULT_GENERATION_TIMEOUT_SECS
        }
        secs => secs,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parse_setting("WEB_SERVER_PORT", env::var("WEB_SERVER_PORT").ok(), 8080),
            production: env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            max_content_bytes: parse_setting(
                "MAX_CONTENT_BYTES",
                env::var("MAX_CONTENT_BYTES").ok(),
                2 * 1024 * 1024,
            ),
            credential_source: parse_setting(
                "CREDENTIAL_SOURCE",
                env::var("CREDENTIAL_SOURCE").ok(),
                CredentialSource::default(),
            ),
            generation_api_key: secret_var("GENERATION_API_KEY").or_else(|| secret_var("GROQ_API_KEY")),
            access_token: secret_var("ACCESS_TOKEN"),
            generation_api_base: env::var("GENERATION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GENERATION_API_BASE.to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENERATION_MODEL.to_string()),
            generation_timeout_secs: timeout_setting(env::var("GENERATION_TIMEOUT_SECS").ok()),
            generation_max_retries: parse_setting(
                "GENERATION_MAX_RETRIES",
                env::var("GENERATION_MAX_RETRIES").ok(),
                0,
            ),
            generation_json_mode: parse_setting(
                "GENERATION_JSON_MODE",
                env::var("GENERATION_JSON_MODE").ok(),
                false,
            ),
            sanitizer_strategy: parse_setting(
                "SANITIZER_STRATEGY",
                env::var("SANITIZER_STRATEGY").ok(),
                SanitizerStrategy::default(),
            ),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the selected credential source cannot work
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.credential_source == CredentialSource::ServerHeld {
            if self.generation_api_key.is_none() {
                panic!(
                    "FATAL: CREDENTIAL_SOURCE=server but GENERATION_API_KEY is not set."
                );
            }

            match &self.access_token {
                None => panic!(
                    "FATAL: ACCESS_TOKEN is not set! A server-held key must not be usable by anonymous callers."
                ),
                Some(token) if token.expose_secret().len() < 32 => panic!(
                    "FATAL: ACCESS_TOKEN is too short ({}). Must be at least 32 characters.",
                    token.expose_secret().len()
                ),
                Some(_) => {}
            }
        }

        if self.generation_timeout_secs == 0 {
            panic!("FATAL: GENERATION_TIMEOUT_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            production: false,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            max_content_bytes: 64 * 1024,
            credential_source: CredentialSource::CallerSupplied,
            generation_api_key: None,
            access_token: None,
            generation_api_base: "http://localhost:9999/v1".to_string(),
            generation_model: "test-model".to_string(),
            generation_timeout_secs: 5,
            generation_max_retries: 0,
            generation_json_mode: false,
            sanitizer_strategy: SanitizerStrategy::Greedy,
        }
    }
}
