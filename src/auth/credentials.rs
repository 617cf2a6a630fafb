use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Shortest caller-supplied key we will forward upstream.
const MIN_CALLER_KEY_LEN: usize = 16;

/// Where the generation service key comes from for a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialSource {
    /// The server's own key; callers authenticate with `ACCESS_TOKEN` if one is set.
    #[default]
    ServerHeld,
    /// The caller's bearer token is the generation service key.
    CallerSupplied,
}

impl FromStr for CredentialSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" | "server_held" => Ok(CredentialSource::ServerHeld),
            "caller" | "caller_supplied" => Ok(CredentialSource::CallerSupplied),
            other => Err(format!("unknown credential source '{}'", other)),
        }
    }
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::ServerHeld => write!(f, "server_held"),
            CredentialSource::CallerSupplied => write!(f, "caller_supplied"),
        }
    }
}

/// Short, log-safe identifier for a secret.
pub fn fingerprint(secret: &SecretString) -> String {
    let digest = Sha256::digest(secret.expose_secret().as_bytes());
    digest[..4].iter().map(|b| format!("{:02x}", b)).collect()
}

fn digests_match(presented: &str, expected: &SecretString) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.expose_secret().as_bytes())
}

pub struct CredentialResolver {
    source: CredentialSource,
    server_key: Option<SecretString>,
    access_token: Option<SecretString>,
}

impl CredentialResolver {
    pub fn new(
        source: CredentialSource,
        server_key: Option<SecretString>,
        access_token: Option<SecretString>,
    ) -> Self {
        Self {
            source,
            server_key,
            access_token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.credential_source,
            config.generation_api_key.clone(),
            config.access_token.clone(),
        )
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Resolves the key to send upstream from the caller's bearer token.
    pub fn resolve(&self, bearer: Option<&str>) -> AppResult<SecretString> {
        match self.source {
            CredentialSource::ServerHeld => self.resolve_server_held(bearer),
            CredentialSource::CallerSupplied => Self::resolve_caller_supplied(bearer),
        }
    }

    fn resolve_server_held(&self, bearer: Option<&str>) -> AppResult<SecretString> {
        if let Some(expected) = &self.access_token {
            let presented = bearer
                .ok_or_else(|| AppError::Unauthorized("Missing access token".to_string()))?;

            if !digests_match(presented, expected) {
                return Err(AppError::Unauthorized("Invalid access token".to_string()));
            }
        }

        self.server_key.clone().ok_or_else(|| {
            AppError::InternalError("Generation service key is not configured".to_string())
        })
    }

    fn resolve_caller_supplied(bearer: Option<&str>) -> AppResult<SecretString> {
        let key = bearer
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::Unauthorized("Missing generation service credential".to_string())
            })?;

        if key.len() < MIN_CALLER_KEY_LEN || key.chars().any(char::is_whitespace) {
            return Err(AppError::Unauthorized(
                "Invalid generation service credential".to_string(),
            ));
        }

        Ok(SecretString::from(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn parses_source_names() {
        assert_eq!("server".parse::<CredentialSource>(), Ok(CredentialSource::ServerHeld));
        assert_eq!(
            "Caller_Supplied".parse::<CredentialSource>(),
            Ok(CredentialSource::CallerSupplied)
        );
        assert!("both".parse::<CredentialSource>().is_err());
    }

    #[test]
    fn caller_supplied_requires_a_bearer() {
        let resolver = CredentialResolver::new(CredentialSource::CallerSupplied, None, None);
        assert!(matches!(resolver.resolve(None), Err(AppError::Unauthorized(_))));
        assert!(matches!(resolver.resolve(Some("   ")), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn caller_supplied_rejects_malformed_keys() {
        let resolver = CredentialResolver::new(CredentialSource::CallerSupplied, None, None);
        assert!(matches!(resolver.resolve(Some("short")), Err(AppError::Unauthorized(_))));
        assert!(matches!(
            resolver.resolve(Some("gsk_has some whitespace")),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn caller_supplied_forwards_the_bearer() {
        let resolver = CredentialResolver::new(
            CredentialSource::CallerSupplied,
            Some(secret("server-key-ignored-here")),
            None,
        );
        let key = resolver.resolve(Some("gsk_caller_key_0123456789")).unwrap();
        assert_eq!(key.expose_secret(), "gsk_caller_key_0123456789");
    }

    #[test]
    fn server_held_without_access_token_is_open() {
        let resolver =
            CredentialResolver::new(CredentialSource::ServerHeld, Some(secret("gsk_server")), None);
        let key = resolver.resolve(None).unwrap();
        assert_eq!(key.expose_secret(), "gsk_server");
    }

    #[test]
    fn server_held_checks_access_token() {
        let resolver = CredentialResolver::new(
            CredentialSource::ServerHeld,
            Some(secret("gsk_server")),
            Some(secret("let-me-in")),
        );

        assert!(matches!(resolver.resolve(None), Err(AppError::Unauthorized(_))));
        assert!(matches!(resolver.resolve(Some("wrong")), Err(AppError::Unauthorized(_))));
        assert_eq!(
            resolver.resolve(Some("let-me-in")).unwrap().expose_secret(),
            "gsk_server"
        );
    }

    #[test]
    fn server_held_without_key_is_an_internal_error() {
        let resolver = CredentialResolver::new(CredentialSource::ServerHeld, None, None);
        assert!(matches!(resolver.resolve(None), Err(AppError::InternalError(_))));
    }

    #[test]
    fn fingerprint_is_short_and_stable() {
        let a = fingerprint(&secret("gsk_caller_key_0123456789"));
        let b = fingerprint(&secret("gsk_caller_key_0123456789"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert!(!a.contains("gsk"));
    }
}
