//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VTEX_ACCOUNT` - VTEX account name (store id)
//! - `VTEX_APP_KEY` - VTEX application key
//! - `VTEX_APP_TOKEN` - VTEX application token (HIGH PRIVILEGE: can cancel orders)
//!
//! ## Optional
//! - `VTEX_ENVIRONMENT` - VTEX environment host segment (default: vtexcommercestable)
//! - `VTEX_BASE_URL` - Full API base URL, overrides account/environment
//! - `VTEX_TIMEOUT_SECS` - HTTP timeout per request (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)

use std::collections::HashMap;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_ENVIRONMENT: &str = "vtexcommercestable";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// VTEX OMS access
    pub vtex: VtexConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
}

/// VTEX Order Management API configuration.
///
/// Implements `Debug` manually to redact the app token.
#[derive(Clone)]
pub struct VtexConfig {
    /// Account name (e.g., `mystore`)
    pub account: String,
    /// API base URL, always ending in `/`
    pub base_url: Url,
    /// Application key, sent as `X-VTEX-API-AppKey`
    pub app_key: String,
    /// Application token, sent as `X-VTEX-API-AppToken`
    pub app_token: SecretString,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for VtexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VtexConfig")
            .field("account", &self.account)
            .field("base_url", &self.base_url.as_str())
            .field("app_key", &self.app_key)
            .field("app_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the app token looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::from_vars(&vars)
    }

    /// Load configuration from an explicit variable map.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let env = Env(vars);
        Ok(Self {
            vtex: VtexConfig::load(&env)?,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env
                .optional("SENTRY_SAMPLE_RATE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
        })
    }
}

impl VtexConfig {
    fn load(env: &Env<'_>) -> Result<Self, ConfigError> {
        let account = env.required("VTEX_ACCOUNT")?;
        let base_url = match env.optional("VTEX_BASE_URL") {
            Some(raw) => parse_base_url(&raw, "VTEX_BASE_URL")?,
            None => {
                let environment = env.or_default("VTEX_ENVIRONMENT", DEFAULT_ENVIRONMENT);
                parse_base_url(
                    &format!("https://{account}.{environment}.com.br/"),
                    "VTEX_ACCOUNT",
                )?
            }
        };
        let timeout_secs = env
            .or_default("VTEX_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("VTEX_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        let app_token = env.required("VTEX_APP_TOKEN")?;
        validate_secret_strength(&app_token, "VTEX_APP_TOKEN")?;

        Ok(Self {
            account,
            base_url,
            app_key: env.required("VTEX_APP_KEY")?,
            app_token: SecretString::from(app_token),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Variable lookup over a snapshot of the environment.
struct Env<'a>(&'a HashMap<String, String>);

impl Env<'_> {
    /// Get a required variable; empty values count as missing.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn optional(&self, key: &str) -> Option<String> {
        self.0.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

/// Parse an HTTP(S) base URL and make sure it ends with `/`.
fn parse_base_url(raw: &str, var_name: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected an http(s) URL, got {raw}"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // VTEX app tokens are long random strings
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
