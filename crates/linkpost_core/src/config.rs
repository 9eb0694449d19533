//! Process-wide configuration.
//!
//! Configuration sources in order of precedence (later sources override earlier):
//! 1. Built-in defaults
//! 2. User config in the config directory (`~/.config/linkpost/linkpost.toml`)
//! 3. `./linkpost.toml` in the current directory
//! 4. Environment variables (`GEMINI_API_KEY`, `LINKEDIN_ACCESS_TOKEN`, `PORT`, ...)
//!
//! Blank environment values are ignored, so `PORT=` does not clobber the file value.

use config::{Config, File};
use derive_builder::Builder;
use derive_getters::Getters;
use linkpost_error::{ConfigError, ConfigErrorKind, LinkpostResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default LinkedIn REST endpoint.
pub const DEFAULT_LINKEDIN_BASE_URL: &str = "https://api.linkedin.com/v2";
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variables mapped onto configuration keys.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("GEMINI_API_KEY", "gemini.api_key"),
    ("GEMINI_MODEL", "gemini.model"),
    ("GEMINI_BASE_URL", "gemini.base_url"),
    ("LINKEDIN_ACCESS_TOKEN", "linkedin.access_token"),
    ("LINKEDIN_PERSON_URN", "linkedin.person_urn"),
    ("LINKEDIN_BASE_URL", "linkedin.base_url"),
    ("PORT", "server.port"),
    ("APP_ENV", "server.environment"),
    ("API_VERSION", "server.api_version"),
];

/// Deployment mode.
///
/// An explicitly configured development mode adds diagnostic detail to HTTP
/// error responses; see [`ServerSettings::diagnostics_enabled`].
///
/// # Examples
///
/// ```
/// use linkpost_core::AppEnvironment;
///
/// let env: AppEnvironment = "PROD".parse().unwrap();
/// assert_eq!(env, AppEnvironment::Production);
/// assert_eq!(env.to_string(), "production");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum AppEnvironment {
    /// Local development
    #[default]
    #[strum(to_string = "development", serialize = "dev")]
    Development,
    /// Deployed service
    #[strum(to_string = "production", serialize = "prod")]
    Production,
    /// Automated tests
    Test,
}

impl AppEnvironment {
    /// Whether this is development mode.
    pub fn is_development(&self) -> bool {
        matches!(self, AppEnvironment::Development)
    }
}

impl TryFrom<String> for AppEnvironment {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<AppEnvironment> for String {
    fn from(value: AppEnvironment) -> Self {
        value.to_string()
    }
}

/// Gemini provider settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct GeminiSettings {
    /// API key (`GEMINI_API_KEY`)
    #[builder(default)]
    api_key: Option<String>,
    /// Model name (`GEMINI_MODEL`)
    #[builder(default = "DEFAULT_GEMINI_MODEL.to_string()")]
    model: String,
    /// REST endpoint root
    #[builder(default = "DEFAULT_GEMINI_BASE_URL.to_string()")]
    base_url: String,
}

impl GeminiSettings {
    /// Creates a new settings builder.
    pub fn builder() -> GeminiSettingsBuilder {
        GeminiSettingsBuilder::default()
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// LinkedIn publish settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct LinkedInSettings {
    /// OAuth access token (`LINKEDIN_ACCESS_TOKEN`)
    #[builder(default)]
    access_token: Option<String>,
    /// Author URN, e.g. `urn:li:person:abc123` (`LINKEDIN_PERSON_URN`)
    #[builder(default)]
    person_urn: Option<String>,
    /// REST endpoint root
    #[builder(default = "DEFAULT_LINKEDIN_BASE_URL.to_string()")]
    base_url: String,
}

impl LinkedInSettings {
    /// Creates a new settings builder.
    pub fn builder() -> LinkedInSettingsBuilder {
        LinkedInSettingsBuilder::default()
    }

    /// Both credentials present and non-blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_core::LinkedInSettings;
    ///
    /// let settings = LinkedInSettings::builder()
    ///     .access_token(Some("token".to_string()))
    ///     .person_urn(Some("   ".to_string()))
    ///     .build()
    ///     .unwrap();
    /// assert!(!settings.is_configured());
    /// ```
    pub fn is_configured(&self) -> bool {
        present(&self.access_token) && present(&self.person_urn)
    }
}

impl Default for LinkedInSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            person_urn: None,
            base_url: DEFAULT_LINKEDIN_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for LinkedInSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedInSettings")
            .field("access_token", &redact(&self.access_token))
            .field("person_urn", &self.person_urn)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct ServerSettings {
    /// Listening port (`PORT`)
    #[builder(default = "DEFAULT_PORT")]
    port: u16,
    /// Deployment mode (`APP_ENV`); unset reads as development
    #[builder(default)]
    environment: Option<AppEnvironment>,
    /// Version reported by the API info route (`API_VERSION`)
    #[builder(default = "\"v1\".to_string()")]
    api_version: String,
}

impl ServerSettings {
    /// Creates a new settings builder.
    pub fn builder() -> ServerSettingsBuilder {
        ServerSettingsBuilder::default()
    }

    /// Configured mode, or development when `APP_ENV` is unset.
    pub fn effective_environment(&self) -> AppEnvironment {
        self.environment.unwrap_or_default()
    }

    /// Whether error responses carry diagnostics.
    ///
    /// Only an explicit development mode enables them.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_core::{AppEnvironment, ServerSettings};
    ///
    /// assert!(!ServerSettings::default().diagnostics_enabled());
    ///
    /// let explicit = ServerSettings::builder()
    ///     .environment(AppEnvironment::Development)
    ///     .build()
    ///     .unwrap();
    /// assert!(explicit.diagnostics_enabled());
    /// ```
    pub fn diagnostics_enabled(&self) -> bool {
        self.environment.is_some_and(|env| env.is_development())
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: None,
            api_version: "v1".to_string(),
        }
    }
}

/// Service credentials and runtime settings, loaded once at startup.
///
/// # Examples
///
/// ```
/// use linkpost_core::{LinkedInSettings, LinkpostConfig};
///
/// let config = LinkpostConfig::builder()
///     .linkedin(
///         LinkedInSettings::builder()
///             .access_token(Some("token".to_string()))
///             .person_urn(Some("urn:li:person:1".to_string()))
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// assert!(config.linkedin_configured());
/// assert!(!config.gemini_configured());
/// assert_eq!(*config.server().port(), 3000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct LinkpostConfig {
    /// Content generation provider
    #[builder(default)]
    gemini: GeminiSettings,
    /// Publish provider
    #[builder(default)]
    linkedin: LinkedInSettings,
    /// HTTP surface
    #[builder(default)]
    server: ServerSettings,
}

impl LinkpostConfig {
    /// Creates a new config builder.
    pub fn builder() -> LinkpostConfigBuilder {
        LinkpostConfigBuilder::default()
    }

    /// Load configuration from files and the process environment.
    pub fn load() -> LinkpostResult<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    /// Load configuration with a custom environment lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_core::{AppEnvironment, LinkpostConfig};
    ///
    /// let config = LinkpostConfig::load_from(|name| match name {
    ///     "PORT" => Some("8080".to_string()),
    ///     "APP_ENV" => Some("production".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(*config.server().port(), 8080);
    /// assert_eq!(config.server().effective_environment(), AppEnvironment::Production);
    /// ```
    #[tracing::instrument(skip(lookup))]
    pub fn load_from<F>(lookup: F) -> LinkpostResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder();

        for path in config_files() {
            tracing::debug!(path = %path.display(), "Adding optional config file");
            builder = builder.add_source(File::from(path).required(false));
        }

        for (var, key) in ENV_OVERRIDES {
            let value = lookup(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value).map_err(|e| {
                ConfigError::new(ConfigErrorKind::Override {
                    variable: var.to_string(),
                    reason: e.to_string(),
                })
            })?;
        }

        let built = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Build(e.to_string())))?;

        Self::from_config(built)
    }

    /// Deserialize from an already-built [`Config`].
    pub fn from_config(config: Config) -> LinkpostResult<Self> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        tracing::debug!(
            gemini_configured = parsed.gemini_configured(),
            linkedin_configured = parsed.linkedin_configured(),
            port = parsed.server.port,
            environment = %parsed.server.effective_environment(),
            "Configuration loaded"
        );

        Ok(parsed)
    }

    /// Whether a Gemini API key is present.
    pub fn gemini_configured(&self) -> bool {
        present(&self.gemini.api_key)
    }

    /// Whether both LinkedIn credentials are present.
    pub fn linkedin_configured(&self) -> bool {
        self.linkedin.is_configured()
    }
}

fn config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join("linkpost").join("linkpost.toml"));
    }
    files.push(PathBuf::from("linkpost.toml"));
    files
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn redact(value: &Option<String>) -> &'static str {
    if present(value) { "<redacted>" } else { "<unset>" }
}
