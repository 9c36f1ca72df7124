//! Site identity and component settings.
//!
//! The configuration is read-only for the lifetime of the process. It is
//! built once (either the built-in default or a parsed TOML file) and passed
//! around by reference.

use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Relay endpoint the contact form posts to.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/mdallzjl";

/// Delay before a `Sent`/`Error` status falls back to `Idle`.
pub const DEFAULT_REVERT_DELAY_MS: u64 = 2500;

/// Root margin applied to the viewport before intersection testing.
pub const DEFAULT_ROOT_MARGIN_PX: i32 = -100;

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: String,
    /// GitHub profile URL.
    #[serde(default)]
    pub github: String,
}

/// Identity fields shown across the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    /// Display name.
    pub name: String,
    /// Short initials used as the nav logo.
    pub initials: String,
    /// Optional location line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// One-sentence headline for the hero.
    pub headline: String,
    /// Social links.
    #[serde(default)]
    pub social: SocialLinks,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Mark Bychin".to_string(),
            initials: "MB".to_string(),
            location: Some("Tampa, FL".to_string()),
            email: "bychinmark@gmail.com".to_string(),
            phone: "3313151702".to_string(),
            headline: "Full-Stack Software Engineer with 5 years of experience building scalable apps with .NET Core, React, Vue.js & Azure.".to_string(),
            social: SocialLinks {
                linkedin: "https://www.linkedin.com/in/mark-bychin".to_string(),
                github: "https://github.com/markbychin".to_string(),
            },
        }
    }
}

impl SiteIdentity {
    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the phone number, if one is set.
    pub fn tel(&self) -> Option<String> {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("tel:{}", digits))
        }
    }
}

/// Settings for the contact form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Endpoint that accepts the JSON form POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Milliseconds before `Sent`/`Error` reverts to `Idle`.
    #[serde(default = "default_revert_delay_ms")]
    pub revert_delay_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_string()
}

fn default_revert_delay_ms() -> u64 {
    DEFAULT_REVERT_DELAY_MS
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            revert_delay_ms: default_revert_delay_ms(),
        }
    }
}

impl RelayConfig {
    /// Create a relay configuration for an endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the revert delay.
    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Revert delay as a `Duration`.
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }
}

/// Settings for section reveal triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Signed pixel margin applied to each viewport edge.
    #[serde(default = "default_root_margin_px")]
    pub root_margin_px: i32,
}

fn default_root_margin_px() -> i32 {
    DEFAULT_ROOT_MARGIN_PX
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin_px: default_root_margin_px(),
        }
    }
}

impl RevealConfig {
    /// CSS form of the margin, as the browser observer expects it.
    pub fn css_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Full site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteIdentity,
    /// Contact relay settings.
    #[serde(default)]
    pub relay: RelayConfig,
    /// Reveal trigger settings.
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl SiteConfig {
    /// The built-in configuration, constructed on first use.
    pub fn builtin() -> &'static SiteConfig {
        static BUILTIN: OnceLock<SiteConfig> = OnceLock::new();
        BUILTIN.get_or_init(SiteConfig::default)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace the site identity.
    pub fn with_site(mut self, site: SiteIdentity) -> Self {
        self.site = site;
        self
    }

    /// Replace the relay settings.
    pub fn with_relay(mut self, relay: RelayConfig) -> Self {
        self.relay = relay;
        self
    }

    /// Replace the reveal settings.
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Invalid("site.name must not be empty".into()));
        }
        if !self.site.email.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "site.email is not an address: {:?}",
                self.site.email
            )));
        }
        let endpoint = self.relay.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "relay.endpoint must be an http(s) URL: {:?}",
                self.relay.endpoint
            )));
        }
        Ok(())
    }
}
