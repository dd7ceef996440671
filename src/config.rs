//! Configuration for the content client.
//!
//! [`ClientConfig`] carries everything the transport needs (space,
//! environment, tokens, endpoint base) as plain data. There is no
//! process-wide singleton: construct a config, validate it at startup, and
//! hand it to [`ContentClient`](crate::ContentClient). The type is cheap to
//! clone and serializable from external configuration formats such as JSON,
//! TOML, or YAML.
//!
//! # Quick start
//!
//! ```rust
//! use contentgraph::ClientConfig;
//!
//! let config = ClientConfig::new("my-space", "my-delivery-token");
//! config.validate().expect("invalid configuration");
//! assert_eq!(
//!     config.endpoint(),
//!     "https://graphql.contentful.com/content/v1/spaces/my-space/environments/master"
//! );
//! ```
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default GraphQL endpoint base shared by every content space.
pub const DEFAULT_BASE_URL: &str = "https://graphql.contentful.com/content/v1/spaces";

/// Default content locale when the caller does not pass one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Runtime configuration for the content client.
///
/// Field defaults mirror what the upstream CMS expects: the `master`
/// environment, the public delivery endpoint, and an `en-US` locale. Only
/// `space_id` and `access_token` have no usable default and are checked by
/// [`validate`](ClientConfig::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Content space identifier, the `{spaceId}` segment of the endpoint.
    pub space_id: String,

    /// Environment name, the `{environmentName}` segment of the endpoint.
    ///
    /// Default: `"master"`
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Delivery API access token, sent as `Authorization: Bearer <token>`.
    pub access_token: String,

    /// Preview API access token. Only consulted when [`preview`] is set.
    ///
    /// [`preview`]: ClientConfig::preview
    #[serde(default)]
    pub preview_access_token: Option<String>,

    /// Request draft (preview) content instead of published content.
    ///
    /// When set, requests authenticate with `preview_access_token`;
    /// [`validate`](ClientConfig::validate) rejects the combination of
    /// `preview = true` and a missing preview token.
    ///
    /// Default: `false`
    #[serde(default)]
    pub preview: bool,

    /// Endpoint base URL up to (not including) the space segment.
    ///
    /// Default: [`DEFAULT_BASE_URL`]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Locale used when a fetch method is called without an explicit one.
    ///
    /// Default: [`DEFAULT_LOCALE`]
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Total request timeout in seconds.
    ///
    /// Default: `30`
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    ///
    /// Default: `10`
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            environment: default_environment(),
            access_token: String::new(),
            preview_access_token: None,
            preview: false,
            base_url: default_base_url(),
            default_locale: default_locale(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given space and delivery token with
    /// every other field at its default.
    pub fn new(space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from the environment variables the CMS tooling
    /// conventionally uses:
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `CONTENTFUL_SPACE_ID` | `space_id` |
    /// | `CONTENTFUL_ACCESS_TOKEN` (alias `CONTENTFUL_DELIVERY_ACCESS_TOKEN`) | `access_token` |
    /// | `ENVIRONMENT_NAME` (alias `CONTENTFUL_ENVIRONMENT`) | `environment` |
    /// | `CONTENTFUL_PREVIEW_ACCESS_TOKEN` | `preview_access_token` |
    ///
    /// Values are trimmed; empty values count as unset. The result is
    /// validated before being returned.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Environment loading against an arbitrary lookup, split out so the
    /// precedence rules are testable without touching process state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            space_id: get("CONTENTFUL_SPACE_ID").unwrap_or_default(),
            access_token: get("CONTENTFUL_ACCESS_TOKEN")
                .or_else(|| get("CONTENTFUL_DELIVERY_ACCESS_TOKEN"))
                .unwrap_or_default(),
            environment: get("ENVIRONMENT_NAME")
                .or_else(|| get("CONTENTFUL_ENVIRONMENT"))
                .unwrap_or_else(default_environment),
            preview_access_token: get("CONTENTFUL_PREVIEW_ACCESS_TOKEN"),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates internal consistency. Inexpensive; call at startup so a
    /// misconfiguration surfaces before the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.space_id.trim().is_empty() {
            return Err(ConfigError::MissingSpaceId);
        }
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        if self.preview
            && self
                .preview_access_token
                .as_deref()
                .is_none_or(|token| token.trim().is_empty())
        {
            return Err(ConfigError::MissingPreviewToken);
        }
        Ok(())
    }

    /// Full GraphQL endpoint: `{base_url}/{space_id}/environments/{environment}`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/environments/{}",
            self.base_url.trim_end_matches('/'),
            self.space_id,
            self.environment
        )
    }

    /// The bearer token for the active mode: preview token when `preview`
    /// is set, delivery token otherwise.
    pub(crate) fn bearer_token(&self) -> &str {
        if self.preview {
            self.preview_access_token
                .as_deref()
                .unwrap_or(&self.access_token)
        } else {
            &self.access_token
        }
    }

    /// Total request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Errors surfaced when validating a [`ClientConfig`] or constructing the
/// built-in transport. These are startup-time issues, not request-time ones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `space_id` is empty.
    #[error("space id is not configured")]
    MissingSpaceId,

    /// `access_token` is empty.
    #[error("access token is not configured")]
    MissingAccessToken,

    /// `preview` is set but no preview token was provided.
    #[error("preview mode requires a preview access token")]
    MissingPreviewToken,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

fn default_environment() -> String {
    "master".to_owned()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn endpoint_composition() {
        let config = ClientConfig::new("space123", "token");
        assert_eq!(
            config.endpoint(),
            "https://graphql.contentful.com/content/v1/spaces/space123/environments/master"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_in_base() {
        let config = ClientConfig {
            base_url: "https://example.test/spaces/".into(),
            ..ClientConfig::new("s", "t")
        };
        assert_eq!(
            config.endpoint(),
            "https://example.test/spaces/s/environments/master"
        );
    }

    #[test]
    fn validate_requires_space_and_token() {
        assert_eq!(
            ClientConfig::default().validate(),
            Err(ConfigError::MissingSpaceId)
        );
        assert_eq!(
            ClientConfig::new("space", "").validate(),
            Err(ConfigError::MissingAccessToken)
        );
        assert!(ClientConfig::new("space", "token").validate().is_ok());
    }

    #[test]
    fn validate_preview_requires_preview_token() {
        let mut config = ClientConfig::new("space", "token");
        config.preview = true;
        assert_eq!(config.validate(), Err(ConfigError::MissingPreviewToken));

        config.preview_access_token = Some("preview-token".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bearer_token_follows_preview_flag() {
        let mut config = ClientConfig::new("space", "delivery");
        config.preview_access_token = Some("preview".into());
        assert_eq!(config.bearer_token(), "delivery");

        config.preview = true;
        assert_eq!(config.bearer_token(), "preview");
    }

    #[test]
    fn from_lookup_reads_primary_and_alias_variables() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CONTENTFUL_SPACE_ID", " space-1 "),
            ("CONTENTFUL_DELIVERY_ACCESS_TOKEN", "alias-token"),
            ("CONTENTFUL_ENVIRONMENT", "staging"),
        ]);
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()))
            .expect("lookup config should validate");

        assert_eq!(config.space_id, "space-1");
        assert_eq!(config.access_token, "alias-token");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn from_lookup_prefers_primary_names() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CONTENTFUL_SPACE_ID", "space-1"),
            ("CONTENTFUL_ACCESS_TOKEN", "primary"),
            ("CONTENTFUL_DELIVERY_ACCESS_TOKEN", "alias"),
            ("ENVIRONMENT_NAME", "env-a"),
            ("CONTENTFUL_ENVIRONMENT", "env-b"),
        ]);
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()))
            .expect("lookup config should validate");

        assert_eq!(config.access_token, "primary");
        assert_eq!(config.environment, "env-a");
    }

    #[test]
    fn from_lookup_missing_required_values_fail_validation() {
        let result = ClientConfig::from_lookup(|_| None);
        assert_eq!(result, Err(ConfigError::MissingSpaceId));
    }
}
