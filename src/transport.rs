//! GraphQL transport: one parameterized POST per assembly.
//!
//! The transport is the only suspension point in the pipeline and the only
//! seam that touches the network. It is modeled as a trait so tests and
//! alternative HTTP stacks can substitute an in-memory implementation; the
//! built-in [`HttpTransport`] (feature `http`) wraps a pooled reqwest
//! client.
//!
//! A transport returns the raw response envelope. Envelope *policy*, how
//! `data` and `errors` are reconciled, lives in [`unwrap_envelope`] and is
//! applied by the client, once, for every transport implementation.
use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ContentError, is_schema_mismatch_message};

/// Executes one GraphQL POST and returns the raw JSON envelope.
///
/// Implementations are stateless from the pipeline's point of view: no
/// retries (the caller owns retry/backoff policy), no caching, no shared
/// mutable state between calls.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// POSTs `{ "query": ..., "variables": ... }` and returns the response
    /// body as JSON.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, ContentError>;
}

/// Applies the response-envelope policy to a raw transport result.
///
/// - `data` present and an object, `errors` empty → the data.
/// - `data` present, `errors` non-empty → soft condition: log and continue
///   with whatever decoded.
/// - no usable `data`, errors naming unknown fields/types → a misconfigured
///   space: [`ContentError::SchemaMismatch`].
/// - no usable `data` otherwise → [`ContentError::MalformedEnvelope`], a
///   transport-layer failure for this one assembly.
pub(crate) fn unwrap_envelope(envelope: Value) -> Result<Value, ContentError> {
    let Value::Object(mut map) = envelope else {
        return Err(ContentError::MalformedEnvelope(
            "response is not a JSON object".into(),
        ));
    };

    let messages: Vec<String> = map
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error.get("message").and_then(Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    match map.remove("data") {
        Some(data) if data.is_object() => {
            if !messages.is_empty() {
                tracing::warn!(
                    errors = messages.join("; "),
                    "graphql reported errors alongside data; continuing with partial content"
                );
            }
            Ok(data)
        }
        _ => {
            let joined = messages.join("; ");
            if messages.is_empty() {
                Err(ContentError::MalformedEnvelope(
                    "response contained neither data nor errors".into(),
                ))
            } else if messages.iter().any(|message| is_schema_mismatch_message(message)) {
                Err(ContentError::SchemaMismatch(joined))
            } else {
                Err(ContentError::MalformedEnvelope(format!("no usable data: {joined}")))
            }
        }
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::GraphqlTransport;
    use crate::config::{ClientConfig, ConfigError};
    use crate::error::ContentError;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    /// Sent so the CMS can attribute traffic; mirrors the package identity.
    const USER_AGENT: &str = concat!("contentgraph/", env!("CARGO_PKG_VERSION"));

    /// The built-in transport: a pooled reqwest client POSTing to the
    /// configured endpoint with bearer authentication.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
        endpoint: String,
        bearer_token: String,
    }

    impl HttpTransport {
        /// Builds a transport for the given configuration. Construction
        /// failures are configuration-time errors; request-time failures
        /// surface per call as [`ContentError`].
        pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
            let client = reqwest::Client::builder()
                .timeout(config.timeout())
                .connect_timeout(config.connect_timeout())
                .user_agent(USER_AGENT)
                .build()
                .map_err(|err| ConfigError::HttpClient(err.to_string()))?;

            Ok(Self {
                client,
                endpoint: config.endpoint(),
                bearer_token: config.bearer_token().to_owned(),
            })
        }
    }

    #[async_trait]
    impl GraphqlTransport for HttpTransport {
        async fn execute(&self, query: &str, variables: Value) -> Result<Value, ContentError> {
            let response = self
                .client
                .post(&self.endpoint)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", self.bearer_token))
                .json(&json!({ "query": query, "variables": variables }))
                .send()
                .await
                .map_err(|err| ContentError::Transport(format!("request failed: {err}")))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ContentError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|err| ContentError::Transport(format!("invalid JSON response: {err}")))
        }
    }
}
