//! The umbrella request-time error taxonomy.
//!
//! `ContentError` classifies the ways a single top-level assembly (page,
//! navigation, footer) can fail. The three assemblies are independent, so an
//! error here scopes to one of them and never the whole site fetch. Partial
//! decode is deliberately *not* an error: a mistyped or missing field is
//! absorbed at the point of occurrence, never surfaced here.

use thiserror::Error;

/// Everything that can go wrong fetching and decoding one assembly.
///
/// Modeled after the teacher's `crates/ingest/src/error.rs`: a small,
/// `#[non_exhaustive]` enum deriving `Error, Debug, Clone, PartialEq, Eq`
/// with classification helpers hung off the enum itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    /// Network-level failure: DNS, TLS, timeout, or response-body decode.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A non-2xx HTTP response from the GraphQL endpoint.
    #[error("http error {status}: {body}")]
    Http {
        /// The HTTP status code returned by the server.
        status: u16,
        /// The raw response body, retained for diagnostics.
        body: String,
    },

    /// The envelope carried no usable `data` and no recoverable content.
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(String),

    /// GraphQL errors naming unknown fields/types — a misconfigured space.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

impl ContentError {
    /// True for the hard transport-layer failures for this assembly:
    /// `Transport`, `Http`, and `MalformedEnvelope`.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            ContentError::Transport(_)
                | ContentError::Http { .. }
                | ContentError::MalformedEnvelope(_)
        )
    }

    /// True only for `SchemaMismatch` — a misconfigured space rather than a
    /// transient failure.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, ContentError::SchemaMismatch(_))
    }
}

/// Whether a single GraphQL error message indicates an unknown field or type,
/// i.e. a schema mismatch rather than a transient failure.
///
/// The markers `Cannot query field` and `Unknown type` are the ones the
/// upstream GraphQL API emits when the query names something the space's
/// schema does not define.
pub(crate) fn is_schema_mismatch_message(message: &str) -> bool {
    message.contains("Cannot query field") || message.contains("Unknown type")
}
