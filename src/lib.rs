//! Headless-CMS content-graph client.
//!
//! Given a content slug or menu identifier, this crate queries a
//! headless-CMS GraphQL API, decodes the loosely-typed polymorphic JSON it
//! answers with, and produces strongly-typed, render-ready trees:
//! [`Page`] → section [`Component`]s, [`Navigation`] → [`MenuGroup`]s →
//! [`MenuItem`]s, and [`Footer`] → groups and links.
//!
//! The pipeline runs in five stages, each a module:
//!
//! ```text
//! caller {query kind, slug/locale}
//!   │
//!   ▼
//! transport   POST one of three fixed GraphQL queries   (async, the only
//!   │         and apply the response-envelope policy     suspension point)
//!   ▼
//! schema      raw JSON → loosely-validated intermediate  (degrade, don't
//!   │         records, every field optional-decoded      fail)
//!   ▼
//! normalize   reconcile wire-name aliases; coerce
//!   │         defensively-typed scalars (URLs)
//!   ▼
//! resolve     __typename dispatch into the closed
//!   │         six-variant component union, or absent
//!   ▼
//! assemble    compose the Page / Navigation / Footer
//!             trees, order preserved
//! ```
//!
//! The three top-level assemblies are independent: a transport failure or
//! empty result in one never affects the other two. Content trees are
//! immutable values produced fresh per request; the crate caches nothing.
//!
//! # Example
//!
//! ```no_run
//! use contentgraph::{ClientConfig, ContentClient};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = ContentClient::new(config)?;
//!
//! let site = client.fetch_site("home", None).await;
//! if let Ok(Some(page)) = &site.page {
//!     println!("rendering {:?}", page.page_name);
//! }
//! # Ok(())
//! # }
//! ```

mod assemble;
mod client;
mod config;
mod error;
mod normalize;
mod queries;
mod resolve;
mod schema;
mod transport;
mod types;

pub mod richtext;

pub use client::{ContentClient, SiteContent};
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_LOCALE};
pub use error::ContentError;
pub use richtext::{RichTextDocument, extract_plain_text};
pub use transport::GraphqlTransport;
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use types::{
    Component, Footer, FooterMenuGroup, MenuGroup, MenuItem, MenuTarget, Navigation, Page,
};
