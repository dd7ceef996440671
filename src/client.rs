//! The content client: issues the three fixed queries and runs each
//! response through the decode → normalize → resolve → assemble pipeline.
//!
//! Each fetch method is one independent asynchronous operation with a
//! single suspension point (the transport call). The three top-level
//! assemblies share no mutable state and may be issued concurrently by the
//! caller; [`fetch_site`](ContentClient::fetch_site) resolves them
//! independently so a failure in one never affects the other two.
use std::sync::Arc;

use serde_json::Value;

use crate::assemble;
use crate::config::{ClientConfig, ConfigError};
use crate::error::ContentError;
use crate::queries;
use crate::schema::collection_items;
use crate::transport::{GraphqlTransport, unwrap_envelope};
use crate::types::{Footer, Navigation, Page};

/// Client for one content space.
///
/// Holds immutable configuration and a transport; every invocation produces
/// a fresh value tree and nothing is cached between calls. Cloning is cheap
/// (the transport is shared behind an `Arc`).
///
/// ```no_run
/// use contentgraph::{ClientConfig, ContentClient};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ContentClient::new(ClientConfig::new("my-space", "my-token"))?;
/// match client.fetch_page("home", None).await? {
///     Some(page) => println!("{} top-section components", page.top_section.len()),
///     None => println!("no content for slug"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ContentClient {
    config: ClientConfig,
    transport: Arc<dyn GraphqlTransport>,
}

impl ContentClient {
    /// Creates a client with the built-in HTTP transport.
    #[cfg(feature = "http")]
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport = Arc::new(crate::transport::HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Creates a client over a caller-supplied transport. This is the seam
    /// tests use to substitute fixture responses for the network.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn GraphqlTransport>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches and assembles the page for `slug`.
    ///
    /// This is the primary assembly: `Ok(None)` means the query succeeded
    /// but matched zero items: "no content for slug", a 404-equivalent
    /// outcome distinct from a transport error. `locale` falls back to the
    /// configured default when `None`.
    pub async fn fetch_page(
        &self,
        slug: &str,
        locale: Option<&str>,
    ) -> Result<Option<Page>, ContentError> {
        let locale = locale.unwrap_or(&self.config.default_locale);
        let item = self
            .first_item(
                queries::GET_PAGE,
                queries::page_variables(slug, locale),
                "pageCollection",
            )
            .await?;

        match item {
            Some(item) => Ok(Some(assemble::page(&item))),
            None => {
                tracing::debug!(slug, locale, "no page found for slug");
                Ok(None)
            }
        }
    }

    /// Fetches the page for the conventional `"home"` slug.
    pub async fn fetch_home_page(&self, locale: Option<&str>) -> Result<Option<Page>, ContentError> {
        self.fetch_page("home", locale).await
    }

    /// Fetches and assembles the site navigation.
    ///
    /// A secondary assembly: `Ok(None)` (zero items) and `Err` are both
    /// per-assembly outcomes that never affect a concurrent page or footer
    /// fetch.
    pub async fn fetch_navigation(
        &self,
        locale: Option<&str>,
    ) -> Result<Option<Navigation>, ContentError> {
        let locale = locale.unwrap_or(&self.config.default_locale);
        let item = self
            .first_item(
                queries::GET_NAVIGATION,
                queries::locale_variables(locale),
                "navigationCollection",
            )
            .await?;
        Ok(item.map(|item| assemble::navigation(&item)))
    }

    /// Fetches and assembles the site footer. A secondary assembly, same
    /// isolation contract as [`fetch_navigation`](Self::fetch_navigation).
    pub async fn fetch_footer(&self, locale: Option<&str>) -> Result<Option<Footer>, ContentError> {
        let locale = locale.unwrap_or(&self.config.default_locale);
        let item = self
            .first_item(
                queries::GET_FOOTER,
                queries::locale_variables(locale),
                "footerCollection",
            )
            .await?;
        Ok(item.map(|item| assemble::footer(&item)))
    }

    /// Fetches page, navigation, and footer, resolving each independently.
    ///
    /// Secondary-assembly failures are logged and carried in the result,
    /// never propagated into the other two. Callers wanting the three
    /// requests in flight at once can equally join the individual fetch
    /// methods; the assemblies have no ordering dependency.
    pub async fn fetch_site(&self, slug: &str, locale: Option<&str>) -> SiteContent {
        let page = self.fetch_page(slug, locale).await;

        let navigation = self.fetch_navigation(locale).await;
        if let Err(err) = &navigation {
            tracing::warn!(error = %err, "navigation assembly failed; continuing");
        }

        let footer = self.fetch_footer(locale).await;
        if let Err(err) = &footer {
            tracing::warn!(error = %err, "footer assembly failed; continuing");
        }

        SiteContent {
            page,
            navigation,
            footer,
        }
    }

    /// Executes a query, applies the envelope policy, and returns the first
    /// item of the named collection wrapper.
    async fn first_item(
        &self,
        query: &str,
        variables: Value,
        collection: &str,
    ) -> Result<Option<Value>, ContentError> {
        let envelope = self.transport.execute(query, variables).await?;
        let data = unwrap_envelope(envelope)?;
        Ok(collection_items(&data, collection).first().cloned())
    }
}

/// The three top-level assemblies of one site view, each resolved
/// independently per the partial-failure isolation contract.
#[derive(Debug, Clone)]
pub struct SiteContent {
    /// Primary assembly; `Ok(None)` is the not-found outcome.
    pub page: Result<Option<Page>, ContentError>,
    /// Secondary assembly; absent or failed without affecting the others.
    pub navigation: Result<Option<Navigation>, ContentError>,
    /// Secondary assembly; absent or failed without affecting the others.
    pub footer: Result<Option<Footer>, ContentError>,
}
