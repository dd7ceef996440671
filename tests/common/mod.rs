//! Shared test transport: serves canned envelopes instead of the network.
#![allow(dead_code)]

use async_trait::async_trait;
use contentgraph::{ClientConfig, ContentClient, ContentError, GraphqlTransport};
use serde_json::{Value, json};
use std::sync::Arc;

/// An in-memory transport routing each of the three fixed queries to a
/// canned result. Defaults to empty collections for all three.
pub struct FakeTransport {
    page: Result<Value, ContentError>,
    navigation: Result<Value, ContentError>,
    footer: Result<Value, ContentError>,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self {
            page: Ok(empty_envelope("pageCollection")),
            navigation: Ok(empty_envelope("navigationCollection")),
            footer: Ok(empty_envelope("footerCollection")),
        }
    }
}

impl FakeTransport {
    pub fn with_page(mut self, result: Result<Value, ContentError>) -> Self {
        self.page = result;
        self
    }

    pub fn with_navigation(mut self, result: Result<Value, ContentError>) -> Self {
        self.navigation = result;
        self
    }

    pub fn with_footer(mut self, result: Result<Value, ContentError>) -> Self {
        self.footer = result;
        self
    }

    pub fn into_client(self) -> ContentClient {
        ContentClient::with_transport(
            ClientConfig::new("test-space", "test-token"),
            Arc::new(self),
        )
        .expect("test config should validate")
    }
}

#[async_trait]
impl GraphqlTransport for FakeTransport {
    async fn execute(&self, query: &str, _variables: Value) -> Result<Value, ContentError> {
        if query.contains("pageCollection") {
            self.page.clone()
        } else if query.contains("navigationCollection") {
            self.navigation.clone()
        } else if query.contains("footerCollection") {
            self.footer.clone()
        } else {
            panic!("unexpected query: {query}");
        }
    }
}

/// `{ data: { <collection>: { items: <items> } } }`
pub fn envelope(collection: &str, items: Value) -> Value {
    json!({ "data": { collection: { "items": items } } })
}

pub fn empty_envelope(collection: &str) -> Value {
    envelope(collection, json!([]))
}

/// The canonical transport-failure fixture: HTTP 500.
pub fn http_500() -> ContentError {
    ContentError::Http {
        status: 500,
        body: "internal server error".into(),
    }
}

/// A populated one-group navigation envelope.
pub fn navigation_envelope() -> Value {
    envelope(
        "navigationCollection",
        json!([{
            "sys": { "id": "nav-1" },
            "menuItemsCollection": { "items": [
                {
                    "sys": { "id": "group-1" },
                    "groupName": "Company",
                    "groupLink": { "sys": { "id": "link-1" }, "pageName": "Company", "slug": "/company" },
                    "menuItemsCollection": { "items": [
                        { "sys": { "id": "item-1" }, "label": "Team", "path": "/team" },
                        { "sys": { "id": "item-2" }, "label": "Press", "externalLink": "https://press.example.com" },
                    ]},
                },
            ]},
        }]),
    )
}

/// A populated footer envelope with socials and legal links.
pub fn footer_envelope() -> Value {
    envelope(
        "footerCollection",
        json!([{
            "sys": { "id": "footer-1" },
            "logo": { "url": "https://cdn.example.com/logo.svg" },
            "menuItemsCollection": { "items": [
                {
                    "sys": { "id": "fgroup-1" },
                    "groupName": "Resources",
                    "featuredPagesCollection": { "items": [
                        { "sys": { "id": "fitem-1" }, "pageName": "Blog", "slug": "/blog" },
                    ]},
                },
            ]},
            "legalLinks": { "featuredPagesCollection": { "items": [
                { "sys": { "id": "legal-1" }, "pageName": "Imprint", "slug": "/imprint" },
            ]}},
            "twitterLink": "https://twitter.com/example",
            "facebookLink": 12345,
            "copyrightText": "© Example Corp",
        }]),
    )
}
