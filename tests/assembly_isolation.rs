mod common;

use common::{FakeTransport, envelope, footer_envelope, http_500, navigation_envelope};
use contentgraph::ContentError;
use serde_json::json;

fn page_envelope() -> serde_json::Value {
    envelope(
        "pageCollection",
        json!([{
            "sys": { "id": "page-1" },
            "slug": "home",
            "pageName": "Home",
            "topSectionCollection": { "items": [
                { "__typename": "ComponentHeroBanner", "sys": { "id": "hero-1" }, "headline": "Hi" },
            ]},
        }]),
    )
}

#[tokio::test]
async fn navigation_failure_leaves_page_and_footer_untouched() {
    let client = FakeTransport::default()
        .with_page(Ok(page_envelope()))
        .with_navigation(Err(http_500()))
        .with_footer(Ok(footer_envelope()))
        .into_client();

    let site = client.fetch_site("home", None).await;

    // The failing assembly reports its own error...
    assert!(matches!(
        site.navigation,
        Err(ContentError::Http { status: 500, .. })
    ));

    // ...and the other two are fully populated.
    let page = site.page.expect("page should succeed").expect("page found");
    assert_eq!(page.top_section.len(), 1);

    let footer = site
        .footer
        .expect("footer should succeed")
        .expect("footer found");
    assert_eq!(footer.menu_groups.len(), 1);
    assert_eq!(footer.legal_links.len(), 1);
    assert_eq!(
        footer.twitter_link.as_deref(),
        Some("https://twitter.com/example")
    );
    // The numeric facebook link was coerced then rejected.
    assert_eq!(footer.facebook_link, None);
}

#[tokio::test]
async fn primary_failure_does_not_poison_secondary_assemblies() {
    let client = FakeTransport::default()
        .with_page(Err(ContentError::Transport("connection reset".into())))
        .with_navigation(Ok(navigation_envelope()))
        .with_footer(Ok(footer_envelope()))
        .into_client();

    let site = client.fetch_site("home", None).await;

    assert!(matches!(site.page, Err(ContentError::Transport(_))));

    let nav = site
        .navigation
        .expect("navigation should succeed")
        .expect("navigation found");
    assert_eq!(nav.id, "nav-1");
    assert_eq!(nav.menu_groups.len(), 1);
    assert_eq!(nav.menu_groups[0].menu_items.len(), 2);

    assert!(site.footer.expect("footer should succeed").is_some());
}

#[tokio::test]
async fn secondary_zero_items_is_absent_not_an_error() {
    let client = FakeTransport::default()
        .with_page(Ok(page_envelope()))
        .into_client();

    let site = client.fetch_site("home", None).await;

    assert!(site.page.expect("page ok").is_some());
    assert!(matches!(site.navigation, Ok(None)));
    assert!(matches!(site.footer, Ok(None)));
}

#[tokio::test]
async fn assemblies_can_run_concurrently() {
    let client = FakeTransport::default()
        .with_page(Ok(page_envelope()))
        .with_navigation(Err(http_500()))
        .with_footer(Ok(footer_envelope()))
        .into_client();

    // No shared mutable state, no ordering dependency: the caller may put
    // all three requests in flight at once.
    let (page, navigation, footer) = tokio::join!(
        client.fetch_page("home", None),
        client.fetch_navigation(None),
        client.fetch_footer(None),
    );

    assert!(page.expect("page ok").is_some());
    assert!(navigation.is_err());
    assert!(footer.expect("footer ok").is_some());
}

#[tokio::test]
async fn navigation_group_link_and_children_are_both_exposed() {
    let client = FakeTransport::default()
        .with_navigation(Ok(navigation_envelope()))
        .into_client();

    let nav = client
        .fetch_navigation(Some("en-US"))
        .await
        .expect("navigation should succeed")
        .expect("navigation found");

    // Open question resolved: `link` and `menu_items` are independently
    // optional and non-exclusive; both render.
    let group = &nav.menu_groups[0];
    assert!(group.link.is_some());
    assert!(!group.menu_items.is_empty());
    assert_eq!(
        group.link.as_ref().and_then(|l| l.path.as_deref()),
        Some("/company")
    );
}
