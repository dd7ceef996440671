//! Tree assembly: composes normalized records into the three output trees.
//!
//! Assembly is the last synchronous stage of the pipeline. It runs decode →
//! resolve over one collection item and filters out every absent sub-record
//! along the way; by the degrade-don't-fail contract of the earlier stages
//! it always succeeds. Sequence order is preserved end to end: insertion
//! order from the API is render order.
use serde_json::Value;

use crate::normalize;
use crate::resolve::resolve_component;
use crate::schema::{self, RawMenuGroup, RawMenuItem};
use crate::types::{Footer, FooterMenuGroup, MenuGroup, MenuItem, Navigation, Page};

/// Assembles a page tree from one `pageCollection` item.
pub(crate) fn page(item: &Value) -> Page {
    let raw = schema::decode_page(item);
    Page {
        id: raw.id,
        slug: raw.slug,
        page_name: raw.page_name,
        top_section: raw.top_section.iter().filter_map(resolve_component).collect(),
        page_content: raw.page_content.as_ref().and_then(resolve_component),
        extra_section: raw
            .extra_section
            .iter()
            .filter_map(resolve_component)
            .collect(),
    }
}

/// Assembles the navigation tree from one `navigationCollection` item.
pub(crate) fn navigation(item: &Value) -> Navigation {
    let raw = schema::decode_navigation(item);
    Navigation {
        id: raw.id,
        menu_groups: raw.groups.iter().filter_map(menu_group).collect(),
    }
}

/// Assembles the footer tree from one `footerCollection` item.
pub(crate) fn footer(item: &Value) -> Footer {
    let raw = schema::decode_footer(item);
    Footer {
        id: raw.id,
        logo_url: raw.logo.as_ref().and_then(schema::RawAsset::url),
        menu_groups: raw.groups.iter().filter_map(footer_menu_group).collect(),
        legal_links: raw.legal_links.iter().filter_map(menu_item).collect(),
        twitter_link: social_url(raw.twitter_link.as_ref()),
        facebook_link: social_url(raw.facebook_link.as_ref()),
        linkedin_link: social_url(raw.linkedin_link.as_ref()),
        instagram_link: social_url(raw.instagram_link.as_ref()),
        copyright_text: raw.copyright_text,
    }
}

/// Social links are URL-bearing fields and go through the same coercion
/// and syntactic check as asset URLs.
fn social_url(value: Option<&Value>) -> Option<String> {
    value.and_then(normalize::url_from_value)
}

fn menu_item(raw: &RawMenuItem) -> Option<MenuItem> {
    let Some(id) = raw.id.clone() else {
        tracing::debug!("dropping menu item without identity");
        return None;
    };
    Some(MenuItem {
        id,
        label: raw.label.clone(),
        path: raw.path.clone(),
        external_link: raw.external_link.clone(),
    })
}

fn menu_group(raw: &RawMenuGroup) -> Option<MenuGroup> {
    let Some(id) = raw.id.clone() else {
        tracing::debug!("dropping menu group without identity");
        return None;
    };
    Some(MenuGroup {
        id,
        group_name: raw.group_name.clone(),
        link: raw.link.as_ref().and_then(menu_item),
        menu_items: raw.items.iter().filter_map(menu_item).collect(),
    })
}

fn footer_menu_group(raw: &RawMenuGroup) -> Option<FooterMenuGroup> {
    let Some(id) = raw.id.clone() else {
        tracing::debug!("dropping footer menu group without identity");
        return None;
    };
    Some(FooterMenuGroup {
        id,
        group_name: raw.group_name.clone(),
        menu_items: raw.items.iter().filter_map(menu_item).collect(),
    })
}
