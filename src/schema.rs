//! Loosely-validated intermediate records decoded from raw GraphQL JSON.
//!
//! CMS content is author-editable and routinely violates the nominal schema:
//! missing references, unpublished linked entries, locale gaps, fields of a
//! surprising type. The decoder's contract is therefore *maximum salvage*,
//! not validation. Every field is optional-decoded on its own, and a field
//! that fails to decode never aborts the enclosing object or its siblings.
//! Collections (`*Collection.items`) that are missing, of the wrong shape,
//! or individually undecodable degrade to an empty sequence.
//!
//! The records here are a superset union of every field any component type
//! can carry, since a single wire message holds fragments for several
//! possible concrete types. The union resolver picks the relevant subset
//! per discriminator.
use serde_json::Value;

use crate::normalize;
use crate::richtext::RichTextDocument;

/// Intermediate page record: identity plus the three component slots.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawPage {
    pub(crate) id: String,
    pub(crate) slug: Option<String>,
    pub(crate) page_name: Option<String>,
    pub(crate) top_section: Vec<RawComponent>,
    pub(crate) page_content: Option<RawComponent>,
    pub(crate) extra_section: Vec<RawComponent>,
}

/// Superset component record; one instance may carry fragments of several
/// concrete types.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawComponent {
    pub(crate) typename: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) headline: Option<String>,
    /// `subline` requested as rich text (the Cta alias).
    pub(crate) subline_rich: Option<RichTextDocument>,
    /// `sublineText` plain-string alias, with a scalar `subline` fallback.
    pub(crate) subline_text: Option<String>,
    pub(crate) cta_text: Option<String>,
    pub(crate) image: Option<RawAsset>,
    pub(crate) body: Option<RichTextDocument>,
    pub(crate) body_text: Option<RichTextDocument>,
    pub(crate) quote: Option<RichTextDocument>,
    pub(crate) image_style: Option<bool>,
    pub(crate) container_layout: Option<bool>,
    pub(crate) image_position: Option<String>,
    pub(crate) author_name: Option<String>,
    pub(crate) author_title: Option<String>,
    pub(crate) author_image: Option<RawAsset>,
    pub(crate) block1_image: Option<RawAsset>,
    pub(crate) block1_body: Option<RichTextDocument>,
    pub(crate) block2_image: Option<RawAsset>,
    pub(crate) block2_body: Option<RichTextDocument>,
    pub(crate) block3_image: Option<RawAsset>,
    pub(crate) block3_body: Option<RichTextDocument>,
    pub(crate) color_palette: Option<String>,
}

/// An asset reference whose `url` scalar is kept verbatim; coercion and
/// validation happen in the normalizer.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawAsset {
    pub(crate) raw_url: Option<Value>,
}

impl RawAsset {
    /// The usable URL, if the raw scalar coerces to a string that passes
    /// the syntactic check.
    pub(crate) fn url(&self) -> Option<String> {
        self.raw_url.as_ref().and_then(normalize::url_from_value)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RawMenuItem {
    pub(crate) id: Option<String>,
    pub(crate) label: Option<String>,
    pub(crate) path: Option<String>,
    pub(crate) external_link: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RawMenuGroup {
    pub(crate) id: Option<String>,
    pub(crate) group_name: Option<String>,
    pub(crate) link: Option<RawMenuItem>,
    pub(crate) items: Vec<RawMenuItem>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RawNavigation {
    pub(crate) id: String,
    pub(crate) groups: Vec<RawMenuGroup>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RawFooter {
    pub(crate) id: String,
    pub(crate) logo: Option<RawAsset>,
    pub(crate) groups: Vec<RawMenuGroup>,
    pub(crate) legal_links: Vec<RawMenuItem>,
    pub(crate) twitter_link: Option<Value>,
    pub(crate) facebook_link: Option<Value>,
    pub(crate) linkedin_link: Option<Value>,
    pub(crate) instagram_link: Option<Value>,
    pub(crate) copyright_text: Option<String>,
}

// ── Field helpers ───────────────────────────────────────────────────────

/// Strict string field: present and a JSON string, else absent.
pub(crate) fn string_field(obj: &Value, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Strict boolean field.
pub(crate) fn bool_field(obj: &Value, key: &str) -> Option<bool> {
    obj.get(key).and_then(Value::as_bool)
}

/// The `sys.id` entry identity.
pub(crate) fn sys_id(obj: &Value) -> Option<String> {
    obj.get("sys")
        .and_then(|sys| sys.get("id"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Items of a `{ key: { items: [...] } }` collection wrapper.
///
/// A missing wrapper, a wrapper of the wrong shape, or an `items` that is
/// not an array all degrade to the empty slice, never an error.
pub(crate) fn collection_items<'a>(obj: &'a Value, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(|collection| collection.get("items"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// A `{ key: { json: <tree> } }` rich-text field.
fn rich_text_field(obj: &Value, key: &str) -> Option<RichTextDocument> {
    obj.get(key)
        .and_then(|field| field.get("json"))
        .cloned()
        .map(RichTextDocument::new)
}

/// A `{ key: { url: <scalar> } }` asset reference, scalar kept verbatim.
fn asset_field(obj: &Value, key: &str) -> Option<RawAsset> {
    let asset = obj.get(key)?;
    if !asset.is_object() {
        return None;
    }
    Some(RawAsset {
        raw_url: asset.get("url").cloned(),
    })
}

// ── Record decoders ─────────────────────────────────────────────────────

pub(crate) fn decode_page(item: &Value) -> RawPage {
    RawPage {
        id: sys_id(item).unwrap_or_default(),
        slug: string_field(item, "slug"),
        page_name: string_field(item, "pageName"),
        top_section: collection_items(item, "topSectionCollection")
            .iter()
            .map(decode_component)
            .collect(),
        page_content: item
            .get("pageContent")
            .filter(|content| content.is_object())
            .map(decode_component),
        extra_section: collection_items(item, "extraSectionCollection")
            .iter()
            .map(decode_component)
            .collect(),
    }
}

pub(crate) fn decode_component(value: &Value) -> RawComponent {
    RawComponent {
        typename: string_field(value, "__typename"),
        id: sys_id(value),
        headline: string_field(value, "headline"),
        subline_rich: rich_text_field(value, "subline"),
        // The plain-string alias, falling back to a scalar `subline` in
        // case a query variant requested it un-aliased.
        subline_text: string_field(value, "sublineText")
            .or_else(|| string_field(value, "subline")),
        cta_text: string_field(value, "ctaText"),
        image: asset_field(value, "image"),
        body: rich_text_field(value, "body"),
        body_text: rich_text_field(value, "bodyText"),
        quote: rich_text_field(value, "quote"),
        image_style: bool_field(value, "imageStyle"),
        container_layout: bool_field(value, "containerLayout"),
        image_position: string_field(value, "imagePosition"),
        author_name: string_field(value, "authorName"),
        author_title: string_field(value, "authorTitle"),
        author_image: asset_field(value, "authorImage"),
        block1_image: asset_field(value, "block1Image"),
        block1_body: rich_text_field(value, "block1Body"),
        block2_image: asset_field(value, "block2Image"),
        block2_body: rich_text_field(value, "block2Body"),
        block3_image: asset_field(value, "block3Image"),
        block3_body: rich_text_field(value, "block3Body"),
        color_palette: string_field(value, "colorPalette"),
    }
}

/// Decodes either wire shape of a clickable entry: a menu item
/// (`label`/`path`/`externalLink`) or a page link (`pageName`/`slug`).
pub(crate) fn decode_menu_item(value: &Value) -> RawMenuItem {
    RawMenuItem {
        id: sys_id(value),
        label: normalize::first_string(value, &["label", "pageName"]),
        path: normalize::first_string(value, &["path", "slug"]),
        external_link: string_field(value, "externalLink"),
    }
}

pub(crate) fn decode_menu_group(value: &Value) -> RawMenuGroup {
    // Children arrive as `menuItemsCollection` in the submenu-shaped
    // schema and as `featuredPagesCollection` in the page-link-shaped one.
    let mut items: Vec<RawMenuItem> = collection_items(value, "menuItemsCollection")
        .iter()
        .map(decode_menu_item)
        .collect();
    if items.is_empty() {
        items = collection_items(value, "featuredPagesCollection")
            .iter()
            .map(decode_menu_item)
            .collect();
    }

    RawMenuGroup {
        id: sys_id(value),
        group_name: string_field(value, "groupName"),
        link: value
            .get("groupLink")
            .filter(|link| link.is_object())
            .map(decode_menu_item),
        items,
    }
}

pub(crate) fn decode_navigation(item: &Value) -> RawNavigation {
    RawNavigation {
        id: sys_id(item).unwrap_or_default(),
        groups: collection_items(item, "menuItemsCollection")
            .iter()
            .map(decode_menu_group)
            .collect(),
    }
}

pub(crate) fn decode_footer(item: &Value) -> RawFooter {
    RawFooter {
        id: sys_id(item).unwrap_or_default(),
        logo: asset_field(item, "logo"),
        groups: collection_items(item, "menuItemsCollection")
            .iter()
            .map(decode_menu_group)
            .collect(),
        legal_links: item
            .get("legalLinks")
            .map(|legal| {
                collection_items(legal, "featuredPagesCollection")
                    .iter()
                    .map(decode_menu_item)
                    .collect()
            })
            .unwrap_or_default(),
        twitter_link: item.get("twitterLink").cloned(),
        facebook_link: item.get("facebookLink").cloned(),
        linkedin_link: item.get("linkedinLink").cloned(),
        instagram_link: item.get("instagramLink").cloned(),
        copyright_text: string_field(item, "copyrightText"),
    }
}
