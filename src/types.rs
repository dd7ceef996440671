//! Render-ready content trees produced by the client.
//!
//! These types are the downstream boundary: immutable value trees handed to
//! the rendering layer, produced fresh per request and never mutated after
//! assembly. They are designed to be:
//!
//! - **Serializable**: JSON in and out via serde
//! - **Cloneable**: cheap to pass between view layers
//! - **Comparable**: equality checks for testing
//!
//! # Type hierarchy
//!
//! ```text
//! Page
//! ├── id: String
//! ├── slug / page_name: Option<String>
//! ├── top_section: Vec<Component>      (ordered, render order)
//! ├── page_content: Option<Component>  (zero-or-one slot)
//! └── extra_section: Vec<Component>    (ordered, render order)
//!
//! Navigation
//! ├── id: String                       (may be empty)
//! └── menu_groups: Vec<MenuGroup>
//!     ├── link: Option<MenuItem>       (clickable group header)
//!     └── menu_items: Vec<MenuItem>    (children / submenu)
//!
//! Footer
//! ├── menu_groups: Vec<FooterMenuGroup> (flat item lists, no submenu)
//! ├── legal_links: Vec<MenuItem>
//! └── twitter/facebook/linkedin/instagram links, logo, copyright
//! ```
use serde::{Deserialize, Serialize};

use crate::richtext::RichTextDocument;

/// A single CMS page: its identity plus three ordered component slots.
///
/// Collection order is insertion order from the API and doubles as render
/// order. `page_content` holds at most one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Entry identity (`sys.id`).
    pub id: String,
    /// URL slug the page was looked up by.
    pub slug: Option<String>,
    /// Human-readable page title.
    pub page_name: Option<String>,
    /// Components rendered above the main content slot.
    pub top_section: Vec<Component>,
    /// The single main-content component, when one is linked.
    pub page_content: Option<Component>,
    /// Components rendered below the main content slot.
    pub extra_section: Vec<Component>,
}

/// A section component: a closed tagged union of the six renderable
/// content types.
///
/// A `Component` only exists when the wire record carried both a recognized
/// discriminator (`__typename`) and an identity (`sys.id`); anything else
/// is dropped during resolution rather than surfacing as a wrong-shaped
/// variant. Fields irrelevant to a variant are ignored even when present on
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Component {
    /// Full-width banner with headline, call-to-action, and hero image.
    HeroBanner {
        /// Entry identity (`sys.id`).
        id: String,
        /// Banner headline.
        headline: Option<String>,
        /// Secondary line under the headline.
        subline: Option<String>,
        /// Call-to-action button label.
        cta_text: Option<String>,
        /// Hero image URL, validated by the normalizer.
        image_url: Option<String>,
        /// Color-palette tag interpreted by the theme layer.
        color_palette: Option<String>,
    },

    /// Standalone call-to-action block.
    Cta {
        /// Entry identity (`sys.id`).
        id: String,
        /// Block headline.
        headline: Option<String>,
        /// Supporting copy; arrives as rich text and is exposed as its
        /// extracted plain text.
        subline: Option<String>,
        /// Call-to-action button label.
        cta_text: Option<String>,
        /// Color-palette tag.
        color_palette: Option<String>,
    },

    /// Long-form text section.
    TextBlock {
        /// Entry identity (`sys.id`).
        id: String,
        /// Section headline.
        headline: Option<String>,
        /// Secondary line under the headline.
        subline: Option<String>,
        /// Rich-text body, passed through for the renderer.
        body: Option<RichTextDocument>,
        /// Color-palette tag.
        color_palette: Option<String>,
    },

    /// One-to-three column info section, each column an image plus body.
    InfoBlock {
        /// Entry identity (`sys.id`).
        id: String,
        /// Section headline.
        headline: Option<String>,
        /// Secondary line under the headline.
        subline: Option<String>,
        /// First column image URL.
        block1_image_url: Option<String>,
        /// First column rich-text body.
        block1_body: Option<RichTextDocument>,
        /// Second column image URL.
        block2_image_url: Option<String>,
        /// Second column rich-text body.
        block2_body: Option<RichTextDocument>,
        /// Third column image URL.
        block3_image_url: Option<String>,
        /// Third column rich-text body.
        block3_body: Option<RichTextDocument>,
        /// Color-palette tag.
        color_palette: Option<String>,
    },

    /// Two-pane section pairing an image with body copy.
    Duplex {
        /// Entry identity (`sys.id`).
        id: String,
        /// Section headline.
        headline: Option<String>,
        /// Rich-text body.
        body: Option<RichTextDocument>,
        /// Image URL.
        image_url: Option<String>,
        /// Image style flag: `true` = fixed, `false` = full-bleed.
        image_style: Option<bool>,
        /// Layout order flag: `true` = image first, `false` = content first.
        container_layout: Option<bool>,
        /// Color-palette tag.
        color_palette: Option<String>,
    },

    /// Pull-quote with attribution.
    Quote {
        /// Entry identity (`sys.id`).
        id: String,
        /// The quoted rich text.
        quote: Option<RichTextDocument>,
        /// Attribution name.
        author_name: Option<String>,
        /// Attribution title or role.
        author_title: Option<String>,
        /// Attribution portrait URL.
        author_image_url: Option<String>,
        /// Which side the accompanying image sits on.
        image_position: Option<String>,
        /// Color-palette tag.
        color_palette: Option<String>,
    },
}

impl Component {
    /// Entry identity, present on every variant.
    pub fn id(&self) -> &str {
        match self {
            Component::HeroBanner { id, .. }
            | Component::Cta { id, .. }
            | Component::TextBlock { id, .. }
            | Component::InfoBlock { id, .. }
            | Component::Duplex { id, .. }
            | Component::Quote { id, .. } => id,
        }
    }

    /// Color-palette tag, present on every variant.
    pub fn color_palette(&self) -> Option<&str> {
        match self {
            Component::HeroBanner { color_palette, .. }
            | Component::Cta { color_palette, .. }
            | Component::TextBlock { color_palette, .. }
            | Component::InfoBlock { color_palette, .. }
            | Component::Duplex { color_palette, .. }
            | Component::Quote { color_palette, .. } => color_palette.as_deref(),
        }
    }
}

/// Site navigation: an ordered list of menu groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    /// Entry identity. May be empty; some schema variants do not expose
    /// one on the navigation wrapper.
    pub id: String,
    /// Menu groups in display order.
    pub menu_groups: Vec<MenuGroup>,
}

/// One navigation group: a header that may itself be a link, plus optional
/// children.
///
/// `link` and `menu_items` are independently optional and non-exclusive. A
/// group with neither renders as a non-interactive label, a valid terminal
/// state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    /// Entry identity (`sys.id`).
    pub id: String,
    /// Display name of the group header.
    pub group_name: Option<String>,
    /// When present, the group header itself navigates to this target.
    pub link: Option<MenuItem>,
    /// Children / submenu items in display order.
    pub menu_items: Vec<MenuItem>,
}

impl MenuGroup {
    /// True when the group has neither a header link nor children and
    /// renders as a plain label.
    pub fn is_label_only(&self) -> bool {
        self.link.is_none() && self.menu_items.is_empty()
    }
}

/// A single clickable menu entry.
///
/// The source schema does not enforce exclusivity between `path` and
/// `external_link`; both fields exist structurally. Use
/// [`target`](MenuItem::target) to apply the intended preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Entry identity (`sys.id`).
    pub id: String,
    /// Display label.
    pub label: Option<String>,
    /// Internal route path (e.g. `/about`).
    pub path: Option<String>,
    /// Absolute external URL.
    pub external_link: Option<String>,
}

impl MenuItem {
    /// The navigation target of this item, preferring the internal `path`
    /// when both fields are populated.
    ///
    /// ```rust
    /// use contentgraph::{MenuItem, MenuTarget};
    ///
    /// let item = MenuItem {
    ///     id: "i1".into(),
    ///     label: Some("About".into()),
    ///     path: Some("/about".into()),
    ///     external_link: Some("https://example.com".into()),
    /// };
    /// assert_eq!(item.target(), Some(MenuTarget::Internal("/about")));
    /// ```
    pub fn target(&self) -> Option<MenuTarget<'_>> {
        if let Some(path) = self.path.as_deref() {
            Some(MenuTarget::Internal(path))
        } else {
            self.external_link.as_deref().map(MenuTarget::External)
        }
    }
}

/// The resolved destination of a [`MenuItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget<'a> {
    /// An in-app route path.
    Internal(&'a str),
    /// An absolute external URL.
    External(&'a str),
}

/// Site footer: grouped links, legal links, social links, branding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    /// Entry identity (`sys.id`).
    pub id: String,
    /// Footer logo URL, validated by the normalizer.
    pub logo_url: Option<String>,
    /// Link groups in display order. Footer groups carry a flat item list,
    /// never a nested submenu.
    pub menu_groups: Vec<FooterMenuGroup>,
    /// Legal links (imprint, privacy, ...) in display order.
    pub legal_links: Vec<MenuItem>,
    /// Twitter profile URL.
    pub twitter_link: Option<String>,
    /// Facebook profile URL.
    pub facebook_link: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin_link: Option<String>,
    /// Instagram profile URL.
    pub instagram_link: Option<String>,
    /// Copyright line.
    pub copyright_text: Option<String>,
}

/// One footer link column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterMenuGroup {
    /// Entry identity (`sys.id`).
    pub id: String,
    /// Column header.
    pub group_name: Option<String>,
    /// Links in display order.
    pub menu_items: Vec<MenuItem>,
}
