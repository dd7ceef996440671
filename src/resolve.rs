//! Union resolution: discriminator dispatch from decoded component records
//! to typed variants.
//!
//! The mapping discriminator → variant is a fixed, closed six-entry table.
//! A record resolves if and only if it carries both a recognized
//! `__typename` and an identity; everything else is absent. Callers filter
//! absent results out of their sequences rather than inserting
//! placeholders. Each constructor pulls only the fields relevant to its
//! variant from the superset record and ignores the rest.
use crate::normalize;
use crate::schema::{RawAsset, RawComponent};
use crate::types::Component;

pub(crate) const HERO_BANNER: &str = "ComponentHeroBanner";
pub(crate) const CTA: &str = "ComponentCta";
pub(crate) const TEXT_BLOCK: &str = "ComponentTextBlock";
pub(crate) const INFO_BLOCK: &str = "ComponentInfoBlock";
pub(crate) const DUPLEX: &str = "ComponentDuplex";
pub(crate) const QUOTE: &str = "ComponentQuote";

fn asset_url(asset: Option<&RawAsset>) -> Option<String> {
    asset.and_then(RawAsset::url)
}

/// Resolves one decoded record into a typed component, or absent.
pub(crate) fn resolve_component(raw: &RawComponent) -> Option<Component> {
    let Some(typename) = raw.typename.as_deref() else {
        tracing::debug!("dropping component without discriminator");
        return None;
    };
    let Some(id) = raw.id.clone() else {
        tracing::debug!(typename, "dropping component without identity");
        return None;
    };

    match typename {
        HERO_BANNER => Some(Component::HeroBanner {
            id,
            headline: raw.headline.clone(),
            subline: normalize::plain_subline(raw),
            cta_text: raw.cta_text.clone(),
            image_url: asset_url(raw.image.as_ref()),
            color_palette: raw.color_palette.clone(),
        }),
        CTA => Some(Component::Cta {
            id,
            headline: raw.headline.clone(),
            subline: normalize::rich_subline(raw),
            cta_text: raw.cta_text.clone(),
            color_palette: raw.color_palette.clone(),
        }),
        TEXT_BLOCK => Some(Component::TextBlock {
            id,
            headline: raw.headline.clone(),
            subline: normalize::plain_subline(raw),
            body: normalize::text_block_body(raw),
            color_palette: raw.color_palette.clone(),
        }),
        INFO_BLOCK => Some(Component::InfoBlock {
            id,
            headline: raw.headline.clone(),
            subline: normalize::plain_subline(raw),
            block1_image_url: asset_url(raw.block1_image.as_ref()),
            block1_body: raw.block1_body.clone(),
            block2_image_url: asset_url(raw.block2_image.as_ref()),
            block2_body: raw.block2_body.clone(),
            block3_image_url: asset_url(raw.block3_image.as_ref()),
            block3_body: raw.block3_body.clone(),
            color_palette: raw.color_palette.clone(),
        }),
        DUPLEX => Some(Component::Duplex {
            id,
            headline: raw.headline.clone(),
            body: normalize::generic_body(raw),
            image_url: asset_url(raw.image.as_ref()),
            image_style: raw.image_style,
            container_layout: raw.container_layout,
            color_palette: raw.color_palette.clone(),
        }),
        QUOTE => Some(Component::Quote {
            id,
            quote: raw.quote.clone(),
            author_name: raw.author_name.clone(),
            author_title: raw.author_title.clone(),
            author_image_url: asset_url(raw.author_image.as_ref()),
            image_position: raw.image_position.clone(),
            color_palette: raw.color_palette.clone(),
        }),
        other => {
            tracing::debug!(typename = other, "dropping unrecognized component type");
            None
        }
    }
}
