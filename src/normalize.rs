//! Field normalization: alias reconciliation and defensive scalar coercion.
//!
//! Two classes of schema variance are reconciled here:
//!
//! 1. **Aliasing**: the same logical field travels under different wire
//!    names depending on which parent type requested it (`subline` as rich
//!    text vs `sublineText` as a plain string, `body` vs `bodyText`,
//!    page-link `pageName`/`slug` vs menu-item `label`/`path`). Resolution
//!    always prefers the alias specific to the current variant and falls
//!    back to the generic name.
//! 2. **Type drift**: scalars nominally typed as string (URLs above all)
//!    arrive as whatever the content author last saved: string, integer,
//!    float, or boolean. Coercion tries those representations in order and
//!    stringifies the first hit; a coerced value must then pass a
//!    lightweight syntactic check before it is accepted as a usable URL.
//!
//! Everything here is a pure function `Option<raw> -> Option<canonical>`;
//! a value that fails every attempt is absent, never an error.
use serde_json::Value;

use crate::richtext::RichTextDocument;
use crate::schema::RawComponent;

/// Best-effort scalar-to-string coercion.
///
/// Ordered attempts: string as-is, then integer, then float, then boolean,
/// each stringified. Null, arrays, and objects yield `None`.
pub(crate) fn coerce_scalar(value: &Value) -> Option<String> {
    if let Some(text) = value.as_str() {
        return Some(text.to_owned());
    }
    if let Some(int) = value.as_i64() {
        return Some(int.to_string());
    }
    if let Some(float) = value.as_f64() {
        return Some(float.to_string());
    }
    if let Some(flag) = value.as_bool() {
        return Some(flag.to_string());
    }
    None
}

/// Syntactic acceptance check for a coerced URL candidate: non-empty after
/// trimming and beginning with `http`. Returns the trimmed string.
///
/// A coerced-but-invalid value (a stringified number or boolean, an empty
/// string) is treated as absent so a broken reference never reaches the
/// renderer.
pub(crate) fn valid_url(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || !trimmed.starts_with("http") {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Coerce a raw scalar and validate the result as a URL.
pub(crate) fn url_from_value(value: &Value) -> Option<String> {
    coerce_scalar(value).as_deref().and_then(valid_url)
}

/// First of `names` present on `obj` as a JSON string, in preference order.
pub(crate) fn first_string(obj: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| obj.get(*name).and_then(Value::as_str))
        .map(str::to_owned)
}

/// Drops empty strings so extraction results behave like absent fields.
fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Subline for variants whose schema types it as a plain string
/// (TextBlock, InfoBlock, HeroBanner): prefer the string alias, fall back
/// to extracting the rich-text form.
pub(crate) fn plain_subline(raw: &RawComponent) -> Option<String> {
    raw.subline_text.clone().or_else(|| {
        raw.subline_rich
            .as_ref()
            .map(RichTextDocument::plain_text)
            .and_then(non_empty)
    })
}

/// Subline for the Cta variant, whose schema types it as rich text: prefer
/// the rich-text alias (extracted to plain text), fall back to the string
/// alias.
pub(crate) fn rich_subline(raw: &RawComponent) -> Option<String> {
    raw.subline_rich
        .as_ref()
        .map(RichTextDocument::plain_text)
        .and_then(non_empty)
        .or_else(|| raw.subline_text.clone())
}

/// Body for TextBlock: its schema names the field `body`; fall back to the
/// generic `bodyText`.
pub(crate) fn text_block_body(raw: &RawComponent) -> Option<RichTextDocument> {
    raw.body.clone().or_else(|| raw.body_text.clone())
}

/// Body for HeroBanner/Duplex: their schema names the field `bodyText`;
/// fall back to `body`.
pub(crate) fn generic_body(raw: &RawComponent) -> Option<RichTextDocument> {
    raw.body_text.clone().or_else(|| raw.body.clone())
}
