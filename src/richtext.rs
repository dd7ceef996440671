//! Rich-text documents and plain-text extraction.
//!
//! The CMS delivers long-form copy as a nested JSON document of typed nodes
//! (`{"nodeType": "document", "content": [...]}`). The core does not render
//! it; [`RichTextDocument`] passes the tree through untouched so the
//! rendering layer can walk it, and [`extract_plain_text`] derives the one
//! artifact the core itself needs: the concatenated leaf text, used when a
//! component exposes rich text through a plain-string field.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque rich-text document, exactly as received from the API.
///
/// The wrapper is `#[serde(transparent)]`: it serializes back to the same
/// JSON it was decoded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichTextDocument(Value);

impl RichTextDocument {
    /// Wraps a raw rich-text tree.
    pub fn new(json: Value) -> Self {
        Self(json)
    }

    /// The underlying JSON tree, as received.
    pub fn json(&self) -> &Value {
        &self.0
    }

    /// All leaf text of the document, concatenated in document order.
    ///
    /// ```rust
    /// use contentgraph::RichTextDocument;
    /// use serde_json::json;
    ///
    /// let doc = RichTextDocument::new(json!({
    ///     "nodeType": "document",
    ///     "content": [
    ///         { "nodeType": "paragraph", "content": [
    ///             { "nodeType": "text", "value": "Hello " },
    ///             { "nodeType": "text", "value": "world" },
    ///         ]},
    ///     ],
    /// }));
    /// assert_eq!(doc.plain_text(), "Hello world");
    /// ```
    pub fn plain_text(&self) -> String {
        extract_plain_text(&self.0)
    }
}

/// Recursively concatenates the `value` of every `text` node, in document
/// order.
///
/// Containers without a `text` node-type recurse into their `content`
/// array; a bare string contributes itself; any other node shape (numbers,
/// booleans, null, objects without usable keys) contributes the empty
/// string. The function is pure and total: malformed trees degrade to
/// `""`, they never panic.
pub fn extract_plain_text(node: &Value) -> String {
    match node {
        Value::Object(map) => {
            if map.get("nodeType").and_then(Value::as_str) == Some("text") {
                map.get("value")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned()
            } else {
                map.get("content").map(extract_plain_text).unwrap_or_default()
            }
        }
        Value::Array(children) => children.iter().map(extract_plain_text).collect(),
        Value::String(text) => text.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extraction_is_order_preserving_across_nesting() {
        let doc = json!({
            "nodeType": "doc",
            "content": [
                { "nodeType": "text", "value": "A" },
                { "nodeType": "paragraph", "content": [
                    { "nodeType": "text", "value": "B" },
                ]},
            ],
        });
        assert_eq!(extract_plain_text(&doc), "AB");
    }

    #[test]
    fn deep_nesting_concatenates_in_document_order() {
        let doc = json!({
            "nodeType": "document",
            "content": [
                { "nodeType": "heading-1", "content": [
                    { "nodeType": "text", "value": "Title" },
                ]},
                { "nodeType": "paragraph", "content": [
                    { "nodeType": "text", "value": " and " },
                    { "nodeType": "hyperlink", "content": [
                        { "nodeType": "text", "value": "a link" },
                    ]},
                ]},
            ],
        });
        assert_eq!(extract_plain_text(&doc), "Title and a link");
    }

    #[test]
    fn text_node_without_value_contributes_nothing() {
        let doc = json!({ "nodeType": "text" });
        assert_eq!(extract_plain_text(&doc), "");
    }

    #[test]
    fn unknown_and_scalar_nodes_contribute_empty_string() {
        assert_eq!(extract_plain_text(&json!(null)), "");
        assert_eq!(extract_plain_text(&json!(42)), "");
        assert_eq!(extract_plain_text(&json!(true)), "");
        assert_eq!(extract_plain_text(&json!({ "unrelated": "keys" })), "");
    }

    #[test]
    fn text_node_with_non_string_value_is_empty() {
        let doc = json!({ "nodeType": "text", "value": 7 });
        assert_eq!(extract_plain_text(&doc), "");
    }

    #[test]
    fn content_of_wrong_shape_degrades() {
        // `content` should be an array; a number inside it is skipped.
        let doc = json!({
            "nodeType": "paragraph",
            "content": [
                { "nodeType": "text", "value": "ok" },
                12,
                { "nodeType": "text", "value": "!" },
            ],
        });
        assert_eq!(extract_plain_text(&doc), "ok!");
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = json!({
            "nodeType": "document",
            "content": [{ "nodeType": "text", "value": "same" }],
        });
        let once = extract_plain_text(&doc);
        let twice = extract_plain_text(&doc);
        assert_eq!(once, twice);
    }

    #[test]
    fn document_round_trips_through_serde() {
        let raw = json!({ "nodeType": "document", "content": [] });
        let doc = RichTextDocument::new(raw.clone());
        let encoded = serde_json::to_value(&doc).expect("encode");
        assert_eq!(encoded, raw);
    }
}
