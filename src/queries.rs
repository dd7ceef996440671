//! The three fixed GraphQL query shapes issued by the client.
//!
//! Every component fragment is requested in all three page slots so a
//! record resolves the same way regardless of which slot linked it. Field
//! aliases (`sublineText: subline`, `subline: subline { json }`) pin the
//! wire name the decoder expects even where the underlying schema field is
//! shared between rich-text and plain-string component types.
use serde_json::{Value, json};

/// Page lookup by slug. Returns at most one item.
pub(crate) const GET_PAGE: &str = r#"
query GetPage($slug: String!, $locale: String!) {
  pageCollection(where: { slug: $slug }, locale: $locale, limit: 1) {
    items {
      sys { id }
      slug
      pageName
      topSectionCollection { items { ...ComponentFields } }
      pageContent { ...ComponentFields }
      extraSectionCollection { items { ...ComponentFields } }
    }
  }
}

fragment ComponentFields on Entry {
  __typename
  sys { id }
  ... on ComponentHeroBanner {
    headline
    sublineText: subline
    ctaText
    image { url }
    colorPalette
  }
  ... on ComponentCta {
    headline
    subline: subline { json }
    ctaText
    colorPalette
  }
  ... on ComponentTextBlock {
    headline
    sublineText: subline
    body { json }
    colorPalette
  }
  ... on ComponentInfoBlock {
    headline
    sublineText: subline
    block1Image { url }
    block1Body { json }
    block2Image { url }
    block2Body { json }
    block3Image { url }
    block3Body { json }
    colorPalette
  }
  ... on ComponentDuplex {
    headline
    bodyText { json }
    image { url }
    imageStyle
    containerLayout
    colorPalette
  }
  ... on ComponentQuote {
    quote { json }
    authorName
    authorTitle
    authorImage { url }
    imagePosition
    colorPalette
  }
}
"#;

/// Site navigation. Returns at most one item; groups carry an optional
/// clickable header link plus optional submenu children.
pub(crate) const GET_NAVIGATION: &str = r#"
query GetNavigation($locale: String!) {
  navigationCollection(locale: $locale, limit: 1) {
    items {
      sys { id }
      menuItemsCollection {
        items {
          sys { id }
          groupName
          groupLink { sys { id } pageName slug }
          menuItemsCollection {
            items {
              sys { id }
              label
              path
              externalLink
            }
          }
        }
      }
    }
  }
}
"#;

/// Site footer. Returns at most one item; groups carry flat page-link
/// lists, never a nested submenu.
pub(crate) const GET_FOOTER: &str = r#"
query GetFooter($locale: String!) {
  footerCollection(locale: $locale, limit: 1) {
    items {
      sys { id }
      logo { url }
      menuItemsCollection {
        items {
          sys { id }
          groupName
          featuredPagesCollection { items { sys { id } pageName slug } }
        }
      }
      legalLinks {
        featuredPagesCollection { items { sys { id } pageName slug } }
      }
      twitterLink
      facebookLink
      linkedinLink
      instagramLink
      copyrightText
    }
  }
}
"#;

/// Variables for [`GET_PAGE`].
pub(crate) fn page_variables(slug: &str, locale: &str) -> Value {
    json!({ "slug": slug, "locale": locale })
}

/// Variables for [`GET_NAVIGATION`] and [`GET_FOOTER`].
pub(crate) fn locale_variables(locale: &str) -> Value {
    json!({ "locale": locale })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_requests_fragments_in_every_slot() {
        assert_eq!(GET_PAGE.matches("...ComponentFields").count(), 3);
        assert!(GET_PAGE.contains("pageCollection(where: { slug: $slug }"));
    }

    #[test]
    fn queries_cover_the_closed_component_table() {
        for typename in [
            "ComponentHeroBanner",
            "ComponentCta",
            "ComponentTextBlock",
            "ComponentInfoBlock",
            "ComponentDuplex",
            "ComponentQuote",
        ] {
            assert!(GET_PAGE.contains(typename), "missing {typename}");
        }
    }

    #[test]
    fn variables_are_string_keyed_maps() {
        let vars = page_variables("home", "en-US");
        assert_eq!(vars["slug"], "home");
        assert_eq!(vars["locale"], "en-US");
        assert_eq!(locale_variables("de-DE")["locale"], "de-DE");
    }
}
