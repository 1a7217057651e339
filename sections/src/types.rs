//! Data types for content documents, site descriptors and page heads.
//!
//! These types define the data model the renderer consumes. They're designed to be:
//!
//! - **Serializable** - content and site files are plain JSON via serde
//! - **Lenient** - a malformed section entry decodes to something renderable
//!   (or skippable) instead of rejecting the whole document
//! - **Default-able** - partial site files load with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use vitrine_sections::types::ContentDocument;
//!
//! let doc = ContentDocument::from_json(r#"{
//!     "sections": [
//!         { "component": "Hero", "variant": "split", "props": { "title": "Hello" } },
//!         { "component": "CTA", "separator": "wave", "props": { "title": "Talk to us" } }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(doc.sections.len(), 2);
//! assert_eq!(doc.sections[0].component, "Hero");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while decoding a content document.
///
/// Only the top-level shape is enforced here; individual entries never fail.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input was not valid JSON, or had no `sections` array at the top level.
    #[error("invalid content document: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Content document
// =============================================================================

/// A page description: an ordered list of sections.
///
/// The order of `sections` is the literal top-to-bottom render order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentDocument {
    /// Free-form document version, ignored by rendering.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub version: Option<String>,
    /// Sections in render order. Duplicate component names are allowed.
    pub sections: Vec<SectionEntry>,
}

impl ContentDocument {
    /// Decode a content document from JSON text.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode a content document from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// One element of a content document.
///
/// Decoding never fails for a single entry: a non-object entry or a missing
/// `component` becomes an entry with an empty component name, which the
/// assembler then skips like any other unknown component.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SectionEntry {
    /// Registry name of the component to render.
    pub component: String,
    /// Component-specific layout selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Raw separator value as authored; normalized by the assembler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Open props bag passed to the component verbatim.
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl SectionEntry {
    /// Convenience constructor used by tests and programmatic documents.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Default::default()
        }
    }

    /// Builder-style variant setter.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Builder-style separator setter.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Builder-style props setter. Non-object values leave props empty.
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = match props {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self
    }

    fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let component = match map.remove("component") {
            Some(Value::String(name)) => name,
            _ => String::new(),
        };

        Self {
            component,
            variant: string_field(map.remove("variant")),
            separator: string_field(map.remove("separator")),
            props: match map.remove("props") {
                Some(Value::Object(props)) => props,
                _ => Map::new(),
            },
        }
    }
}

impl<'de> Deserialize<'de> for SectionEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(string_field(value))
}

// =============================================================================
// Site descriptor
// =============================================================================

/// Site-wide data shared by every section (branding, contact, SEO defaults).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    pub title: String,
    pub description: String,
    /// Absolute base URL, e.g. `https://example.com`.
    pub url: String,
    pub author: String,
    /// BCP 47 language tag, e.g. `pt-BR`.
    pub language: String,
    pub keywords: Vec<String>,
    pub contact: Contact,
    pub social: Social,
    pub seo: SiteSeo,
    pub analytics: AnalyticsSettings,
    pub forms: FormSettings,
}

/// Contact channels.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    /// Chat number, digits with or without country code.
    pub whatsapp: String,
    pub email: String,
    /// Default pre-filled chat message.
    pub prefill: String,
    pub address: Address,
}

/// Postal address.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Social profile URLs. Empty or absent entries are not rendered.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Social {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
}

impl Social {
    /// Configured profiles as `(platform, url)` in a fixed order.
    pub fn profiles(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
            ("linkedin", &self.linkedin),
            ("twitter", &self.twitter),
            ("youtube", &self.youtube),
        ]
        .into_iter()
        .filter_map(|(platform, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (platform, u))
        })
        .collect()
    }
}

/// SEO defaults for the whole site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSeo {
    pub og_image: String,
    pub twitter_card: String,
    pub favicon: String,
}

impl Default for SiteSeo {
    fn default() -> Self {
        Self {
            og_image: "/og-image.png".into(),
            twitter_card: "summary_large_image".into(),
            favicon: "/favicon.png".into(),
        }
    }
}

/// Which analytics collectors the page loads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsSettings {
    /// Master switch; `false` turns every event into a no-op.
    pub enabled: bool,
    /// GA4 measurement id (`G-XXXX`).
    pub google_analytics: Option<String>,
    /// Measurement Protocol secret, only needed for server-side events.
    pub google_api_secret: Option<String>,
    pub plausible: PlausibleSettings,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            google_analytics: None,
            google_api_secret: None,
            plausible: PlausibleSettings::default(),
        }
    }
}

/// Plausible collector settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlausibleSettings {
    pub domain: Option<String>,
    /// Self-hosted instance, e.g. `https://stats.example.com`.
    pub api_host: Option<String>,
}

/// Form endpoints.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSettings {
    pub contact_endpoint: Option<String>,
}

// =============================================================================
// Page head
// =============================================================================

/// Everything that goes into `<head>` besides the stylesheet.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageHead {
    pub title: String,
    /// Value of `<html lang>`.
    pub language: String,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
    /// JSON-LD blocks, one `<script type="application/ld+json">` each.
    pub structured_data: Vec<Value>,
    pub scripts: Vec<ScriptTag>,
}

/// A `<meta>` tag keyed by either `name` or `property`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaTag {
    pub name: Option<String>,
    pub property: Option<String>,
    pub content: String,
}

impl MetaTag {
    pub fn name(name: &str, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.to_string()),
            property: None,
            content: content.into(),
        }
    }

    pub fn property(property: &str, content: impl Into<String>) -> Self {
        Self {
            name: None,
            property: Some(property.to_string()),
            content: content.into(),
        }
    }

    /// The `name` or `property` this tag is keyed by.
    pub fn key(&self) -> &str {
        self.name
            .as_deref()
            .or(self.property.as_deref())
            .unwrap_or_default()
    }
}

/// A `<link>` tag.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type")]
    pub mime: Option<String>,
}

/// A `<script>` tag, either external (`src`) or inline (`body`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptTag {
    pub src: Option<String>,
    pub body: Option<String>,
    pub defer: bool,
    pub data_domain: Option<String>,
    pub data_api: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_with_non_string_fields_decodes_leniently() {
        let doc = ContentDocument::from_value(json!({
            "sections": [
                { "component": "Hero", "variant": 3, "separator": ["wave"], "props": "oops" }
            ]
        }))
        .unwrap();

        let entry = &doc.sections[0];
        assert_eq!(entry.component, "Hero");
        assert_eq!(entry.variant, None);
        assert_eq!(entry.separator, None);
        assert!(entry.props.is_empty());
    }

    #[test]
    fn non_object_entry_becomes_unnamed() {
        let doc = ContentDocument::from_value(json!({ "sections": ["Hero", 42] })).unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections.iter().all(|s| s.component.is_empty()));
    }

    #[test]
    fn missing_sections_is_a_document_error() {
        assert!(ContentDocument::from_json(r#"{ "pages": [] }"#).is_err());
        assert!(ContentDocument::from_json(r#"{ "sections": {} }"#).is_err());
        assert!(ContentDocument::from_json("[]").is_err());
    }

    #[test]
    fn partial_site_fills_defaults() {
        let site: Site = serde_json::from_value(json!({
            "title": "Acme",
            "contact": { "whatsapp": "11999999999" },
            "analytics": { "plausible": { "domain": "acme.com" } }
        }))
        .unwrap();

        assert_eq!(site.title, "Acme");
        assert_eq!(site.contact.whatsapp, "11999999999");
        assert!(site.analytics.enabled);
        assert_eq!(site.analytics.plausible.domain.as_deref(), Some("acme.com"));
        assert_eq!(site.seo.twitter_card, "summary_large_image");
    }

    #[test]
    fn social_profiles_skip_blank_entries() {
        let social = Social {
            facebook: Some("https://facebook.com/acme".into()),
            instagram: Some("  ".into()),
            youtube: Some("https://youtube.com/@acme".into()),
            ..Default::default()
        };
        let profiles = social.profiles();
        assert_eq!(
            profiles,
            vec![
                ("facebook", "https://facebook.com/acme"),
                ("youtube", "https://youtube.com/@acme"),
            ]
        );
    }
}
