//! # vitrine-sections
//!
//! Leptos SSR renderer for content-driven landing pages.
//!
//! A page is described by a JSON [`ContentDocument`]: an ordered list of
//! sections, each naming a registered component, an optional layout variant,
//! an optional separator and an open props bag. This crate resolves every
//! entry against a closed component registry, renders it with
//! [Leptos](https://leptos.dev/) server-side rendering and stitches the
//! result into one static HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitrine_sections::{assemble, render_page, ContentDocument, PageHead, RenderSettings};
//!
//! let doc = ContentDocument::from_json(r#"{
//!     "sections": [
//!         { "component": "Hero", "props": { "title": "Hello" } },
//!         { "component": "CTA", "separator": "wave", "props": { "title": "Talk to us" } }
//!     ]
//! }"#).unwrap();
//!
//! let assembly = assemble(&doc, &RenderSettings::default());
//! assert_eq!(assembly.sections.len(), 2);
//!
//! let html = render_page(&PageHead::default(), &assembly);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Fallbacks
//!
//! A malformed document should cost as little of the page as possible:
//!
//! - unknown components are skipped (with a [`Diagnostic`])
//! - unknown separators render as `none`
//! - unknown or missing variants render the component's default layout
//! - absent optional props simply leave their sub-section out
//!
//! Only a document that is not an object with a `sections` array is rejected,
//! as a [`DocumentError`].
//!
//! ## Architecture
//!
//! - [`types`] - content document, site descriptor and head tags
//! - [`registry`] - component name to [`ComponentKind`]
//! - [`assemble`](mod@assemble) - the page assembler
//! - [`components`] - Leptos UI components
//! - [`links`] - WhatsApp and phone URLs
//! - [`styles`] / [`script`] - inlined CSS and client glue

#![recursion_limit = "512"]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assemble;
pub mod components;
pub mod links;
pub mod registry;
pub mod script;
pub mod separator;
pub mod styles;
pub mod types;
pub mod variant;

pub use assemble::{
    Assembly, Diagnostic, RenderMode, RenderSettings, RenderedSection, SectionContext,
    SectionInvocation, Severity, assemble,
};
pub use links::LinkBuilder;
pub use registry::ComponentKind;
pub use separator::Separator;
pub use types::{
    ContentDocument, DocumentError, LinkTag, MetaTag, PageHead, ScriptTag, SectionEntry, Site,
};

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render a complete HTML page from an assembled document.
///
/// Returns the full document as a `String`, including `<!DOCTYPE html>`.
pub fn render_page(head: &PageHead, assembly: &Assembly) -> String {
    let doc = view! {
        <PageDocument head=head.clone() sections=assembly.sections.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Assemble `doc` and render it in one go.
///
/// The [`Assembly`] is returned alongside the page so callers can report its
/// diagnostics.
pub fn render_document(
    doc: &ContentDocument,
    settings: &RenderSettings,
    head: &PageHead,
) -> (String, Assembly) {
    let assembly = assemble(doc, settings);
    let html = render_page(head, &assembly);
    (html, assembly)
}

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;

    use crate::assemble::{RenderSettings, SectionContext};
    use crate::components::render_section;
    use crate::registry;
    use crate::separator::Separator;
    use crate::types::{Contact, Site, Social};

    /// Settings for a fictional site with every contact channel filled in.
    pub(crate) fn settings() -> RenderSettings {
        RenderSettings {
            site: Site {
                title: "Acme".into(),
                description: "Landing pages that convert".into(),
                url: "https://acme.test".into(),
                contact: Contact {
                    phone: "+55 11 999999999".into(),
                    whatsapp: "11999999999".into(),
                    email: "hello@acme.test".into(),
                    prefill: "Hello! I'd like to know more.".into(),
                    ..Default::default()
                },
                social: Social {
                    instagram: Some("https://instagram.com/acme".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
            year: Some(2025),
            ..Default::default()
        }
    }

    /// Context for `component` at index 0.
    pub(crate) fn ctx(component: &str, variant: Option<&str>) -> SectionContext {
        let settings = settings();
        SectionContext {
            index: 0,
            kind: registry::resolve(component).expect("registered component"),
            variant: variant.map(str::to_string),
            separator: Separator::None,
            site: settings.site,
            links: settings.links,
            year: settings.year,
        }
    }

    /// Markup of one section rendered from raw JSON props.
    pub(crate) fn render_json(component: &str, variant: Option<&str>, props: Value) -> String {
        let props = match props {
            Value::Object(map) => map,
            other => panic!("props must be an object, got {}", other),
        };
        render_section(ctx(component, variant), &props).html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_empty_page() {
        let doc = ContentDocument::from_value(json!({ "sections": [] })).unwrap();
        let (html, assembly) = render_document(&doc, &RenderSettings::default(), &PageHead::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains(r#"<main id="main">"#));
        assert!(assembly.sections.is_empty());
    }

    #[test]
    fn head_tags_and_structured_data_are_rendered() {
        let head = PageHead {
            title: "Home | Acme".into(),
            language: "pt-BR".into(),
            meta: vec![
                MetaTag::name("description", "Landing pages"),
                MetaTag::property("og:title", "Home | Acme"),
            ],
            links: vec![LinkTag {
                rel: "canonical".into(),
                href: "https://acme.test/".into(),
                mime: None,
            }],
            structured_data: vec![json!({ "@type": "Organization", "name": "Acme" })],
            scripts: vec![ScriptTag {
                src: Some("https://plausible.io/js/script.js".into()),
                defer: true,
                data_domain: Some("acme.test".into()),
                ..Default::default()
            }],
        };
        let html = render_page(&head, &Assembly::default());

        assert!(html.contains(r#"<html lang="pt-BR""#));
        assert!(html.contains("<title>Home | Acme</title>"));
        assert!(html.contains(r#"name="description""#));
        assert!(html.contains(r#"property="og:title""#));
        assert!(html.contains(r#"rel="canonical""#));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains(r#""@type":"Organization""#));
        assert!(html.contains(r#"data-domain="acme.test""#));
    }

    #[test]
    fn sections_appear_in_document_order() {
        let doc = ContentDocument::from_value(json!({ "sections": [
            { "component": "CTA", "props": { "title": "Second?" } },
            { "component": "Hero", "props": { "title": "First?" } }
        ]}))
        .unwrap();
        let (html, _) = render_document(&doc, &RenderSettings::default(), &PageHead::default());
        let cta = html.find(r#"data-component="CTA""#).unwrap();
        let hero = html.find(r#"data-component="Hero""#).unwrap();
        assert!(cta < hero);
        assert!(html.contains("data-track"));
    }
}
