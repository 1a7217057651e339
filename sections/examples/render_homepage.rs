//! Render a small landing page to `homepage.html`.
//!
//! Run with: `cargo run -p vitrine-sections --example render_homepage`

use serde_json::json;
use vitrine_sections::{ContentDocument, PageHead, RenderSettings, render_document};

fn main() {
    let doc = ContentDocument::from_value(json!({
        "version": "1",
        "sections": [
            { "component": "SiteHeader" },
            {
                "component": "Hero",
                "variant": "split",
                "separator": "wave",
                "props": {
                    "title": "Landing pages that sell",
                    "subtitle": "Built from a single JSON file",
                    "primaryButton": { "text": "Talk to us", "href": "#contato" }
                }
            },
            {
                "component": "FAQ",
                "props": {
                    "title": "Questions",
                    "faqs": [{ "question": "How long?", "answer": "About two weeks." }]
                }
            },
            { "component": "CTA", "props": { "title": "Ready?", "button": { "text": "Chat now" } } },
            { "component": "SiteFooter" }
        ]
    }))
    .expect("valid content document");

    let mut settings = RenderSettings::default();
    settings.site.title = "Acme Studio".into();
    settings.site.contact.whatsapp = "11999999999".into();
    settings.site.contact.prefill = "Hi! I'd like a quote.".into();

    let head = PageHead {
        title: "Acme Studio".into(),
        language: "en".into(),
        ..Default::default()
    };

    let (html, assembly) = render_document(&doc, &settings, &head);

    let output_path = "homepage.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("Sections rendered: {}", assembly.sections.len());
    for diagnostic in &assembly.diagnostics {
        println!("  {}", diagnostic);
    }
}
