//! FAQ section.
//!
//! The accordion is native `<details>`/`<summary>`, so it works without any
//! script.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ICON_CHEVRON_DOWN, Icon, SectionContent, SectionFrame, SectionHeading, SectionShell, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// FAQ layouts.
    pub enum FaqVariant {
        Accordion => "accordion",
        Grid => "grid",
        Simple => "simple",
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Props of the `FAQ` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FaqContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub faqs: Vec<FaqItem>,
}

impl SectionContent for FaqContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "faqs", self.faqs.is_empty());
        missing
    }
}

#[component]
pub fn Faq(ctx: SectionContext, content: FaqContent) -> impl IntoView {
    let variant = FaqVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "faq".into()));

    let body = match variant {
        FaqVariant::Accordion => view! {
            <div class="accordion narrow">
                {content.faqs.into_iter().map(|faq| view! {
                    <details class="accordion-item">
                        <summary class="accordion-trigger">
                            <span>{faq.question}</span>
                            <Icon path=ICON_CHEVRON_DOWN size="18" class="icon accordion-chevron" />
                        </summary>
                        <div class="accordion-content">{faq.answer}</div>
                    </details>
                }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        FaqVariant::Grid => view! {
            <div class="grid grid-2">
                {content.faqs.into_iter().map(|faq| view! {
                    <div class="card">
                        <h3 class="card-title">{faq.question}</h3>
                        <p class="muted">{faq.answer}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        FaqVariant::Simple => view! {
            <div class="stack-lg narrow">
                {content.faqs.into_iter().map(|faq| view! {
                    <div>
                        <h3 class="heading heading-sm">{faq.question}</h3>
                        <p>{faq.answer}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <SectionShell frame=frame>
            <SectionHeading title=content.title subtitle=content.subtitle />
            {body}
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn accordion_uses_details_elements() {
        let html = render_json(
            "FAQ",
            None,
            json!({
                "title": "Questions",
                "faqs": [
                    { "question": "How long?", "answer": "Two weeks." },
                    { "question": "How much?", "answer": "It depends." }
                ]
            }),
        );
        assert_eq!(html.matches("<details").count(), 2);
        assert!(html.contains("How long?"));
        assert!(html.contains(r#"data-component="FAQ""#));
    }

    #[test]
    fn simple_variant_has_no_accordion() {
        let html = render_json(
            "FAQ",
            Some("simple"),
            json!({ "title": "Q", "faqs": [{ "question": "A?", "answer": "B." }] }),
        );
        assert!(!html.contains("<details"));
        assert!(html.contains("A?"));
    }
}
