//! Call-to-action section.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ButtonContent, ClickTrack, CtaLink, Heading, ICON_ARROW_RIGHT, ICON_CHECK, ICON_MESSAGE_CIRCLE,
    Icon, SectionContent, SectionFrame, SectionShell, Tone, has_text, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// CTA layouts.
    pub enum CtaVariant {
        Centered => "centered",
        Split => "split",
        Minimal => "minimal",
    }
}

/// Props of the `CTA` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CtaContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// Without an `href` the button opens a chat with the site number.
    pub button: Option<ButtonContent>,
    pub features: Vec<String>,
}

impl SectionContent for CtaContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        missing
    }
}

#[component]
pub fn Cta(ctx: SectionContext, content: CtaContent) -> impl IntoView {
    let variant = CtaVariant::parse(ctx.variant.as_deref());
    let tone = match variant {
        CtaVariant::Minimal => Tone::Surface1,
        _ => Tone::Gradient,
    };
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "contato".into()))
        .tone(tone)
        .class("cta");

    let button = content.button.filter(ButtonContent::is_present).map(|b| {
        if b.href.trim().is_empty() {
            let href = ctx.whatsapp_href(ctx.default_message());
            view! {
                <CtaLink
                    href=href
                    text=b.text
                    class="btn btn-hero"
                    track=ClickTrack::whatsapp("cta")
                    icon=ICON_MESSAGE_CIRCLE
                    external=true
                />
            }
            .into_any()
        } else {
            view! {
                <CtaLink
                    href=b.href
                    text=b.text.clone()
                    class="btn btn-hero"
                    track=ClickTrack::button(b.text, "cta")
                    icon=ICON_ARROW_RIGHT
                />
            }
            .into_any()
        }
    });

    let features = (!content.features.is_empty()).then(|| {
        view! {
            <ul class="checklist">
                {content.features.into_iter().map(|f| view! {
                    <li><Icon path=ICON_CHECK size="16" class="icon" /><span>{f}</span></li>
                }).collect::<Vec<_>>()}
            </ul>
        }
    });

    let subtitle = has_text(&content.subtitle).then(|| view! {
        <p class="eyebrow">{content.subtitle}</p>
    });
    let description = has_text(&content.description).then(|| view! {
        <p class="lead">{content.description}</p>
    });

    let body = match variant {
        CtaVariant::Centered => view! {
            <div class="text-center narrow stack-md">
                {subtitle}
                <Heading level=2 centered=true text=content.title />
                {description}
                {features}
                <div class="cta-actions justify-center">{button}</div>
            </div>
        }
        .into_any(),
        CtaVariant::Split => view! {
            <div class="grid grid-2 items-center">
                <div class="stack-md">
                    {subtitle}
                    <Heading level=2 text=content.title />
                    {description}
                </div>
                <div class="stack-md">
                    {features}
                    <div class="cta-actions">{button}</div>
                </div>
            </div>
        }
        .into_any(),
        CtaVariant::Minimal => view! {
            <div class="cta-minimal">
                <Heading level=3 text=content.title />
                <div class="cta-actions">{button}</div>
            </div>
        }
        .into_any(),
    };

    view! { <SectionShell frame=frame>{body}</SectionShell> }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn button_without_href_opens_chat() {
        let html = render_json(
            "CTA",
            None,
            json!({ "title": "Talk to us", "button": { "text": "Chat now" } }),
        );
        assert!(html.contains(r#"href="https://wa.me/5511999999999?text="#));
        assert!(html.contains(r#"data-track="whatsapp_click""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn minimal_variant_skips_description() {
        let html = render_json(
            "CTA",
            Some("minimal"),
            json!({ "title": "Ready?", "description": "Long text here" }),
        );
        assert!(html.contains("Ready?"));
        assert!(!html.contains("Long text here"));
    }
}
