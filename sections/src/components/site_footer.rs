//! Site footer - the standard footer with an optional WhatsApp invitation.

use leptos::prelude::*;
use serde::Deserialize;

use super::footer::{FooterShell, FooterVariant, footer_body};
use super::{ClickTrack, CtaLink, ICON_MESSAGE_CIRCLE, SectionContent, SectionFrame, Tone};
use crate::assemble::SectionContext;
use crate::variant::Variant;

const FOOTER_CHAT_MESSAGE: &str = "Hi! I'd like to know more about your services.";

/// Props of the `SiteFooter` component.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteFooterContent {
    pub id: Option<String>,
    #[serde(rename = "showWhatsAppCTA")]
    pub show_whatsapp_cta: bool,
}

impl Default for SiteFooterContent {
    fn default() -> Self {
        Self {
            id: None,
            show_whatsapp_cta: true,
        }
    }
}

impl SectionContent for SiteFooterContent {
    fn missing_required(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

#[component]
pub fn SiteFooter(ctx: SectionContext, content: SiteFooterContent) -> impl IntoView {
    let variant = FooterVariant::parse(ctx.variant.as_deref());
    let mut frame = SectionFrame::new(&ctx, variant.name()).tone(Tone::Gradient);
    if let Some(id) = content.id {
        frame = frame.id(id);
    }

    let has_number = !ctx.site.contact.whatsapp.trim().is_empty();
    let invite = (content.show_whatsapp_cta && has_number && variant != FooterVariant::Minimal)
        .then(|| {
            let href = ctx.whatsapp_href(FOOTER_CHAT_MESSAGE);
            view! {
                <div class="footer-invite text-center">
                    <h3 class="footer-title">"Shall we talk about your project?"</h3>
                    <p class="footer-muted">"Message us on WhatsApp and get all your questions answered."</p>
                    <CtaLink
                        href=href
                        text="Chat on WhatsApp"
                        class="btn btn-whatsapp btn-lg"
                        track=ClickTrack::whatsapp("footer")
                        icon=ICON_MESSAGE_CIRCLE
                        external=true
                    />
                </div>
            }
            .into_any()
        });

    let body = footer_body(variant, ctx.site, ctx.year, invite);
    view! { <FooterShell frame=frame>{body}</FooterShell> }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn whatsapp_invite_is_on_by_default() {
        let html = render_json("SiteFooter", None, json!({}));
        assert!(html.contains("footer-invite"));
        assert!(html.contains(r#"data-track-location="footer""#));
        assert!(html.contains("https://wa.me/5511999999999?text=Hi%21"));
    }

    #[test]
    fn invite_can_be_switched_off() {
        let html = render_json("SiteFooter", Some("simple"), json!({ "showWhatsAppCTA": false }));
        assert!(!html.contains("footer-invite"));
        assert!(html.contains(r#"data-variant="simple""#));
    }
}
