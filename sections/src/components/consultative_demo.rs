//! Consultative demo - pain points on one side, the demo walkthrough and
//! its call-to-action on the other.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ActionContent, ActionLink, Badge, ButtonContent, ClickTrack, CtaLink, Heading, ImageContent,
    NamedIcon, SectionContent, SectionFrame, SectionShell, Tone, has_text, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Consultative demo layouts.
    pub enum ConsultativeDemoVariant {
        Split => "split",
        Cards => "cards",
        Timeline => "timeline",
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PainPoint {
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoStep {
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
    pub icon: Option<String>,
}

/// Props of the `ConsultativeDemo` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultativeDemoContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub pains: Vec<PainPoint>,
    pub steps: Vec<DemoStep>,
    pub highlights: Vec<String>,
    pub badge: Option<String>,
    pub disclaimer: Option<String>,
    pub cta_primary: ActionContent,
    pub cta_secondary: Option<ButtonContent>,
    pub image: Option<ImageContent>,
    pub tone: Option<String>,
    pub background: Option<String>,
    pub pattern: Option<String>,
}

impl SectionContent for ConsultativeDemoContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "pains", self.pains.is_empty());
        require(&mut missing, "steps", self.steps.is_empty());
        require(&mut missing, "ctaPrimary", !self.cta_primary.is_present());
        missing
    }
}

fn pain_list(pains: Vec<PainPoint>, cards: bool) -> impl IntoView {
    let (list_class, item_class) = if cards {
        ("grid grid-3", "card pain-card")
    } else {
        ("stack-md", "pain-row")
    };
    view! {
        <div class=list_class>
            {pains.into_iter().map(|pain| {
                let icon = pain.icon.unwrap_or_else(|| "AlertCircle".into());
                view! {
                    <div class=item_class>
                        <span class="icon-badge icon-badge-danger"><NamedIcon name=icon size="20" /></span>
                        <div>
                            <h4 class="strong">{pain.title}</h4>
                            <p class="muted small">{pain.description}</p>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

fn step_list(steps: Vec<DemoStep>, numbered: bool) -> impl IntoView {
    let list_class = if numbered { "timeline" } else { "stack-md" };
    view! {
        <div class=list_class>
            {steps.into_iter().enumerate().map(|(idx, step)| {
                let marker = if numbered {
                    view! { <div class="step-number">{idx + 1}</div> }.into_any()
                } else {
                    let icon = step.icon.clone().unwrap_or_else(|| "CheckCircle".into());
                    view! { <span class="icon-badge"><NamedIcon name=icon size="20" /></span> }.into_any()
                };
                view! {
                    <div class="demo-step">
                        {marker}
                        <div>
                            <div class="demo-step-head">
                                <h4 class="strong">{step.title}</h4>
                                {step.duration.filter(|d| !d.trim().is_empty()).map(|d| view! {
                                    <Badge text=d class="badge badge-soft" />
                                })}
                            </div>
                            <p class="muted small">{step.description}</p>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

fn actions(
    ctx: &SectionContext,
    primary: ActionContent,
    secondary: Option<ButtonContent>,
    highlights: Vec<String>,
) -> impl IntoView {
    let highlights = (!highlights.is_empty()).then(|| {
        view! {
            <div class="badge-row">
                {highlights.into_iter().map(|h| view! { <Badge text=h class="badge badge-outline" /> }).collect::<Vec<_>>()}
            </div>
        }
    });

    let primary = primary.is_present().then(|| {
        view! {
            <ActionLink
                ctx=ctx.clone()
                action=primary
                location="consultative_demo"
                class="btn btn-whatsapp btn-lg"
            />
        }
    });

    let secondary = secondary.filter(ButtonContent::is_present).map(|b| {
        // In-page anchors scroll; anything else opens a new tab.
        let external = !b.href.starts_with('#');
        view! {
            <CtaLink
                href=b.href
                text=b.text.clone()
                class="btn btn-outline btn-lg"
                track=ClickTrack::button(b.text, "consultative_demo")
                external=external
            />
        }
    });

    view! {
        <div class="stack-md">
            {highlights}
            <div class="cta-actions">
                {primary}
                {secondary}
            </div>
        </div>
    }
}

#[component]
pub fn ConsultativeDemo(ctx: SectionContext, content: ConsultativeDemoContent) -> impl IntoView {
    let variant = ConsultativeDemoVariant::parse(ctx.variant.as_deref());
    let base_tone = match variant {
        ConsultativeDemoVariant::Cards => Tone::Surface0,
        _ => Tone::Surface1,
    };
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "demo".into()))
        .tone(base_tone)
        .appearance(
            content.tone.as_deref(),
            content.background.as_deref(),
            content.pattern.as_deref(),
        );

    let heading = view! {
        <div class="section-heading text-center">
            {content.badge.filter(|b| !b.trim().is_empty()).map(|b| view! { <Badge text=b /> })}
            <Heading level=2 centered=true text=content.title />
            {has_text(&content.subtitle).then(|| view! { <p class="lead">{content.subtitle}</p> })}
        </div>
    };

    let image = content.image.filter(|i| !i.src.is_empty()).map(|i| view! {
        <img src=i.src alt=i.alt class="demo-image" />
    });

    let actions = actions(&ctx, content.cta_primary, content.cta_secondary, content.highlights);

    let body = match variant {
        ConsultativeDemoVariant::Split => view! {
            <div class="grid grid-2 items-start">
                <div>
                    <h3 class="column-title column-title-danger">"Common problems"</h3>
                    {pain_list(content.pains, false)}
                </div>
                <div class="stack-lg">
                    <h3 class="column-title">"How the demo works"</h3>
                    {step_list(content.steps, false)}
                    {actions}
                    {image}
                </div>
            </div>
        }
        .into_any(),
        ConsultativeDemoVariant::Cards => view! {
            <div class="stack-xl">
                {pain_list(content.pains, true)}
                <div class="card demo-panel narrow">
                    <h3 class="column-title text-center">"How the demo works"</h3>
                    {step_list(content.steps, false)}
                    <div class="text-center">{actions}</div>
                </div>
            </div>
        }
        .into_any(),
        ConsultativeDemoVariant::Timeline => view! {
            <div class="grid grid-1-2">
                <div>
                    <h3 class="column-title column-title-danger">"Common problems"</h3>
                    {pain_list(content.pains, false)}
                </div>
                <div class="stack-lg">
                    <h3 class="column-title">"Demo process"</h3>
                    {step_list(content.steps, true)}
                    {actions}
                    {image}
                </div>
            </div>
        }
        .into_any(),
    };

    let disclaimer = has_text(&content.disclaimer).then(|| view! {
        <p class="note">{content.disclaimer}</p>
    });

    view! {
        <SectionShell frame=frame>
            {heading}
            {body}
            {disclaimer}
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{render_json, settings};
    use crate::{ContentDocument, Diagnostic, RenderMode, RenderSettings, assemble};
    use serde_json::json;

    fn props() -> serde_json::Value {
        json!({
            "title": "See it live",
            "pains": [{ "title": "No leads", "description": "Traffic does not convert" }],
            "steps": [{ "title": "Call", "description": "30 minutes", "duration": "30min" }],
            "highlights": ["Free", "No commitment"],
            "ctaPrimary": { "text": "Book a demo", "type": "whatsapp" },
            "ctaSecondary": { "text": "See pricing", "href": "#pricing" }
        })
    }

    #[test]
    fn anchors_stay_in_page() {
        let html = render_json("ConsultativeDemo", None, props());
        assert!(html.contains(r##"href="#pricing""##));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 1);
        assert!(html.contains(r#"data-track-location="consultative_demo""#));
    }

    #[test]
    fn mobile_alias_renders_same_component() {
        let html = render_json("ConsultativeDemoMobile", Some("timeline"), props());
        assert!(html.contains(r#"data-component="ConsultativeDemo""#));
        assert!(html.contains("step-number"));
    }

    #[test]
    fn tone_and_pattern_props_are_applied() {
        let mut p = props();
        p["tone"] = json!("solid-primary");
        p["pattern"] = json!("dots");
        let html = render_json("ConsultativeDemo", Some("cards"), p);
        assert!(html.contains("tone-solid-primary"));
        assert!(html.contains("pattern-dots"));
    }

    #[test]
    fn missing_primary_cta_is_reported_in_development() {
        let doc = ContentDocument::from_value(json!({ "sections": [{
            "component": "ConsultativeDemo",
            "props": { "title": "T", "pains": [{ "title": "p" }], "steps": [{ "title": "s" }] }
        }]}))
        .unwrap();
        let settings = RenderSettings {
            mode: RenderMode::Development,
            ..settings()
        };
        let assembly = assemble(&doc, &settings);
        assert_eq!(
            assembly.diagnostics,
            vec![Diagnostic::MissingRequired {
                index: 0,
                component: "ConsultativeDemo".into(),
                field: "ctaPrimary".into(),
            }]
        );
    }
}
