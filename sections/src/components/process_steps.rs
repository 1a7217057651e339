//! Process steps - who does what at each stage, and how long it takes.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ActionContent, ActionLink, ICON_CLOCK, ICON_USER, ICON_USERS, Icon, NamedIcon, SectionContent,
    SectionFrame, SectionHeading, SectionShell, Tone, has_text, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Process step layouts.
    pub enum ProcessStepsVariant {
        Matrix => "matrix",
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessStep {
    pub title: String,
    /// What the client provides.
    pub you: Vec<String>,
    /// What the team delivers.
    pub us: Vec<String>,
    pub duration: Option<String>,
    pub icon: Option<String>,
}

/// Props of the `ProcessSteps` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessStepsContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub steps: Vec<ProcessStep>,
    pub footnote: Option<String>,
    pub cta: Option<ActionContent>,
}

impl SectionContent for ProcessStepsContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "steps", self.steps.is_empty());
        missing
    }
}

fn items(list: Vec<String>) -> impl IntoView {
    view! {
        <ul class="step-list">
            {list.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
        </ul>
    }
}

fn duration_badge(duration: Option<String>) -> impl IntoView {
    duration.filter(|d| !d.trim().is_empty()).map(|d| {
        view! {
            <span class="badge badge-outline">
                <Icon path=ICON_CLOCK size="12" />
                {d}
            </span>
        }
    })
}

#[component]
fn MatrixTable(steps: Vec<ProcessStep>) -> impl IntoView {
    let rows = steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| {
            let icon = step.icon.unwrap_or_else(|| "CheckCircle".into());
            view! {
                <tr>
                    <th scope="row">
                        <div class="step-title">
                            <span class="icon-badge"><NamedIcon name=icon size="20" /></span>
                            <div>
                                <div class="strong">{step.title}</div>
                                <div class="muted small">"Step " {idx + 1}</div>
                            </div>
                        </div>
                    </th>
                    <td class="step-you">{items(step.you)}</td>
                    <td class="step-us">{items(step.us)}</td>
                    <td>{duration_badge(step.duration)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="table-wrap">
            <table class="process-matrix">
                <thead>
                    <tr>
                        <th scope="col">"Step"</th>
                        <th scope="col">"You"</th>
                        <th scope="col">"Us"</th>
                        <th scope="col">"Timeline"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn HorizontalSteps(steps: Vec<ProcessStep>) -> impl IntoView {
    let last = steps.len().saturating_sub(1);
    let cards = steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| {
            let class = if idx < last { "card step-card step-connected" } else { "card step-card" };
            view! {
                <div class=class>
                    <div class="text-center">
                        <div class="step-number">{idx + 1}</div>
                        <h3 class="card-title">{step.title}</h3>
                        {duration_badge(step.duration)}
                    </div>
                    <div class="step-who">
                        <h4 class="step-who-you"><Icon path=ICON_USER size="16" />"You"</h4>
                        {items(step.you)}
                    </div>
                    <div class="step-who">
                        <h4 class="step-who-us"><Icon path=ICON_USERS size="16" />"Us"</h4>
                        {items(step.us)}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="grid grid-4">{cards}</div> }
}

#[component]
fn VerticalSteps(steps: Vec<ProcessStep>) -> impl IntoView {
    let last = steps.len().saturating_sub(1);
    let rows = steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| {
            let class = if idx < last { "timeline-row timeline-connected" } else { "timeline-row" };
            let icon = step.icon.unwrap_or_else(|| "CheckCircle".into());
            view! {
                <div class=class>
                    <div class="step-number">{idx + 1}</div>
                    <div class="timeline-body">
                        <div class="timeline-head">
                            <NamedIcon name=icon size="20" />
                            <h3 class="card-title">{step.title}</h3>
                            {duration_badge(step.duration)}
                        </div>
                        <div class="grid grid-2">
                            <div class="panel panel-you">
                                <h4><Icon path=ICON_USER size="16" />"You provide"</h4>
                                {items(step.you)}
                            </div>
                            <div class="panel panel-us">
                                <h4><Icon path=ICON_USERS size="16" />"We deliver"</h4>
                                {items(step.us)}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="timeline narrow">{rows}</div> }
}

#[component]
pub fn ProcessSteps(ctx: SectionContext, content: ProcessStepsContent) -> impl IntoView {
    let variant = ProcessStepsVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "process".into()))
        .tone(Tone::Surface1);

    let body = match variant {
        ProcessStepsVariant::Matrix => view! { <MatrixTable steps=content.steps /> }.into_any(),
        ProcessStepsVariant::Horizontal => {
            view! { <HorizontalSteps steps=content.steps /> }.into_any()
        }
        ProcessStepsVariant::Vertical => view! { <VerticalSteps steps=content.steps /> }.into_any(),
    };

    let footnote = has_text(&content.footnote).then(|| view! {
        <p class="muted small narrow">{content.footnote}</p>
    });

    let location = ctx.kind.name().to_lowercase();
    let cta = content.cta.filter(ActionContent::is_present).map(|action| {
        view! {
            <ActionLink
                ctx=ctx.clone()
                action=action
                location=location
                class="btn btn-primary btn-lg"
            />
        }
    });

    view! {
        <SectionShell frame=frame>
            <SectionHeading title=content.title subtitle=content.subtitle />
            {body}
            <div class="text-center stack-md section-foot">
                {footnote}
                {cta}
            </div>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    fn props() -> serde_json::Value {
        json!({
            "title": "How it works",
            "steps": [
                { "title": "Kickoff", "you": ["Brief"], "us": ["Plan"], "duration": "1 week" },
                { "title": "Build", "you": ["Feedback"], "us": ["Pages", "Copy"] }
            ],
            "cta": { "text": "Start now", "type": "whatsapp", "prefillMessage": "Hi!" }
        })
    }

    #[test]
    fn matrix_is_a_table() {
        let html = render_json("ProcessSteps", None, props());
        assert!(html.contains("<table"));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("1 week"));
    }

    #[test]
    fn whatsapp_cta_uses_prefill_message() {
        let html = render_json("ProcessSteps", Some("vertical"), props());
        assert!(html.contains("https://wa.me/5511999999999?text=Hi%21"));
        assert!(html.contains(r#"data-track-location="processsteps""#));
        assert!(html.contains("timeline-connected"));
    }
}
