//! Process timeline - older step format, rendered through [`ProcessSteps`].
//!
//! Each `{ titulo, voce, nos, prazo }` step becomes a single-item process
//! step. Unknown variants fall back to `horizontal` like every other
//! component.

use leptos::prelude::*;
use serde::Deserialize;

use super::{ProcessStep, ProcessSteps, ProcessStepsContent, SectionContent, require};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Timeline layouts, a subset of the process step layouts.
    pub enum ProcessTimelineVariant {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

/// A step in the older authored format.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineStep {
    pub titulo: String,
    pub voce: String,
    pub nos: String,
    pub prazo: String,
}

impl From<TimelineStep> for ProcessStep {
    fn from(step: TimelineStep) -> Self {
        let single = |s: String| if s.trim().is_empty() { Vec::new() } else { vec![s] };
        ProcessStep {
            title: step.titulo,
            you: single(step.voce),
            us: single(step.nos),
            duration: (!step.prazo.trim().is_empty()).then_some(step.prazo),
            icon: None,
        }
    }
}

/// Props of the `ProcessTimeline` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessTimelineContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub steps: Vec<TimelineStep>,
    pub note: Option<String>,
}

impl SectionContent for ProcessTimelineContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "steps", self.steps.is_empty());
        missing
    }
}

impl From<ProcessTimelineContent> for ProcessStepsContent {
    fn from(content: ProcessTimelineContent) -> Self {
        ProcessStepsContent {
            id: content.id,
            title: content.title,
            subtitle: content.subtitle,
            steps: content.steps.into_iter().map(ProcessStep::from).collect(),
            footnote: content.note,
            cta: None,
        }
    }
}

#[component]
pub fn ProcessTimeline(ctx: SectionContext, content: ProcessTimelineContent) -> impl IntoView {
    let variant = ProcessTimelineVariant::parse(ctx.variant.as_deref());
    let ctx = SectionContext {
        variant: Some(variant.name().to_string()),
        ..ctx
    };
    view! { <ProcessSteps ctx=ctx content=content.into() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn converts_single_value_steps() {
        let step = ProcessStep::from(TimelineStep {
            titulo: "Kickoff".into(),
            voce: "Brief".into(),
            nos: String::new(),
            prazo: "2 days".into(),
        });
        assert_eq!(step.title, "Kickoff");
        assert_eq!(step.you, vec!["Brief".to_string()]);
        assert!(step.us.is_empty());
        assert_eq!(step.duration.as_deref(), Some("2 days"));
    }

    #[test]
    fn delegates_to_process_steps_layouts() {
        let props = json!({
            "title": "Timeline",
            "steps": [{ "titulo": "One", "voce": "a", "nos": "b", "prazo": "1d" }],
            "note": "Approximate"
        });
        let vertical = render_json("ProcessTimeline", Some("vertical"), props.clone());
        assert!(vertical.contains("timeline-row"));
        assert!(vertical.contains("Approximate"));
        assert!(vertical.contains(r#"data-component="ProcessTimeline""#));

        let fallback = render_json("ProcessTimeline", Some("matrix"), props);
        assert!(fallback.contains(r#"data-variant="horizontal""#));
        assert!(!fallback.contains("<table"));
    }
}
