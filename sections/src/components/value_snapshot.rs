//! Value snapshot - a strip of headline KPIs.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    Badge, ICON_CLOCK, ICON_SHIELD, ICON_TRENDING_UP, ICON_USERS, Icon, SectionContent,
    SectionFrame, SectionHeading, SectionShell, has_text, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Value snapshot layouts.
    pub enum ValueSnapshotVariant {
        Grid => "grid",
        Row => "row",
    }
}

const KPI_ICONS: [&str; 4] = [ICON_TRENDING_UP, ICON_USERS, ICON_CLOCK, ICON_SHIELD];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    /// `measured` or `estimated`.
    pub mode: Option<String>,
    pub description: Option<String>,
}

impl Kpi {
    pub fn is_estimated(&self) -> bool {
        self.mode.as_deref() == Some("estimated")
    }
}

/// Props of the `ValueSnapshot` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValueSnapshotContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub kpis: Vec<Kpi>,
    pub note: Option<String>,
}

impl SectionContent for ValueSnapshotContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "kpis", self.kpis.is_empty());
        missing
    }
}

#[component]
pub fn ValueSnapshot(ctx: SectionContext, content: ValueSnapshotContent) -> impl IntoView {
    let variant = ValueSnapshotVariant::parse(ctx.variant.as_deref());
    let mut frame = SectionFrame::new(&ctx, variant.name());
    if let Some(id) = content.id {
        frame = frame.id(id);
    }

    let grid_class = match variant {
        ValueSnapshotVariant::Grid => "grid grid-4",
        ValueSnapshotVariant::Row => "grid grid-3",
    };

    let kpis = content
        .kpis
        .into_iter()
        .enumerate()
        .map(|(idx, kpi)| {
            let estimated = kpi.is_estimated();
            view! {
                <div class="card kpi-card">
                    <div class="kpi-head">
                        <div class="icon-badge">
                            <Icon path=KPI_ICONS[idx % KPI_ICONS.len()] size="24" />
                        </div>
                        {estimated.then(|| view! { <Badge text="Estimate" class="badge badge-warn" /> })}
                    </div>
                    <div class="kpi-value">{kpi.value}</div>
                    <div class="kpi-label">{kpi.label}</div>
                    {kpi.description.filter(|d| !d.trim().is_empty()).map(|d| view! {
                        <div class="muted small">{d}</div>
                    })}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let note = has_text(&content.note).then(|| view! {
        <p class="note">{content.note}</p>
    });

    view! {
        <SectionShell frame=frame>
            <SectionHeading title=content.title subtitle=content.subtitle />
            <div class=grid_class>{kpis}</div>
            {note}
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn estimated_kpis_are_badged() {
        let html = render_json(
            "ValueSnapshot",
            Some("row"),
            json!({
                "title": "Numbers",
                "kpis": [
                    { "label": "Leads", "value": "+40%", "mode": "measured" },
                    { "label": "Time saved", "value": "12h", "mode": "estimated" }
                ],
                "note": "Based on 2024 clients"
            }),
        );
        assert_eq!(html.matches("Estimate<").count(), 1);
        assert!(html.contains("+40%"));
        assert!(html.contains("Based on 2024 clients"));
        assert!(html.contains("grid grid-3"));
    }
}
