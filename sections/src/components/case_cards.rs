//! Case cards - problem / intervention / result stories.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    Badge, ICON_ARROW_RIGHT, ICON_CLOCK, ICON_TRENDING_UP, Icon, SectionContent, SectionFrame,
    SectionHeading, SectionShell, Tone, has_text, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Case card layouts.
    pub enum CaseCardsVariant {
        Cards => "cards",
        List => "list",
    }
}

/// One case study. Field names follow the authored content format.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaseStudy {
    pub segmento: String,
    pub problema: String,
    pub intervencao: String,
    pub resultado: String,
    pub tempo: String,
    /// `measured` or `estimated`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Props of the `CaseCards` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaseCardsContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub cases: Vec<CaseStudy>,
    pub disclaimer: Option<String>,
}

impl SectionContent for CaseCardsContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "cases", self.cases.is_empty());
        missing
    }
}

#[component]
pub fn CaseCards(ctx: SectionContext, content: CaseCardsContent) -> impl IntoView {
    let variant = CaseCardsVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "cases".into()))
        .tone(Tone::GradientSoft);

    let list_class = match variant {
        CaseCardsVariant::Cards => "grid grid-3",
        CaseCardsVariant::List => "stack-lg narrow",
    };

    let cards = content
        .cases
        .into_iter()
        .map(|case| {
            let estimated = case.kind.as_deref() == Some("estimated");
            let segment = case.segmento.clone();
            view! {
                <article class="card case-card" data-track-view="case_card_view" data-case=segment>
                    <header class="case-head">
                        <Badge text=case.segmento />
                        {estimated.then(|| view! { <Badge text="Estimated" class="badge badge-warn" /> })}
                    </header>
                    <div class="case-block">
                        <h4 class="case-label case-label-problem">"Problem"</h4>
                        <p class="small">{case.problema}</p>
                    </div>
                    <div class="case-arrow"><Icon path=ICON_ARROW_RIGHT size="18" /></div>
                    <div class="case-block">
                        <h4 class="case-label">"What we did"</h4>
                        <p class="small">{case.intervencao}</p>
                    </div>
                    <div class="case-block">
                        <h4 class="case-label case-label-result">
                            <Icon path=ICON_TRENDING_UP size="16" />
                            "Result"
                        </h4>
                        <p class="small strong">{case.resultado}</p>
                    </div>
                    {(!case.tempo.trim().is_empty()).then(|| view! {
                        <footer class="case-foot muted small">
                            <Icon path=ICON_CLOCK size="16" />
                            <span>"Delivered in " {case.tempo}</span>
                        </footer>
                    })}
                </article>
            }
        })
        .collect::<Vec<_>>();

    let disclaimer = has_text(&content.disclaimer).then(|| view! {
        <p class="note note-warn">{content.disclaimer}</p>
    });

    view! {
        <SectionShell frame=frame>
            <SectionHeading title=content.title subtitle=content.subtitle />
            <div class=list_class>{cards}</div>
            {disclaimer}
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn renders_case_story_blocks() {
        let html = render_json(
            "CaseCards",
            None,
            json!({
                "title": "Cases",
                "cases": [{
                    "segmento": "Clinic",
                    "problema": "Lost leads",
                    "intervencao": "New funnel",
                    "resultado": "+30% bookings",
                    "tempo": "3 weeks",
                    "type": "estimated"
                }],
                "disclaimer": "Results vary"
            }),
        );
        assert!(html.contains("Lost leads"));
        assert!(html.contains("+30% bookings"));
        assert!(html.contains("Estimated"));
        assert!(html.contains("Results vary"));
        assert!(html.contains(r#"data-case="Clinic""#));
    }
}
