//! Pricing section - plan cards or a feature comparison table.

use std::collections::BTreeSet;

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ButtonContent, ClickTrack, CtaLink, ICON_CHECK, ICON_STAR, Icon, SectionContent, SectionFrame,
    SectionHeading, SectionShell, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Pricing layouts.
    pub enum PricingVariant {
        Centered => "centered",
        Grid => "grid",
        Comparison => "comparison",
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub button: Option<ButtonContent>,
    pub popular: bool,
}

/// Props of the `Pricing` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub plans: Vec<Plan>,
}

impl SectionContent for PricingContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "plans", self.plans.is_empty());
        missing
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let class = if plan.popular {
        "card pricing-card pricing-card-popular"
    } else {
        "card pricing-card"
    };
    let button_class = if plan.popular {
        "btn btn-primary btn-block"
    } else {
        "btn btn-outline btn-block"
    };
    let location = format!("pricing_{}", plan.name.to_lowercase().replace(' ', "_"));
    let plan_name = plan.name.clone();

    view! {
        <div class=class data-plan=plan_name>
            {plan.popular.then(|| view! {
                <span class="badge badge-popular">
                    <Icon path=ICON_STAR size="14" />
                    "Most popular"
                </span>
            })}
            <h3 class="card-title">{plan.name}</h3>
            <p class="price">
                <span class="price-amount">{plan.price}</span>
                {(!plan.period.is_empty()).then(|| view! {
                    <span class="price-period">"/" {plan.period}</span>
                })}
            </p>
            <p class="muted">{plan.description}</p>
            <ul class="checklist">
                {plan.features.into_iter().map(|f| view! {
                    <li><Icon path=ICON_CHECK size="16" class="icon icon-accent" /><span>{f}</span></li>
                }).collect::<Vec<_>>()}
            </ul>
            {plan.button.filter(ButtonContent::is_present).map(|b| view! {
                <CtaLink
                    href=b.href
                    text=b.text.clone()
                    class=button_class
                    track=ClickTrack::button(b.text, location)
                />
            })}
        </div>
    }
}

/// Plans as columns, every distinct feature as a row.
#[component]
fn ComparisonTable(plans: Vec<Plan>) -> impl IntoView {
    let mut seen = BTreeSet::new();
    let features: Vec<String> = plans
        .iter()
        .flat_map(|p| p.features.iter())
        .filter(|f| seen.insert(f.as_str()))
        .cloned()
        .collect();

    let rows = features
        .into_iter()
        .map(|feature| {
            let cells = plans
                .iter()
                .map(|plan| {
                    if plan.features.contains(&feature) {
                        view! { <td class="cell-yes"><Icon path=ICON_CHECK size="16" /></td> }.into_any()
                    } else {
                        view! { <td class="cell-no">"-"</td> }.into_any()
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <tr>
                    <th scope="row">{feature}</th>
                    {cells}
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let header = plans
        .iter()
        .map(|plan| {
            let class = if plan.popular { "plan-col plan-col-popular" } else { "plan-col" };
            view! {
                <th scope="col" class=class>
                    <div>{plan.name.clone()}</div>
                    <div class="price-amount">{plan.price.clone()}</div>
                </th>
            }
        })
        .collect::<Vec<_>>();

    let actions = plans
        .into_iter()
        .map(|plan| {
            let location = format!("pricing_{}", plan.name.to_lowercase().replace(' ', "_"));
            view! {
                <td>
                    {plan.button.filter(ButtonContent::is_present).map(|b| view! {
                        <CtaLink
                            href=b.href
                            text=b.text.clone()
                            class="btn btn-outline btn-sm"
                            track=ClickTrack::button(b.text, location)
                        />
                    })}
                </td>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="table-wrap">
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th scope="col"></th>
                        {header}
                    </tr>
                </thead>
                <tbody>
                    {rows}
                    <tr class="row-actions">
                        <td></td>
                        {actions}
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn Pricing(ctx: SectionContext, content: PricingContent) -> impl IntoView {
    let variant = PricingVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "pricing".into()));

    let body = match variant {
        PricingVariant::Comparison => view! { <ComparisonTable plans=content.plans /> }.into_any(),
        PricingVariant::Centered | PricingVariant::Grid => {
            let class = if variant == PricingVariant::Centered {
                "pricing-row justify-center"
            } else {
                "grid grid-3"
            };
            view! {
                <div class=class>
                    {content.plans.into_iter().map(|plan| view! { <PlanCard plan=plan /> }).collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
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

    fn props() -> serde_json::Value {
        json!({
            "title": "Plans",
            "plans": [
                { "name": "Basic", "price": "R$ 99", "period": "month",
                  "features": ["Landing page", "Support"],
                  "button": { "text": "Choose", "href": "#contato" } },
                { "name": "Pro", "price": "R$ 199", "popular": true,
                  "features": ["Landing page", "Analytics"] }
            ]
        })
    }

    #[test]
    fn popular_plan_is_highlighted() {
        let html = render_json("Pricing", None, props());
        assert_eq!(html.matches("pricing-card-popular").count(), 1);
        assert!(html.contains("Most popular"));
        assert!(html.contains(r#"data-track-location="pricing_basic""#));
        assert!(html.contains(r#"data-plan="Basic""#));
        assert!(html.contains(r#"<h3 class="card-title">Pro</h3>"#));
    }

    #[test]
    fn comparison_lists_each_feature_once() {
        let html = render_json("Pricing", Some("comparison"), props());
        assert_eq!(html.matches(">Landing page<").count(), 1);
        assert!(html.contains("Analytics"));
        assert!(html.contains("cell-no"));
    }
}
