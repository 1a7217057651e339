//! Features section - icon + title + description tiles.

use leptos::prelude::*;
use serde::Deserialize;

use super::{NamedIcon, SectionContent, SectionFrame, SectionHeading, SectionShell, require};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Features layouts.
    pub enum FeaturesVariant {
        Grid => "grid",
        List => "list",
        Alternating => "alternating",
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

/// Props of the `Features` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeaturesContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub features: Vec<FeatureItem>,
}

impl SectionContent for FeaturesContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "features", self.features.is_empty());
        missing
    }
}

#[component]
pub fn Features(ctx: SectionContext, content: FeaturesContent) -> impl IntoView {
    let variant = FeaturesVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "features".into()));

    let items = content
        .features
        .into_iter()
        .enumerate()
        .map(|(idx, feature)| {
            let icon = feature.icon.unwrap_or_default();
            match variant {
                FeaturesVariant::Grid => view! {
                    <div class="card feature-card">
                        <div class="icon-badge"><NamedIcon name=icon size="24" /></div>
                        <h3 class="card-title">{feature.title}</h3>
                        <p class="muted">{feature.description}</p>
                    </div>
                }
                .into_any(),
                FeaturesVariant::List => view! {
                    <div class="feature-row">
                        <div class="icon-badge"><NamedIcon name=icon size="24" /></div>
                        <div>
                            <h3 class="card-title">{feature.title}</h3>
                            <p class="muted">{feature.description}</p>
                        </div>
                    </div>
                }
                .into_any(),
                FeaturesVariant::Alternating => {
                    let row_class = if idx % 2 == 0 {
                        "feature-alt"
                    } else {
                        "feature-alt feature-alt-reverse"
                    };
                    view! {
                        <div class=row_class>
                            <div class="feature-alt-media">
                                <NamedIcon name=icon size="48" />
                            </div>
                            <div class="feature-alt-text">
                                <h3 class="heading heading-lg">{feature.title}</h3>
                                <p class="lead">{feature.description}</p>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }
        })
        .collect::<Vec<_>>();

    let list_class = match variant {
        FeaturesVariant::Grid => "grid grid-3",
        FeaturesVariant::List => "stack-md narrow",
        FeaturesVariant::Alternating => "stack-xl",
    };

    view! {
        <SectionShell frame=frame>
            <SectionHeading title=content.title subtitle=content.subtitle />
            <div class=list_class>{items}</div>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::render_json;
    use serde_json::json;

    fn props() -> serde_json::Value {
        json!({
            "title": "Why us",
            "features": [
                { "icon": "Zap", "title": "Fast", "description": "Ships in days" },
                { "title": "Safe", "description": "No surprises" }
            ]
        })
    }

    #[test]
    fn renders_every_feature_in_order() {
        let html = render_json("Features", None, props());
        let fast = html.find("Fast").unwrap();
        let safe = html.find("Safe").unwrap();
        assert!(fast < safe);
        assert!(html.contains(r#"id="features""#));
    }

    #[test]
    fn alternating_reverses_odd_rows() {
        let html = render_json("Features", Some("alternating"), props());
        assert!(html.contains("feature-alt-reverse"));
        assert_eq!(html.matches("feature-alt-media").count(), 2);
    }
}
