//! Services section - offerings with bullet lists and optional images.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ICON_CHECK, Icon, SectionContent, SectionFrame, SectionHeading, SectionShell, Tone, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Services layouts.
    pub enum ServicesVariant {
        Alternating => "alternating",
        Grid => "grid",
        Stack => "stack",
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    /// Image URL; the service title doubles as alt text.
    pub image: Option<String>,
}

/// Props of the `Services` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServicesContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub services: Vec<ServiceItem>,
}

impl SectionContent for ServicesContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "services", self.services.is_empty());
        missing
    }
}

fn checklist(items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <ul class="checklist">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <li><Icon path=ICON_CHECK size="16" class="icon icon-accent" /><span>{item}</span></li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
    })
}

#[component]
pub fn Services(ctx: SectionContext, content: ServicesContent) -> impl IntoView {
    let variant = ServicesVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "services".into()))
        .tone(Tone::Surface1);

    let items = content
        .services
        .into_iter()
        .enumerate()
        .map(|(idx, service)| {
            let image = service
                .image
                .filter(|src| !src.is_empty())
                .map(|src| view! { <img src=src alt=service.title.clone() class="service-image" /> });

            match variant {
                ServicesVariant::Alternating => {
                    let class = if idx % 2 == 0 {
                        "service-alt"
                    } else {
                        "service-alt service-alt-reverse"
                    };
                    view! {
                        <div class=class>
                            <div class="service-text">
                                <h3 class="heading heading-lg">{service.title}</h3>
                                <p class="lead">{service.description}</p>
                                {checklist(service.features)}
                            </div>
                            <div class="service-media">{image}</div>
                        </div>
                    }
                    .into_any()
                }
                ServicesVariant::Grid => view! {
                    <div class="card service-card">
                        {image}
                        <h3 class="card-title">{service.title}</h3>
                        <p class="muted">{service.description}</p>
                        {checklist(service.features)}
                    </div>
                }
                .into_any(),
                ServicesVariant::Stack => view! {
                    <div class="service-stack">
                        <h3 class="heading heading-md">{service.title}</h3>
                        <p class="muted">{service.description}</p>
                        {checklist(service.features)}
                    </div>
                }
                .into_any(),
            }
        })
        .collect::<Vec<_>>();

    let list_class = match variant {
        ServicesVariant::Alternating => "stack-xl",
        ServicesVariant::Grid => "grid grid-3",
        ServicesVariant::Stack => "stack-lg narrow",
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

    #[test]
    fn stack_drops_images() {
        let html = render_json(
            "Services",
            Some("stack"),
            json!({
                "title": "Services",
                "services": [{
                    "title": "Audit",
                    "description": "We look at everything",
                    "features": ["Report", "Call"],
                    "image": "/audit.png"
                }]
            }),
        );
        assert!(html.contains("Audit"));
        assert!(html.contains("<li>"));
        assert!(!html.contains("/audit.png"));
    }

    #[test]
    fn empty_feature_list_renders_no_checklist() {
        let html = render_json(
            "Services",
            Some("grid"),
            json!({ "title": "S", "services": [{ "title": "A", "description": "B" }] }),
        );
        assert!(!html.contains("checklist"));
    }
}
