//! Hero section - the first screen of the page.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ButtonContent, ClickTrack, CtaLink, Heading, ICON_ARROW_RIGHT, ICON_PLAY, ImageContent, Padding,
    SectionContent, SectionFrame, SectionShell, Tone, Width, has_text, require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Hero layouts.
    pub enum HeroVariant {
        Centered => "centered",
        LeftAligned => "left-aligned",
        Split => "split",
    }
}

/// Props of the `Hero` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub primary_button: Option<ButtonContent>,
    pub secondary_button: Option<ButtonContent>,
    pub image: Option<ImageContent>,
}

impl SectionContent for HeroContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        missing
    }
}

#[component]
pub fn Hero(ctx: SectionContext, content: HeroContent) -> impl IntoView {
    let variant = HeroVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.clone().unwrap_or_else(|| "hero".into()))
        .tone(Tone::Gradient)
        .padding(Padding::Xl)
        .width(Width::Wide)
        .class("hero");

    let align = match variant {
        HeroVariant::Centered => "hero-content text-center",
        HeroVariant::LeftAligned => "hero-content text-left",
        HeroVariant::Split => "hero-content text-left hero-content-split",
    };
    let actions_class = match variant {
        HeroVariant::Centered => "hero-actions justify-center",
        _ => "hero-actions justify-start",
    };

    let primary = content.primary_button.filter(ButtonContent::is_present);
    let secondary = content.secondary_button.filter(ButtonContent::is_present);
    let has_actions = primary.is_some() || secondary.is_some();

    let body = view! {
        <div class=align>
            {has_text(&content.subtitle).then(|| view! {
                <p class="eyebrow">{content.subtitle.clone()}</p>
            })}
            <Heading level=1 text=content.title.clone() />
            {has_text(&content.description).then(|| view! {
                <p class="lead">{content.description.clone()}</p>
            })}
            {has_actions.then(|| view! {
                <div class=actions_class>
                    {primary.map(|b| view! {
                        <CtaLink
                            href=b.href
                            text=b.text.clone()
                            class="btn btn-hero"
                            track=ClickTrack::button(b.text, "hero")
                            icon=ICON_ARROW_RIGHT
                        />
                    })}
                    {secondary.map(|b| view! {
                        <CtaLink
                            href=b.href
                            text=b.text.clone()
                            class="btn btn-secondary"
                            track=ClickTrack::button(b.text, "hero")
                            icon=ICON_PLAY
                        />
                    })}
                </div>
            })}
        </div>
    };

    let image = content.image.filter(|i| !i.src.is_empty()).map(|image| view! {
        <div class="hero-media">
            <img src=image.src alt=image.alt class="hero-image" />
        </div>
    });

    view! {
        <SectionShell frame=frame>
            {match variant {
                HeroVariant::Split => view! {
                    <div class="grid grid-2 items-center">
                        <div>{body}</div>
                        {image}
                    </div>
                }.into_any(),
                _ => view! {
                    <div class="stack-lg">
                        {body}
                        {image}
                    </div>
                }.into_any(),
            }}
        </SectionShell>
    }
}
