//! Leptos UI components for landing-page sections.
//!
//! Each registered component is a `#[component]` function taking the
//! [`SectionContext`] and a typed content struct decoded from the props bag.
//! Content structs are `#[serde(default)]` all the way down, so absent
//! optional fields simply turn their sub-section off. Mistyped fields and
//! list items are dropped one by one rather than failing the whole bag.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── section (per rendered entry, pre-rendered HTML)
//!     └── SectionShell (tone, padding, pattern, separator)
//!         ├── Container
//!         ├── SectionHeading
//!         └── component body (Hero, Features, Pricing, ...)
//! ```

mod case_cards;
mod consultative_demo;
mod cta;
mod decode;
mod document;
mod faq;
mod features;
mod footer;
mod hero;
mod icons;
mod pricing;
mod primitives;
mod process_steps;
mod process_timeline;
mod services;
mod site_footer;
mod site_header;
mod testimonials;
mod value_snapshot;

pub use case_cards::{CaseCards, CaseCardsContent};
pub use consultative_demo::{ConsultativeDemo, ConsultativeDemoContent};
pub use cta::{Cta, CtaContent};
pub use document::PageDocument;
pub use faq::{Faq, FaqContent};
pub use features::{Features, FeaturesContent};
pub use footer::{Footer, FooterContent};
pub use hero::{Hero, HeroContent};
pub use icons::*;
pub use pricing::{Pricing, PricingContent};
pub use primitives::*;
pub use process_steps::{ProcessStep, ProcessSteps, ProcessStepsContent};
pub use process_timeline::{ProcessTimeline, ProcessTimelineContent};
pub use services::{Services, ServicesContent};
pub use site_footer::{SiteFooter, SiteFooterContent};
pub use site_header::{SiteHeader, SiteHeaderContent};
pub use testimonials::{Testimonials, TestimonialsContent};
pub use value_snapshot::{ValueSnapshot, ValueSnapshotContent};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use self::decode::{Decoded, decode_props};
use crate::assemble::SectionContext;
use crate::registry::ComponentKind;

/// Typed props of one section component.
pub trait SectionContent: DeserializeOwned + Default {
    /// Names of required fields that are empty or absent, in declaration order.
    fn missing_required(&self) -> Vec<&'static str>;
}

/// Problem found while decoding a props bag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropsIssue {
    /// Part of the props did not deserialize and was dropped or coerced.
    Invalid(String),
    /// Required field empty or absent.
    Missing(&'static str),
}

/// Markup of one section plus whatever its props got wrong.
#[derive(Clone, Debug, Default)]
pub struct SectionOutput {
    pub html: String,
    pub issues: Vec<PropsIssue>,
}

/// Decode `props` for `ctx.kind` and render the matching component.
pub fn render_section(ctx: SectionContext, props: &Map<String, Value>) -> SectionOutput {
    match ctx.kind {
        ComponentKind::Hero => render_with(ctx, props, |ctx, content: HeroContent| {
            view! { <Hero ctx=ctx content=content /> }
        }),
        ComponentKind::Features => render_with(ctx, props, |ctx, content: FeaturesContent| {
            view! { <Features ctx=ctx content=content /> }
        }),
        ComponentKind::Services => render_with(ctx, props, |ctx, content: ServicesContent| {
            view! { <Services ctx=ctx content=content /> }
        }),
        ComponentKind::Pricing => render_with(ctx, props, |ctx, content: PricingContent| {
            view! { <Pricing ctx=ctx content=content /> }
        }),
        ComponentKind::Testimonials => {
            render_with(ctx, props, |ctx, content: TestimonialsContent| {
                view! { <Testimonials ctx=ctx content=content /> }
            })
        }
        ComponentKind::Faq => render_with(ctx, props, |ctx, content: FaqContent| {
            view! { <Faq ctx=ctx content=content /> }
        }),
        ComponentKind::Cta => render_with(ctx, props, |ctx, content: CtaContent| {
            view! { <Cta ctx=ctx content=content /> }
        }),
        ComponentKind::ValueSnapshot => {
            render_with(ctx, props, |ctx, content: ValueSnapshotContent| {
                view! { <ValueSnapshot ctx=ctx content=content /> }
            })
        }
        ComponentKind::CaseCards => render_with(ctx, props, |ctx, content: CaseCardsContent| {
            view! { <CaseCards ctx=ctx content=content /> }
        }),
        ComponentKind::ProcessSteps => {
            render_with(ctx, props, |ctx, content: ProcessStepsContent| {
                view! { <ProcessSteps ctx=ctx content=content /> }
            })
        }
        ComponentKind::ProcessTimeline => {
            render_with(ctx, props, |ctx, content: ProcessTimelineContent| {
                view! { <ProcessTimeline ctx=ctx content=content /> }
            })
        }
        ComponentKind::ConsultativeDemo => {
            render_with(ctx, props, |ctx, content: ConsultativeDemoContent| {
                view! { <ConsultativeDemo ctx=ctx content=content /> }
            })
        }
        ComponentKind::Footer => render_with(ctx, props, |ctx, content: FooterContent| {
            view! { <Footer ctx=ctx content=content /> }
        }),
        ComponentKind::SiteHeader => render_with(ctx, props, |ctx, content: SiteHeaderContent| {
            view! { <SiteHeader ctx=ctx content=content /> }
        }),
        ComponentKind::SiteFooter => render_with(ctx, props, |ctx, content: SiteFooterContent| {
            view! { <SiteFooter ctx=ctx content=content /> }
        }),
    }
}

fn render_with<C, V>(
    ctx: SectionContext,
    props: &Map<String, Value>,
    draw: impl FnOnce(SectionContext, C) -> V,
) -> SectionOutput
where
    C: SectionContent,
    V: RenderHtml,
{
    let mut issues = Vec::new();

    let Decoded { content, repaired } = decode_props::<C>(props, &mut issues);
    issues.extend(
        content
            .missing_required()
            .into_iter()
            .filter(|field| !repaired.contains(*field))
            .map(PropsIssue::Missing),
    );

    SectionOutput {
        html: draw(ctx, content).to_html(),
        issues,
    }
}

// =============================================================================
// Shared content shapes
// =============================================================================

/// A plain link button: `{ text, href }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ButtonContent {
    pub text: String,
    pub href: String,
}

impl ButtonContent {
    /// A button without text is not worth drawing.
    pub fn is_present(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// An image reference: `{ src, alt }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
}

/// Where a call-to-action leads.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Opens a chat with the site's WhatsApp number.
    #[default]
    Whatsapp,
    /// Follows `href` as-is.
    Href,
}

/// A call-to-action that is either a chat link or a plain link.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionContent {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub href: Option<String>,
    pub prefill_message: Option<String>,
}

impl ActionContent {
    pub fn is_present(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// `true` if an optional string carries visible text.
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Push `name` onto `missing` when `empty`.
pub(crate) fn require(missing: &mut Vec<&'static str>, name: &'static str, empty: bool) {
    if empty {
        missing.push(name);
    }
}
