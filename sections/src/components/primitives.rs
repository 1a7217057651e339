//! Layout primitives shared by every section: the section shell, containers,
//! headings and call-to-action links.

use leptos::prelude::*;

use super::Icon;
use crate::assemble::SectionContext;
use crate::separator::Separator;

// =============================================================================
// Appearance
// =============================================================================

/// Background/foreground scheme of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Surface0,
    Surface1,
    Surface2,
    SolidPrimary,
    SolidSecondary,
    Gradient,
    GradientSoft,
}

impl Tone {
    /// Parse an authored tone, e.g. `"surface-1"`.
    pub fn parse(raw: &str) -> Option<Self> {
        Some(match raw {
            "surface-0" => Tone::Surface0,
            "surface-1" => Tone::Surface1,
            "surface-2" => Tone::Surface2,
            "solid-primary" => Tone::SolidPrimary,
            "solid-secondary" => Tone::SolidSecondary,
            "gradient" => Tone::Gradient,
            "gradient-soft" => Tone::GradientSoft,
            _ => return None,
        })
    }

    /// Map the older `background` + `accent` pair onto a tone.
    pub fn from_legacy(background: &str, accent: Option<&str>) -> Self {
        match background {
            "muted" => Tone::Surface1,
            "gradient" => Tone::GradientSoft,
            "primary" if accent == Some("secondary") => Tone::SolidSecondary,
            "primary" => Tone::SolidPrimary,
            _ => Tone::Surface0,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Tone::Surface0 => "tone-surface-0",
            Tone::Surface1 => "tone-surface-1",
            Tone::Surface2 => "tone-surface-2",
            Tone::SolidPrimary => "tone-solid-primary",
            Tone::SolidSecondary => "tone-solid-secondary",
            Tone::Gradient => "tone-gradient",
            Tone::GradientSoft => "tone-gradient-soft",
        }
    }

    /// Solid and gradient tones carry light text.
    pub fn is_dark(self) -> bool {
        matches!(
            self,
            Tone::SolidPrimary | Tone::SolidSecondary | Tone::Gradient
        )
    }
}

/// Decorative background pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pattern {
    #[default]
    None,
    Dots,
    Grid,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dots" => Pattern::Dots,
            "grid" => Pattern::Grid,
            _ => Pattern::None,
        }
    }

    pub(crate) fn class(self) -> Option<&'static str> {
        match self {
            Pattern::None => None,
            Pattern::Dots => Some("pattern pattern-dots"),
            Pattern::Grid => Some("pattern pattern-grid"),
        }
    }
}

/// Vertical padding scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl Padding {
    fn class(self) -> &'static str {
        match self {
            Padding::Sm => "pad-sm",
            Padding::Md => "pad-md",
            Padding::Lg => "pad-lg",
            Padding::Xl => "pad-xl",
        }
    }
}

/// Maximum content width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Width {
    Narrow,
    #[default]
    Normal,
    Wide,
    Full,
}

impl Width {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Width::Narrow => "container container-narrow",
            Width::Normal => "container",
            Width::Wide => "container container-wide",
            Width::Full => "container container-full",
        }
    }
}

// =============================================================================
// Section shell
// =============================================================================

/// Everything the outer `<section>` element needs.
#[derive(Clone, Debug)]
pub struct SectionFrame {
    pub(crate) key: String,
    pub(crate) component: &'static str,
    pub(crate) variant: &'static str,
    pub(crate) separator: Separator,
    pub(crate) id: Option<String>,
    pub(crate) tone: Tone,
    pub(crate) pattern: Pattern,
    pub(crate) padding: Padding,
    pub(crate) width: Width,
    pub(crate) class: &'static str,
}

impl SectionFrame {
    /// Frame for `ctx` rendering the resolved `variant`.
    pub fn new(ctx: &SectionContext, variant: &'static str) -> Self {
        Self {
            key: ctx.key(),
            component: ctx.kind.name(),
            variant,
            separator: ctx.separator,
            id: None,
            tone: Tone::default(),
            pattern: Pattern::default(),
            padding: Padding::default(),
            width: Width::default(),
            class: "",
        }
    }

    /// Anchor id; blank ids are dropped.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = (!id.trim().is_empty()).then_some(id);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Apply authored `tone` / legacy `background` values. `background` wins,
    /// unknown tones keep the current one.
    pub fn appearance(
        mut self,
        tone: Option<&str>,
        background: Option<&str>,
        pattern: Option<&str>,
    ) -> Self {
        if let Some(background) = background {
            self.tone = Tone::from_legacy(background, None);
        } else if let Some(tone) = tone.and_then(Tone::parse) {
            self.tone = tone;
        }
        if let Some(pattern) = pattern {
            self.pattern = Pattern::parse(pattern);
        }
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Extra component class on the `<section>`.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub(crate) fn section_class(&self, base: &'static str) -> String {
        let mut classes = vec![base, self.padding.class(), self.tone.class()];
        if self.tone.is_dark() {
            classes.push("on-dark");
        }
        if let Some(sep) = self.separator.class() {
            classes.push(sep);
        }
        if !self.class.is_empty() {
            classes.push(self.class);
        }
        classes.join(" ")
    }
}

/// Outer wrapper of every section: tone, padding, pattern and the separator
/// boundary drawn at the bottom edge.
#[component]
pub fn SectionShell(frame: SectionFrame, children: Children) -> impl IntoView {
    let class = frame.section_class("section");
    let separator = frame.separator;
    let pattern = frame.pattern.class();

    view! {
        <section
            id=frame.id
            class=class
            data-section=frame.key
            data-component=frame.component
            data-variant=frame.variant
            data-separator=separator.as_str()
        >
            {pattern.map(|class| view! { <div class=class aria-hidden="true"></div> })}
            <div class=frame.width.class()>{children()}</div>
            <SeparatorShape separator=separator />
        </section>
    }
}

/// Bottom boundary SVG for a separator; nothing for `none`.
#[component]
pub fn SeparatorShape(separator: Separator) -> impl IntoView {
    separator.svg_path().map(|path| {
        view! {
            <svg
                class="separator-shape"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 1440 80"
                preserveAspectRatio="none"
                aria-hidden="true"
            >
                <path d=path fill="currentColor"></path>
            </svg>
        }
    })
}

/// Centered content column.
#[component]
pub fn Container(
    #[prop(default = Width::Normal)] width: Width,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        width.class().to_string()
    } else {
        format!("{} {}", width.class(), class)
    };
    view! { <div class=class>{children()}</div> }
}

// =============================================================================
// Headings
// =============================================================================

/// Heading at `level` 1..=6. Size follows the level; out-of-range levels
/// render as `h2`.
#[component]
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = false)] centered: bool,
    #[prop(into)] text: String,
) -> impl IntoView {
    let size = match level {
        1 => "heading-hero",
        2 => "heading-xl",
        3 => "heading-lg",
        4 => "heading-md",
        5 => "heading-sm",
        _ => "heading-xs",
    };
    let class = if centered {
        format!("heading {} text-center", size)
    } else {
        format!("heading {}", size)
    };

    match level {
        1 => view! { <h1 class=class>{text}</h1> }.into_any(),
        3 => view! { <h3 class=class>{text}</h3> }.into_any(),
        4 => view! { <h4 class=class>{text}</h4> }.into_any(),
        5 => view! { <h5 class=class>{text}</h5> }.into_any(),
        6 => view! { <h6 class=class>{text}</h6> }.into_any(),
        _ => view! { <h2 class=class>{text}</h2> }.into_any(),
    }
}

/// Standard section intro: `h2` title plus an optional lead paragraph.
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] subtitle: Option<String>,
    #[prop(default = true)] centered: bool,
) -> impl IntoView {
    let class = if centered {
        "section-heading text-center"
    } else {
        "section-heading"
    };
    view! {
        <div class=class>
            <Heading level=2 centered=centered text=title />
            {subtitle
                .filter(|s| !s.trim().is_empty())
                .map(|s| view! { <p class="lead">{s}</p> })}
        </div>
    }
}

/// Small pill label.
#[component]
pub fn Badge(#[prop(into)] text: String, #[prop(default = "badge")] class: &'static str) -> impl IntoView {
    view! { <span class=class>{text}</span> }
}

// =============================================================================
// Call-to-action links
// =============================================================================

/// Analytics event a link declares for the glue script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickTrack {
    /// Event name, e.g. `whatsapp_click`.
    pub event: &'static str,
    /// Where on the page the click happened.
    pub location: String,
    /// Optional button label for `button_click`.
    pub label: Option<String>,
}

impl ClickTrack {
    pub fn whatsapp(location: impl Into<String>) -> Self {
        Self {
            event: "whatsapp_click",
            location: location.into(),
            label: None,
        }
    }

    pub fn phone(location: impl Into<String>) -> Self {
        Self {
            event: "phone_click",
            location: location.into(),
            label: None,
        }
    }

    pub fn button(label: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            event: "button_click",
            location: location.into(),
            label: Some(label.into()),
        }
    }
}

/// An anchor styled as a button.
///
/// The URL is final at render time, so the click navigates on its own; the
/// optional [`ClickTrack`] only adds `data-track*` attributes.
#[component]
pub fn CtaLink(
    #[prop(into)] href: String,
    #[prop(into)] text: String,
    #[prop(default = "btn btn-primary")] class: &'static str,
    #[prop(optional)] track: Option<ClickTrack>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(default = false)] external: bool,
) -> impl IntoView {
    let (event, location, label) = match track {
        Some(t) => (Some(t.event), Some(t.location), t.label),
        None => (None, None, None),
    };

    view! {
        <a
            href=href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            data-track=event
            data-track-location=location
            data-track-label=label
        >
            {icon.map(|path| view! { <Icon path=path size="18" /> })}
            <span>{text}</span>
        </a>
    }
}

/// Resolve where an [`ActionContent`](super::ActionContent) points.
pub fn action_href(ctx: &SectionContext, action: &super::ActionContent) -> String {
    match action.kind {
        super::ActionKind::Whatsapp => {
            let message = action
                .prefill_message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(ctx.default_message());
            ctx.whatsapp_href(message)
        }
        super::ActionKind::Href => action.href.clone().unwrap_or_else(|| "#".to_string()),
    }
}

/// Link for an [`ActionContent`](super::ActionContent), tracked as a chat
/// click when it opens WhatsApp and as a button click otherwise.
#[component]
pub fn ActionLink(
    ctx: SectionContext,
    action: super::ActionContent,
    #[prop(into)] location: String,
    #[prop(default = "btn btn-primary")] class: &'static str,
) -> impl IntoView {
    let href = action_href(&ctx, &action);
    let (track, icon, external) = match action.kind {
        super::ActionKind::Whatsapp => (
            ClickTrack::whatsapp(location),
            super::ICON_MESSAGE_CIRCLE,
            true,
        ),
        super::ActionKind::Href => (
            ClickTrack::button(action.text.clone(), location),
            super::ICON_ARROW_RIGHT,
            false,
        ),
    };

    view! {
        <CtaLink
            href=href
            text=action.text
            class=class
            track=track
            icon=icon
            external=external
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_background_maps_onto_tones() {
        assert_eq!(Tone::from_legacy("muted", None), Tone::Surface1);
        assert_eq!(Tone::from_legacy("gradient", None), Tone::GradientSoft);
        assert_eq!(Tone::from_legacy("primary", None), Tone::SolidPrimary);
        assert_eq!(
            Tone::from_legacy("primary", Some("secondary")),
            Tone::SolidSecondary
        );
        assert_eq!(Tone::from_legacy("default", None), Tone::Surface0);
    }

    #[test]
    fn unknown_tone_is_rejected() {
        assert_eq!(Tone::parse("surface-2"), Some(Tone::Surface2));
        assert_eq!(Tone::parse("neon"), None);
        assert_eq!(Pattern::parse("stripes"), Pattern::None);
    }
}
