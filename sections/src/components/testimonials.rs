//! Testimonials section - quotes with star ratings.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ICON_STAR, Icon, SectionContent, SectionFrame, SectionHeading, SectionShell, Tone, has_text,
    require,
};
use crate::assemble::SectionContext;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Testimonials layouts. `carousel` renders as the grid.
    pub enum TestimonialsVariant {
        Grid => "grid",
        Carousel => "carousel",
        Single => "single",
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub avatar: Option<String>,
    /// Stars out of five; fractional values round to the nearest star.
    pub rating: f64,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            content: String::new(),
            author: String::new(),
            role: None,
            company: None,
            avatar: None,
            rating: 5.0,
        }
    }
}

impl Testimonial {
    fn stars(&self) -> usize {
        self.rating.round().clamp(0.0, 5.0) as usize
    }

    /// `role • company`, or whichever of the two is present.
    fn byline(&self) -> Option<String> {
        match (has_text(&self.role), has_text(&self.company)) {
            (true, true) => Some(format!(
                "{} • {}",
                self.role.as_deref().unwrap_or_default(),
                self.company.as_deref().unwrap_or_default()
            )),
            (true, false) => self.role.clone(),
            (false, true) => self.company.clone(),
            (false, false) => None,
        }
    }
}

/// Props of the `Testimonials` component.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TestimonialsContent {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub testimonials: Vec<Testimonial>,
}

impl SectionContent for TestimonialsContent {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "title", self.title.trim().is_empty());
        require(&mut missing, "testimonials", self.testimonials.is_empty());
        missing
    }
}

#[component]
fn Stars(filled: usize) -> impl IntoView {
    let label = format!("{} out of 5 stars", filled);
    view! {
        <div class="stars" role="img" aria-label=label>
            {(0..5)
                .map(|i| {
                    let class = if i < filled { "icon star star-on" } else { "icon star star-off" };
                    view! { <Icon path=ICON_STAR size="18" class=class /> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn Testimonials(ctx: SectionContext, content: TestimonialsContent) -> impl IntoView {
    let variant = TestimonialsVariant::parse(ctx.variant.as_deref());
    let frame = SectionFrame::new(&ctx, variant.name())
        .id(content.id.unwrap_or_else(|| "testimonials".into()))
        .tone(Tone::Surface1);

    let list_class = match variant {
        TestimonialsVariant::Grid | TestimonialsVariant::Carousel => "grid grid-3",
        TestimonialsVariant::Single => "stack-lg narrow",
    };

    let cards = content
        .testimonials
        .into_iter()
        .map(|t| {
            let stars = t.stars();
            let byline = t.byline();
            let avatar = t.avatar.clone().filter(|a| !a.is_empty());
            view! {
                <figure class="card testimonial-card">
                    <Stars filled=stars />
                    <blockquote class="quote">"\u{201c}" {t.content} "\u{201d}"</blockquote>
                    <figcaption class="testimonial-author">
                        {avatar.map(|src| view! {
                            <img src=src alt=t.author.clone() class="avatar" />
                        })}
                        <div>
                            <div class="author-name">{t.author.clone()}</div>
                            {byline.map(|b| view! { <div class="muted small">{b}</div> })}
                        </div>
                    </figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <SectionShell frame=frame>
            <SectionHeading title=content.title subtitle=content.subtitle />
            <div class=list_class>{cards}</div>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn rating_is_clamped_and_rounded() {
        let t = Testimonial { rating: 4.6, ..Default::default() };
        assert_eq!(t.stars(), 5);
        let t = Testimonial { rating: -2.0, ..Default::default() };
        assert_eq!(t.stars(), 0);
        let t = Testimonial { rating: 9.0, ..Default::default() };
        assert_eq!(t.stars(), 5);
    }

    #[test]
    fn carousel_renders_like_grid_layout() {
        let props = json!({
            "title": "Clients",
            "testimonials": [{ "content": "Great", "author": "Ana", "rating": 3 }]
        });
        let html = render_json("Testimonials", Some("carousel"), props);
        assert!(html.contains("grid grid-3"));
        assert_eq!(html.matches("star-on").count(), 3);
        assert!(html.contains("3 out of 5 stars"));
    }

    #[test]
    fn byline_joins_role_and_company() {
        let t = Testimonial {
            role: Some("CEO".into()),
            company: Some("Acme".into()),
            ..Default::default()
        };
        assert_eq!(t.byline().as_deref(), Some("CEO • Acme"));
        let t = Testimonial { company: Some("Acme".into()), ..Default::default() };
        assert_eq!(t.byline().as_deref(), Some("Acme"));
    }
}
