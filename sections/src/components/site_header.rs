//! Site header with brand, anchor navigation and contact buttons.
//!
//! The mobile menu is closed in the markup; the glue script toggles it
//! through `data-menu-toggle` / `data-menu`, scoped to this header.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ClickTrack, Container, CtaLink, ICON_MENU, ICON_MESSAGE_CIRCLE, ICON_PHONE, Icon,
    SectionContent, Width,
};
use crate::assemble::SectionContext;
use crate::links::tel_url;
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Header backgrounds.
    pub enum SiteHeaderVariant {
        Default => "default",
        Transparent => "transparent",
        Solid => "solid",
    }
}

/// A navigation entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
        }
    }
}

/// Props of the `SiteHeader` component.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteHeaderContent {
    pub sticky: bool,
    pub navigation: Vec<NavItem>,
}

impl Default for SiteHeaderContent {
    fn default() -> Self {
        Self {
            sticky: true,
            navigation: Vec::new(),
        }
    }
}

impl SectionContent for SiteHeaderContent {
    fn missing_required(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Anchors used when the document does not author any navigation.
pub fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("Features", "#features"),
        NavItem::new("Services", "#services"),
        NavItem::new("Pricing", "#pricing"),
        NavItem::new("Contact", "#contato"),
    ]
}

fn header_class(variant: SiteHeaderVariant, sticky: bool) -> String {
    let background = match variant {
        SiteHeaderVariant::Default => "header-default",
        SiteHeaderVariant::Transparent => "header-transparent",
        SiteHeaderVariant::Solid => "header-solid",
    };
    if sticky {
        format!("site-header {} header-sticky", background)
    } else {
        format!("site-header {}", background)
    }
}

fn nav_links(items: &[NavItem], class: &'static str) -> Vec<impl IntoView + use<>> {
    items
        .iter()
        .map(|item| {
            view! { <a href=item.href.clone() class=class>{item.name.clone()}</a> }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn SiteHeader(ctx: SectionContext, content: SiteHeaderContent) -> impl IntoView {
    let variant = SiteHeaderVariant::parse(ctx.variant.as_deref());
    let navigation = if content.navigation.is_empty() {
        default_navigation()
    } else {
        content.navigation
    };

    let contact = &ctx.site.contact;
    let call = (!contact.phone.trim().is_empty()).then(|| {
        view! {
            <CtaLink
                href=tel_url(&contact.phone)
                text="Call"
                class="btn btn-outline btn-sm"
                track=ClickTrack::phone("header")
                icon=ICON_PHONE
            />
        }
    });
    let chat = (!contact.whatsapp.trim().is_empty()).then(|| {
        view! {
            <CtaLink
                href=ctx.whatsapp_href(ctx.default_message())
                text="WhatsApp"
                class="btn btn-whatsapp btn-sm"
                track=ClickTrack::whatsapp("header")
                icon=ICON_MESSAGE_CIRCLE
                external=true
            />
        }
    });

    let brand = ctx.site.title.clone();
    let desktop_links = nav_links(&navigation, "nav-link");
    let mobile_links = nav_links(&navigation, "nav-link-mobile");
    let separator = ctx.separator;
    view! {
        <header
            class=header_class(variant, content.sticky)
            data-section=ctx.key()
            data-component=ctx.kind.name()
            data-variant=variant.name()
            data-separator=separator.as_str()
            data-header=""
        >
            <Container width=Width::Wide class="header-bar">
                <a href="#" class="brand">{brand}</a>
                <nav class="nav-desktop" aria-label="Main">
                    {desktop_links}
                </nav>
                <div class="header-actions">
                    {call}
                    {chat}
                </div>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Open menu"
                    aria-expanded="false"
                    data-menu-toggle=""
                >
                    <Icon path=ICON_MENU size="24" />
                </button>
            </Container>
            <nav class="nav-mobile" aria-label="Mobile" data-menu="" hidden=true>
                {mobile_links}
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn default_navigation_when_none_authored() {
        let html = render_json("SiteHeader", None, json!({}));
        for item in default_navigation() {
            assert!(html.contains(&format!(r#"href="{}""#, item.href)));
        }
        assert!(html.contains("header-sticky"));
        assert!(html.contains(r#"data-menu-toggle"#));
        assert!(html.contains(r#"data-track="phone_click""#));
        assert!(html.contains(r#"data-track="whatsapp_click""#));
    }

    #[test]
    fn header_alias_with_custom_navigation() {
        let html = render_json(
            "Header",
            Some("solid"),
            json!({ "sticky": false, "navigation": [{ "name": "Blog", "href": "/blog" }] }),
        );
        assert!(html.contains(r#"data-component="SiteHeader""#));
        assert!(html.contains(r#"href="/blog""#));
        assert!(!html.contains("#pricing"));
        assert!(!html.contains("header-sticky"));
        assert!(html.contains("header-solid"));
    }
}
