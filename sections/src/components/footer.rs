//! Page footer built from site data, plus the pieces [`super::SiteFooter`]
//! reuses.

use leptos::prelude::*;
use serde::Deserialize;

use super::{
    ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, Icon, SectionContent, SectionFrame, SeparatorShape, Tone,
    icon_path,
};
use crate::assemble::SectionContext;
use crate::links::tel_url;
use crate::types::{Address, Site};
use crate::variant::{Variant, variant_enum};

variant_enum! {
    /// Footer layouts, shared with `SiteFooter`.
    pub enum FooterVariant {
        Detailed => "detailed",
        Simple => "simple",
        Minimal => "minimal",
    }
}

/// Props of the `Footer` component. Everything else comes from the site.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterContent {
    pub id: Option<String>,
}

impl SectionContent for FooterContent {
    fn missing_required(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// `<footer>` counterpart of the section shell.
#[component]
pub(crate) fn FooterShell(frame: SectionFrame, children: Children) -> impl IntoView {
    let class = frame.section_class("site-footer");
    let separator = frame.separator;
    view! {
        <footer
            id=frame.id
            class=class
            data-section=frame.key
            data-component=frame.component
            data-variant=frame.variant
            data-separator=separator.as_str()
        >
            <div class=frame.width.class()>{children()}</div>
            <SeparatorShape separator=separator />
        </footer>
    }
}

pub(crate) fn copyright(site: &Site, year: Option<i32>) -> String {
    match year {
        Some(year) => format!("© {} {}. All rights reserved.", year, site.title),
        None => format!("© {}. All rights reserved.", site.title),
    }
}

#[component]
pub(crate) fn SocialLinks(site: Site) -> impl IntoView {
    let links = site
        .social
        .profiles()
        .into_iter()
        .map(|(platform, url)| {
            let label = format!("Follow us on {}", platform);
            view! {
                <a
                    href=url.to_string()
                    class="social-link"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=label
                    data-track="link_click"
                    data-track-location="footer_social"
                    data-track-label=platform
                >
                    <Icon path=icon_path(platform) size="20" />
                </a>
            }
        })
        .collect::<Vec<_>>();

    (!links.is_empty()).then(|| view! { <div class="social-links">{links}</div> })
}

fn address_lines(address: &Address) -> Vec<String> {
    let city_state = match (address.city.is_empty(), address.state.is_empty()) {
        (false, false) => format!("{}, {}", address.city, address.state),
        (false, true) => address.city.clone(),
        (true, false) => address.state.clone(),
        (true, true) => String::new(),
    };
    [
        address.street.clone(),
        address.neighborhood.clone(),
        city_state,
        address.zip_code.clone(),
    ]
    .into_iter()
    .filter(|line| !line.trim().is_empty())
    .collect()
}

#[component]
pub(crate) fn ContactList(site: Site) -> impl IntoView {
    let contact = site.contact;
    let phone = (!contact.phone.is_empty()).then(|| {
        let href = tel_url(&contact.phone);
        view! {
            <li>
                <Icon path=ICON_PHONE size="16" />
                <a href=href data-track="phone_click" data-track-location="footer">{contact.phone.clone()}</a>
            </li>
        }
    });
    let email = (!contact.email.is_empty()).then(|| {
        let href = format!("mailto:{}", contact.email);
        view! {
            <li>
                <Icon path=ICON_MAIL size="16" />
                <a href=href>{contact.email.clone()}</a>
            </li>
        }
    });
    let lines = address_lines(&contact.address);
    let address = (!lines.is_empty()).then(|| {
        view! {
            <li>
                <Icon path=ICON_MAP_PIN size="16" />
                <address>
                    {lines.into_iter().map(|line| view! { <span class="address-line">{line}</span> }).collect::<Vec<_>>()}
                </address>
            </li>
        }
    });

    view! {
        <ul class="contact-list">
            {phone}
            {email}
            {address}
        </ul>
    }
}

#[component]
pub(crate) fn QuickLinks() -> impl IntoView {
    const LINKS: [(&str, &str); 4] = [
        ("Features", "#features"),
        ("Services", "#services"),
        ("Pricing", "#pricing"),
        ("Contact", "#contato"),
    ];
    view! {
        <ul class="link-list">
            {LINKS.into_iter().map(|(name, href)| view! { <li><a href=href>{name}</a></li> }).collect::<Vec<_>>()}
        </ul>
    }
}

/// Footer body for a variant, optionally preceded by `lead`.
pub(crate) fn footer_body(
    variant: FooterVariant,
    site: Site,
    year: Option<i32>,
    lead: Option<AnyView>,
) -> AnyView {
    let notice = copyright(&site, year);
    let title = site.title.clone();
    let description = site.description.clone();
    match variant {
        FooterVariant::Minimal => view! {
            <p class="text-center footer-notice">{notice}</p>
        }
        .into_any(),
        FooterVariant::Simple => view! {
            {lead}
            <div class="grid grid-2 items-center">
                <div>
                    <h3 class="footer-title">{title}</h3>
                    <p class="footer-muted">{description}</p>
                </div>
                <div class="justify-end"><SocialLinks site=site /></div>
            </div>
            <div class="footer-bottom text-center">
                <p class="footer-notice">{notice}</p>
            </div>
        }
        .into_any(),
        FooterVariant::Detailed => view! {
            {lead}
            <div class="grid grid-footer">
                <div class="footer-brand">
                    <h3 class="footer-title">{title}</h3>
                    <p class="footer-muted">{description}</p>
                    <SocialLinks site=site.clone() />
                </div>
                <div>
                    <h4 class="footer-heading">"Contact"</h4>
                    <ContactList site=site />
                </div>
                <div>
                    <h4 class="footer-heading">"Quick links"</h4>
                    <QuickLinks />
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-notice">{notice}</p>
                <nav class="footer-legal">
                    <a href="/privacy">"Privacy policy"</a>
                    <a href="/terms">"Terms of use"</a>
                </nav>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Footer(ctx: SectionContext, content: FooterContent) -> impl IntoView {
    let variant = FooterVariant::parse(ctx.variant.as_deref());
    let mut frame = SectionFrame::new(&ctx, variant.name()).tone(Tone::SolidSecondary);
    if let Some(id) = content.id {
        frame = frame.id(id);
    }
    let body = footer_body(variant, ctx.site, ctx.year, None);
    view! { <FooterShell frame=frame>{body}</FooterShell> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_json;
    use serde_json::json;

    #[test]
    fn detailed_footer_shows_contact_and_social() {
        let html = render_json("Footer", None, json!({}));
        assert!(html.contains("<footer"));
        assert!(html.contains(r#"href="tel:+5511999999999""#));
        assert!(html.contains("mailto:hello@acme.test"));
        assert!(html.contains("Follow us on instagram"));
        assert!(html.contains("© 2025 Acme. All rights reserved."));
    }

    #[test]
    fn minimal_footer_is_only_the_notice() {
        let html = render_json("Footer", Some("minimal"), json!({}));
        assert!(html.contains("All rights reserved."));
        assert!(!html.contains("contact-list"));
    }

    #[test]
    fn copyright_without_year() {
        let site = Site {
            title: "Acme".into(),
            ..Default::default()
        };
        assert_eq!(copyright(&site, None), "© Acme. All rights reserved.");
    }

    #[test]
    fn address_skips_blank_parts() {
        let address = Address {
            street: "Rua A, 1".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
            ..Default::default()
        };
        assert_eq!(address_lines(&address), vec!["Rua A, 1", "São Paulo, SP"]);
    }
}
