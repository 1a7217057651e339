//! SEO head tags and JSON-LD structured data.
//!
//! Everything is derived from the [`Site`] descriptor. Relative page URLs and
//! images are made absolute against `site.url`, since crawlers and link
//! previews ignore relative ones.

use serde_json::{Map, Value, json};
use vitrine_sections::{LinkTag, MetaTag, Site};

/// `og:type` of a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Article => "article",
        }
    }
}

/// Per-page overrides; `None` falls back to the site value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoOptions {
    /// Page title, rendered as `"{title} | {site title}"`.
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub kind: PageKind,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Title, meta and link tags for one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoData {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
}

/// `path` as an absolute URL under `base`. Anything already starting with
/// `http` is returned as-is.
pub fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Build the head tags for a page of `site`.
pub fn generate(site: &Site, opts: &SeoOptions) -> SeoData {
    let title = match opts.title.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(page) => format!("{} | {}", page, site.title),
        None => site.title.clone(),
    };
    let description = opts.description.clone().unwrap_or_else(|| site.description.clone());
    let author = opts.author.clone().unwrap_or_else(|| site.author.clone());
    let keywords = opts.keywords.as_ref().unwrap_or(&site.keywords).join(", ");
    let url = absolute_url(&site.url, opts.url.as_deref().unwrap_or(&site.url));
    let image = absolute_url(&site.url, opts.image.as_deref().unwrap_or(&site.seo.og_image));

    let mut meta = vec![
        MetaTag::name("description", description.clone()),
        MetaTag::name("keywords", keywords),
        MetaTag::name("author", author.clone()),
        MetaTag::name("robots", "index, follow"),
        MetaTag::name("language", site.language.clone()),
        // Open Graph
        MetaTag::property("og:title", title.clone()),
        MetaTag::property("og:description", description.clone()),
        MetaTag::property("og:type", opts.kind.as_str()),
        MetaTag::property("og:url", url.clone()),
        MetaTag::property("og:image", image.clone()),
        MetaTag::property("og:site_name", site.title.clone()),
        MetaTag::property("og:locale", site.language.replace('-', "_")),
        // Twitter
        MetaTag::name("twitter:card", site.seo.twitter_card.clone()),
        MetaTag::name("twitter:title", title.clone()),
        MetaTag::name("twitter:description", description),
        MetaTag::name("twitter:image", image),
    ];

    if opts.kind == PageKind::Article {
        if let Some(published) = &opts.published_time {
            meta.push(MetaTag::property("article:published_time", published.clone()));
        }
        if let Some(modified) = &opts.modified_time {
            meta.push(MetaTag::property("article:modified_time", modified.clone()));
        }
        if !author.is_empty() {
            meta.push(MetaTag::property("article:author", author));
        }
    }

    let links = vec![
        LinkTag {
            rel: "canonical".into(),
            href: url,
            mime: None,
        },
        LinkTag {
            rel: "icon".into(),
            href: site.seo.favicon.clone(),
            mime: Some("image/png".into()),
        },
    ];

    SeoData { title, meta, links }
}

/// schema.org types we emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    Organization,
    WebSite,
    Article,
}

/// JSON-LD for `kind`. Keys in `extra` are merged last and win.
pub fn structured_data(kind: SchemaKind, site: &Site, extra: &Map<String, Value>) -> Value {
    let logo = absolute_url(&site.url, "/logo.png");
    let mut data = match kind {
        SchemaKind::Organization => {
            let address = &site.contact.address;
            let same_as: Vec<&str> = site.social.profiles().into_iter().map(|(_, url)| url).collect();
            json!({
                "@context": "https://schema.org",
                "@type": "Organization",
                "name": site.title,
                "url": site.url,
                "logo": logo,
                "description": site.description,
                "contactPoint": {
                    "@type": "ContactPoint",
                    "telephone": site.contact.phone,
                    "contactType": "customer service",
                    "email": site.contact.email,
                },
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": address.street,
                    "addressLocality": address.city,
                    "addressRegion": address.state,
                    "postalCode": address.zip_code,
                    "addressCountry": address.country,
                },
                "sameAs": same_as,
            })
        }
        SchemaKind::WebSite => json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": site.title,
            "url": site.url,
            "description": site.description,
            "publisher": { "@type": "Organization", "name": site.title },
        }),
        SchemaKind::Article => {
            let text = |key: &str| extra.get(key).and_then(Value::as_str).map(str::to_string);
            let published = text("publishedTime");
            let image = text("image").unwrap_or_else(|| site.seo.og_image.clone());
            json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": text("title"),
                "description": text("description"),
                "author": {
                    "@type": "Person",
                    "name": text("author").unwrap_or_else(|| site.author.clone()),
                },
                "publisher": {
                    "@type": "Organization",
                    "name": site.title,
                    "logo": { "@type": "ImageObject", "url": logo },
                },
                "datePublished": published.clone(),
                "dateModified": text("modifiedTime").or(published),
                "image": absolute_url(&site.url, &image),
            })
        }
    };

    if let Value::Object(map) = &mut data {
        for (key, value) in extra {
            map.insert(key.clone(), value.clone());
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_sections::types::Social;

    fn site() -> Site {
        Site {
            title: "Acme".into(),
            description: "Landing pages".into(),
            url: "https://acme.test/".into(),
            author: "Acme Team".into(),
            language: "pt-BR".into(),
            keywords: vec!["landing".into(), "pages".into()],
            social: Social {
                linkedin: Some("https://linkedin.com/company/acme".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn content<'a>(seo: &'a SeoData, key: &str) -> Option<&'a str> {
        seo.meta.iter().find(|m| m.key() == key).map(|m| m.content.as_str())
    }

    #[test]
    fn page_title_and_absolute_urls() {
        let seo = generate(
            &site(),
            &SeoOptions {
                title: Some("Pricing".into()),
                url: Some("/pricing".into()),
                ..Default::default()
            },
        );
        assert_eq!(seo.title, "Pricing | Acme");
        assert_eq!(content(&seo, "og:url"), Some("https://acme.test/pricing"));
        assert_eq!(content(&seo, "og:image"), Some("https://acme.test/og-image.png"));
        assert_eq!(content(&seo, "og:locale"), Some("pt_BR"));
        assert_eq!(content(&seo, "keywords"), Some("landing, pages"));
        assert_eq!(seo.links[0].href, "https://acme.test/pricing");
        assert_eq!(seo.links[1].mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn article_tags_only_for_articles() {
        let website = generate(&site(), &SeoOptions::default());
        assert_eq!(website.title, "Acme");
        assert_eq!(content(&website, "article:author"), None);

        let article = generate(
            &site(),
            &SeoOptions {
                kind: PageKind::Article,
                published_time: Some("2025-01-01".into()),
                ..Default::default()
            },
        );
        assert_eq!(content(&article, "og:type"), Some("article"));
        assert_eq!(content(&article, "article:published_time"), Some("2025-01-01"));
        assert_eq!(content(&article, "article:modified_time"), None);
        assert_eq!(content(&article, "article:author"), Some("Acme Team"));
    }

    #[test]
    fn absolute_url_keeps_full_urls() {
        assert_eq!(absolute_url("https://a.test", "https://cdn.test/x.png"), "https://cdn.test/x.png");
        assert_eq!(absolute_url("https://a.test/", "img.png"), "https://a.test/img.png");
    }

    #[test]
    fn organization_schema_lists_profiles() {
        let data = structured_data(SchemaKind::Organization, &site(), &Map::new());
        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["logo"], "https://acme.test/logo.png");
        assert_eq!(data["sameAs"], json!(["https://linkedin.com/company/acme"]));
    }

    #[test]
    fn extra_keys_win() {
        let mut extra = Map::new();
        extra.insert("name".into(), json!("Acme Inc."));
        let data = structured_data(SchemaKind::WebSite, &site(), &extra);
        assert_eq!(data["name"], "Acme Inc.");
        assert_eq!(data["publisher"]["name"], "Acme");
    }

    #[test]
    fn article_schema_falls_back_to_site_image() {
        let mut extra = Map::new();
        extra.insert("title".into(), json!("Launch"));
        extra.insert("publishedTime".into(), json!("2025-02-02"));
        let data = structured_data(SchemaKind::Article, &site(), &extra);
        assert_eq!(data["headline"], "Launch");
        assert_eq!(data["dateModified"], "2025-02-02");
        assert_eq!(data["image"], "https://acme.test/og-image.png");
    }
}
