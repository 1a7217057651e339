//! The render pipeline: content document + site + config → static page.

use std::path::Path;

use chrono::Datelike;
use serde_json::Map;
use tracing::info;
use vitrine_sections::{
    Assembly, ContentDocument, PageHead, RenderMode, RenderSettings, Site, render_document,
};

use crate::analytics::{Collector, collectors_from};
use crate::config::VitrineConfig;
use crate::error::{Error, Result};
use crate::seo::{self, SchemaKind, SeoOptions};

/// A rendered page and the assembly it came from.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub html: String,
    pub assembly: Assembly,
}

impl RenderedPage {
    /// `false` only when `strict` and an error diagnostic was recorded.
    pub fn passes(&self, strict: bool) -> bool {
        !strict || !self.assembly.has_errors()
    }
}

/// Settings for the assembler. `[links]` from config supplies the chat base,
/// the country code and a fallback prefill message.
pub fn render_settings(config: &VitrineConfig, mut site: Site, mode: RenderMode) -> RenderSettings {
    if site.contact.prefill.trim().is_empty() {
        if let Some(message) = &config.links.default_message {
            site.contact.prefill = message.clone();
        }
    }
    RenderSettings {
        mode,
        site,
        links: config.link_builder(),
        year: Some(chrono::Utc::now().year()),
    }
}

/// Head tags for a page of `site`: SEO tags, Organization and WebSite
/// JSON-LD, and the analytics loaders.
pub fn page_head(site: &Site, page_title: Option<&str>) -> PageHead {
    let seo = seo::generate(
        site,
        &SeoOptions {
            title: page_title.map(str::to_string),
            ..Default::default()
        },
    );
    let language = if site.language.trim().is_empty() {
        "en".to_string()
    } else {
        site.language.clone()
    };

    PageHead {
        title: seo.title,
        language,
        meta: seo.meta,
        links: seo.links,
        structured_data: vec![
            seo::structured_data(SchemaKind::Organization, site, &Map::new()),
            seo::structured_data(SchemaKind::WebSite, site, &Map::new()),
        ],
        scripts: collectors_from(&site.analytics)
            .iter()
            .flat_map(Collector::loader_scripts)
            .collect(),
    }
}

/// Assemble and render `doc` as a complete page.
pub fn render(
    config: &VitrineConfig,
    doc: &ContentDocument,
    site: Site,
    mode: RenderMode,
    page_title: Option<&str>,
) -> RenderedPage {
    let head = page_head(&site, page_title);
    let settings = render_settings(config, site, mode);
    let (html, assembly) = render_document(doc, &settings, &head);
    info!(
        sections = assembly.sections.len(),
        diagnostics = assembly.diagnostics.len(),
        bytes = html.len(),
        "Page rendered"
    );
    RenderedPage { html, assembly }
}

/// Write `html` to `path`, creating parent directories.
pub fn write_output(path: &Path, html: &str) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, html).map_err(write_error)?;
    info!(path = %path.display(), "Page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_sections::types::PlausibleSettings;

    fn site() -> Site {
        let mut site = Site {
            title: "Acme".into(),
            url: "https://acme.test".into(),
            language: "pt-BR".into(),
            ..Default::default()
        };
        site.contact.whatsapp = "11999999999".into();
        site.analytics.plausible = PlausibleSettings {
            domain: Some("acme.test".into()),
            api_host: None,
        };
        site
    }

    #[test]
    fn config_prefill_fills_a_blank_site_prefill() {
        let mut config = VitrineConfig::default();
        config.links.default_message = Some("Hi from config".into());
        let settings = render_settings(&config, site(), RenderMode::Production);
        assert_eq!(settings.site.contact.prefill, "Hi from config");

        let mut own = site();
        own.contact.prefill = "Hi from site".into();
        let settings = render_settings(&config, own, RenderMode::Production);
        assert_eq!(settings.site.contact.prefill, "Hi from site");
    }

    #[test]
    fn head_has_seo_json_ld_and_loaders() {
        let head = page_head(&site(), Some("Home"));
        assert_eq!(head.title, "Home | Acme");
        assert_eq!(head.language, "pt-BR");
        assert_eq!(head.structured_data.len(), 2);
        assert_eq!(head.scripts.len(), 1);
        assert!(head.links.iter().any(|l| l.rel == "canonical"));
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let path = temp.path().join("dist/nested/index.html");
        write_output(&path, "<p>ok</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>ok</p>");
    }

    #[test]
    fn strict_render_fails_on_missing_required_props() {
        let doc = ContentDocument::from_value(json!({ "sections": [
            { "component": "Hero", "props": {} },
            { "component": "Marquee" }
        ]}))
        .unwrap();

        let page = render(&VitrineConfig::default(), &doc, site(), RenderMode::Development, None);
        assert_eq!(page.assembly.sections.len(), 1);
        assert!(page.html.contains("<!DOCTYPE html>"));
        assert!(page.passes(false));
        assert!(!page.passes(true));

        let page = render(&VitrineConfig::default(), &doc, site(), RenderMode::Production, None);
        assert!(page.passes(true));
    }
}
