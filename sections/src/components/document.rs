//! Root document component - the complete landing page

use leptos::prelude::*;

use crate::assemble::RenderedSection;
use crate::script::CLIENT_SCRIPT;
use crate::styles::PAGE_CSS;
use crate::types::{LinkTag, MetaTag, PageHead, ScriptTag};

/// JSON for a `<script type="application/ld+json">` body. `</` is escaped so
/// authored strings cannot close the tag.
pub(crate) fn json_ld(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// The complete HTML document: head tags, styles, every rendered section in
/// order, then the click-tracking glue.
#[component]
pub fn PageDocument(head: PageHead, sections: Vec<RenderedSection>) -> impl IntoView {
    let language = if head.language.trim().is_empty() {
        "en".to_string()
    } else {
        head.language
    };
    let body: String = sections.into_iter().map(|s| s.html).collect();

    view! {
        <html lang=language>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{head.title}</title>
                <HeadMeta tags=head.meta />
                <HeadLinks tags=head.links />
                {head.structured_data.iter().map(|value| {
                    view! { <script type="application/ld+json" inner_html=json_ld(value)></script> }
                }).collect::<Vec<_>>()}
                <HeadScripts scripts=head.scripts />
                <style inner_html=PAGE_CSS></style>
            </head>
            <body>
                <main id="main" inner_html=body></main>
                <script inner_html=CLIENT_SCRIPT></script>
            </body>
        </html>
    }
}

#[component]
fn HeadMeta(tags: Vec<MetaTag>) -> impl IntoView {
    tags.into_iter()
        .map(|tag| view! { <meta name={tag.name} {::leptos::tachys::html::attribute::custom::custom_attribute("property", tag.property)} content={tag.content} /> })
        .collect::<Vec<_>>()
}

#[component]
fn HeadLinks(tags: Vec<LinkTag>) -> impl IntoView {
    tags.into_iter()
        .map(|tag| view! { <link rel={tag.rel} href={tag.href} type={tag.mime} /> })
        .collect::<Vec<_>>()
}

/// Analytics loaders. External scripts keep their `data-*` configuration;
/// inline ones carry their body verbatim.
#[component]
fn HeadScripts(scripts: Vec<ScriptTag>) -> impl IntoView {
    scripts
        .into_iter()
        .map(|script| {
            let body = script.body.unwrap_or_default();
            view! {
                <script
                    src=script.src
                    defer=script.defer
                    data-domain=script.data_domain
                    data-api=script.data_api
                    inner_html=body
                ></script>
            }
        })
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_ld_cannot_close_its_script() {
        let value = json!({ "name": "</script><script>alert(1)</script>" });
        let out = json_ld(&value);
        assert!(!out.contains("</script>"));
        assert!(out.contains(r"<\/script>"));
    }
}
