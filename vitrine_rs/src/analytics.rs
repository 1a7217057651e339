//! Analytics events, collectors and fire-and-forget dispatch.
//!
//! A [`Dispatcher`] holds zero or more [`Collector`]s built from the site's
//! analytics settings. Each collector contributes the loader script the page
//! needs and can receive server-side events. Dispatch spawns one task per
//! collector and returns immediately; callers never wait on analytics.

use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tokio::task::JoinHandle;
use tracing::debug;
use vitrine_sections::ScriptTag;
use vitrine_sections::types::AnalyticsSettings;

const GA_COLLECT_URL: &str = "https://www.google-analytics.com/mp/collect";
const PLAUSIBLE_HOST: &str = "https://plausible.io";

/// A named analytics event with free-form properties.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub props: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: Map::new(),
        }
    }

    /// Add a property; `null` values are dropped.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.props.insert(key.to_string(), value);
        }
        self
    }

    pub fn whatsapp_click(location: &str, plan: Option<&str>) -> Self {
        Self::new("whatsapp_click")
            .with("location", location)
            .with("plan", plan)
    }

    pub fn phone_click(location: &str) -> Self {
        Self::new("phone_click").with("location", location)
    }

    pub fn button_click(text: &str, location: &str) -> Self {
        Self::new("button_click")
            .with("button_text", text)
            .with("location", location)
    }

    pub fn form_submit(form: &str, success: bool) -> Self {
        Self::new("form_submit")
            .with("form_name", form)
            .with("success", success)
    }

    pub fn link_click(text: &str, destination: &str, external: bool) -> Self {
        Self::new("link_click")
            .with("link_text", text)
            .with("destination", destination)
            .with("external", external)
    }

    pub fn section_view(section: &str) -> Self {
        Self::new("section_view").with("section_name", section)
    }

    pub fn contact_attempt(method: &str) -> Self {
        Self::new("contact_attempt").with("method", method)
    }

    pub fn pricing_view(plan: &str) -> Self {
        Self::new("pricing_view").with("plan", plan)
    }

    pub fn testimonial_view(author: &str) -> Self {
        Self::new("testimonial_view").with("author", author)
    }

    /// Lead calculator inputs and the resulting estimates.
    pub fn calculator_used(visits: f64, rate: f64, ticket: f64, leads: f64, revenue: f64) -> Self {
        Self::new("calculator_used")
            .with("visitas", visits)
            .with("taxa", rate)
            .with("ticket", ticket)
            .with("leads_estimados", leads)
            .with("receita_estimada", revenue)
    }

    pub fn case_card_view(segment: &str) -> Self {
        Self::new("case_card_view").with("segmento", segment)
    }

    pub fn badge_hover(label: &str) -> Self {
        Self::new("badge_hover").with("badge_label", label)
    }

    pub fn form_focus(form_type: &str) -> Self {
        Self::new("form_focus").with("form_type", form_type)
    }
}

/// An analytics backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Collector {
    /// GA4. Server-side events need the Measurement Protocol `api_secret`.
    GoogleAnalytics {
        measurement_id: String,
        api_secret: Option<String>,
    },
    /// Plausible, hosted or self-hosted.
    Plausible {
        domain: String,
        api_host: Option<String>,
    },
}

impl Collector {
    /// Loader tags this collector needs in the page head.
    pub fn loader_scripts(&self) -> Vec<ScriptTag> {
        match self {
            Collector::GoogleAnalytics { measurement_id, .. } => vec![
                ScriptTag {
                    src: Some(format!(
                        "https://www.googletagmanager.com/gtag/js?id={}",
                        measurement_id
                    )),
                    defer: true,
                    ..Default::default()
                },
                ScriptTag {
                    body: Some(format!(
                        "window.dataLayer=window.dataLayer||[];\
                         function gtag(){{dataLayer.push(arguments);}}\
                         gtag('js',new Date());gtag('config',{});",
                        Value::String(measurement_id.clone())
                    )),
                    ..Default::default()
                },
            ],
            Collector::Plausible { domain, api_host } => {
                let host = api_host.as_deref().map(|h| h.trim_end_matches('/'));
                vec![ScriptTag {
                    src: Some(format!("{}/js/script.js", host.unwrap_or(PLAUSIBLE_HOST))),
                    defer: true,
                    data_domain: Some(domain.clone()),
                    data_api: host.map(|h| format!("{}/api/event", h)),
                    ..Default::default()
                }]
            }
        }
    }

    /// Send one event. `page_url` identifies the page for Plausible and is
    /// carried as `page_location` for GA4.
    pub async fn send(&self, client: &Client, event: &AnalyticsEvent, page_url: &str) -> reqwest::Result<()> {
        match self {
            Collector::GoogleAnalytics {
                measurement_id,
                api_secret: Some(secret),
            } => {
                let mut params = event.props.clone();
                params.insert("page_location".into(), json!(page_url));
                client
                    .post(GA_COLLECT_URL)
                    .query(&[("measurement_id", measurement_id), ("api_secret", secret)])
                    .json(&json!({
                        "client_id": "vitrine.server",
                        "events": [{ "name": event.name, "params": params }],
                    }))
                    .send()
                    .await?
                    .error_for_status()?;
            }
            Collector::GoogleAnalytics { .. } => {
                debug!(event = %event.name, "GA4 has no api_secret, event not sent");
            }
            Collector::Plausible { domain, api_host } => {
                let host = api_host.as_deref().unwrap_or(PLAUSIBLE_HOST).trim_end_matches('/');
                client
                    .post(format!("{}/api/event", host))
                    .header(reqwest::header::USER_AGENT, "vitrine")
                    .json(&json!({
                        "name": event.name,
                        "url": page_url,
                        "domain": domain,
                        "props": event.props,
                    }))
                    .send()
                    .await?
                    .error_for_status()?;
            }
        }
        Ok(())
    }
}

/// Fans events out to every configured collector.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    collectors: Vec<Collector>,
    client: Client,
    page_url: String,
}

impl Dispatcher {
    pub fn new(collectors: Vec<Collector>, page_url: impl Into<String>) -> Self {
        Self {
            collectors,
            client: Client::new(),
            page_url: page_url.into(),
        }
    }

    /// Collectors from site settings. `enabled = false` yields none.
    pub fn from_settings(settings: &AnalyticsSettings, page_url: impl Into<String>) -> Self {
        Self::new(collectors_from(settings), page_url)
    }

    pub fn collectors(&self) -> &[Collector] {
        &self.collectors
    }

    pub fn is_enabled(&self) -> bool {
        !self.collectors.is_empty()
    }

    /// Every collector's loader tags, in collector order.
    pub fn loader_scripts(&self) -> Vec<ScriptTag> {
        self.collectors.iter().flat_map(Collector::loader_scripts).collect()
    }

    /// Spawn one send per collector and return without waiting.
    ///
    /// Failures are logged at debug level and otherwise ignored. Must be
    /// called from within a tokio runtime when collectors are configured.
    pub fn track(&self, event: AnalyticsEvent) -> Vec<JoinHandle<()>> {
        if self.collectors.is_empty() {
            return Vec::new();
        }
        debug!(event = %event.name, collectors = self.collectors.len(), "Dispatching analytics event");

        self.collectors
            .iter()
            .cloned()
            .map(|collector| {
                let client = self.client.clone();
                let event = event.clone();
                let page_url = self.page_url.clone();
                tokio::spawn(async move {
                    if let Err(e) = collector.send(&client, &event, &page_url).await {
                        debug!(event = %event.name, error = %e, "Analytics delivery failed");
                    }
                })
            })
            .collect()
    }
}

/// Collectors configured by `settings`, GA4 first. `enabled = false` yields none.
pub fn collectors_from(settings: &AnalyticsSettings) -> Vec<Collector> {
    if !settings.enabled {
        return Vec::new();
    }
    let mut collectors = Vec::new();
    if let Some(id) = settings.google_analytics.as_deref().filter(|id| !id.trim().is_empty()) {
        collectors.push(Collector::GoogleAnalytics {
            measurement_id: id.to_string(),
            api_secret: settings.google_api_secret.clone().filter(|s| !s.is_empty()),
        });
    }
    if let Some(domain) = settings.plausible.domain.as_deref().filter(|d| !d.trim().is_empty()) {
        collectors.push(Collector::Plausible {
            domain: domain.to_string(),
            api_host: settings.plausible.api_host.clone().filter(|h| !h.is_empty()),
        });
    }
    collectors
}
