//! Contact form submission.
//!
//! One POST, no retry. Every outcome, including a missing endpoint and
//! network failures, comes back as a [`FormSubmissionResult`] the caller can
//! show to the visitor as-is.

use chrono::Utc;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

/// Error code for a submission without an endpoint.
pub const MISSING_ENDPOINT: &str = "MISSING_ENDPOINT";

const SUCCESS_MESSAGE: &str = "Message sent! We'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Could not send your message. Please try again or contact us directly.";
const NO_ENDPOINT_MESSAGE: &str = "Form endpoint is not configured";

/// Outcome of [`submit_form`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormSubmissionResult {
    pub success: bool,
    pub message: String,
    /// Response body on success; `null` when it was not JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FormSubmissionResult {
    fn failure(message: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Where and how a form is posted.
#[derive(Clone, Debug, Default)]
pub struct FormClient {
    client: Client,
    /// Site title used in the `_subject` line.
    pub site_title: String,
    /// `source` field of every submission.
    pub source: String,
    /// Page the form was sent from.
    pub page_url: String,
}

impl FormClient {
    pub fn new(site_title: impl Into<String>, source: impl Into<String>, page_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            site_title: site_title.into(),
            source: source.into(),
            page_url: page_url.into(),
        }
    }

    /// The JSON body posted for `data`: the visitor's fields plus the
    /// bookkeeping fields form backends expect.
    pub fn payload(&self, data: &Map<String, Value>) -> Map<String, Value> {
        let mut body = data.clone();
        body.insert(
            "_subject".into(),
            Value::String(format!("New contact from the {} website", self.site_title)),
        );
        body.insert(
            "_replyto".into(),
            data.get("email").cloned().unwrap_or(Value::Null),
        );
        body.insert("_gotcha".into(), Value::String(String::new()));
        body.insert("timestamp".into(), Value::String(Utc::now().to_rfc3339()));
        body.insert("source".into(), Value::String(self.source.clone()));
        body.insert("url".into(), Value::String(self.page_url.clone()));
        body
    }

    /// POST `data` to `endpoint`.
    pub async fn submit(&self, data: &Map<String, Value>, endpoint: Option<&str>) -> FormSubmissionResult {
        let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) else {
            return FormSubmissionResult::failure(NO_ENDPOINT_MESSAGE, MISSING_ENDPOINT);
        };

        debug!(endpoint, "Submitting form");
        match self.post(endpoint, data).await {
            Ok(data) => FormSubmissionResult {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
                data: Some(data),
                error: None,
            },
            Err(reason) => {
                error!(endpoint, %reason, "Form submission failed");
                FormSubmissionResult::failure(FAILURE_MESSAGE, reason)
            }
        }
    }

    async fn post(&self, endpoint: &str, data: &Map<String, Value>) -> Result<Value, String> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&self.payload(data))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error! status: {}", status.as_u16()));
        }

        // A 2xx with a non-JSON body still counts as delivered.
        Ok(response.json::<Value>().await.unwrap_or(Value::Null))
    }
}

/// Submit `data` with a one-off [`FormClient`].
pub async fn submit_form(
    data: &Map<String, Value>,
    endpoint: Option<&str>,
    site_title: &str,
    page_url: &str,
) -> FormSubmissionResult {
    FormClient::new(site_title, "landing-page", page_url)
        .submit(data, endpoint)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> Map<String, Value> {
        match json!({ "name": "Ana", "email": "ana@example.com", "message": "Hello there!" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn missing_endpoint_never_touches_the_network() {
        let result = submit_form(&data(), None, "Acme", "https://acme.test").await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(MISSING_ENDPOINT));

        let blank = submit_form(&data(), Some("  "), "Acme", "https://acme.test").await;
        assert_eq!(blank.error.as_deref(), Some(MISSING_ENDPOINT));
    }

    #[test]
    fn payload_carries_bookkeeping_fields() {
        let client = FormClient::new("Acme", "landing-page", "https://acme.test/#contato");
        let body = client.payload(&data());
        assert_eq!(body["_subject"], json!("New contact from the Acme website"));
        assert_eq!(body["_replyto"], json!("ana@example.com"));
        assert_eq!(body["_gotcha"], json!(""));
        assert_eq!(body["source"], json!("landing-page"));
        assert_eq!(body["url"], json!("https://acme.test/#contato"));
        assert_eq!(body["name"], json!("Ana"));
        let ts = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn failure_result_serializes_without_data() {
        let result = FormSubmissionResult::failure(FAILURE_MESSAGE, "boom");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("boom"));
        assert!(value.get("data").is_none());
    }
}
