//! Form validation and sanitization.
//!
//! Four schemas cover the forms a landing page ships with: contact,
//! newsletter, quote request and callback request. Validation returns the
//! cleaned data (phones reduced to digits) or the first error per field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use vitrine_sections::links::format_phone_number;

// Patterns are literals; a compile failure degrades to "no match".
static NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\u{00C0}-\u{00FF}\s]+$").ok());
static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[\d\s()\-+]+$").ok());
static SCRIPT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").ok());
static TAG_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

fn is_match(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

fn strip(re: &LazyLock<Option<Regex>>, value: &str) -> String {
    match re.as_ref() {
        Some(re) => re.replace_all(value, "").into_owned(),
        None => value.to_string(),
    }
}

/// Which form a payload belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSchema {
    Contact,
    Newsletter,
    Quote,
    Callback,
}

/// Per-field error messages; at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "invalid form data ({})", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Clone, Copy)]
enum Rule {
    Name,
    Email,
    Phone,
    Message,
    Subject,
    Company,
    /// Required free text.
    Filled,
}

struct Field {
    name: &'static str,
    rule: Rule,
    required: bool,
}

const fn field(name: &'static str, rule: Rule, required: bool) -> Field {
    Field {
        name,
        rule,
        required,
    }
}

impl FormSchema {
    fn fields(self) -> &'static [Field] {
        const CONTACT: &[Field] = &[
            field("name", Rule::Name, true),
            field("email", Rule::Email, true),
            field("phone", Rule::Phone, false),
            field("subject", Rule::Subject, false),
            field("message", Rule::Message, true),
        ];
        const NEWSLETTER: &[Field] = &[
            field("email", Rule::Email, true),
            field("name", Rule::Name, false),
        ];
        const QUOTE: &[Field] = &[
            field("name", Rule::Name, true),
            field("email", Rule::Email, true),
            field("phone", Rule::Phone, true),
            field("company", Rule::Company, true),
            field("projectType", Rule::Filled, true),
            field("budget", Rule::Filled, true),
            field("timeline", Rule::Filled, true),
            field("description", Rule::Message, true),
        ];
        const CALLBACK: &[Field] = &[
            field("name", Rule::Name, true),
            field("phone", Rule::Phone, true),
            field("preferredTime", Rule::Filled, true),
            field("subject", Rule::Subject, false),
        ];
        match self {
            FormSchema::Contact => CONTACT,
            FormSchema::Newsletter => NEWSLETTER,
            FormSchema::Quote => QUOTE,
            FormSchema::Callback => CALLBACK,
        }
    }

    /// Only the contact form carries the honeypot.
    fn has_honeypot(self) -> bool {
        self == FormSchema::Contact
    }
}

/// Check a single string against a rule, returning the cleaned value.
fn check(rule: Rule, value: &str) -> Result<String, String> {
    let len = value.chars().count();
    match rule {
        Rule::Name => {
            if len == 0 {
                Err("Name is required".into())
            } else if len < 2 {
                Err("Name must be at least 2 characters".into())
            } else if len > 100 {
                Err("Name is too long".into())
            } else if !is_match(&NAME_RE, value) {
                Err("Name may only contain letters and spaces".into())
            } else {
                Ok(value.to_string())
            }
        }
        Rule::Email => {
            if len == 0 {
                Err("Email is required".into())
            } else if !is_match(&EMAIL_RE, value) {
                Err("Invalid email".into())
            } else if len > 100 {
                Err("Email is too long".into())
            } else {
                Ok(value.to_string())
            }
        }
        Rule::Phone => {
            if len == 0 {
                Err("Phone is required".into())
            } else if !is_match(&PHONE_RE, value) {
                Err("Invalid phone format".into())
            } else if len < 10 {
                Err("Phone must have at least 10 digits".into())
            } else if len > 20 {
                Err("Phone is too long".into())
            } else {
                Ok(sanitize_phone(value))
            }
        }
        Rule::Message => {
            if len == 0 {
                Err("Message is required".into())
            } else if len < 10 {
                Err("Message must be at least 10 characters".into())
            } else if len > 1000 {
                Err("Message is too long".into())
            } else {
                Ok(value.to_string())
            }
        }
        Rule::Subject => {
            if len == 0 {
                Err("Subject is required".into())
            } else if len < 3 {
                Err("Subject must be at least 3 characters".into())
            } else if len > 100 {
                Err("Subject is too long".into())
            } else {
                Ok(value.to_string())
            }
        }
        Rule::Company => {
            if len == 0 {
                Err("Company name is required".into())
            } else if len > 100 {
                Err("Company name is too long".into())
            } else {
                Ok(value.to_string())
            }
        }
        Rule::Filled => {
            if len == 0 {
                Err("This field is required".into())
            } else {
                Ok(value.to_string())
            }
        }
    }
}

/// Validate `data` against `schema`.
///
/// Fields outside the schema are passed through untouched; `_gotcha` is
/// checked on the contact form and kept so [`prepare_form_data`] can drop it.
pub fn validate(
    schema: FormSchema,
    data: &Map<String, Value>,
) -> Result<Map<String, Value>, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut clean = data.clone();

    for field in schema.fields() {
        match data.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    let message = check(field.rule, "").err().unwrap_or_default();
                    errors.add(field.name, message);
                }
            }
            Some(Value::String(raw)) => match check(field.rule, raw) {
                Ok(value) => {
                    clean.insert(field.name.to_string(), Value::String(value));
                }
                Err(message) => errors.add(field.name, message),
            },
            Some(_) => errors.add(field.name, "Expected text"),
        }
    }

    if data.get("consent") != Some(&Value::Bool(true)) {
        errors.add("consent", "You must accept the terms");
    }

    if schema.has_honeypot() {
        match data.get("_gotcha") {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => {}
            Some(_) => errors.add("_gotcha", "Spam detected"),
        }
    }

    if errors.is_empty() {
        Ok(clean)
    } else {
        Err(errors)
    }
}

/// Validate a single value, reporting only its first problem.
pub fn validate_field(schema: FormSchema, name: &str, value: &str) -> Result<String, String> {
    match schema.fields().iter().find(|f| f.name == name) {
        Some(field) => check(field.rule, value),
        None => Ok(value.to_string()),
    }
}

/// Strip `<script>` blocks and every other tag, then trim.
pub fn sanitize_html(input: &str) -> String {
    strip(&TAG_RE, &strip(&SCRIPT_RE, input)).trim().to_string()
}

/// Digits only.
pub fn sanitize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Trim, drop `<script>` blocks and any remaining angle brackets.
pub fn sanitize_input(input: &str) -> String {
    strip(&SCRIPT_RE, input.trim())
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect()
}

/// `"mARIA da silva"` → `"Maria Da Silva"`.
pub fn capitalize_name(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_valid_email(email: &str) -> bool {
    is_match(&EMAIL_RE, email)
}

/// 10 or 11 digits once formatting is removed.
pub fn is_valid_phone(phone: &str) -> bool {
    (10..=11).contains(&sanitize_phone(phone).len())
}

/// Sanitize text fields, reduce the phone to digits and drop the honeypot.
pub fn prepare_form_data(data: &Map<String, Value>) -> Map<String, Value> {
    let mut prepared = data.clone();

    for key in ["name", "subject", "message", "company"] {
        if let Some(Value::String(raw)) = prepared.get(key) {
            let mut cleaned = sanitize_html(raw);
            if key == "name" {
                cleaned = capitalize_name(&cleaned);
            }
            prepared.insert(key.to_string(), Value::String(cleaned));
        }
    }

    if let Some(Value::String(phone)) = prepared.get("phone") {
        let digits = sanitize_phone(phone);
        prepared.insert("phone".to_string(), Value::String(digits));
    }

    prepared.remove("_gotcha");
    prepared
}

/// WhatsApp-ready summary of a contact form submission.
pub fn contact_message(site_title: &str, data: &Map<String, Value>, sent_at: &str) -> String {
    let text = |key: &str| {
        data.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let mut lines = vec![
        format!("Hello! I came from the {} website.", site_title),
        String::new(),
        format!("*Name:* {}", text("name").unwrap_or_default()),
        format!("*Email:* {}", text("email").unwrap_or_default()),
    ];
    if let Some(phone) = text("phone") {
        lines.push(format!("*Phone:* {}", format_phone_number(&phone)));
    }
    if let Some(subject) = text("subject") {
        lines.push(format!("*Subject:* {}", subject));
    }
    lines.push(String::new());
    lines.push("*Message:*".to_string());
    lines.push(text("message").unwrap_or_default());
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!("Sent at {}", sent_at));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn contact() -> Map<String, Value> {
        map(json!({
            "name": "Maria Conceição",
            "email": "maria@example.com",
            "phone": "(11) 99999-8888",
            "message": "I would like a quote for a landing page.",
            "consent": true
        }))
    }

    #[test]
    fn valid_contact_normalizes_phone() {
        let clean = validate(FormSchema::Contact, &contact()).unwrap();
        assert_eq!(clean["phone"], json!("11999998888"));
        assert_eq!(clean["name"], json!("Maria Conceição"));
    }

    #[test]
    fn reports_first_error_per_field() {
        let mut data = contact();
        data.insert("name".into(), json!("M"));
        data.insert("email".into(), json!("not-an-email"));
        data.insert("message".into(), json!(""));
        data.insert("consent".into(), json!(false));

        let errors = validate(FormSchema::Contact, &data).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(errors.get("message"), Some("Message is required"));
        assert_eq!(errors.get("consent"), Some("You must accept the terms"));
        assert_eq!(errors.get("phone"), None);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut data = contact();
        data.remove("phone");
        assert!(validate(FormSchema::Contact, &data).is_ok());
    }

    #[test]
    fn honeypot_must_stay_empty() {
        let mut data = contact();
        data.insert("_gotcha".into(), json!("I am a bot"));
        let errors = validate(FormSchema::Contact, &data).unwrap_err();
        assert_eq!(errors.get("_gotcha"), Some("Spam detected"));
    }

    #[test]
    fn names_reject_digits() {
        assert_eq!(
            validate_field(FormSchema::Contact, "name", "R2D2"),
            Err("Name may only contain letters and spaces".into())
        );
    }

    #[test]
    fn quote_requires_business_fields() {
        let data = map(json!({
            "name": "Ana Souza",
            "email": "ana@example.com",
            "phone": "11 99999 8888",
            "consent": true
        }));
        let errors = validate(FormSchema::Quote, &data).unwrap_err();
        for field in ["company", "projectType", "budget", "timeline", "description"] {
            assert!(errors.get(field).is_some(), "{} should be required", field);
        }
    }

    #[test]
    fn callback_and_newsletter_schemas() {
        let callback = map(json!({
            "name": "Ana", "phone": "+55 11 99999-8888", "preferredTime": "morning", "consent": true
        }));
        assert!(validate(FormSchema::Callback, &callback).is_ok());

        let newsletter = map(json!({ "email": "ana@example.com", "consent": true }));
        assert!(validate(FormSchema::Newsletter, &newsletter).is_ok());
    }

    #[test]
    fn non_string_values_are_rejected() {
        let mut data = contact();
        data.insert("email".into(), json!(42));
        let errors = validate(FormSchema::Contact, &data).unwrap_err();
        assert_eq!(errors.get("email"), Some("Expected text"));
    }

    #[test]
    fn sanitizers() {
        assert_eq!(
            sanitize_html("  <b>Hi</b><script>alert(1)</script> there "),
            "Hi there"
        );
        assert_eq!(sanitize_input(" a <script>x</script>b<i> "), "a bi");
        assert_eq!(capitalize_name("mARIA da silva"), "Maria Da Silva");
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_phone("(11) 99999-8888"));
        assert!(!is_valid_phone("12345"));
    }

    #[test]
    fn prepare_drops_honeypot_and_cleans_fields() {
        let mut data = contact();
        data.insert("name".into(), json!("maria <b>silva</b>"));
        data.insert("_gotcha".into(), json!(""));
        let prepared = prepare_form_data(&data);
        assert_eq!(prepared["name"], json!("Maria Silva"));
        assert_eq!(prepared["phone"], json!("11999998888"));
        assert!(!prepared.contains_key("_gotcha"));
    }

    #[test]
    fn contact_message_skips_absent_lines() {
        let mut data = contact();
        data.remove("subject");
        let text = contact_message("Acme", &data, "2025-01-01 10:00");
        assert!(text.starts_with("Hello! I came from the Acme website."));
        assert!(text.contains("*Phone:* (11) 99999-8888"));
        assert!(!text.contains("*Subject:*"));
        assert!(text.ends_with("Sent at 2025-01-01 10:00"));
    }
}
