//! Outbound link construction for chat and call-to-action buttons.
//!
//! Links are built at render time and embedded as plain `href`s, so a click
//! navigates even when no script ever runs.

/// Default chat deep-link base.
pub const WHATSAPP_BASE: &str = "https://wa.me/";
/// Default country calling code prepended to local numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Builds chat and phone URLs with a configurable base and country code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkBuilder {
    /// Chat deep-link base, e.g. `https://wa.me/`.
    pub chat_base: String,
    /// Digits prepended unless the number already starts with them.
    pub country_code: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self {
            chat_base: WHATSAPP_BASE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl LinkBuilder {
    pub fn new(chat_base: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            chat_base: chat_base.into(),
            country_code: country_code.into(),
        }
    }

    /// Chat URL for `phone`, with `?text=` only when `message` is non-empty.
    ///
    /// ```rust
    /// use vitrine_sections::links::LinkBuilder;
    ///
    /// let url = LinkBuilder::default().whatsapp_url("(11) 99999-9999", "Olá");
    /// assert_eq!(url, "https://wa.me/5511999999999?text=Ol%C3%A1");
    /// ```
    pub fn whatsapp_url(&self, phone: &str, message: &str) -> String {
        let digits = digits_only(phone);
        let number = if digits.starts_with(&self.country_code) {
            digits
        } else {
            format!("{}{}", self.country_code, digits)
        };

        let base = if self.chat_base.ends_with('/') {
            format!("{}{}", self.chat_base, number)
        } else {
            format!("{}/{}", self.chat_base, number)
        };

        if message.is_empty() {
            base
        } else {
            format!("{}?text={}", base, urlencoding::encode(message))
        }
    }
}

/// Chat URL using the default base and country code.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    LinkBuilder::default().whatsapp_url(phone, message)
}

/// `tel:` URL with spaces removed.
pub fn tel_url(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", compact)
}

/// Display form of a Brazilian number: `(XX) XXXXX-XXXX` for 11 digits,
/// `(XX) XXXX-XXXX` for 10. Anything else is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits = digits_only(phone);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

/// Keep ASCII digits only.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
