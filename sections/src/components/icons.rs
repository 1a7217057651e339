//! Inline SVG icons.
//!
//! Stroke icons on a 24x24 grid. Content documents name icons by string
//! (`"Zap"`, `"check-circle"`, ...); [`icon_path`] resolves those names and
//! falls back to a star for anything it does not know.

use leptos::prelude::*;

/// Renders an inline stroke SVG icon from path data.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_PHONE size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Renders an icon looked up by its content name.
#[component]
pub fn NamedIcon(
    /// Icon name as authored, e.g. `"Shield"` or `"trending-up"`
    #[prop(into)]
    name: String,
    #[prop(default = "20")] size: &'static str,
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    view! { <Icon path=icon_path(&name) size=size class=class /> }
}

/// Resolve an authored icon name. Case, `-` and `_` are ignored; unknown
/// names resolve to [`ICON_STAR`].
pub fn icon_path(name: &str) -> &'static str {
    let key: String = name
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match key.as_str() {
        "star" => ICON_STAR,
        "check" => ICON_CHECK,
        "checkcircle" | "circlecheck" => ICON_CHECK_CIRCLE,
        "alertcircle" | "circlealert" | "warning" => ICON_ALERT_CIRCLE,
        "arrowright" => ICON_ARROW_RIGHT,
        "play" => ICON_PLAY,
        "phone" => ICON_PHONE,
        "messagecircle" | "whatsapp" | "chat" => ICON_MESSAGE_CIRCLE,
        "menu" => ICON_MENU,
        "x" | "close" => ICON_X,
        "user" => ICON_USER,
        "users" => ICON_USERS,
        "clock" => ICON_CLOCK,
        "trendingup" => ICON_TRENDING_UP,
        "shield" | "shieldcheck" => ICON_SHIELD,
        "zap" | "lightning" => ICON_ZAP,
        "target" => ICON_TARGET,
        "heart" => ICON_HEART,
        "mail" | "email" => ICON_MAIL,
        "mappin" => ICON_MAP_PIN,
        "quote" => ICON_QUOTE,
        "chevrondown" => ICON_CHEVRON_DOWN,
        "barchart" | "chart" => ICON_BAR_CHART,
        "globe" => ICON_GLOBE,
        "smartphone" | "mobile" => ICON_SMARTPHONE,
        "facebook" => ICON_FACEBOOK,
        "instagram" => ICON_INSTAGRAM,
        "linkedin" => ICON_LINKEDIN,
        "twitter" => ICON_TWITTER,
        "youtube" => ICON_YOUTUBE,
        _ => ICON_STAR,
    }
}

// =============================================================================
// Icon paths (24x24, stroke)
// =============================================================================

/// Star, also the fallback icon
pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87L18.18 22 12 18.27 5.82 22 7 14.14l-5-4.87 6.91-1.01L12 2z";

pub const ICON_CHECK: &str = "M20 6L9 17l-5-5";

pub const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3";

pub const ICON_ALERT_CIRCLE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 8v4M12 16h.01";

pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

pub const ICON_PLAY: &str = "M5 3l14 9-14 9V3z";

pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

/// Chat bubble (WhatsApp buttons)
pub const ICON_MESSAGE_CIRCLE: &str = "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z";

pub const ICON_MENU: &str = "M3 12h18M3 6h18M3 18h18";

pub const ICON_X: &str = "M18 6L6 18M6 6l12 12";

pub const ICON_USER: &str = "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z";

pub const ICON_USERS: &str = "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

pub const ICON_CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2";

pub const ICON_TRENDING_UP: &str = "M23 6l-9.5 9.5-5-5L1 18M17 6h6v6";

pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";

pub const ICON_ZAP: &str = "M13 2L3 14h9l-1 8 10-12h-9l1-8z";

pub const ICON_TARGET: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z";

pub const ICON_HEART: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";

pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";

pub const ICON_MAP_PIN: &str = "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z";

pub const ICON_QUOTE: &str = "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-4 6-4 6M15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-4 6-4 6";

pub const ICON_CHEVRON_DOWN: &str = "M6 9l6 6 6-6";

pub const ICON_BAR_CHART: &str = "M12 20V10M18 20V4M6 20v-4";

pub const ICON_GLOBE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

pub const ICON_SMARTPHONE: &str = "M17 2H7a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2zM12 18h.01";

// Social

pub const ICON_FACEBOOK: &str = "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z";

pub const ICON_INSTAGRAM: &str = "M17 2H7a5 5 0 0 0-5 5v10a5 5 0 0 0 5 5h10a5 5 0 0 0 5-5V7a5 5 0 0 0-5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01";

pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z";

pub const ICON_TWITTER: &str = "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z";

pub const ICON_YOUTUBE: &str = "M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33zM9.75 15.02l5.75-3.27-5.75-3.27v6.54z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_are_normalized() {
        assert_eq!(icon_path("CheckCircle"), ICON_CHECK_CIRCLE);
        assert_eq!(icon_path("check-circle"), ICON_CHECK_CIRCLE);
        assert_eq!(icon_path("TRENDING_UP"), ICON_TRENDING_UP);
    }

    #[test]
    fn unknown_icon_falls_back_to_star() {
        assert_eq!(icon_path("Sparkles3000"), ICON_STAR);
        assert_eq!(icon_path(""), ICON_STAR);
    }
}
