//! Visual boundary between two consecutive sections.
//!
//! Authored values are free strings; [`Separator::normalize`] maps anything
//! outside the closed set to [`Separator::None`], so a component never sees an
//! invalid separator.

use serde::Serialize;
use serde_json::Value;

/// Closed set of section separators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    None,
    Wave,
    Curve,
    Diagonal,
}

impl Separator {
    /// Every valid separator, in declaration order.
    pub const ALL: [Separator; 4] = [
        Separator::None,
        Separator::Wave,
        Separator::Curve,
        Separator::Diagonal,
    ];

    /// Map an authored value onto the closed set. Unknown or absent ⇒ `None`.
    ///
    /// Matching is exact (case-sensitive), the same way component names are.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("wave") => Separator::Wave,
            Some("curve") => Separator::Curve,
            Some("diagonal") => Separator::Diagonal,
            _ => Separator::None,
        }
    }

    /// Normalize a raw JSON value; non-strings degrade to `None`.
    pub fn from_value(value: Option<&Value>) -> Self {
        Self::normalize(value.and_then(Value::as_str))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::None => "none",
            Separator::Wave => "wave",
            Separator::Curve => "curve",
            Separator::Diagonal => "diagonal",
        }
    }

    /// CSS class applied to the section wrapper, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Separator::None => None,
            Separator::Wave => Some("separator-wave"),
            Separator::Curve => Some("separator-curve"),
            Separator::Diagonal => Some("separator-diagonal"),
        }
    }

    /// SVG path for the bottom boundary shape (viewBox `0 0 1440 80`).
    pub fn svg_path(self) -> Option<&'static str> {
        match self {
            Separator::None => None,
            Separator::Wave => Some(
                "M0,40 C240,80 480,0 720,40 C960,80 1200,0 1440,40 L1440,80 L0,80 Z",
            ),
            Separator::Curve => Some("M0,0 Q720,80 1440,0 L1440,80 L0,80 Z"),
            Separator::Diagonal => Some("M0,80 L1440,0 L1440,80 Z"),
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_values_degrade_to_none() {
        for raw in ["zigzag", "", "Wave", "WAVE", " wave"] {
            assert_eq!(Separator::normalize(Some(raw)), Separator::None, "{raw:?}");
        }
        assert_eq!(Separator::normalize(None), Separator::None);
        assert_eq!(Separator::from_value(Some(&json!(7))), Separator::None);
    }

    #[test]
    fn normalization_is_idempotent() {
        for sep in Separator::ALL {
            assert_eq!(Separator::normalize(Some(sep.as_str())), sep);
            let twice = Separator::normalize(Some(Separator::normalize(Some(sep.as_str())).as_str()));
            assert_eq!(twice, sep);
        }
    }

    #[test]
    fn none_has_no_boundary() {
        assert!(Separator::None.class().is_none());
        assert!(Separator::None.svg_path().is_none());
        assert_eq!(Separator::Curve.class(), Some("separator-curve"));
    }
}
