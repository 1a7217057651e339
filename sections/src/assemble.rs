//! Page assembly: content document in, ordered rendered sections out.
//!
//! The assembler walks the document once, top to bottom:
//!
//! 1. resolve each entry's `component` against the [registry](crate::registry)
//! 2. skip unknown components, recording a [`Diagnostic`]
//! 3. merge entry-level `variant`/`separator` with the props bag (props win)
//!    and normalize the separator
//! 4. render the component with the untouched props
//!
//! Nothing here aborts: a bad entry costs at most its own section.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::components::{self, PropsIssue};
use crate::links::LinkBuilder;
use crate::registry::{self, ComponentKind};
use crate::separator::Separator;
use crate::types::{ContentDocument, SectionEntry, Site};

/// How strictly content contract violations are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Degrade silently: missing required props are not reported.
    #[default]
    Production,
    /// Report missing required props as diagnostics.
    Development,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(RenderMode::Production),
            "development" | "dev" => Ok(RenderMode::Development),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

/// Inputs shared by every section of one render.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub mode: RenderMode,
    pub site: Site,
    pub links: LinkBuilder,
    /// Year printed in footers; omitted when `None`.
    pub year: Option<i32>,
}

/// Entry fields after merging with the props bag.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionInvocation {
    pub variant: Option<String>,
    pub separator: Separator,
    pub props: Map<String, Value>,
}

impl SectionInvocation {
    /// Props keys `variant`/`separator` override the entry's own fields.
    /// A non-string override counts as absent rather than falling back.
    pub fn from_entry(entry: &SectionEntry) -> Self {
        let variant = match entry.props.get("variant") {
            Some(value) => value.as_str().map(str::to_string),
            None => entry.variant.clone(),
        };

        let separator = match entry.props.get("separator") {
            Some(value) => Separator::from_value(Some(value)),
            None => Separator::normalize(entry.separator.as_deref()),
        };

        Self {
            variant,
            separator,
            props: entry.props.clone(),
        }
    }
}

/// What a component gets besides its own props.
#[derive(Clone, Debug)]
pub struct SectionContext {
    /// Position in the source document.
    pub index: usize,
    pub kind: ComponentKind,
    pub variant: Option<String>,
    pub separator: Separator,
    pub site: Site,
    pub links: LinkBuilder,
    pub year: Option<i32>,
}

impl SectionContext {
    /// Stable DOM key of this section.
    pub fn key(&self) -> String {
        section_key(self.index)
    }

    /// Chat link to the site's WhatsApp number.
    pub fn whatsapp_href(&self, message: &str) -> String {
        self.links.whatsapp_url(&self.site.contact.whatsapp, message)
    }

    /// Message to use when a CTA does not provide one.
    pub fn default_message(&self) -> &str {
        &self.site.contact.prefill
    }
}

fn section_key(index: usize) -> String {
    format!("section-{}", index)
}

/// One rendered section, in document order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedSection {
    /// `section-{index}`; unique within a page.
    pub key: String,
    pub index: usize,
    #[serde(serialize_with = "serialize_kind")]
    pub component: ComponentKind,
    pub html: String,
}

fn serialize_kind<S: serde::Serializer>(kind: &ComponentKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.name())
}

/// Severity of a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A non-fatal problem found while assembling a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Entry named a component the registry does not know; it was skipped.
    UnknownComponent { index: usize, component: String },
    /// A required prop was empty or absent (development mode only).
    MissingRequired {
        index: usize,
        component: String,
        field: String,
    },
    /// Part of the props did not match the component's shape; that part fell back to defaults.
    InvalidProps {
        index: usize,
        component: String,
        reason: String,
    },
}

impl Diagnostic {
    pub fn index(&self) -> usize {
        match self {
            Diagnostic::UnknownComponent { index, .. }
            | Diagnostic::MissingRequired { index, .. }
            | Diagnostic::InvalidProps { index, .. } => *index,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnknownComponent { .. } => Severity::Warning,
            Diagnostic::MissingRequired { .. } | Diagnostic::InvalidProps { .. } => {
                Severity::Error
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownComponent { index, component } => {
                write!(f, "section {}: unknown component '{}' (skipped)", index, component)
            }
            Diagnostic::MissingRequired {
                index,
                component,
                field,
            } => write!(
                f,
                "section {}: {} is missing required prop '{}'",
                index, component, field
            ),
            Diagnostic::InvalidProps {
                index,
                component,
                reason,
            } => write!(
                f,
                "section {}: {} props are invalid, bad values fell back to defaults ({})",
                index, component, reason
            ),
        }
    }
}

/// Result of assembling one document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Assembly {
    pub sections: Vec<RenderedSection>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Concatenated section markup, in order.
    pub fn body_html(&self) -> String {
        self.sections.iter().map(|s| s.html.as_str()).collect()
    }
}

/// Render every resolvable entry of `doc`, in order.
pub fn assemble(doc: &ContentDocument, settings: &RenderSettings) -> Assembly {
    let mut assembly = Assembly::default();

    for (index, entry) in doc.sections.iter().enumerate() {
        let Some(kind) = registry::resolve(&entry.component) else {
            warn!(
                component = %entry.component,
                index,
                "Unknown section component, skipping"
            );
            assembly.diagnostics.push(Diagnostic::UnknownComponent {
                index,
                component: entry.component.clone(),
            });
            continue;
        };

        let invocation = SectionInvocation::from_entry(entry);
        let ctx = SectionContext {
            index,
            kind,
            variant: invocation.variant,
            separator: invocation.separator,
            site: settings.site.clone(),
            links: settings.links.clone(),
            year: settings.year,
        };

        let output = components::render_section(ctx, &invocation.props);

        for issue in output.issues {
            match issue {
                PropsIssue::Invalid(reason) => {
                    warn!(component = kind.name(), index, %reason, "Invalid section props");
                    assembly.diagnostics.push(Diagnostic::InvalidProps {
                        index,
                        component: kind.name().to_string(),
                        reason,
                    });
                }
                PropsIssue::Missing(field) if settings.mode == RenderMode::Development => {
                    error!(component = kind.name(), index, field, "Missing required prop");
                    assembly.diagnostics.push(Diagnostic::MissingRequired {
                        index,
                        component: kind.name().to_string(),
                        field: field.to_string(),
                    });
                }
                PropsIssue::Missing(_) => {}
            }
        }

        assembly.sections.push(RenderedSection {
            key: section_key(index),
            index,
            component: kind,
            html: output.html,
        });
    }

    assembly
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> ContentDocument {
        ContentDocument::from_value(value).unwrap()
    }

    #[test]
    fn props_override_entry_fields() {
        let entry = SectionEntry::new("Hero")
            .with_variant("split")
            .with_separator("wave")
            .with_props(json!({ "variant": "centered", "separator": "zigzag" }));

        let inv = SectionInvocation::from_entry(&entry);
        assert_eq!(inv.variant.as_deref(), Some("centered"));
        assert_eq!(inv.separator, Separator::None);
    }

    #[test]
    fn entry_fields_used_without_overrides() {
        let entry = SectionEntry::new("CTA")
            .with_variant("minimal")
            .with_separator("diagonal");
        let inv = SectionInvocation::from_entry(&entry);
        assert_eq!(inv.variant.as_deref(), Some("minimal"));
        assert_eq!(inv.separator, Separator::Diagonal);
    }

    #[test]
    fn unknown_component_is_skipped_with_diagnostic() {
        let assembly = assemble(
            &doc(json!({ "sections": [
                { "component": "Hero", "props": { "title": "A" } },
                { "component": "Carousel3D" },
                { "component": "CTA", "props": { "title": "B" } }
            ]})),
            &RenderSettings::default(),
        );

        let keys: Vec<_> = assembly.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["section-0", "section-2"]);
        assert_eq!(
            assembly.diagnostics,
            vec![Diagnostic::UnknownComponent {
                index: 1,
                component: "Carousel3D".into()
            }]
        );
        assert!(!assembly.has_errors());
    }

    #[test]
    fn development_mode_reports_missing_required() {
        let content = doc(json!({ "sections": [ { "component": "Features", "props": {} } ] }));

        let prod = assemble(&content, &RenderSettings::default());
        assert!(prod.diagnostics.is_empty());
        assert_eq!(prod.sections.len(), 1);

        let dev = assemble(
            &content,
            &RenderSettings {
                mode: RenderMode::Development,
                ..Default::default()
            },
        );
        let fields: Vec<_> = dev
            .diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::MissingRequired { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["title", "features"]);
        assert_eq!(dev.sections.len(), 1);
    }

    #[test]
    fn mistyped_props_render_with_defaults() {
        let assembly = assemble(
            &doc(json!({ "sections": [ { "component": "FAQ", "props": { "faqs": "nope" } } ] })),
            &RenderSettings::default(),
        );
        assert_eq!(assembly.sections.len(), 1);
        assert!(matches!(
            assembly.diagnostics.as_slice(),
            [Diagnostic::InvalidProps { index: 0, .. }]
        ));
    }

    #[test]
    fn render_mode_parses() {
        assert_eq!("dev".parse::<RenderMode>(), Ok(RenderMode::Development));
        assert_eq!("Production".parse::<RenderMode>(), Ok(RenderMode::Production));
        assert!("staging".parse::<RenderMode>().is_err());
    }
}
