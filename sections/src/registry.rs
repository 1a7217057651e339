//! Closed, process-wide component registry.
//!
//! Maps the `component` string of a section entry to a [`ComponentKind`].
//! Built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Every section component the renderer knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Hero,
    Features,
    ConsultativeDemo,
    ValueSnapshot,
    CaseCards,
    ProcessTimeline,
    ProcessSteps,
    Services,
    Pricing,
    Testimonials,
    Faq,
    Cta,
    Footer,
    SiteHeader,
    SiteFooter,
}

impl ComponentKind {
    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Hero => "Hero",
            ComponentKind::Features => "Features",
            ComponentKind::ConsultativeDemo => "ConsultativeDemo",
            ComponentKind::ValueSnapshot => "ValueSnapshot",
            ComponentKind::CaseCards => "CaseCards",
            ComponentKind::ProcessTimeline => "ProcessTimeline",
            ComponentKind::ProcessSteps => "ProcessSteps",
            ComponentKind::Services => "Services",
            ComponentKind::Pricing => "Pricing",
            ComponentKind::Testimonials => "Testimonials",
            ComponentKind::Faq => "FAQ",
            ComponentKind::Cta => "CTA",
            ComponentKind::Footer => "Footer",
            ComponentKind::SiteHeader => "SiteHeader",
            ComponentKind::SiteFooter => "SiteFooter",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static REGISTRY: LazyLock<HashMap<&'static str, ComponentKind>> = LazyLock::new(|| {
    HashMap::from([
        ("Hero", ComponentKind::Hero),
        ("Features", ComponentKind::Features),
        ("ConsultativeDemo", ComponentKind::ConsultativeDemo),
        // Mobile layout shares the component, it only differs in CSS.
        ("ConsultativeDemoMobile", ComponentKind::ConsultativeDemo),
        ("ValueSnapshot", ComponentKind::ValueSnapshot),
        ("CaseCards", ComponentKind::CaseCards),
        ("ProcessTimeline", ComponentKind::ProcessTimeline),
        ("ProcessSteps", ComponentKind::ProcessSteps),
        ("Services", ComponentKind::Services),
        ("Pricing", ComponentKind::Pricing),
        ("Testimonials", ComponentKind::Testimonials),
        ("FAQ", ComponentKind::Faq),
        ("CTA", ComponentKind::Cta),
        ("Footer", ComponentKind::Footer),
        ("SiteHeader", ComponentKind::SiteHeader),
        ("Header", ComponentKind::SiteHeader),
        ("SiteFooter", ComponentKind::SiteFooter),
    ])
});

/// Look up a component by its registry name. Case-sensitive.
pub fn resolve(name: &str) -> Option<ComponentKind> {
    REGISTRY.get(name).copied()
}

/// All registered names (aliases included), sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_names_and_aliases() {
        assert_eq!(resolve("Hero"), Some(ComponentKind::Hero));
        assert_eq!(resolve("FAQ"), Some(ComponentKind::Faq));
        assert_eq!(resolve("Header"), Some(ComponentKind::SiteHeader));
        assert_eq!(
            resolve("ConsultativeDemoMobile"),
            Some(ComponentKind::ConsultativeDemo)
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(resolve("hero"), None);
        assert_eq!(resolve("Faq"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for name in names() {
            let kind = resolve(name).unwrap();
            assert_eq!(resolve(kind.name()), Some(kind));
        }
        assert_eq!(names().len(), 17);
    }
}
