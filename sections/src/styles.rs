//! CSS for the rendered landing page.
//!
//! One stylesheet covers every section component: design tokens, layout
//! utilities, tones, separators and the per-component blocks. It is inlined
//! into the page `<head>`, so the output is a single self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use vitrine_sections::styles::PAGE_CSS;
//!
//! let brand = ":root { --color-primary: #0f766e; }";
//! let combined = format!("{}\n{}", PAGE_CSS, brand);
//! assert!(combined.ends_with("#0f766e; }"));
//! ```

/// Complete CSS for the page.
///
/// Brand colors live in the `--color-*` custom properties; override them after
/// this sheet to re-theme every section at once.
pub const PAGE_CSS: &str = r#"
:root {
    --color-primary: #2563eb;
    --color-primary-dark: #1e40af;
    --color-secondary: #0f172a;
    --color-accent: #f59e0b;
    --color-whatsapp: #25d366;
    --color-danger: #dc2626;
    --color-success: #059669;
    --color-text: #0f172a;
    --color-muted: #64748b;
    --color-border: #e2e8f0;
    --surface-0: #ffffff;
    --surface-1: #f8fafc;
    --surface-2: #f1f5f9;
    --radius: 12px;
    --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1120px;
}

*, *::before, *::after { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--color-text);
    background: var(--surface-0);
    line-height: 1.6;
}
img { max-width: 100%; height: auto; display: block; }
a { color: inherit; }

/* Layout */
.container { width: 100%; max-width: var(--container-max); margin: 0 auto; padding: 0 1.25rem; position: relative; }
.container-narrow, .narrow { max-width: 760px; margin-left: auto; margin-right: auto; }
.container-wide { max-width: 1280px; }
.container-full { max-width: none; }
.grid { display: grid; gap: 1.5rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
.grid-1-2 { grid-template-columns: 1fr 2fr; }
.grid-footer { grid-template-columns: 2fr 1fr 1fr; }
.stack-md > * + * { margin-top: 1rem; }
.stack-lg > * + * { margin-top: 1.5rem; }
.stack-xl > * + * { margin-top: 2.5rem; }
.items-center { align-items: center; }
.items-start { align-items: start; }
.justify-center { display: flex; justify-content: center; }
.justify-start { display: flex; justify-content: flex-start; }
.justify-end { display: flex; justify-content: flex-end; }
.text-center { text-align: center; }
.text-left { text-align: left; }
.muted { color: var(--color-muted); }
.small { font-size: 0.875rem; }
.strong { font-weight: 600; margin: 0; }
.lead { font-size: 1.125rem; color: var(--color-muted); max-width: 680px; margin: 0.75rem auto 0; }
.eyebrow { text-transform: uppercase; letter-spacing: 0.08em; font-size: 0.8rem; font-weight: 600; }
.note { font-size: 0.875rem; color: var(--color-muted); text-align: center; margin-top: 2rem; }
.note-warn { color: var(--color-accent); }

/* Sections */
.section { position: relative; overflow: hidden; }
.pad-sm { padding: 2rem 0; }
.pad-md { padding: 3rem 0; }
.pad-lg { padding: 5rem 0; }
.pad-xl { padding: 7rem 0; }
.section-heading { margin-bottom: 3rem; }
.section-foot { margin-top: 3rem; text-align: center; }
.tone-surface-0 { background: var(--surface-0); }
.tone-surface-1 { background: var(--surface-1); }
.tone-surface-2 { background: var(--surface-2); }
.tone-solid-primary { background: var(--color-primary); }
.tone-solid-secondary { background: var(--color-secondary); }
.tone-gradient { background: linear-gradient(135deg, var(--color-primary) 0%, var(--color-primary-dark) 100%); }
.tone-gradient-soft { background: linear-gradient(180deg, var(--surface-1) 0%, #e0ecff 100%); }
.on-dark { color: #ffffff; }
.on-dark .muted, .on-dark .lead, .on-dark .footer-muted { color: rgba(255, 255, 255, 0.8); }
.pattern { position: absolute; inset: 0; pointer-events: none; opacity: 0.5; }
.pattern-dots { background-image: radial-gradient(rgba(100, 116, 139, 0.25) 1px, transparent 1px); background-size: 20px 20px; }
.pattern-grid { background-image: linear-gradient(rgba(100, 116, 139, 0.12) 1px, transparent 1px), linear-gradient(90deg, rgba(100, 116, 139, 0.12) 1px, transparent 1px); background-size: 32px 32px; }

/* Separators */
.separator-wave, .separator-curve, .separator-diagonal { padding-bottom: calc(5rem + 80px); }
.separator-shape { position: absolute; left: 0; bottom: -1px; width: 100%; height: 80px; color: var(--surface-0); }

/* Headings */
.heading { margin: 0; line-height: 1.2; font-weight: 700; }
.heading-hero { font-size: clamp(2.25rem, 5vw, 3.75rem); }
.heading-xl { font-size: clamp(1.875rem, 4vw, 2.5rem); }
.heading-lg { font-size: 1.5rem; }
.heading-md { font-size: 1.25rem; }
.heading-sm { font-size: 1.125rem; }
.heading-xs { font-size: 1rem; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 999px;
    border: 2px solid transparent;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}
.btn:hover { transform: translateY(-1px); box-shadow: var(--shadow); }
.btn-primary { background: var(--color-primary); color: #ffffff; }
.btn-secondary { background: var(--color-secondary); color: #ffffff; }
.btn-outline { border-color: currentColor; background: transparent; }
.btn-whatsapp { background: var(--color-whatsapp); color: #ffffff; }
.btn-hero { background: #ffffff; color: var(--color-primary); }
.btn-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
.btn-lg { padding: 1rem 2rem; font-size: 1.0625rem; }
.btn-block { width: 100%; justify-content: center; }
.cta-actions, .hero-actions, .row-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
.text-center .cta-actions, .text-center .hero-actions { justify-content: center; }

/* Cards, badges, icons */
.card { background: var(--surface-0); color: var(--color-text); border: 1px solid var(--color-border); border-radius: var(--radius); padding: 1.5rem; box-shadow: var(--shadow); }
.card-title { margin: 0 0 0.5rem; font-size: 1.125rem; }
.badge { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.8rem; font-weight: 600; background: rgba(37, 99, 235, 0.1); color: var(--color-primary); }
.badge-soft { background: var(--surface-2); color: var(--color-muted); }
.badge-outline { background: transparent; border: 1px solid currentColor; }
.badge-popular { background: var(--color-accent); color: #ffffff; }
.badge-warn { background: rgba(245, 158, 11, 0.15); color: #b45309; }
.badge-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.icon { flex-shrink: 0; }
.icon-accent { color: var(--color-primary); }
.icon-badge { display: inline-flex; align-items: center; justify-content: center; width: 2.5rem; height: 2.5rem; border-radius: 10px; background: rgba(37, 99, 235, 0.1); color: var(--color-primary); }
.icon-badge-danger { background: rgba(220, 38, 38, 0.1); color: var(--color-danger); }
.checklist { list-style: none; padding: 0; margin: 1rem 0 0; }
.checklist li { display: flex; gap: 0.5rem; align-items: flex-start; margin-top: 0.5rem; }

/* Site header */
.site-header { z-index: 50; width: 100%; }
.header-sticky { position: sticky; top: 0; }
.header-default { background: rgba(255, 255, 255, 0.92); backdrop-filter: blur(8px); border-bottom: 1px solid var(--color-border); }
.header-transparent { background: transparent; position: absolute; }
.header-solid { background: var(--color-secondary); color: #ffffff; }
.header-bar { display: flex; align-items: center; justify-content: space-between; gap: 1rem; min-height: 4rem; }
.brand { font-weight: 800; font-size: 1.25rem; text-decoration: none; }
.nav-desktop { display: flex; gap: 1.5rem; }
.nav-link, .nav-link-mobile { text-decoration: none; font-weight: 500; }
.header-actions { display: flex; gap: 0.5rem; }
.menu-toggle { display: none; background: none; border: 0; color: inherit; cursor: pointer; }
.nav-mobile { display: flex; flex-direction: column; gap: 1rem; padding: 1rem 1.25rem; border-top: 1px solid var(--color-border); }
.nav-mobile[hidden] { display: none; }
@media (max-width: 768px) {
    .nav-desktop, .header-actions { display: none; }
    .menu-toggle { display: inline-flex; }
    .grid-1-2, .grid-footer { grid-template-columns: 1fr; }
}

/* Hero */
.hero-content { max-width: 760px; margin: 0 auto; }
.hero-content-split { margin: 0; }
.hero-media img, .hero-image { border-radius: var(--radius); box-shadow: var(--shadow); }

/* Features and services */
.feature-card, .service-card { height: 100%; }
.feature-row { display: flex; gap: 1rem; align-items: flex-start; }
.feature-alt, .service-alt { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; margin-bottom: 4rem; }
.feature-alt-reverse .feature-alt-media, .service-alt-reverse .service-media { order: -1; }
.service-image { border-radius: var(--radius); }
.service-stack > * + * { margin-top: 1.5rem; }

/* Pricing */
.pricing-card { display: flex; flex-direction: column; position: relative; }
.pricing-card-popular { border: 2px solid var(--color-primary); transform: scale(1.03); }
.price { margin: 1rem 0; }
.price-amount { font-size: 2.25rem; font-weight: 800; }
.price-period { color: var(--color-muted); }
.table-wrap { overflow-x: auto; }
.comparison-table { width: 100%; border-collapse: collapse; background: var(--surface-0); }
.comparison-table th, .comparison-table td { padding: 0.875rem 1rem; border-bottom: 1px solid var(--color-border); text-align: center; }
.comparison-table td:first-child, .comparison-table th:first-child { text-align: left; }
.plan-col-popular { background: rgba(37, 99, 235, 0.06); }
.cell-yes { color: var(--color-success); }
.cell-no { color: var(--color-muted); }

/* Testimonials */
.testimonial-card { display: flex; flex-direction: column; gap: 1rem; }
.testimonial-author { display: flex; gap: 0.75rem; align-items: center; }
.avatar { width: 3rem; height: 3rem; border-radius: 999px; object-fit: cover; }
.author-name { font-weight: 600; margin: 0; }
.quote { font-style: italic; margin: 0; }
.stars { display: inline-flex; gap: 0.125rem; }
.star-on { color: var(--color-accent); }
.star-off { color: var(--color-border); }

/* FAQ */
.accordion-item { border-bottom: 1px solid var(--color-border); }
.accordion-trigger { display: flex; justify-content: space-between; align-items: center; padding: 1.25rem 0; font-weight: 600; cursor: pointer; list-style: none; }
.accordion-trigger::-webkit-details-marker { display: none; }
.accordion-item[open] .accordion-chevron { transform: rotate(180deg); }
.accordion-content { padding-bottom: 1.25rem; color: var(--color-muted); }

/* CTA */
.cta-minimal { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1.5rem; }

/* Value snapshot */
.kpi-card { text-align: center; }
.kpi-head { display: flex; justify-content: center; gap: 0.5rem; align-items: center; }
.kpi-value { font-size: 2rem; font-weight: 800; color: var(--color-primary); margin: 0.5rem 0; }
.kpi-label { font-weight: 600; }

/* Case cards */
.case-card { display: flex; flex-direction: column; gap: 1rem; }
.case-head { display: flex; justify-content: space-between; align-items: center; }
.case-block { margin: 0; }
.case-label { display: block; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.06em; font-weight: 700; }
.case-label-problem { color: var(--color-danger); }
.case-label-result { color: var(--color-success); }
.case-arrow { color: var(--color-muted); text-align: center; }
.case-foot { display: flex; justify-content: space-between; font-size: 0.875rem; color: var(--color-muted); }

/* Process steps and timelines */
.process-matrix { width: 100%; border-collapse: collapse; }
.process-matrix th, .process-matrix td { padding: 1rem; border: 1px solid var(--color-border); vertical-align: top; text-align: left; }
.step-card { position: relative; }
.step-number { display: inline-flex; align-items: center; justify-content: center; width: 2.25rem; height: 2.25rem; border-radius: 999px; background: var(--color-primary); color: #ffffff; font-weight: 700; flex-shrink: 0; }
.step-title { margin: 0.75rem 0; }
.step-who { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; }
.step-who-you { color: var(--color-accent); }
.step-who-us { color: var(--color-primary); }
.step-list { margin: 0.25rem 0 0.75rem; padding-left: 1.125rem; }
.panel { border-radius: 8px; padding: 0.75rem; }
.panel-you { background: rgba(245, 158, 11, 0.08); }
.panel-us { background: rgba(37, 99, 235, 0.06); }
.timeline { position: relative; }
.timeline-row { display: flex; gap: 1.25rem; padding-bottom: 2rem; position: relative; }
.timeline-connected .timeline-row:not(:last-child)::before { content: ''; position: absolute; left: 1.125rem; top: 2.25rem; bottom: 0; width: 2px; background: var(--color-border); }
.timeline-head { display: flex; gap: 0.75rem; align-items: center; }
.timeline-body { flex: 1; }
.step-connected::after { content: ''; position: absolute; top: 2.25rem; right: -1.5rem; width: 1.5rem; height: 2px; background: var(--color-border); }

/* Consultative demo */
.column-title { font-size: 1.25rem; margin: 0 0 1.5rem; }
.column-title-danger { color: var(--color-danger); }
.pain-row, .demo-step { display: flex; gap: 1rem; align-items: flex-start; }
.pain-card { display: flex; flex-direction: column; gap: 0.75rem; }
.demo-step-head { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
.demo-panel { margin-top: 2rem; }
.demo-image { border-radius: var(--radius); }

/* Footer */
.site-footer { position: relative; }
.footer-invite { padding-bottom: 3rem; margin-bottom: 3rem; border-bottom: 1px solid rgba(255, 255, 255, 0.15); }
.footer-title { font-size: 1.25rem; margin: 0 0 0.75rem; }
.footer-heading { font-size: 1rem; margin: 0 0 1rem; }
.footer-muted { color: rgba(255, 255, 255, 0.7); }
.footer-bottom { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; margin-top: 3rem; padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.15); font-size: 0.875rem; }
.footer-notice { margin: 0; }
.footer-legal { display: flex; gap: 1.5rem; }
.social-links { display: flex; gap: 0.75rem; margin-top: 1rem; }
.social-link { display: inline-flex; width: 2.5rem; height: 2.5rem; align-items: center; justify-content: center; border-radius: 999px; background: rgba(255, 255, 255, 0.1); }
.contact-list, .link-list { list-style: none; padding: 0; margin: 0; }
.contact-list li, .link-list li { display: flex; gap: 0.5rem; margin-bottom: 0.75rem; }
.contact-list address { font-style: normal; }
.address-line { display: block; }
"#;

#[cfg(test)]
mod tests {
    use super::PAGE_CSS;

    #[test]
    fn covers_tone_and_separator_classes() {
        for class in [
            ".tone-surface-0",
            ".tone-solid-secondary",
            ".tone-gradient-soft",
            ".separator-shape",
            ".separator-diagonal",
            ".on-dark",
        ] {
            assert!(PAGE_CSS.contains(class), "missing {}", class);
        }
    }
}
