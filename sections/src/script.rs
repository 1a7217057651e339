//! Client glue script appended to every page.
//!
//! Outbound URLs are final `href`s in the markup, so the script never has to
//! build or follow links. It only:
//!
//! - reports clicks on `[data-track]` elements to whichever analytics globals
//!   exist (`gtag`, `plausible`), inside `try/catch` and without
//!   `preventDefault`, so navigation never waits on analytics;
//! - toggles the mobile menu of each site header, scoped to that header.

/// Inline JavaScript for tracking and header menus (vanilla JS, no deps).
pub const CLIENT_SCRIPT: &str = r#"
(() => {
  const fire = (event, props) => {
    try {
      if (typeof window.gtag === "function") {
        window.gtag("event", event, props);
      }
    } catch (_) {}
    try {
      if (typeof window.plausible === "function") {
        window.plausible(event, { props });
      }
    } catch (_) {}
  };

  document.addEventListener(
    "click",
    (e) => {
      const el = e.target instanceof Element ? e.target.closest("[data-track]") : null;
      if (!el) return;
      const props = { location: el.dataset.trackLocation || "unknown" };
      if (el.dataset.trackLabel) props.label = el.dataset.trackLabel;
      if (el.getAttribute("href")) props.url = el.getAttribute("href");
      fire(el.dataset.track, props);
    },
    { passive: true }
  );

  document.querySelectorAll("[data-header]").forEach((header) => {
    const toggle = header.querySelector("[data-menu-toggle]");
    const menu = header.querySelector("[data-menu]");
    if (!toggle || !menu) return;
    const setOpen = (open) => {
      menu.hidden = !open;
      toggle.setAttribute("aria-expanded", String(open));
    };
    toggle.addEventListener("click", () => setOpen(menu.hidden));
    menu.querySelectorAll("a").forEach((a) => a.addEventListener("click", () => setOpen(false)));
  });
})();
"#;
