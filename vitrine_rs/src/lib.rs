//! # vitrine
//!
//! **Content-driven landing pages** - render a JSON list of sections into a
//! complete static HTML page, and handle the small amount of server-side work
//! a landing page needs (contact forms, analytics).
//!
//! The section components live in [`vitrine_sections`]; this crate wires them
//! to configuration, files on disk, SEO tags and the `vitrine` CLI.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vitrine::{config::VitrineConfig, loader, pipeline};
//!
//! let config = VitrineConfig::load(Path::new("."));
//! let doc = loader::load_document(Path::new("content/homepage.json")).unwrap();
//! let site = loader::load_site(Path::new("content/site.json")).unwrap();
//!
//! let page = pipeline::render(&config, &doc, site, config.render_mode(), None);
//! pipeline::write_output(Path::new("dist/index.html"), &page.html).unwrap();
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! vitrine render --content content/homepage.json --site content/site.json --out dist/index.html
//! vitrine check --content content/homepage.json --mode development --strict
//! vitrine link whatsapp 11999999999 --message "Hi!"
//! vitrine submit --name Ana --email ana@example.com --message "Hello there" --consent
//! ```

/// Server-side analytics events and collector loader scripts.
pub mod analytics;
/// Command-line interface.
pub mod cli;
pub mod config;
pub mod error;
/// Contact form submission over HTTP.
pub mod forms;
pub mod loader;
pub mod logging;
/// Content + site + config to a rendered page.
pub mod pipeline;
pub mod seo;
/// Form validation and sanitization.
pub mod validators;

pub use error::{Error, Result};
pub use vitrine_sections as sections;
