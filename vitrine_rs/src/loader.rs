//! Reading content documents and site descriptors from disk.

use std::path::Path;

use serde_json::Value;
use vitrine_sections::{ContentDocument, Site};

use crate::error::{Error, Result};

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a content document. Only a malformed file fails; bad entries inside
/// a well-formed document are left for the assembler to report.
pub fn load_document(path: &Path) -> Result<ContentDocument> {
    let text = read(path)?;
    ContentDocument::from_json(&text).map_err(|source| Error::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a site descriptor. Both a bare site object and one wrapped as
/// `{ "site": { ... } }` are accepted.
pub fn load_site(path: &Path) -> Result<Site> {
    let text = read(path)?;
    let json_error = |source| Error::Json {
        path: path.to_path_buf(),
        source,
    };

    let mut value: Value = serde_json::from_str(&text).map_err(json_error)?;
    if let Some(inner) = value.get_mut("site").filter(|v| v.is_object()) {
        value = inner.take();
    }
    serde_json::from_value(value).map_err(json_error)
}

/// Site descriptor at `path`, or defaults when no path is given.
pub fn load_site_or_default(path: Option<&Path>) -> Result<Site> {
    match path {
        Some(path) => load_site(path),
        None => Ok(Site::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn wrapped_and_bare_site_files_load_the_same() {
        let temp = TempDir::new().expect("temp dir");
        let bare = temp.path().join("bare.json");
        let wrapped = temp.path().join("wrapped.json");
        std::fs::write(&bare, r#"{ "title": "Acme", "contact": { "whatsapp": "11999999999" } }"#).unwrap();
        std::fs::write(
            &wrapped,
            r#"{ "site": { "title": "Acme", "contact": { "whatsapp": "11999999999" } } }"#,
        )
        .unwrap();

        let a = load_site(&bare).unwrap();
        let b = load_site(&wrapped).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.title, "Acme");
        assert!(a.analytics.enabled);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("doc.json");
        std::fs::write(&path, r#"{ "sections": "nope" }"#).unwrap();
        assert!(matches!(load_document(&path), Err(Error::Document { .. })));

        let missing = temp.path().join("missing.json");
        assert!(matches!(load_document(&missing), Err(Error::Read { .. })));
    }
}
