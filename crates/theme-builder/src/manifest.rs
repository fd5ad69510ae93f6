//! The theme manifest (`config.json`).
//!
//! Only two fields carry meaning for assembly: `pages` and `page_components`,
//! both arrays of entries shaped like
//!
//! ```json
//! { "name": "home", "label": "Home", "type": "page" }
//! ```
//!
//! Every other field is opaque. The parsed document is kept as-is so it can be
//! echoed into the artifact without losing fields or reordering keys.

use serde_json::Value;

use crate::error::ThemeError;

/// Name of the manifest field listing pages.
pub const PAGES: &str = "pages";
/// Name of the manifest field listing page components.
pub const PAGE_COMPONENTS: &str = "page_components";

/// A page or page component declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    /// Identifier, used as directory name and file stem.
    pub name: String,
    /// Display label. Not used when resolving files; shown in diagnostics.
    pub label: Option<String>,
    /// Kind of entry (`page`, `component`, ...), used as a path segment.
    pub kind: String,
}

impl PageSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind: kind.into(),
        }
    }

    fn from_value(section: &'static str, index: usize, value: &Value) -> Result<Self, ThemeError> {
        let invalid = |message: &str| ThemeError::InvalidItem {
            section,
            index,
            message: message.to_string(),
        };

        let entry = value
            .as_object()
            .ok_or_else(|| invalid("entry is not an object"))?;
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("missing string field 'name'"))?;
        let kind = entry
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("missing string field 'type'"))?;
        let label = entry.get("label").and_then(Value::as_str);

        Ok(Self {
            name: name.to_string(),
            label: label.map(str::to_string),
            kind: kind.to_string(),
        })
    }
}

/// Parsed `config.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeManifest {
    pages: Vec<PageSpec>,
    page_components: Vec<PageSpec>,
    raw: Value,
}

impl ThemeManifest {
    /// Validates a parsed manifest document.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Schema`] if `pages` or `page_components` is missing or
    ///   not an array
    /// - [`ThemeError::InvalidItem`] if an entry has no string `name` or `type`
    pub fn from_value(raw: Value) -> Result<Self, ThemeError> {
        let (Some(pages), Some(page_components)) = (
            raw.get(PAGES).and_then(Value::as_array),
            raw.get(PAGE_COMPONENTS).and_then(Value::as_array),
        ) else {
            return Err(ThemeError::Schema);
        };

        let pages = decode_section(PAGES, pages)?;
        let page_components = decode_section(PAGE_COMPONENTS, page_components)?;

        Ok(Self {
            pages,
            page_components,
            raw,
        })
    }

    /// Parses and validates manifest text.
    pub fn parse(text: &str, path: &std::path::Path) -> Result<Self, ThemeError> {
        let raw = serde_json::from_str(text).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(raw)
    }

    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }

    pub fn page_components(&self) -> &[PageSpec] {
        &self.page_components
    }

    /// Pages followed by page components, in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &PageSpec> {
        self.pages.iter().chain(self.page_components.iter())
    }

    /// The document exactly as parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}

fn decode_section(section: &'static str, entries: &[Value]) -> Result<Vec<PageSpec>, ThemeError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, value)| PageSpec::from_value(section, index, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_order_pages_then_components() {
        let manifest = ThemeManifest::from_value(json!({
            "pages": [
                { "name": "home", "label": "Home", "type": "page" },
                { "name": "about", "label": "About", "type": "page" }
            ],
            "page_components": [
                { "name": "header", "label": "Header", "type": "component" }
            ]
        }))
        .unwrap();

        let names: Vec<_> = manifest.items().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["home", "about", "header"]);
        assert_eq!(manifest.pages()[0].label.as_deref(), Some("Home"));
        assert_eq!(manifest.page_components()[0].kind, "component");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let manifest = ThemeManifest::from_value(json!({
            "pages": [{ "name": "home", "type": "page" }],
            "page_components": [{ "name": "home", "type": "page" }]
        }))
        .unwrap();
        assert_eq!(manifest.items().count(), 2);
    }

    #[test]
    fn test_empty_sections_are_valid() {
        let manifest =
            ThemeManifest::from_value(json!({ "pages": [], "page_components": [] })).unwrap();
        assert_eq!(manifest.items().count(), 0);
    }

    #[test]
    fn test_pages_not_array() {
        let result = ThemeManifest::from_value(json!({
            "pages": "not-an-array",
            "page_components": []
        }));
        assert!(matches!(result, Err(ThemeError::Schema)));
    }

    #[test]
    fn test_missing_page_components() {
        let result = ThemeManifest::from_value(json!({ "pages": [] }));
        assert!(matches!(result, Err(ThemeError::Schema)));
    }

    #[test]
    fn test_manifest_not_object() {
        let result = ThemeManifest::from_value(json!([1, 2, 3]));
        assert!(matches!(result, Err(ThemeError::Schema)));
    }

    #[test]
    fn test_entry_without_type() {
        let result = ThemeManifest::from_value(json!({
            "pages": [],
            "page_components": [{ "name": "footer" }]
        }));
        assert!(matches!(
            result,
            Err(ThemeError::InvalidItem { section: "page_components", index: 0, .. })
        ));
    }

    #[test]
    fn test_label_is_optional() {
        let manifest = ThemeManifest::from_value(json!({
            "pages": [{ "name": "home", "type": "page", "label": 3 }],
            "page_components": []
        }))
        .unwrap();
        assert_eq!(manifest.pages()[0], PageSpec::new("home", "page"));
    }

    #[test]
    fn test_raw_keeps_extra_fields_and_order() {
        let text = r#"{"zeta":1,"pages":[],"alpha":{"b":2,"a":1},"page_components":[]}"#;
        let manifest = ThemeManifest::parse(text, std::path::Path::new("config.json")).unwrap();
        assert_eq!(serde_json::to_string(manifest.raw()).unwrap(), text);
    }

    #[test]
    fn test_malformed_json() {
        let result = ThemeManifest::parse("{ pages: ", std::path::Path::new("config.json"));
        assert!(matches!(result, Err(ThemeError::Parse { .. })));
    }
}
