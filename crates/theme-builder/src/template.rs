//! Template fragment resolution.
//!
//! Each manifest entry owns up to three fragments, found by convention under
//! the theme's `templates/` directory:
//!
//! ```text
//! templates/
//! └── {type}/
//!     └── {name}/
//!         ├── html/{name}_html.html
//!         ├── css/{name}_css.css
//!         └── rss/{name}_rss.rss
//! ```
//!
//! Fragments are optional. A missing file is logged and skipped; it never
//! produces a placeholder record.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ThemeError;
use crate::manifest::PageSpec;

/// Kind of template fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Html,
    Css,
    Rss,
}

impl ContentType {
    /// All content types, in the order fragments are collected.
    pub const ALL: [ContentType; 3] = [ContentType::Html, ContentType::Css, ContentType::Rss];

    /// Lowercase name, doubling as directory name and file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::Css => "css",
            ContentType::Rss => "rss",
        }
    }

    /// Label used in diagnostics.
    fn label(self) -> &'static str {
        match self {
            ContentType::Html => "HTML",
            ContentType::Css => "CSS",
            ContentType::Rss => "RSS",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fragment in the theme artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    /// `{name}_{content_type}`.
    pub template_uri: String,
    /// The entry name.
    pub template_set: String,
    /// The entry type.
    pub template_type: String,
    pub content_type: ContentType,
    /// File contents, verbatim.
    pub contents: String,
}

impl TemplateRecord {
    pub fn new(spec: &PageSpec, content_type: ContentType, contents: impl Into<String>) -> Self {
        Self {
            template_uri: format!("{}_{}", spec.name, content_type),
            template_set: spec.name.clone(),
            template_type: spec.kind.clone(),
            content_type,
            contents: contents.into(),
        }
    }
}

/// Conventional location of one fragment of `spec`.
///
/// ```rust
/// use std::path::Path;
/// use theme_builder::{template_path, ContentType, PageSpec};
///
/// let path = template_path(Path::new("templates"), &PageSpec::new("home", "page"), ContentType::Css);
/// assert_eq!(path, Path::new("templates/page/home/css/home_css.css"));
/// ```
pub fn template_path(templates_root: &Path, spec: &PageSpec, content_type: ContentType) -> PathBuf {
    let ct = content_type.as_str();
    templates_root
        .join(&spec.kind)
        .join(&spec.name)
        .join(ct)
        .join(format!("{}_{}.{}", spec.name, ct, ct))
}

/// Reads a text file verbatim.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
pub(crate) fn read_text(path: &Path) -> Result<String, ThemeError> {
    let bytes = std::fs::read(path).map_err(|e| ThemeError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file that may legitimately be absent.
///
/// Returns `Ok(None)` when nothing exists at `path`, and the contents verbatim
/// otherwise.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] if the file exists but can't be read.
pub fn read_optional(path: &Path) -> Result<Option<String>, ThemeError> {
    if !path.exists() {
        return Ok(None);
    }
    read_text(path).map(Some)
}

/// Fragments gathered for a sequence of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedTemplates {
    /// Records in entry order, then html/css/rss within an entry.
    pub records: Vec<TemplateRecord>,
    /// Conventional paths that had no file.
    pub skipped: Vec<PathBuf>,
}

/// Resolves and reads every fragment of `items`.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] if an existing fragment can't be read.
pub fn collect_templates<'a>(
    templates_root: &Path,
    items: impl IntoIterator<Item = &'a PageSpec>,
) -> Result<CollectedTemplates, ThemeError> {
    let mut collected = CollectedTemplates::default();

    for spec in items {
        for content_type in ContentType::ALL {
            let path = template_path(templates_root, spec, content_type);
            match read_optional(&path)? {
                Some(contents) => {
                    debug!(
                        path = %path.display(),
                        label = spec.label.as_deref().unwrap_or(&spec.name),
                        "collected {} fragment",
                        content_type
                    );
                    collected
                        .records
                        .push(TemplateRecord::new(spec, content_type, contents));
                }
                None => {
                    warn!("{} file not found: {}", content_type.label(), path.display());
                    collected.skipped.push(path);
                }
            }
        }
    }

    Ok(collected)
}
