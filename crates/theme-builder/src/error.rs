//! Error types for theme assembly.

use std::io;
use std::path::PathBuf;

/// Errors that abort a theme build.
///
/// Missing template fragments are not errors; they are skipped with a warning.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// One of `config.json`, `image.txt` or `theme_uri.txt` is absent.
    #[error("{file} not found in {}", folder.display())]
    MissingInput {
        file: &'static str,
        folder: PathBuf,
    },

    /// Reading an input or writing the artifact failed.
    #[error("Failed to access \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `config.json` is not valid JSON.
    #[error("Failed to parse \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `pages` or `page_components` is missing or not an array.
    #[error(
        "Invalid config format: The 'pages' or 'page_components' attribute is missing or is not an array."
    )]
    Schema,

    /// An entry of `pages`/`page_components` cannot be resolved to template paths.
    #[error("Invalid entry {section}[{index}]: {message}")]
    InvalidItem {
        section: &'static str,
        index: usize,
        message: String,
    },

    /// The artifact could not be serialized.
    #[error("Failed to serialize theme: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
