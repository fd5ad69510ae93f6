//! The theme build pipeline.
//!
//! ```text
//! folder ─► ThemeFolder::open ─► ThemeManifest ─► collect_templates ─► ThemeArtifact ─► {theme_uri}.json
//! ```
//!
//! Everything before the write is side-effect free apart from logging, so a
//! failed build never leaves a partial artifact behind.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifact::ThemeArtifact;
use crate::error::ThemeError;
use crate::manifest::ThemeManifest;
use crate::template::{collect_templates, read_text, CollectedTemplates};

pub const CONFIG_FILE: &str = "config.json";
pub const IMAGE_FILE: &str = "image.txt";
pub const THEME_URI_FILE: &str = "theme_uri.txt";
pub const TEMPLATES_DIR: &str = "templates";

/// Required inputs, in the order they are checked.
pub const REQUIRED_FILES: [&str; 3] = [CONFIG_FILE, IMAGE_FILE, THEME_URI_FILE];

/// A theme source folder whose required inputs have been loaded.
#[derive(Debug, Clone)]
pub struct ThemeFolder {
    root: PathBuf,
    theme_uri: String,
    image: String,
    manifest: ThemeManifest,
}

impl ThemeFolder {
    /// Loads `config.json`, `image.txt` and `theme_uri.txt` from `root`.
    ///
    /// Presence of all three is checked before anything is read. Text files
    /// are kept verbatim, including trailing whitespace; invalid UTF-8 is
    /// replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::MissingInput`] for the first required file that is absent
    /// - [`ThemeError::Io`] if a required file can't be read
    /// - [`ThemeError::Parse`] if `config.json` is not valid JSON
    /// - [`ThemeError::Schema`] / [`ThemeError::InvalidItem`] if the manifest is malformed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ThemeError> {
        let root = root.into();

        for file in REQUIRED_FILES {
            if !root.join(file).exists() {
                return Err(ThemeError::MissingInput {
                    file,
                    folder: root,
                });
            }
        }

        let theme_uri = read_text(&root.join(THEME_URI_FILE))?;
        let image = read_text(&root.join(IMAGE_FILE))?;
        let config_path = root.join(CONFIG_FILE);
        let manifest = ThemeManifest::parse(&read_text(&config_path)?, &config_path)?;

        Ok(Self {
            root,
            theme_uri,
            image,
            manifest,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn theme_uri(&self) -> &str {
        &self.theme_uri
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn manifest(&self) -> &ThemeManifest {
        &self.manifest
    }

    pub fn templates_root(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }
}

/// Result of assembling a theme without writing it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub artifact: ThemeArtifact,
    /// Conventional fragment paths that had no file.
    pub skipped: Vec<PathBuf>,
}

/// Assembles the artifact for the theme in `folder`.
///
/// # Errors
///
/// See [`ThemeFolder::open`]; additionally [`ThemeError::Io`] if an existing
/// fragment can't be read.
pub fn assemble_theme(folder: impl AsRef<Path>) -> Result<BuildReport, ThemeError> {
    let theme = ThemeFolder::open(folder.as_ref())?;
    debug!(
        folder = %theme.root().display(),
        items = theme.manifest().items().count(),
        "loaded theme manifest"
    );

    let CollectedTemplates { records, skipped } =
        collect_templates(&theme.templates_root(), theme.manifest().items())?;

    let ThemeFolder {
        theme_uri,
        image,
        manifest,
        ..
    } = theme;

    Ok(BuildReport {
        artifact: ThemeArtifact {
            theme_uri,
            image,
            config: manifest.into_raw(),
            templates: records,
        },
        skipped,
    })
}

/// Builds the theme in `folder` and writes `{theme_uri}.json` into `output_dir`.
///
/// Returns the path of the written file. Nothing is written on error.
pub fn process_theme(
    folder: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, ThemeError> {
    let report = assemble_theme(folder)?;
    let (path, bytes) = report.artifact.write_to(output_dir.as_ref())?;
    info!(
        templates = report.artifact.templates.len(),
        skipped = report.skipped.len(),
        "Wrote {} bytes to {}",
        bytes,
        path.display()
    );
    Ok(path)
}
