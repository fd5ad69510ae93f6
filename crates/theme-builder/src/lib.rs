//! Assembles a theme folder into a single JSON artifact.
//!
//! A theme folder looks like this:
//!
//! ```text
//! my-theme/
//! ├── config.json        # { "pages": [...], "page_components": [...], ... }
//! ├── image.txt
//! ├── theme_uri.txt
//! └── templates/
//!     └── page/
//!         └── home/
//!             ├── html/home_html.html
//!             ├── css/home_css.css
//!             └── rss/home_rss.rss
//! ```
//!
//! [`process_theme`] validates the three required inputs, resolves the HTML,
//! CSS and RSS fragments of every page and page component, and writes
//! `{theme_uri}.json`:
//!
//! ```json
//! {
//!   "theme_uri": "my-theme",
//!   "image": "...",
//!   "config": { "pages": [...], "page_components": [...] },
//!   "templates": [
//!     {
//!       "template_uri": "home_html",
//!       "template_set": "home",
//!       "template_type": "page",
//!       "content_type": "html",
//!       "contents": "<h1>Hi</h1>"
//!     }
//!   ]
//! }
//! ```
//!
//! Fragment contents are copied as-is; nothing is parsed or rendered.
//!
//! ```rust,ignore
//! use theme_builder::{assemble_theme, process_theme};
//!
//! // Inspect without writing
//! let report = assemble_theme("./my-theme")?;
//! println!("{} templates, {} missing", report.artifact.templates.len(), report.skipped.len());
//!
//! // Or write {theme_uri}.json into the current directory
//! process_theme("./my-theme", ".")?;
//! ```

mod artifact;
mod builder;
mod error;
pub mod manifest;
pub mod template;

pub use artifact::ThemeArtifact;
pub use builder::{
    assemble_theme, process_theme, BuildReport, ThemeFolder, CONFIG_FILE, IMAGE_FILE,
    REQUIRED_FILES, TEMPLATES_DIR, THEME_URI_FILE,
};
pub use error::ThemeError;
pub use manifest::{PageSpec, ThemeManifest};
pub use template::{
    collect_templates, read_optional, template_path, CollectedTemplates, ContentType,
    TemplateRecord,
};
