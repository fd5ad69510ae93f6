//! The assembled theme document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::ThemeError;
use crate::template::TemplateRecord;

/// The JSON document written for a theme.
///
/// Field order here is the key order of the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeArtifact {
    /// Contents of `theme_uri.txt`, untrimmed.
    pub theme_uri: String,
    /// Contents of `image.txt`, untrimmed.
    pub image: String,
    /// `config.json` as parsed.
    pub config: Value,
    pub templates: Vec<TemplateRecord>,
}

impl ThemeArtifact {
    /// Pretty-printed JSON with two-space indentation and no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(ThemeError::Serialize)
    }

    /// File name of the artifact: `{theme_uri}.json`.
    ///
    /// The theme URI is used as-is. A trailing newline in `theme_uri.txt`
    /// ends up in the file name.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.theme_uri)
    }

    /// Where the artifact lands inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }

    /// Serializes and writes the artifact into `output_dir`.
    ///
    /// Returns the written path and the number of bytes written.
    pub fn write_to(&self, output_dir: &Path) -> Result<(PathBuf, usize), ThemeError> {
        let json = self.to_json_pretty()?;
        let path = self.output_path(output_dir);
        std::fs::write(&path, &json).map_err(|e| ThemeError::io(&path, e))?;
        Ok((path, json.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::PageSpec;
    use crate::template::ContentType;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> ThemeArtifact {
        let spec = PageSpec::new("home", "page");
        ThemeArtifact {
            theme_uri: "my-theme".to_string(),
            image: "data:image/png;base64,AAAA\n".to_string(),
            config: json!({ "pages": [], "page_components": [] }),
            templates: vec![TemplateRecord::new(&spec, ContentType::Html, "<h1>Hi</h1>")],
        }
    }

    #[test]
    fn test_key_order() {
        let json = sample().to_json_pretty().unwrap();
        let theme_uri = json.find("\"theme_uri\"").unwrap();
        let image = json.find("\"image\"").unwrap();
        let config = json.find("\"config\"").unwrap();
        let templates = json.find("\"templates\"").unwrap();
        assert!(theme_uri < image && image < config && config < templates);
    }

    #[test]
    fn test_pretty_format() {
        let artifact = ThemeArtifact {
            templates: Vec::new(),
            config: json!({}),
            ..sample()
        };
        let expected = "{\n  \"theme_uri\": \"my-theme\",\n  \"image\": \"data:image/png;base64,AAAA\\n\",\n  \"config\": {},\n  \"templates\": []\n}";
        assert_eq!(artifact.to_json_pretty().unwrap(), expected);
    }

    #[test]
    fn test_record_keys() {
        let value: Value = serde_json::from_str(&sample().to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            value["templates"][0],
            json!({
                "template_uri": "home_html",
                "template_set": "home",
                "template_type": "page",
                "content_type": "html",
                "contents": "<h1>Hi</h1>"
            })
        );
    }

    #[test]
    fn test_output_path_keeps_raw_uri() {
        let artifact = ThemeArtifact {
            theme_uri: "dark \n".to_string(),
            ..sample()
        };
        assert_eq!(
            artifact.output_path(Path::new("out")),
            Path::new("out").join("dark \n.json")
        );
    }

    #[test]
    fn test_write_to() {
        let temp_dir = TempDir::new().unwrap();
        let (path, bytes) = sample().write_to(temp_dir.path()).unwrap();

        assert_eq!(path, temp_dir.path().join("my-theme.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.len(), bytes);
        assert_eq!(written, sample().to_json_pretty().unwrap());
    }
}
