//! Consumption configuration
//!
//! Where to find the blueprint, which template to render and where to write
//! the results. Usually assembled by the CLI from flags and environment, but
//! also loadable from YAML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConsumeError, Result};

pub const DEFAULT_METADATA_FILE: &str = "metadata.yaml";
pub const DEFAULT_DISPLAY_FILE: &str = "metadata.display.yaml";
pub const DEFAULT_TEMPLATE_FILE: &str = "soy_template.soy";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsumeConfig {
    /// Directory holding the blueprint metadata
    #[serde(default = "default_blueprint_path")]
    pub blueprint_path: PathBuf,

    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,

    /// Optional UI constraints document, next to the metadata file
    #[serde(default = "default_display_file")]
    pub display_file: String,

    /// Soy template to render
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Output directory (default: working directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_blueprint_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_metadata_file() -> String {
    DEFAULT_METADATA_FILE.to_string()
}

fn default_display_file() -> String {
    DEFAULT_DISPLAY_FILE.to_string()
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}

impl Default for ConsumeConfig {
    fn default() -> Self {
        Self {
            blueprint_path: default_blueprint_path(),
            metadata_file: default_metadata_file(),
            display_file: default_display_file(),
            template_path: default_template_path(),
            output_dir: None,
        }
    }
}

impl ConsumeConfig {
    pub fn new(blueprint_path: impl Into<PathBuf>) -> Self {
        Self {
            blueprint_path: blueprint_path.into(),
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template_path: impl Into<PathBuf>) -> Self {
        self.template_path = template_path.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConsumeError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|e| ConsumeError::yaml(path, e))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ConsumeError::yaml("<inline>", e))
    }

    /// Make every path absolute against `cwd`; a missing output dir becomes `cwd`
    pub fn resolved_against(&self, cwd: &Path) -> Self {
        Self {
            blueprint_path: absolutize(cwd, &self.blueprint_path),
            metadata_file: self.metadata_file.clone(),
            display_file: self.display_file.clone(),
            template_path: absolutize(cwd, &self.template_path),
            output_dir: Some(
                self.output_dir
                    .as_deref()
                    .map(|dir| absolutize(cwd, dir))
                    .unwrap_or_else(|| cwd.to_path_buf()),
            ),
        }
    }

    /// [`Self::resolved_against`] the current working directory
    pub fn resolved(&self) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ConsumeError::io(".", e))?;
        Ok(self.resolved_against(&cwd))
    }

    /// Output directory; `.` until resolved
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsumeConfig::default();
        assert_eq!(config.blueprint_path, PathBuf::from("."));
        assert_eq!(config.metadata_file, "metadata.yaml");
        assert_eq!(config.display_file, "metadata.display.yaml");
        assert_eq!(config.template_path, PathBuf::from("soy_template.soy"));
        assert_eq!(config.output_dir(), Path::new("."));
    }

    #[test]
    fn test_from_yaml_fills_defaults() {
        let config = ConsumeConfig::from_yaml("blueprint_path: /blueprints/warehouse\n").unwrap();
        assert_eq!(config.blueprint_path, PathBuf::from("/blueprints/warehouse"));
        assert_eq!(config.metadata_file, DEFAULT_METADATA_FILE);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_from_yaml_rejects_bad_types() {
        let err = ConsumeConfig::from_yaml("metadata_file: [a, b]\n").unwrap_err();
        assert!(matches!(err, ConsumeError::Yaml { .. }));
    }

    #[test]
    fn test_resolved_against() {
        let cwd = Path::new("/work");
        let config = ConsumeConfig::new("blueprint")
            .with_template("/templates/soy_template.soy")
            .resolved_against(cwd);

        assert_eq!(config.blueprint_path, PathBuf::from("/work/blueprint"));
        assert_eq!(
            config.template_path,
            PathBuf::from("/templates/soy_template.soy")
        );
        assert_eq!(config.output_dir(), Path::new("/work"));

        let config = ConsumeConfig::new("/abs")
            .with_output_dir("out")
            .resolved_against(cwd);
        assert_eq!(config.blueprint_path, PathBuf::from("/abs"));
        assert_eq!(config.output_dir(), Path::new("/work/out"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bpconsume.yaml");
        std::fs::write(&path, "template_path: custom.soy\noutput_dir: out\n").unwrap();

        let config = ConsumeConfig::load(&path).unwrap();
        assert_eq!(config.template_path, PathBuf::from("custom.soy"));
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }
}
