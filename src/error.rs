//! Error handling for blueprint metadata consumption
//!
//! Only [`ConsumeError::InvalidRoleConfiguration`] can come out of the record
//! builder. The other variants belong to the loader, the template lookup and
//! the artifact sink around it.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsumeError>;

#[derive(Error, Debug)]
pub enum ConsumeError {
    #[error(
        "more than one project-level role set present in solution metadata (found {project_role_sets})"
    )]
    InvalidRoleConfiguration { project_role_sets: usize },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported document kind '{kind}' in {} (expected BlueprintMetadata)", path.display())]
    UnsupportedDocument { path: PathBuf, kind: String },

    #[error("template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },
}

impl ConsumeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConsumeError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        ConsumeError::Yaml {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the metadata content rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConsumeError::InvalidRoleConfiguration { .. }
                | ConsumeError::Yaml { .. }
                | ConsumeError::UnsupportedDocument { .. }
        )
    }
}
