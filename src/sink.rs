//! Artifact Sink
//!
//! Where generated artifacts go. The pipeline hands over finished text and
//! never touches the filesystem itself.

use std::collections::BTreeMap;
use std::path::PathBuf;

use solution_types::SolutionId;

use crate::error::{ConsumeError, Result};

pub const TEXTPROTO_EXTENSION: &str = "textproto";
pub const TEMPLATE_EXTENSION: &str = "soy";

/// Destination for generated solution records and templates
pub trait ArtifactSink {
    /// Persist the encoded solution record
    fn persist_solution(&mut self, id: &SolutionId, textproto: &str) -> Result<()>;

    /// Persist the rendered template document
    fn persist_template(&mut self, id: &SolutionId, text: &str) -> Result<()>;
}

/// Writes `<id>.textproto` and `<id>.soy` into one directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    base_path: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, id: &SolutionId, extension: &str) -> PathBuf {
        self.base_path.join(id.file_name(extension))
    }

    fn write(&mut self, path: PathBuf, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.base_path)
            .map_err(|e| ConsumeError::io(&self.base_path, e))?;
        std::fs::write(&path, contents).map_err(|e| ConsumeError::io(&path, e))?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        self.written.push(path);
        Ok(())
    }
}

impl ArtifactSink for DirectorySink {
    fn persist_solution(&mut self, id: &SolutionId, textproto: &str) -> Result<()> {
        let path = self.path_for(id, TEXTPROTO_EXTENSION);
        self.write(path, textproto)
    }

    fn persist_template(&mut self, id: &SolutionId, text: &str) -> Result<()> {
        let path = self.path_for(id, TEMPLATE_EXTENSION);
        self.write(path, text)
    }
}

/// In-memory sink
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub solutions: BTreeMap<SolutionId, String>,
    pub templates: BTreeMap<SolutionId, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solution(&self, id: &SolutionId) -> Option<&str> {
        self.solutions.get(id).map(String::as_str)
    }

    pub fn template(&self, id: &SolutionId) -> Option<&str> {
        self.templates.get(id).map(String::as_str)
    }
}

impl ArtifactSink for MemorySink {
    fn persist_solution(&mut self, id: &SolutionId, textproto: &str) -> Result<()> {
        self.solutions.insert(id.clone(), textproto.to_string());
        Ok(())
    }

    fn persist_template(&mut self, id: &SolutionId, text: &str) -> Result<()> {
        self.templates.insert(id.clone(), text.to_string());
        Ok(())
    }
}
