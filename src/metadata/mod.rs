//! Blueprint metadata loading
//!
//! Reads `metadata.yaml` / `metadata.display.yaml`, checks the document kind,
//! detects the schema revision and normalizes it into
//! [`solution_types::BlueprintMetadata`]. The record builder and renderer only
//! ever see the normalized contract.

pub mod display;
pub mod flat;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use solution_types::{BlueprintMetadata, UiConstraints};

use crate::error::{ConsumeError, Result};
use display::DisplaySpec;
use flat::FlatSpec;

/// Expected `kind` of both metadata documents
pub const BLUEPRINT_KIND: &str = "BlueprintMetadata";

const INLINE_SOURCE: &str = "<inline>";

/// `spec` keys that only exist in the nested layout
const NESTED_ONLY_KEYS: [&str; 2] = ["info", "requirements"];

/// Layout of the `spec` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRevision {
    /// Identity and requirements directly under `spec`
    Flat,
    /// `spec.info`, `spec.requirements`, `spec.interfaces`
    Nested,
}

impl SchemaRevision {
    /// A `spec` mapping with an `info` or `requirements` key is nested;
    /// anything else is flat
    pub fn detect(spec: &serde_yaml::Value) -> Self {
        match spec.as_mapping() {
            Some(mapping) if NESTED_ONLY_KEYS.iter().any(|key| mapping.contains_key(*key)) => {
                SchemaRevision::Nested
            }
            _ => SchemaRevision::Flat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaRevision::Flat => "flat",
            SchemaRevision::Nested => "nested",
        }
    }
}

impl std::fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized blueprint and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBlueprint {
    pub metadata: BlueprintMetadata,
    pub revision: SchemaRevision,
    /// `metadata.name` of the document, usually the Terraform module name
    pub name: Option<String>,
}

/// Kubernetes-style envelope shared by both documents
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    kind: Option<String>,

    #[serde(default)]
    metadata: Option<DocumentMetadata>,

    #[serde(default)]
    spec: serde_yaml::Value,
}

#[derive(Debug, Deserialize)]
struct DocumentMetadata {
    #[serde(default)]
    name: Option<String>,
}

fn parse_document(yaml: &str, path: &Path) -> Result<Document> {
    let document: Document =
        serde_yaml::from_str(yaml).map_err(|e| ConsumeError::yaml(path, e))?;

    match document.kind.as_deref() {
        None | Some(BLUEPRINT_KIND) => Ok(document),
        Some(other) => Err(ConsumeError::UnsupportedDocument {
            path: path.to_path_buf(),
            kind: other.to_string(),
        }),
    }
}

fn normalize(document: Document, path: &Path) -> Result<LoadedBlueprint> {
    let revision = SchemaRevision::detect(&document.spec);
    let spec = if document.spec.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        document.spec
    };

    let metadata = match revision {
        SchemaRevision::Nested => serde_yaml::from_value::<BlueprintMetadata>(spec),
        SchemaRevision::Flat => serde_yaml::from_value::<FlatSpec>(spec).map(Into::into),
    }
    .map_err(|e| ConsumeError::yaml(path, e))?;

    Ok(LoadedBlueprint {
        metadata,
        revision,
        name: document.metadata.and_then(|m| m.name),
    })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConsumeError::io(path, e))
}

/// Parse an in-memory `metadata.yaml`
pub fn parse_blueprint(yaml: &str) -> Result<LoadedBlueprint> {
    let path = Path::new(INLINE_SOURCE);
    normalize(parse_document(yaml, path)?, path)
}

/// Parse an in-memory `metadata.display.yaml`
pub fn parse_ui_constraints(yaml: &str) -> Result<UiConstraints> {
    let path = Path::new(INLINE_SOURCE);
    ui_constraints_from(parse_document(yaml, path)?, path)
}

fn ui_constraints_from(document: Document, path: &Path) -> Result<UiConstraints> {
    if document.spec.is_null() {
        return Ok(UiConstraints::default());
    }
    let spec: DisplaySpec =
        serde_yaml::from_value(document.spec).map_err(|e| ConsumeError::yaml(path, e))?;
    Ok(spec.into())
}

/// Load and normalize `<dir>/<file_name>`
pub fn load_blueprint(dir: &Path, file_name: &str) -> Result<LoadedBlueprint> {
    let path: PathBuf = dir.join(file_name);
    let contents = read_file(&path)?;
    let loaded = normalize(parse_document(&contents, &path)?, &path)?;

    tracing::info!(
        path = %path.display(),
        revision = %loaded.revision,
        title = %loaded.metadata.info.title,
        variables = loaded.metadata.interfaces.variables.len(),
        "loaded blueprint metadata"
    );
    Ok(loaded)
}

/// Load UI constraints from `<dir>/<file_name>`.
///
/// A missing display file is not an error: the builder then treats every
/// variable as unconstrained.
pub fn load_ui_constraints(dir: &Path, file_name: &str) -> Result<Option<UiConstraints>> {
    let path = dir.join(file_name);
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "display metadata not found, UI constraints will be empty"
        );
        return Ok(None);
    }

    let contents = read_file(&path)?;
    let constraints = ui_constraints_from(parse_document(&contents, &path)?, &path)?;
    tracing::info!(
        path = %path.display(),
        variables = constraints.len(),
        "loaded display metadata"
    );
    Ok(Some(constraints))
}
