//! Consumption pipeline
//!
//! Load → render → build → encode → persist for one blueprint directory.

use solution_types::SolutionId;

use crate::builder::RecordBuilder;
use crate::config::ConsumeConfig;
use crate::error::{ConsumeError, Result};
use crate::metadata::{self, SchemaRevision};
use crate::render::TemplateRenderer;
use crate::sink::ArtifactSink;
use crate::textproto;

/// Outcome of one successful run
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumeReport {
    pub id: SolutionId,
    pub revision: SchemaRevision,
    /// Dotted paths of fields still holding placeholder values
    pub pending_fields: Vec<&'static str>,
}

/// Generate the template document and solution record for one blueprint.
///
/// The template is persisted before the record is built, so a role
/// configuration error still leaves the rendered template behind.
pub fn consume_metadata(config: &ConsumeConfig, sink: &mut dyn ArtifactSink) -> Result<ConsumeReport> {
    let dir = config.blueprint_path.as_path();
    let loaded = metadata::load_blueprint(dir, &config.metadata_file)?;
    let ui = metadata::load_ui_constraints(dir, &config.display_file)?;

    let template_path = config.template_path.as_path();
    if !template_path.is_file() {
        return Err(ConsumeError::TemplateNotFound {
            path: template_path.to_path_buf(),
        });
    }
    let template = std::fs::read_to_string(template_path)
        .map_err(|e| ConsumeError::io(template_path, e))?;

    let id = SolutionId::from_title(&loaded.metadata.info.title);
    let rendered = TemplateRenderer::render(&loaded.metadata, &template);
    sink.persist_template(&id, &rendered)?;

    let solution = RecordBuilder::build(&loaded.metadata, ui.as_ref())?;
    sink.persist_solution(&solution.id, &textproto::encode(&solution))?;

    let pending_fields = solution.pending_fields();
    if !pending_fields.is_empty() {
        tracing::warn!(
            solution_id = %solution.id,
            fields = ?pending_fields,
            "solution record contains placeholder values that need manual completion"
        );
    }

    tracing::info!(
        solution_id = %solution.id,
        revision = %loaded.revision,
        "generated jump start solution"
    );

    Ok(ConsumeReport {
        id: solution.id,
        revision: loaded.revision,
        pending_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::path::Path;

    const METADATA: &str = r#"
kind: BlueprintMetadata
spec:
  info:
    title: Simple Bucket
  requirements:
    roles:
      - level: Project
        roles: [roles/storage.admin]
"#;

    fn write_blueprint(dir: &Path, metadata: &str) -> ConsumeConfig {
        std::fs::write(dir.join("metadata.yaml"), metadata).unwrap();
        std::fs::write(dir.join("template.soy"), "{namespace $SOLUTION_ID}").unwrap();
        ConsumeConfig::new(dir).with_template(dir.join("template.soy"))
    }

    #[test]
    fn test_consume_into_memory() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_blueprint(dir.path(), METADATA);
        let mut sink = MemorySink::new();

        let report = consume_metadata(&config, &mut sink).unwrap();

        assert_eq!(report.id.as_str(), "simple_bucket");
        assert_eq!(report.revision, SchemaRevision::Nested);
        assert!(report.pending_fields.contains(&"icon_url"));
        assert_eq!(sink.template(&report.id), Some("{namespace simple_bucket}"));
        assert!(sink
            .solution(&report.id)
            .unwrap()
            .contains("roles: \"roles/storage.admin\""));
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("metadata.yaml"), METADATA).unwrap();
        let config = ConsumeConfig::new(dir.path()).with_template(dir.path().join("nope.soy"));
        let mut sink = MemorySink::new();

        let err = consume_metadata(&config, &mut sink).unwrap_err();
        assert!(matches!(err, ConsumeError::TemplateNotFound { .. }));
        assert!(sink.templates.is_empty());
    }

    #[test]
    fn test_role_error_keeps_rendered_template() {
        let metadata = r#"
kind: BlueprintMetadata
spec:
  info:
    title: Two Projects
  requirements:
    roles:
      - level: Project
        roles: [roles/a]
      - level: Project
        roles: [roles/b]
"#;
        let dir = tempfile::tempdir().unwrap();
        let config = write_blueprint(dir.path(), metadata);
        let mut sink = MemorySink::new();

        let err = consume_metadata(&config, &mut sink).unwrap_err();
        assert!(matches!(
            err,
            ConsumeError::InvalidRoleConfiguration {
                project_role_sets: 2
            }
        ));
        assert_eq!(sink.templates.len(), 1);
        assert!(sink.solutions.is_empty());
    }
}
