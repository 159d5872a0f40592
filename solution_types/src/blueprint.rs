//! Blueprint Metadata Contract
//!
//! Normalized view of a blueprint's `metadata.yaml`. The serde shape matches
//! the nested schema revision (`spec.info`, `spec.content`, `spec.interfaces`,
//! `spec.requirements`); older flat documents are adapted into it by the
//! loader in `bpconsume::metadata`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scope level of the role group whose roles are granted on the deploying project
pub const PROJECT_ROLE_LEVEL: &str = "Project";

/// Normalized blueprint metadata (the `spec` of a `BlueprintMetadata` document)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintMetadata {
    /// Identity, origin and estimates
    #[serde(default)]
    pub info: BlueprintInfo,

    /// Architecture and other documentation content
    #[serde(default)]
    pub content: BlueprintContent,

    /// Terraform inputs and outputs
    #[serde(default)]
    pub interfaces: BlueprintInterfaces,

    /// Roles and services needed to deploy
    #[serde(default)]
    pub requirements: BlueprintRequirements,
}

// ============================================================================
// INFO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintInfo {
    /// Human-readable solution title, also the source of the solution ID
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub source: Option<SourceRepo>,

    #[serde(default)]
    pub description: BlueprintDescription,

    #[serde(default)]
    pub deployment_duration: DeploymentDuration,

    #[serde(default)]
    pub cost_estimate: CostEstimate,
}

/// Source control origin of the blueprint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRepo {
    /// Repository URL, possibly ending in `.git`
    #[serde(default)]
    pub repo: String,

    #[serde(default)]
    pub source_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintDescription {
    /// One-line summary
    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub detailed: String,
}

/// Estimated time to configure and deploy, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDuration {
    #[serde(default)]
    pub configuration_secs: i64,

    #[serde(default)]
    pub deployment_secs: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    #[serde(default)]
    pub description: Option<String>,

    /// Link to a pricing calculator estimate
    #[serde(default)]
    pub url: Option<String>,
}

// ============================================================================
// CONTENT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintContent {
    #[serde(default)]
    pub architecture: BlueprintArchitecture,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintArchitecture {
    #[serde(default)]
    pub diagram_url: Option<String>,

    /// Ordered steps describing the architecture diagram
    #[serde(default)]
    pub description: Vec<String>,
}

// ============================================================================
// INTERFACES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintInterfaces {
    #[serde(default)]
    pub variables: Vec<BlueprintVariable>,

    #[serde(default)]
    pub outputs: Vec<BlueprintOutput>,
}

/// A Terraform input variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintVariable {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Declared Terraform type: "string", "bool", "list", "number", ...
    #[serde(default)]
    pub var_type: String,

    #[serde(default)]
    pub required: bool,

    /// Default value as written in the metadata (any YAML scalar or collection)
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
}

/// A Terraform output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintOutput {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// REQUIREMENTS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRequirements {
    #[serde(default)]
    pub roles: Vec<RoleGroup>,

    /// API service identifiers, e.g. "bigquery.googleapis.com"
    #[serde(default)]
    pub services: Vec<String>,
}

/// A set of roles granted at one scope level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGroup {
    /// "Project", "Folder", "Organization", ...
    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub roles: Vec<String>,
}

impl RoleGroup {
    pub fn new(level: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            level: level.into(),
            roles,
        }
    }

    /// Exact, case-sensitive match on [`PROJECT_ROLE_LEVEL`]
    pub fn is_project_level(&self) -> bool {
        self.level == PROJECT_ROLE_LEVEL
    }
}

// ============================================================================
// UI CONSTRAINTS (metadata.display.yaml)
// ============================================================================

/// Per-variable presentation and validation hints, keyed by variable name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConstraints {
    #[serde(default)]
    pub variables: BTreeMap<String, VariableConstraint>,
}

impl UiConstraints {
    pub fn get(&self, variable: &str) -> Option<&VariableConstraint> {
        self.variables.get(variable)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableConstraint {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Hide the input in the deployment UI
    #[serde(default)]
    pub invisible: bool,

    /// Lower bound: length for strings, item count for lists, value for numbers
    #[serde(default)]
    pub min: Option<f64>,

    /// Upper bound, same interpretation as `min`
    #[serde(default)]
    pub max: Option<f64>,

    #[serde(default)]
    pub regex_validation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_spec_deserializes() {
        let yaml = r#"
info:
  title: Data Warehouse
  source:
    repo: https://example.com/r.git
  deploymentDuration:
    configurationSecs: 125
    deploymentSecs: 300
interfaces:
  variables:
    - name: region
      varType: string
      defaultValue: us-central1
requirements:
  roles:
    - level: Project
      roles: [roles/owner]
  services: [bigquery.googleapis.com]
"#;
        let bp: BlueprintMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bp.info.title, "Data Warehouse");
        assert_eq!(bp.info.deployment_duration.configuration_secs, 125);
        assert_eq!(bp.interfaces.variables[0].var_type, "string");
        assert_eq!(
            bp.interfaces.variables[0].default_value,
            Some(serde_json::json!("us-central1"))
        );
        assert!(bp.requirements.roles[0].is_project_level());
        assert!(bp.content.architecture.description.is_empty());
    }

    #[test]
    fn test_project_level_is_case_sensitive() {
        assert!(RoleGroup::new("Project", vec![]).is_project_level());
        assert!(!RoleGroup::new("project", vec![]).is_project_level());
        assert!(!RoleGroup::new("Folder", vec![]).is_project_level());
    }

    #[test]
    fn test_ui_constraints_lookup() {
        let yaml = r#"
variables:
  bucket_name:
    name: bucket_name
    invisible: true
    min: 3
    max: 63
    regexValidation: "^[a-z0-9-]+$"
"#;
        let ui: UiConstraints = serde_yaml::from_str(yaml).unwrap();
        let c = ui.get("bucket_name").unwrap();
        assert!(c.invisible);
        assert_eq!(c.min, Some(3.0));
        assert_eq!(c.regex_validation.as_deref(), Some("^[a-z0-9-]+$"));
        assert!(ui.get("missing").is_none());
    }
}
