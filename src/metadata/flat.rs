//! Flat schema revision
//!
//! Early `BlueprintMetadata` documents kept identity, requirements and
//! outputs directly under `spec`. This module reads that layout and adapts it
//! to the nested contract so the builder never sees the difference.

use serde::Deserialize;
use solution_types::{
    BlueprintContent, BlueprintDescription, BlueprintInfo, BlueprintInterfaces, BlueprintMetadata,
    BlueprintOutput, BlueprintRequirements, BlueprintVariable, CostEstimate, DeploymentDuration,
    RoleGroup, SourceRepo,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatSpec {
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

    #[serde(default)]
    pub content: BlueprintContent,

    #[serde(default)]
    pub interfaces: FlatInterfaces,

    /// Outputs lived beside `interfaces` in this revision
    #[serde(default)]
    pub outputs: Vec<BlueprintOutput>,

    #[serde(default)]
    pub roles: Vec<RoleGroup>,

    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatInterfaces {
    #[serde(default)]
    pub variables: Vec<BlueprintVariable>,

    #[serde(default)]
    pub outputs: Vec<BlueprintOutput>,
}

impl From<FlatSpec> for BlueprintMetadata {
    fn from(flat: FlatSpec) -> Self {
        // Prefer outputs under `interfaces` when a document has both.
        let outputs = if flat.interfaces.outputs.is_empty() {
            flat.outputs
        } else {
            flat.interfaces.outputs
        };

        BlueprintMetadata {
            info: BlueprintInfo {
                title: flat.title,
                source: flat.source,
                description: flat.description,
                deployment_duration: flat.deployment_duration,
                cost_estimate: flat.cost_estimate,
            },
            content: flat.content,
            interfaces: BlueprintInterfaces {
                variables: flat.interfaces.variables,
                outputs,
            },
            requirements: BlueprintRequirements {
                roles: flat.roles,
                services: flat.services,
            },
        }
    }
}
