//! Solution Record
//!
//! The strongly-typed record consumed by the jump start solutions catalog.
//! Field names follow the protobuf message so the textproto encoder can
//! write them directly. Repeated fields use an empty `Vec` for "unset".

use serde::{Deserialize, Serialize};

use crate::completion::Completion;
use crate::SolutionId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Derived from the title; names the generated files, not written to the textproto
    pub id: SolutionId,

    pub git_source: GitSource,

    /// Only present when both configuration and deployment estimates are known
    pub deployment_estimate: Option<DeploymentEstimate>,

    pub cost_estimate_link: Option<String>,

    pub cost_estimate_usd: Completion<f64>,

    pub deploy_data: DeployData,

    pub icon_url: Completion<String>,

    pub diagram_url: Completion<String>,

    pub documentation_link: Completion<String>,

    pub cloud_product_identifiers: Completion<Vec<CloudProductIdentifier>>,
}

impl Solution {
    /// Dotted paths of fields still holding placeholders
    pub fn pending_fields(&self) -> Vec<&'static str> {
        let deploy = &self.deploy_data;
        [
            ("git_source.ref", self.git_source.git_ref.is_pending()),
            ("git_source.directory", self.git_source.directory.is_pending()),
            ("cost_estimate_usd", self.cost_estimate_usd.is_pending()),
            ("icon_url", self.icon_url.is_pending()),
            ("diagram_url", self.diagram_url.is_pending()),
            ("documentation_link", self.documentation_link.is_pending()),
            (
                "cloud_product_identifiers",
                self.cloud_product_identifiers.is_pending(),
            ),
            ("deploy_data.is_singleton", deploy.is_singleton.is_pending()),
            (
                "deploy_data.location_configs",
                deploy.location_configs.is_pending(),
            ),
            (
                "deploy_data.org_policy_checks",
                deploy.org_policy_checks.is_pending(),
            ),
        ]
        .into_iter()
        .filter_map(|(path, pending)| pending.then_some(path))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitSource {
    /// Repository URL without a trailing ".git"
    pub repo: String,

    /// Branch, tag or commit hash (`ref` in the proto)
    pub git_ref: Completion<String>,

    /// Subdirectory holding the Terraform root module
    pub directory: Completion<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEstimate {
    pub configuration_minutes: i32,
    pub deployment_minutes: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployData {
    /// Roles granted to the deploying service account on the project
    pub roles: Vec<String>,

    /// APIs enabled before deployment
    pub apis: Vec<String>,

    /// One section per input variable
    pub input_sections: Vec<Section>,

    /// One link per Terraform output
    pub links: Vec<DeploymentLink>,

    pub is_singleton: Completion<bool>,

    pub location_configs: Completion<Vec<DeployLocationConfig>>,

    pub org_policy_checks: Completion<Vec<OrgPolicyCheck>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub properties: Vec<Property>,
}

impl Section {
    pub fn single(property: Property) -> Self {
        Self {
            properties: vec![property],
        }
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// An input property of the deployment form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub is_required: bool,
    pub is_hidden: bool,
    pub validation_regex: Option<String>,

    /// Typed payload; `None` when the declared type was not recognized
    pub kind: Option<PropertyKind>,
}

impl Property {
    pub fn property_type(&self) -> Option<PropertyType> {
        self.kind.as_ref().map(PropertyKind::property_type)
    }
}

/// Property type with its type-specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKind {
    String {
        default_value: Option<String>,
        min_length: Option<i32>,
        max_length: Option<i32>,
    },
    Boolean {
        default_value: Option<String>,
    },
    Array {
        min_items: Option<i32>,
        max_items: Option<i32>,
    },
    Number {
        default_value: Option<String>,
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
}

impl PropertyKind {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyKind::String { .. } => PropertyType::String,
            PropertyKind::Boolean { .. } => PropertyType::Boolean,
            PropertyKind::Array { .. } => PropertyType::Array,
            PropertyKind::Number { .. } => PropertyType::Number,
        }
    }

    pub fn default_value(&self) -> Option<&str> {
        match self {
            PropertyKind::String { default_value, .. }
            | PropertyKind::Boolean { default_value }
            | PropertyKind::Number { default_value, .. } => default_value.as_deref(),
            PropertyKind::Array { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Boolean,
    Array,
    Number,
}

impl PropertyType {
    /// Enum value name in the proto
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "STRING",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Array => "ARRAY",
            PropertyType::Number => "NUMBER",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LINKS, LOCATIONS, POLICIES, PRODUCTS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentLink {
    pub output_name: String,
    pub show_in_notification: bool,
    pub open_in_new_tab: bool,
}

impl DeploymentLink {
    pub fn for_output(output_name: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeployLocationConfig {
    #[default]
    Unspecified,
}

impl DeployLocationConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployLocationConfig::Unspecified => "UNSPECIFIED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgPolicyCheck {
    /// Constraint name, e.g. "constraints/gcp.resourceLocations"
    pub id: String,
    pub required_values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudProductIdentifier {
    pub label: String,
    pub console_product_identifier: Option<ConsoleProductIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleProductIdentifier {
    pub section_id: String,
    pub page_id: String,
    pub page_id_for_post_deployment_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_solution_has_no_pending_fields() {
        assert!(Solution::default().pending_fields().is_empty());
    }

    #[test]
    fn test_pending_fields_lists_placeholders_in_order() {
        let mut solution = Solution::default();
        solution.icon_url = Completion::Pending("solution_icon.png".into());
        solution.deploy_data.is_singleton = Completion::Pending(true);
        assert_eq!(
            solution.pending_fields(),
            vec!["icon_url", "deploy_data.is_singleton"]
        );

        solution.icon_url.resolve("icon.svg".into());
        assert_eq!(solution.pending_fields(), vec!["deploy_data.is_singleton"]);
    }

    #[test]
    fn test_property_kind_accessors() {
        let kind = PropertyKind::Number {
            default_value: Some("3".into()),
            minimum: Some(1.0),
            maximum: None,
        };
        assert_eq!(kind.property_type(), PropertyType::Number);
        assert_eq!(kind.default_value(), Some("3"));

        let array = PropertyKind::Array {
            min_items: Some(1),
            max_items: Some(5),
        };
        assert_eq!(array.default_value(), None);
        assert_eq!(array.property_type().as_str(), "ARRAY");
    }

    #[test]
    fn test_untyped_property() {
        let p = Property {
            name: "labels".into(),
            ..Default::default()
        };
        assert_eq!(p.property_type(), None);
    }
}
