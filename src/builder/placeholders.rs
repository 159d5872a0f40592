//! Placeholder fields
//!
//! Values with no equivalent in blueprint metadata. They are always written
//! as [`Completion::Pending`] so the generated textproto is easy to spot and
//! finish by hand.

use solution_types::{
    CloudProductIdentifier, Completion, ConsoleProductIdentifier, DeployLocationConfig,
    OrgPolicyCheck, Solution,
};

use super::mapping::BuildContext;

pub const GIT_REF: &str = "<Git branch or tag or commit hash>";
pub const GIT_DIRECTORY: &str = "<Subdirectory inside the repository>";
pub const COST_ESTIMATE_USD: f64 = 1.0;
pub const ICON_URL: &str = "solution_icon.png";
pub const DIAGRAM_URL: &str = "solution_diagram.png";
pub const DOCUMENTATION_LINK: &str = "https://cloud.google.com";
pub const ORG_POLICY_CONSTRAINT: &str =
    "<Org policy constraint e.g. constraints/gcp.resourceLocations>";
pub const ORG_POLICY_REQUIRED_VALUES: [&str; 2] = ["<required value 1>", "<required value 2>"];
pub const PRODUCT_LABEL: &str = "<product label>";
pub const PRODUCT_SECTION_ID: &str = "<product section ID>";
pub const PRODUCT_PAGE_ID: &str = "<product page ID>";
pub const PRODUCT_POST_DEPLOYMENT_PAGE_ID: &str = "<product page ID for post deployment link>";

pub(super) fn git_ref(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.git_source.git_ref = Completion::Pending(GIT_REF.to_string());
}

pub(super) fn git_directory(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.git_source.directory = Completion::Pending(GIT_DIRECTORY.to_string());
}

pub(super) fn cost_estimate_usd(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.cost_estimate_usd = Completion::Pending(COST_ESTIMATE_USD);
}

pub(super) fn icon_url(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.icon_url = Completion::Pending(ICON_URL.to_string());
}

pub(super) fn diagram_url(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.diagram_url = Completion::Pending(DIAGRAM_URL.to_string());
}

pub(super) fn documentation_link(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.documentation_link = Completion::Pending(DOCUMENTATION_LINK.to_string());
}

pub(super) fn is_singleton(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.deploy_data.is_singleton = Completion::Pending(true);
}

pub(super) fn location_configs(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.deploy_data.location_configs =
        Completion::Pending(vec![DeployLocationConfig::Unspecified]);
}

pub(super) fn org_policy_checks(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.deploy_data.org_policy_checks = Completion::Pending(vec![OrgPolicyCheck {
        id: ORG_POLICY_CONSTRAINT.to_string(),
        required_values: ORG_POLICY_REQUIRED_VALUES
            .iter()
            .map(|v| v.to_string())
            .collect(),
    }]);
}

pub(super) fn cloud_product_identifiers(solution: &mut Solution, _: &BuildContext<'_>) {
    solution.cloud_product_identifiers = Completion::Pending(vec![CloudProductIdentifier {
        label: PRODUCT_LABEL.to_string(),
        console_product_identifier: Some(ConsoleProductIdentifier {
            section_id: PRODUCT_SECTION_ID.to_string(),
            page_id: PRODUCT_PAGE_ID.to_string(),
            page_id_for_post_deployment_link: PRODUCT_POST_DEPLOYMENT_PAGE_ID.to_string(),
        }),
    }]);
}
