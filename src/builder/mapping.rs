//! Field Mapping Table
//!
//! Declarative list of `target ← source` rules applied in order to an empty
//! [`Solution`]. Each rule names the record path it fills and the metadata
//! path it reads (`None` for placeholder constants). Only the project role
//! rule is fallible.

use solution_types::{
    BlueprintMetadata, DeploymentDuration, DeploymentEstimate, DeploymentLink,
    Section, Solution, SolutionId, UiConstraints,
};

use super::placeholders;
use super::properties::map_property;
use super::roles::project_roles;
use crate::error::Result;

/// Inputs visible to every mapping rule
pub struct BuildContext<'a> {
    pub metadata: &'a BlueprintMetadata,
    pub ui: Option<&'a UiConstraints>,
}

/// How a rule writes its target
#[derive(Clone, Copy)]
pub enum Transform {
    Total(fn(&mut Solution, &BuildContext<'_>)),
    Fallible(fn(&mut Solution, &BuildContext<'_>) -> Result<()>),
}

#[derive(Clone, Copy)]
pub struct FieldMapping {
    /// Dotted path in the Solution record
    pub target: &'static str,
    /// Dotted path in the blueprint metadata; `None` for constants
    pub source: Option<&'static str>,
    pub transform: Transform,
}

impl FieldMapping {
    const fn total(
        target: &'static str,
        source: Option<&'static str>,
        apply: fn(&mut Solution, &BuildContext<'_>),
    ) -> Self {
        Self {
            target,
            source,
            transform: Transform::Total(apply),
        }
    }

    const fn fallible(
        target: &'static str,
        source: Option<&'static str>,
        apply: fn(&mut Solution, &BuildContext<'_>) -> Result<()>,
    ) -> Self {
        Self {
            target,
            source,
            transform: Transform::Fallible(apply),
        }
    }

    pub fn apply(&self, solution: &mut Solution, ctx: &BuildContext<'_>) -> Result<()> {
        tracing::debug!(
            target_field = self.target,
            source_field = self.source.unwrap_or("<placeholder>"),
            "applying field mapping"
        );
        match self.transform {
            Transform::Total(f) => {
                f(solution, ctx);
                Ok(())
            }
            Transform::Fallible(f) => f(solution, ctx),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

/// Ordered mapping rules. Sources first, placeholders last.
pub const FIELD_MAPPINGS: &[FieldMapping] = &[
    FieldMapping::total("id", Some("info.title"), map_id),
    FieldMapping::total("git_source.repo", Some("info.source.repo"), map_git_repo),
    FieldMapping::total(
        "deployment_estimate",
        Some("info.deploymentDuration"),
        map_deployment_estimate,
    ),
    FieldMapping::total(
        "cost_estimate_link",
        Some("info.costEstimate.url"),
        map_cost_estimate_link,
    ),
    FieldMapping::fallible(
        "deploy_data.roles",
        Some("requirements.roles"),
        map_roles,
    ),
    FieldMapping::total(
        "deploy_data.apis",
        Some("requirements.services"),
        map_apis,
    ),
    FieldMapping::total(
        "deploy_data.input_sections",
        Some("interfaces.variables"),
        map_input_sections,
    ),
    FieldMapping::total(
        "deploy_data.links",
        Some("interfaces.outputs"),
        map_links,
    ),
    FieldMapping::total("git_source.ref", None, placeholders::git_ref),
    FieldMapping::total("git_source.directory", None, placeholders::git_directory),
    FieldMapping::total("cost_estimate_usd", None, placeholders::cost_estimate_usd),
    FieldMapping::total("icon_url", None, placeholders::icon_url),
    FieldMapping::total("diagram_url", None, placeholders::diagram_url),
    FieldMapping::total("documentation_link", None, placeholders::documentation_link),
    FieldMapping::total("deploy_data.is_singleton", None, placeholders::is_singleton),
    FieldMapping::total(
        "deploy_data.location_configs",
        None,
        placeholders::location_configs,
    ),
    FieldMapping::total(
        "deploy_data.org_policy_checks",
        None,
        placeholders::org_policy_checks,
    ),
    FieldMapping::total(
        "cloud_product_identifiers",
        None,
        placeholders::cloud_product_identifiers,
    ),
];

// ============================================================================
// TRANSFORMS
// ============================================================================

/// Strip one trailing ".git" from a repository URL
pub fn strip_git_suffix(repo: &str) -> &str {
    repo.strip_suffix(".git").unwrap_or(repo)
}

/// Whole minutes needed to cover `secs` seconds
pub fn ceil_minutes(secs: i64) -> i32 {
    let minutes = secs.saturating_add(59) / 60;
    i32::try_from(minutes).unwrap_or(i32::MAX)
}

/// Estimate in minutes, or `None` unless both durations are positive
pub fn deployment_estimate(duration: &DeploymentDuration) -> Option<DeploymentEstimate> {
    if duration.configuration_secs > 0 && duration.deployment_secs > 0 {
        Some(DeploymentEstimate {
            configuration_minutes: ceil_minutes(duration.configuration_secs),
            deployment_minutes: ceil_minutes(duration.deployment_secs),
        })
    } else {
        None
    }
}

fn map_id(solution: &mut Solution, ctx: &BuildContext<'_>) {
    solution.id = SolutionId::from_title(&ctx.metadata.info.title);
}

fn map_git_repo(solution: &mut Solution, ctx: &BuildContext<'_>) {
    if let Some(source) = &ctx.metadata.info.source {
        solution.git_source.repo = strip_git_suffix(&source.repo).to_string();
    }
}

fn map_deployment_estimate(solution: &mut Solution, ctx: &BuildContext<'_>) {
    solution.deployment_estimate = deployment_estimate(&ctx.metadata.info.deployment_duration);
}

fn map_cost_estimate_link(solution: &mut Solution, ctx: &BuildContext<'_>) {
    solution.cost_estimate_link = ctx
        .metadata
        .info
        .cost_estimate
        .url
        .clone()
        .filter(|url| !url.is_empty());
}

fn map_roles(solution: &mut Solution, ctx: &BuildContext<'_>) -> Result<()> {
    if let Some(roles) = project_roles(&ctx.metadata.requirements.roles)? {
        solution.deploy_data.roles = roles.to_vec();
    }
    Ok(())
}

fn map_apis(solution: &mut Solution, ctx: &BuildContext<'_>) {
    solution.deploy_data.apis = ctx.metadata.requirements.services.clone();
}

fn map_input_sections(solution: &mut Solution, ctx: &BuildContext<'_>) {
    solution.deploy_data.input_sections = ctx
        .metadata
        .interfaces
        .variables
        .iter()
        .map(|variable| {
            let constraint = ctx.ui.and_then(|ui| ui.get(&variable.name));
            Section::single(map_property(variable, constraint))
        })
        .collect();
}

fn map_links(solution: &mut Solution, ctx: &BuildContext<'_>) {
    solution.deploy_data.links = ctx
        .metadata
        .interfaces
        .outputs
        .iter()
        .map(|output| DeploymentLink::for_output(&output.name))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_targets_are_unique() {
        let mut seen = HashSet::new();
        for mapping in FIELD_MAPPINGS {
            assert!(seen.insert(mapping.target), "duplicate target {}", mapping.target);
        }
    }

    #[test]
    fn test_only_roles_rule_is_fallible() {
        let fallible: Vec<_> = FIELD_MAPPINGS
            .iter()
            .filter(|m| matches!(m.transform, Transform::Fallible(_)))
            .map(|m| m.target)
            .collect();
        assert_eq!(fallible, vec!["deploy_data.roles"]);
    }

    #[test]
    fn test_placeholder_rules_match_pending_fields() {
        let placeholder_targets: Vec<_> = FIELD_MAPPINGS
            .iter()
            .filter(|m| m.is_placeholder())
            .map(|m| m.target)
            .collect();
        let solution = crate::builder::RecordBuilder::build(&BlueprintMetadata::default(), None)
            .unwrap();
        let mut pending = solution.pending_fields();
        let mut expected = placeholder_targets.clone();
        pending.sort_unstable();
        expected.sort_unstable();
        assert_eq!(pending, expected);
    }

    #[test]
    fn test_strip_git_suffix() {
        assert_eq!(strip_git_suffix("https://example.com/r.git"), "https://example.com/r");
        assert_eq!(strip_git_suffix("https://example.com/r"), "https://example.com/r");
        assert_eq!(strip_git_suffix(".git"), "");
        assert_eq!(strip_git_suffix("https://example.com/r.git.git"), "https://example.com/r.git");
    }

    #[test]
    fn test_ceil_minutes() {
        assert_eq!(ceil_minutes(1), 1);
        assert_eq!(ceil_minutes(60), 1);
        assert_eq!(ceil_minutes(61), 2);
        assert_eq!(ceil_minutes(125), 3);
        assert_eq!(ceil_minutes(300), 5);
        assert_eq!(ceil_minutes(i64::MAX), i32::MAX);
    }

    #[test]
    fn test_deployment_estimate_requires_both_positive() {
        let both = DeploymentDuration {
            configuration_secs: 61,
            deployment_secs: 60,
        };
        assert_eq!(
            deployment_estimate(&both),
            Some(DeploymentEstimate {
                configuration_minutes: 2,
                deployment_minutes: 1
            })
        );

        for (c, d) in [(0, 60), (60, 0), (0, 0), (-5, 60), (60, -1)] {
            let duration = DeploymentDuration {
                configuration_secs: c,
                deployment_secs: d,
            };
            assert_eq!(deployment_estimate(&duration), None, "({c}, {d})");
        }
    }

    #[test]
    fn test_empty_cost_url_is_unset() {
        let mut metadata = BlueprintMetadata::default();
        metadata.info.cost_estimate.url = Some(String::new());
        let ctx = BuildContext {
            metadata: &metadata,
            ui: None,
        };
        let mut solution = Solution::default();
        map_cost_estimate_link(&mut solution, &ctx);
        assert_eq!(solution.cost_estimate_link, None);
    }
}
