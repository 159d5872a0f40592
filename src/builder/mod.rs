//! Record Builder
//!
//! Maps normalized blueprint metadata (plus optional UI constraints from
//! `metadata.display.yaml`) into a [`Solution`] record.
//!
//! The mapping is the ordered rule table in [`mapping::FIELD_MAPPINGS`].
//! Two rules carry real logic:
//! - [`roles::project_roles`]: at most one project-level role set
//! - [`properties::TYPE_DISPATCH`]: declared variable type → property type
//!
//! Everything else is a copy, a ceiling division, or a placeholder constant.
//!
//! ```rust
//! use bpconsume::builder::RecordBuilder;
//! use solution_types::BlueprintMetadata;
//!
//! let mut metadata = BlueprintMetadata::default();
//! metadata.info.title = "My Cool Solution".to_string();
//!
//! let solution = RecordBuilder::build(&metadata, None).unwrap();
//! assert_eq!(solution.id.as_str(), "my_cool_solution");
//! ```

pub mod mapping;
pub mod placeholders;
pub mod properties;
pub mod roles;

use solution_types::{BlueprintMetadata, Solution, UiConstraints};

use crate::error::Result;
use mapping::{BuildContext, FIELD_MAPPINGS};

pub use mapping::{ceil_minutes, deployment_estimate, strip_git_suffix};
pub use properties::{map_property, property_type_for, stringify_default};
pub use roles::project_roles;

/// Builds Solution records from blueprint metadata
pub struct RecordBuilder;

impl RecordBuilder {
    /// Build the record. Fails only when more than one project-level role set is declared;
    /// no partial record is returned in that case.
    pub fn build(metadata: &BlueprintMetadata, ui: Option<&UiConstraints>) -> Result<Solution> {
        let ctx = BuildContext { metadata, ui };
        let mut solution = Solution::default();

        for mapping in FIELD_MAPPINGS {
            mapping.apply(&mut solution, &ctx)?;
        }

        tracing::debug!(
            solution_id = %solution.id,
            input_sections = solution.deploy_data.input_sections.len(),
            links = solution.deploy_data.links.len(),
            "built solution record"
        );
        Ok(solution)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use solution_types::{BlueprintOutput, BlueprintVariable, RoleGroup};

    fn arb_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z][a-z0-9_]{0,10}", 0..8)
    }

    proptest! {
        #[test]
        fn list_mappings_preserve_length_and_order(
            services in arb_names(),
            variables in arb_names(),
            outputs in arb_names(),
            roles in arb_names(),
        ) {
            let mut bp = BlueprintMetadata::default();
            bp.requirements.services = services.clone();
            bp.requirements.roles = vec![RoleGroup::new("Project", roles.clone())];
            bp.interfaces.variables = variables
                .iter()
                .map(|n| BlueprintVariable { name: n.clone(), var_type: "string".into(), ..Default::default() })
                .collect();
            bp.interfaces.outputs = outputs
                .iter()
                .map(|n| BlueprintOutput { name: n.clone(), description: None })
                .collect();

            let solution = RecordBuilder::build(&bp, None).unwrap();
            let deploy = &solution.deploy_data;

            prop_assert_eq!(&deploy.apis, &services);
            prop_assert_eq!(&deploy.roles, &roles);
            let property_names: Vec<String> = deploy
                .input_sections
                .iter()
                .map(|s| s.properties[0].name.clone())
                .collect();
            prop_assert_eq!(property_names, variables);
            let link_names: Vec<String> = deploy.links.iter().map(|l| l.output_name.clone()).collect();
            prop_assert_eq!(link_names, outputs);
        }

        #[test]
        fn build_fails_iff_multiple_project_groups(levels in prop::collection::vec(
            prop_oneof![Just("Project"), Just("Folder"), Just("Organization")], 0..5)
        ) {
            let mut bp = BlueprintMetadata::default();
            bp.requirements.roles = levels
                .iter()
                .map(|level| RoleGroup::new(*level, vec!["roles/viewer".into()]))
                .collect();
            let project_groups = levels.iter().filter(|&&l| l == "Project").count();
            prop_assert_eq!(RecordBuilder::build(&bp, None).is_err(), project_groups > 1);
        }
    }
}
