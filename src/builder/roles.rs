//! Project role selection
//!
//! The deploying service account receives the roles of the single role group
//! scoped to "Project". Two or more such groups cannot be merged safely and
//! abort the build.

use solution_types::RoleGroup;

use crate::error::{ConsumeError, Result};

/// Roles of the unique project-level group.
///
/// `Ok(None)` when no group is project-scoped.
pub fn project_roles(groups: &[RoleGroup]) -> Result<Option<&[String]>> {
    let project_groups: Vec<&RoleGroup> = groups.iter().filter(|g| g.is_project_level()).collect();

    match project_groups.as_slice() {
        [] => Ok(None),
        [group] => Ok(Some(group.roles.as_slice())),
        many => {
            tracing::error!(
                project_role_sets = many.len(),
                "blueprint declares more than one project-level role set"
            );
            Err(ConsumeError::InvalidRoleConfiguration {
                project_role_sets: many.len(),
            })
        }
    }
}
