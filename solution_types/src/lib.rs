//! Solution Types - Level 1 Foundation Types
//!
//! Pure data structures shared by the record builder and the template renderer.
//!
//! ## Contents
//!
//! - [`blueprint`]: the normalized blueprint metadata contract. Every schema
//!   revision of `metadata.yaml` is adapted into these types before mapping.
//! - [`solution`]: the strongly-typed Solution record written as textproto.
//! - [`completion`]: the marker type separating resolved values from
//!   placeholders that still need a human.
//! - [`SolutionId`]: the identifier derived from the solution title.
//!
//! ## Rules
//!
//! 1. **NO BUSINESS LOGIC** - mapping lives in `bpconsume::builder`
//! 2. **CONSTRUCTORS AND ACCESSORS ONLY**
//! 3. **SERIALIZABLE** - all types support serde

pub mod blueprint;
pub mod completion;
pub mod solution;

use serde::{Deserialize, Serialize};

pub use blueprint::{
    BlueprintArchitecture, BlueprintContent, BlueprintDescription, BlueprintInfo,
    BlueprintInterfaces, BlueprintMetadata, BlueprintOutput, BlueprintRequirements,
    BlueprintVariable, CostEstimate, DeploymentDuration, RoleGroup, SourceRepo, UiConstraints,
    VariableConstraint, PROJECT_ROLE_LEVEL,
};
pub use completion::Completion;
pub use solution::{
    CloudProductIdentifier, ConsoleProductIdentifier, DeployData, DeployLocationConfig,
    DeploymentEstimate, DeploymentLink, GitSource, OrgPolicyCheck, Property, PropertyKind,
    PropertyType, Section, Solution,
};

// ============================================================================
// SOLUTION IDENTIFIER
// ============================================================================

/// External identifier of a solution.
///
/// Derived from the title by lower-casing it and replacing spaces with
/// underscores. Both generated files are named after it
/// (`<id>.textproto`, `<id>.soy`), so the builder and the renderer must go
/// through this one constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionId(String);

impl SolutionId {
    /// Derive the identifier from a solution title
    pub fn from_title(title: &str) -> Self {
        Self(title.to_lowercase().replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name for an artifact with the given extension (no leading dot)
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl std::fmt::Display for SolutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SolutionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
