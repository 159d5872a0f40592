//! `metadata.display.yaml` - UI constraints per variable

use serde::Deserialize;
use solution_types::UiConstraints;

/// `spec` of a display document; only `ui.input` is read
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySpec {
    #[serde(default)]
    pub ui: DisplayUi,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayUi {
    /// `input.variables` is keyed by variable name
    #[serde(default)]
    pub input: UiConstraints,
}

impl From<DisplaySpec> for UiConstraints {
    fn from(spec: DisplaySpec) -> Self {
        spec.ui.input
    }
}
