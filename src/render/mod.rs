//! Template Renderer
//!
//! Fills a soy template from blueprint metadata by literal `$TOKEN`
//! substitution. No escaping is performed: a replacement value that itself
//! contains a token is copied through as-is.

pub mod diagram;

use solution_types::{BlueprintMetadata, SolutionId};

pub use diagram::{diagram_description, LINE_SEPARATOR};

pub const SOLUTION_ID: &str = "$SOLUTION_ID";
pub const SOLUTION_NAME: &str = "$SOLUTION_NAME";
pub const SOLUTION_TITLE: &str = "$SOLUTION_TITLE";
pub const SOLUTION_SUMMARY: &str = "$SOLUTION_SUMMARY";
pub const SOLUTION_DESCRIPTION: &str = "$SOLUTION_DESCRIPTION";
pub const DIAGRAM_DESCRIPTION: &str = "$DIAGRAM_DESCRIPTION";

const TOKEN_SIGIL: char = '$';

/// Flat token → replacement mapping derived from one blueprint
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionSet {
    solution_id: SolutionId,
    entries: Vec<(&'static str, String)>,
}

impl SubstitutionSet {
    pub fn from_metadata(metadata: &BlueprintMetadata) -> Self {
        let info = &metadata.info;
        let solution_name = info.title.as_str();
        let solution_id = SolutionId::from_title(solution_name);
        let diagram = diagram_description(&metadata.content.architecture.description, solution_name);

        let entries = vec![
            (SOLUTION_ID, solution_id.to_string()),
            (SOLUTION_NAME, solution_name.to_string()),
            (SOLUTION_TITLE, info.title.clone()),
            (SOLUTION_SUMMARY, info.description.tagline.clone()),
            (SOLUTION_DESCRIPTION, info.description.detailed.clone()),
            (DIAGRAM_DESCRIPTION, diagram),
        ];

        Self {
            solution_id,
            entries,
        }
    }

    pub fn solution_id(&self) -> &SolutionId {
        &self.solution_id
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| value.as_str())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    /// Replace every token occurrence in one left-to-right pass.
    ///
    /// Replacement text is never rescanned. Unknown `$` sequences are kept.
    pub fn apply(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find(TOKEN_SIGIL) {
            output.push_str(&rest[..pos]);
            let candidate = &rest[pos..];

            match self
                .entries
                .iter()
                .find(|(token, _)| candidate.starts_with(token))
            {
                Some((token, value)) => {
                    output.push_str(value);
                    rest = &candidate[token.len()..];
                }
                None => {
                    output.push(TOKEN_SIGIL);
                    rest = &candidate[TOKEN_SIGIL.len_utf8()..];
                }
            }
        }
        output.push_str(rest);
        output
    }
}

/// Renders the soy template for a solution
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Render `template` for `metadata`. Never fails.
    pub fn render(metadata: &BlueprintMetadata, template: &str) -> String {
        let substitutions = SubstitutionSet::from_metadata(metadata);
        tracing::debug!(
            solution_id = %substitutions.solution_id(),
            steps = metadata.content.architecture.description.len(),
            "rendering soy template"
        );
        substitutions.apply(template)
    }
}
