//! Diagram description block
//!
//! One soy `{msg}` per architecture step, joined by the soy line-break command.

/// Soy line break placed between step messages
pub const LINE_SEPARATOR: &str = "{\\n}";

/// Assemble the block for all steps; empty when there are none
pub fn diagram_description(steps: &[String], solution_name: &str) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| step_message(i + 1, step, solution_name))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// `index` is 1-based
fn step_message(index: usize, step: &str, solution_name: &str) -> String {
    format!(
        "{{msg desc=\"Step {index} of {solution_name} diagram description\"}}\n{step}\n{{/msg}}\n"
    )
}
