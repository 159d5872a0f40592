//! Protobuf text format encoder for [`Solution`]
//!
//! Produces the multiline layout of Go's `prototext` marshaller:
//! two-space indentation, `name: value` scalars, `name: { ... }` messages,
//! one line per repeated element. proto3 defaults (empty string, `false`,
//! `0`, empty list) are omitted. `Option` fields are written whenever set.

use std::fmt::Write as _;

use solution_types::{
    CloudProductIdentifier, DeployData, DeploymentEstimate, GitSource, OrgPolicyCheck, Property,
    PropertyKind, Section, Solution,
};

const INDENT: &str = "  ";

/// Encode a solution record as multiline textproto
pub fn encode(solution: &Solution) -> String {
    let mut w = TextprotoWriter::new();
    write_solution(&mut w, solution);
    w.finish()
}

fn write_solution(w: &mut TextprotoWriter, solution: &Solution) {
    w.message("git_source", |w| write_git_source(w, &solution.git_source));
    if let Some(estimate) = &solution.deployment_estimate {
        w.message("deployment_estimate", |w| write_estimate(w, estimate));
    }
    w.opt_string("cost_estimate_link", solution.cost_estimate_link.as_deref());
    w.double("cost_estimate_usd", *solution.cost_estimate_usd.value());
    w.message("deploy_data", |w| write_deploy_data(w, &solution.deploy_data));
    w.string("icon_url", solution.icon_url.value());
    w.string("diagram_url", solution.diagram_url.value());
    w.string("documentation_link", solution.documentation_link.value());
    for identifier in solution.cloud_product_identifiers.value() {
        w.message("cloud_product_identifiers", |w| {
            write_product_identifier(w, identifier)
        });
    }
}

fn write_git_source(w: &mut TextprotoWriter, git: &GitSource) {
    w.string("repo", &git.repo);
    w.string("ref", git.git_ref.value());
    w.string("directory", git.directory.value());
}

fn write_estimate(w: &mut TextprotoWriter, estimate: &DeploymentEstimate) {
    w.int("configuration_minutes", estimate.configuration_minutes);
    w.int("deployment_minutes", estimate.deployment_minutes);
}

fn write_deploy_data(w: &mut TextprotoWriter, deploy: &DeployData) {
    for role in &deploy.roles {
        w.string("roles", role);
    }
    for api in &deploy.apis {
        w.string("apis", api);
    }
    for section in &deploy.input_sections {
        w.message("input_sections", |w| write_section(w, section));
    }
    for link in &deploy.links {
        w.message("links", |w| {
            w.string("output_name", &link.output_name);
            w.bool("show_in_notification", link.show_in_notification);
            w.bool("open_in_new_tab", link.open_in_new_tab);
        });
    }
    w.bool("is_singleton", *deploy.is_singleton.value());
    for config in deploy.location_configs.value() {
        w.enum_value("location_configs", config.as_str());
    }
    for check in deploy.org_policy_checks.value() {
        w.message("org_policy_checks", |w| write_org_policy_check(w, check));
    }
}

fn write_section(w: &mut TextprotoWriter, section: &Section) {
    for property in &section.properties {
        w.message("properties", |w| write_property(w, property));
    }
}

fn write_property(w: &mut TextprotoWriter, property: &Property) {
    w.string("name", &property.name);
    if let Some(property_type) = property.property_type() {
        w.enum_value("type", property_type.as_str());
    }
    w.bool("is_required", property.is_required);
    w.bool("is_hidden", property.is_hidden);
    w.opt_string("validation_regex", property.validation_regex.as_deref());

    match &property.kind {
        Some(PropertyKind::String {
            default_value,
            min_length,
            max_length,
        }) => {
            w.opt_string("default_value", default_value.as_deref());
            w.opt_int("min_length", *min_length);
            w.opt_int("max_length", *max_length);
        }
        Some(PropertyKind::Boolean { default_value }) => {
            w.opt_string("default_value", default_value.as_deref());
        }
        Some(PropertyKind::Array {
            min_items,
            max_items,
        }) => {
            w.opt_int("min_items", *min_items);
            w.opt_int("max_items", *max_items);
        }
        Some(PropertyKind::Number {
            default_value,
            minimum,
            maximum,
        }) => {
            w.opt_string("default_value", default_value.as_deref());
            w.opt_double("minimum", *minimum);
            w.opt_double("maximum", *maximum);
        }
        None => {}
    }
}

fn write_org_policy_check(w: &mut TextprotoWriter, check: &OrgPolicyCheck) {
    w.string("id", &check.id);
    for value in &check.required_values {
        w.string("required_values", value);
    }
}

fn write_product_identifier(w: &mut TextprotoWriter, identifier: &CloudProductIdentifier) {
    w.string("label", &identifier.label);
    if let Some(console) = &identifier.console_product_identifier {
        w.message("console_product_identifier", |w| {
            w.string("section_id", &console.section_id);
            w.string("page_id", &console.page_id);
            w.string(
                "page_id_for_post_deployment_link",
                &console.page_id_for_post_deployment_link,
            );
        });
    }
}

// ============================================================================
// WRITER
// ============================================================================

/// Line-oriented textproto writer
#[derive(Debug, Default)]
pub struct TextprotoWriter {
    out: String,
    depth: usize,
}

impl TextprotoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn field(&mut self, name: &str, value: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        let _ = writeln!(self.out, "{}: {}", name, value);
    }

    pub fn string(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.field(name, &quote(value));
        }
    }

    pub fn opt_string(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.field(name, &quote(value));
        }
    }

    pub fn bool(&mut self, name: &str, value: bool) {
        if value {
            self.field(name, "true");
        }
    }

    pub fn int(&mut self, name: &str, value: i32) {
        if value != 0 {
            self.field(name, &value.to_string());
        }
    }

    pub fn opt_int(&mut self, name: &str, value: Option<i32>) {
        if let Some(value) = value {
            self.field(name, &value.to_string());
        }
    }

    pub fn double(&mut self, name: &str, value: f64) {
        if value != 0.0 {
            self.field(name, &format_double(value));
        }
    }

    pub fn opt_double(&mut self, name: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.field(name, &format_double(value));
        }
    }

    /// Enum values are bare identifiers
    pub fn enum_value(&mut self, name: &str, ident: &str) {
        self.field(name, ident);
    }

    /// Nested message; written as `name: {}` when the body is empty
    pub fn message(&mut self, name: &str, body: impl FnOnce(&mut Self)) {
        let start = self.out.len();
        self.field(name, "{");
        let body_start = self.out.len();

        self.depth += 1;
        body(self);
        self.depth -= 1;

        if self.out.len() == body_start {
            self.out.truncate(start);
            self.field(name, "{}");
        } else {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str("}\n");
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Quote and escape a string literal
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // Text format escapes are bytes, so multi-byte controls go out as UTF-8.
            c if c.is_control() => {
                for byte in c.encode_utf8(&mut [0; 4]).bytes() {
                    let _ = write!(quoted, "\\x{:02x}", byte);
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn format_double(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        value.to_string()
    }
}
