//! The `params_dict` argument-binding fragment.
//!
//! Each required parameter binds its own name into the named-argument map
//! used when the operation is later materialized. When optional parameters
//! exist, the caller-supplied `kwargs` are merged in afterwards with update
//! semantics, so explicit keyword arguments win on collision.

use graft_spec::Parameter;

/// The merge statement appended when optional parameters exist.
pub const KWARGS_MERGE: &str = "params_dict.update(kwargs)";

/// Render the binding fragment for the given parameter list.
///
/// Returns an empty string when there are no parameters at all. With only
/// optional parameters the literal is empty (`params_dict = {}`) and the
/// merge line still follows, so the map the return expression references
/// always exists.
pub fn build_params_dict(parameters: &[Parameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut has_optional = false;
    let mut bindings: Vec<String> = Vec::new();
    for param in parameters {
        if param.is_optional() {
            has_optional = true;
        } else {
            bindings.push(format!("'{name}': {name}", name = param.name));
        }
    }

    let mut result = format!("params_dict = {{{}}}", bindings.join(", "));
    if has_optional {
        result.push_str("\n    ");
        result.push_str(KWARGS_MERGE);
    }
    result
}
