//! Parameter-signature formatting.
//!
//! Required parameters render as `name: type,` entries, each continuation
//! line indented so it aligns under the opening parenthesis of
//! `def {name}(`. Optional parameters are never rendered individually;
//! their presence adds a single trailing `**kwargs` catch-all that absorbs
//! every defaulted argument at call time.

use graft_spec::{EmitError, Parameter};

use crate::types::TypeMapper;

/// The trailing catch-all accepting every optional argument by name.
pub const KWARGS_PARAMETER: &str = "**kwargs: Dict[str, VALID_INPUT_TYPES]";

/// Format the ordered parameter list into a signature fragment.
///
/// `name_length` is the length of the function name; continuation lines
/// are indented by `name_length + 5` spaces (`"def "` plus the opening
/// parenthesis) so wrapped entries align at the call site.
///
/// Fails with [`EmitError::Format`] when a required parameter follows an
/// optional one, or when a bracket survives into a flattened signature
/// position after type resolution.
pub fn format_signature(
    parameters: &[Parameter],
    mapper: &TypeMapper,
    name_length: usize,
) -> Result<String, EmitError> {
    // Required-before-optional is an input invariant; silently regrouping
    // would reorder the generated signature, so violations fail fast.
    let mut seen_optional = false;
    for param in parameters {
        if param.is_optional() {
            seen_optional = true;
        } else if seen_optional {
            return Err(EmitError::Format {
                detail: format!(
                    "required parameter '{}' follows an optional parameter",
                    param.name
                ),
                parameters: parameters.to_vec(),
            });
        }
    }

    let normalized = mapper.normalize_parameters(parameters);
    let continuation = format!("\n{}", " ".repeat(name_length + 5));

    let mut entries: Vec<String> = Vec::new();
    let mut has_optional = false;
    for param in &normalized {
        if param.type_token.contains(['[', ']']) || param.name.contains(['[', ']']) {
            return Err(EmitError::Format {
                detail: format!(
                    "bracket in flattened signature position for '{}: {}'",
                    param.name, param.type_token
                ),
                parameters: parameters.to_vec(),
            });
        }
        if param.is_optional() {
            has_optional = true;
        } else {
            entries.push(format!("{}: {}", param.name, param.type_token));
        }
    }

    if entries.is_empty() {
        // Zero required parameters: the fragment is empty, or just the
        // catch-all when optionals exist.
        return Ok(if has_optional {
            KWARGS_PARAMETER.to_string()
        } else {
            String::new()
        });
    }

    let mut result = entries.join(&format!(",{continuation}"));
    if has_optional {
        result.push(',');
        result.push_str(&continuation);
        result.push_str(KWARGS_PARAMETER);
    }
    Ok(result)
}
