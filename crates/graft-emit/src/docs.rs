//! Docstring assembly.
//!
//! The doc block wraps the spec's free-text description, one `:param` line
//! per documented parameter, and a combined `:return:` line describing what
//! the returned operation node contains. No description means no block at
//! all, regardless of parameter or return docs.

use graft_spec::ParamDoc;

/// Assemble the docstring block, or an empty string when the description
/// carries no text.
///
/// The description is re-indented for nested placement inside the function
/// body. Multiple return meanings are joined with a `&` continuation
/// marker, and the combined return phrase is lowercased as a whole.
pub fn assemble(description: &str, parameter_docs: &[ParamDoc], return_docs: &[String]) -> String {
    if description.trim().is_empty() {
        return String::new();
    }
    let description = description.replace('\n', "\n    ");

    let mut params = String::from("\n    ");
    for doc in parameter_docs {
        params.push_str(&format!("\n    :param {}: {}", doc.name, doc.meaning));
    }

    if return_docs.is_empty() {
        return format!("\"\"\"\n    {description}{params}\n    \"\"\"");
    }

    let meaning = format!("\n        {}", return_docs.join("\n        & ")).to_lowercase();
    format!(
        "\"\"\"\n    {description}{params}\n    :return: 'OperationNode' containing {meaning} \n    \"\"\""
    )
}
