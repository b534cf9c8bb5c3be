//! Function-level orchestration.
//!
//! [`emit_function`] runs the pipeline for one spec -- format the
//! signature, bind the params dict, emit the return expression(s), assemble
//! the docstring -- and splices the four fragments into the stub template
//! through an explicit [`StubBuilder`]. Each invocation is pure given its
//! inputs; nothing here touches shared mutable state.

use graft_spec::{EmitError, FunctionSpec, TypeMappingTable, Warning};

use crate::types::TypeMapper;
use crate::{bindings, docs, returns, signature};

/// One generated stub, handed back to the external writer.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFunction {
    /// The function's own name, used by the writer for the file name and
    /// the export manifest.
    pub name: String,
    /// The complete function definition source text.
    pub source: String,
    /// Non-fatal conditions for the orchestrator to report.
    pub warnings: Vec<Warning>,
}

/// The four typed fragments of a stub, with explicit substitution points.
///
/// Keeping the fragments named (rather than interpolating mid-pipeline)
/// makes the composition order visible in one place.
struct StubBuilder<'a> {
    name: &'a str,
    signature: &'a str,
    doc_block: &'a str,
    params_dict: &'a str,
    api_call: &'a str,
}

impl StubBuilder<'_> {
    /// Splice the fragments into the stub template. Empty fragments leave
    /// their indented slot line in place, matching the generated-file
    /// layout downstream tooling expects.
    fn render(&self) -> String {
        format!(
            "def {name}({signature}):\n    {doc_block}\n    {params_dict}\n    {api_call}\n",
            name = self.name,
            signature = self.signature,
            doc_block = self.doc_block,
            params_dict = self.params_dict,
            api_call = self.api_call,
        )
    }
}

/// Generate the complete function definition for one spec.
///
/// Fails with the first [`EmitError`] encountered; errors surface to the
/// caller so a batch orchestrator can log and continue with the remaining
/// specs.
pub fn emit_function(
    spec: &FunctionSpec,
    table: &TypeMappingTable,
) -> Result<GeneratedFunction, EmitError> {
    let mapper = TypeMapper::new(table);
    let signature = signature::format_signature(&spec.parameters, &mapper, spec.name.len())?;
    let params_dict = bindings::build_params_dict(&spec.parameters);
    let api_call = returns::emit_return(spec)?;
    let doc_block = docs::assemble(&spec.description, &spec.parameter_docs, &spec.return_docs);

    let mut warnings = Vec::new();
    if !spec.description.is_empty() && doc_block.is_empty() {
        warnings.push(Warning::EmptyDocBlock {
            function: spec.name.clone(),
        });
    }

    let source = StubBuilder {
        name: &spec.name,
        signature: &signature,
        doc_block: &doc_block,
        params_dict: &params_dict,
        api_call: &api_call,
    }
    .render();

    Ok(GeneratedFunction {
        name: spec.name.clone(),
        source,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_spec::{Parameter, ReturnValue};

    fn table() -> TypeMappingTable {
        TypeMappingTable::bundled().unwrap()
    }

    #[test]
    fn emits_a_complete_single_return_stub() {
        let spec = FunctionSpec::new(
            "foo",
            vec![Parameter::required("X", "matrix[double]")],
            vec![ReturnValue::new("Y", "matrix[double]")],
        );
        let generated = emit_function(&spec, &table()).unwrap();
        assert_eq!(generated.name, "foo");
        assert!(generated.source.starts_with("def foo(X: Matrix):\n"));
        assert!(generated.source.ends_with("named_input_nodes=params_dict)\n"));
        assert!(generated.warnings.is_empty());
    }

    #[test]
    fn errors_propagate_to_the_caller() {
        let spec = FunctionSpec::new(
            "foo",
            vec![Parameter::required("X", "matrix")],
            vec![ReturnValue::new("T", "tensor")],
        );
        assert!(matches!(
            emit_function(&spec, &table()),
            Err(EmitError::TypeResolution { .. })
        ));
    }

    #[test]
    fn whitespace_description_surfaces_the_doc_warning() {
        let spec = FunctionSpec::new(
            "foo",
            vec![Parameter::required("X", "matrix")],
            vec![ReturnValue::new("Y", "matrix")],
        )
        .with_description("   \n");
        let generated = emit_function(&spec, &table()).unwrap();
        assert_eq!(
            generated.warnings,
            vec![Warning::EmptyDocBlock {
                function: "foo".to_string()
            }]
        );
    }

    #[test]
    fn empty_description_is_not_a_warning() {
        let spec = FunctionSpec::new(
            "noop",
            vec![Parameter::required("X", "matrix")],
            vec![ReturnValue::new("Y", "matrix")],
        );
        let generated = emit_function(&spec, &table()).unwrap();
        assert!(generated.warnings.is_empty());
    }
}
