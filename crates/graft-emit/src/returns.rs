//! Return-value emission.
//!
//! Arity one emits a single construction expression for the derived output
//! category. Arity two or more first builds a small object graph -- one
//! [`OutputPlaceholder`] per return value, all fed by one shared
//! [`ProducerNode`] -- and then renders it: evaluating any single output
//! must materialize the shared producer exactly once, so the producer is
//! the one upstream dependency every placeholder points back to.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use graft_spec::{EmitError, FunctionSpec};

use crate::token::leading_token;

// ── Categories ───────────────────────────────────────────────────────

/// The structural kind of an emitted output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Matrix,
    Frame,
    Scalar,
    List,
}

impl Category {
    /// The stub class name constructed for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matrix => "Matrix",
            Self::Frame => "Frame",
            Self::Scalar => "Scalar",
            Self::List => "List",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a category could not be derived from a return type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// No leading token could be extracted at all (malformed input).
    NoLeadingToken,
    /// The leading token is outside the fixed category set.
    Unknown(String),
}

/// Derive the output category from a raw return type token.
///
/// The leading token (up to the first `[`, or the whole string) is
/// lowercased and mapped through the fixed exhaustive table. The table is
/// closed by design: an unknown token aborts generation of this one
/// function rather than guessing a category.
pub fn derive_category(token: &str) -> Result<Category, CategoryError> {
    let leading = leading_token(token).ok_or(CategoryError::NoLeadingToken)?;
    match leading.to_lowercase().as_str() {
        "matrix" => Ok(Category::Matrix),
        "frame" => Ok(Category::Frame),
        "double" | "boolean" | "integer" => Ok(Category::Scalar),
        "list" => Ok(Category::List),
        other => Err(CategoryError::Unknown(other.to_string())),
    }
}

// ── Multi-return object graph ────────────────────────────────────────

/// One of several outputs of a multi-return function, before it is
/// materialized with real data.
///
/// The back-reference to the shared producer is a `Weak`: the producer
/// owns its placeholders, the placeholder only relates back to it.
#[derive(Debug)]
pub struct OutputPlaceholder {
    /// Position in the function's return list, used for the `vX_{i}` name.
    pub index: usize,
    pub category: Category,
    producer: RefCell<Weak<ProducerNode>>,
}

impl OutputPlaceholder {
    /// The shared producer feeding this placeholder, if still alive.
    pub fn producer(&self) -> Option<Rc<ProducerNode>> {
        self.producer.borrow().upgrade()
    }
}

/// The single shared operation that, once evaluated, yields every output
/// of a multi-return function.
#[derive(Debug)]
pub struct ProducerNode {
    /// The operation identifier: the generated function's own name.
    pub function: String,
    /// The placeholders this node feeds, in declaration order.
    pub outputs: Vec<Rc<OutputPlaceholder>>,
}

/// Build the producer graph for a multi-return function.
///
/// Creates one placeholder per category in order, one shared producer
/// owning them all, and wires each placeholder's back-reference to the
/// producer.
pub fn build_producer(function: &str, categories: &[Category]) -> Rc<ProducerNode> {
    let outputs: Vec<Rc<OutputPlaceholder>> = categories
        .iter()
        .enumerate()
        .map(|(index, &category)| {
            Rc::new(OutputPlaceholder {
                index,
                category,
                producer: RefCell::new(Weak::new()),
            })
        })
        .collect();

    let node = Rc::new(ProducerNode {
        function: function.to_string(),
        outputs,
    });
    for placeholder in &node.outputs {
        *placeholder.producer.borrow_mut() = Rc::downgrade(&node);
    }
    node
}

// ── Rendering ────────────────────────────────────────────────────────

/// Render the function's final expression(s) for the given spec.
///
/// The execution context is taken from the first parameter; with no
/// parameters the bare `sds_context` identifier is used. An empty return
/// list is an input-contract violation and fails before anything renders.
pub fn emit_return(spec: &FunctionSpec) -> Result<String, EmitError> {
    if spec.return_values.is_empty() {
        return Err(EmitError::EmptyReturns {
            function: spec.name.clone(),
        });
    }

    let context = spec
        .parameters
        .first()
        .map(|p| format!("{}.sds_context", p.name))
        .unwrap_or_else(|| "sds_context".to_string());

    let mut categories = Vec::with_capacity(spec.return_values.len());
    for value in &spec.return_values {
        let category = derive_category(&value.type_token).map_err(|e| match e {
            CategoryError::NoLeadingToken => EmitError::ReturnPattern {
                function: spec.name.clone(),
                token: value.type_token.clone(),
            },
            CategoryError::Unknown(token) => EmitError::TypeResolution {
                function: spec.name.clone(),
                token,
                parameters: spec.parameters.clone(),
                return_values: spec.return_values.clone(),
            },
        })?;
        categories.push(category);
    }

    if let [category] = categories[..] {
        Ok(format!(
            "return {category}({context},\n        '{name}',\n        named_input_nodes=params_dict)",
            name = spec.name,
        ))
    } else {
        let op = build_producer(&spec.name, &categories);
        Ok(render_multi_return(&op, &context))
    }
}

/// Render the multi-return body from the constructed producer graph.
fn render_multi_return(op: &ProducerNode, context: &str) -> String {
    let mut declarations: Vec<String> = Vec::with_capacity(op.outputs.len());
    let mut node_list = String::from("    output_nodes = [");
    let mut back_links: Vec<String> = Vec::with_capacity(op.outputs.len());

    for placeholder in &op.outputs {
        declarations.push(format!(
            "    vX_{idx} = {category}({context}, '')",
            idx = placeholder.index,
            category = placeholder.category,
        ));
        node_list.push_str(&format!("vX_{}, ", placeholder.index));
        // The placeholder's "unnamed input" is its shared producer.
        back_links.push(format!(
            "    vX_{}._unnamed_input_nodes = [op]",
            placeholder.index
        ));
    }
    node_list.push(']');

    format!(
        "\n{declarations}\n{node_list}\n\n    op = MultiReturn({context}, '{name}', \
         output_nodes, named_input_nodes=params_dict)\n\n{back_links}\n\n    return op",
        declarations = declarations.join("\n"),
        name = op.function,
        back_links = back_links.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_spec::{Parameter, ReturnValue};

    fn spec(returns: Vec<ReturnValue>) -> FunctionSpec {
        FunctionSpec::new(
            "foo",
            vec![Parameter::required("X", "matrix[double]")],
            returns,
        )
    }

    #[test]
    fn category_table_is_exhaustive_and_deterministic() {
        assert_eq!(derive_category("matrix[double]"), Ok(Category::Matrix));
        assert_eq!(derive_category("frame"), Ok(Category::Frame));
        assert_eq!(derive_category("double"), Ok(Category::Scalar));
        assert_eq!(derive_category("Boolean"), Ok(Category::Scalar));
        assert_eq!(derive_category("integer"), Ok(Category::Scalar));
        assert_eq!(derive_category("list[unknown]"), Ok(Category::List));
    }

    #[test]
    fn unknown_category_token_is_rejected() {
        assert_eq!(
            derive_category("tensor"),
            Err(CategoryError::Unknown("tensor".to_string()))
        );
    }

    #[test]
    fn malformed_token_has_no_leading_token() {
        assert_eq!(derive_category("[double]"), Err(CategoryError::NoLeadingToken));
        assert_eq!(derive_category(""), Err(CategoryError::NoLeadingToken));
    }

    #[test]
    fn producer_graph_links_every_placeholder_to_one_node() {
        let op = build_producer("foo", &[Category::Matrix, Category::Scalar, Category::List]);
        assert_eq!(op.outputs.len(), 3);
        for (i, placeholder) in op.outputs.iter().enumerate() {
            assert_eq!(placeholder.index, i);
            let back = placeholder.producer().expect("producer should be alive");
            assert!(Rc::ptr_eq(&back, &op), "back-reference must be identity-equal");
        }
    }

    #[test]
    fn back_reference_does_not_own_the_producer() {
        let op = build_producer("foo", &[Category::Matrix, Category::Scalar]);
        let placeholder = Rc::clone(&op.outputs[0]);
        drop(op);
        // The weak back-reference alone cannot keep the producer alive.
        assert!(placeholder.producer().is_none());
    }

    #[test]
    fn single_return_constructs_the_derived_category() {
        let result = emit_return(&spec(vec![ReturnValue::new("d", "double")])).unwrap();
        assert_eq!(
            result,
            "return Scalar(X.sds_context,\n        'foo',\n        named_input_nodes=params_dict)"
        );
    }

    #[test]
    fn multi_return_renders_placeholders_producer_and_back_links() {
        let result = emit_return(&spec(vec![
            ReturnValue::new("a", "matrix[double]"),
            ReturnValue::new("b", "double"),
        ]))
        .unwrap();
        let expected = concat!(
            "\n",
            "    vX_0 = Matrix(X.sds_context, '')\n",
            "    vX_1 = Scalar(X.sds_context, '')\n",
            "    output_nodes = [vX_0, vX_1, ]\n",
            "\n",
            "    op = MultiReturn(X.sds_context, 'foo', output_nodes, named_input_nodes=params_dict)\n",
            "\n",
            "    vX_0._unnamed_input_nodes = [op]\n",
            "    vX_1._unnamed_input_nodes = [op]\n",
            "\n",
            "    return op",
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn no_parameters_falls_back_to_the_bare_context() {
        let spec = FunctionSpec::new("foo", vec![], vec![ReturnValue::new("Y", "matrix")]);
        let result = emit_return(&spec).unwrap();
        assert!(result.starts_with("return Matrix(sds_context,"));
    }

    #[test]
    fn empty_return_list_fails_fast() {
        let err = emit_return(&spec(vec![])).unwrap_err();
        assert_eq!(
            err,
            EmitError::EmptyReturns {
                function: "foo".to_string()
            }
        );
    }

    #[test]
    fn unknown_return_type_carries_full_context() {
        let err = emit_return(&spec(vec![ReturnValue::new("T", "tensor")])).unwrap_err();
        match err {
            EmitError::TypeResolution {
                function,
                token,
                parameters,
                return_values,
            } => {
                assert_eq!(function, "foo");
                assert_eq!(token, "tensor");
                assert_eq!(parameters.len(), 1);
                assert_eq!(return_values.len(), 1);
            }
            other => panic!("expected TypeResolution, got {other:?}"),
        }
    }

    #[test]
    fn malformed_return_token_is_a_pattern_error() {
        let err = emit_return(&spec(vec![ReturnValue::new("T", "[double]")])).unwrap_err();
        assert_eq!(
            err,
            EmitError::ReturnPattern {
                function: "foo".to_string(),
                token: "[double]".to_string()
            }
        );
    }
}
