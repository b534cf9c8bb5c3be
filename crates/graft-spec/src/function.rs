use serde::{Deserialize, Serialize};

/// Structured description of one function to generate.
///
/// Produced by the external script parser, consumed read-only by the
/// emission engine. Parameter and return-value order is significant and
/// preserved verbatim in the generated stub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// The builtin's name, used both for the generated `def` and as the
    /// operation identifier in the emitted graph node.
    pub name: String,
    /// Ordered parameter list. All required parameters must precede all
    /// optional ones; the signature formatter rejects violations.
    pub parameters: Vec<Parameter>,
    /// Ordered return values. Never empty for a well-formed spec; the
    /// return emitter rejects an empty list.
    pub return_values: Vec<ReturnValue>,
    /// Free-text description for the docstring. May be empty, in which
    /// case no docstring is emitted at all.
    #[serde(default)]
    pub description: String,
    /// Per-parameter documentation, in declaration order.
    #[serde(default)]
    pub parameter_docs: Vec<ParamDoc>,
    /// Per-return documentation, in declaration order.
    #[serde(default)]
    pub return_docs: Vec<String>,
}

impl FunctionSpec {
    /// Create a spec with no documentation attached.
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_values: Vec<ReturnValue>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_values,
            description: String::new(),
            parameter_docs: Vec::new(),
            return_docs: Vec::new(),
        }
    }

    /// Attach a free-text description (builder style, for tests and callers
    /// that assemble specs by hand).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One declared parameter of a builtin function.
///
/// The `type_token` is the raw token from the script header and may be
/// compound (e.g. `matrix[double]`); resolution to a stub type happens in
/// the emission engine, producing a new normalized parameter rather than
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_token: String,
    /// `Some` marks the parameter optional; the literal default text is
    /// carried for diagnostics but never rendered into the signature.
    pub default: Option<String>,
}

impl Parameter {
    /// A required parameter (no default).
    pub fn required(name: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
            default: None,
        }
    }

    /// An optional parameter with a default value.
    pub fn optional(
        name: impl Into<String>,
        type_token: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
            default: Some(default.into()),
        }
    }

    /// Whether this parameter carries a default value.
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// One declared return value of a builtin function.
///
/// The name is a placeholder label from the script header; it is not
/// necessarily emitted (multi-return placeholders are numbered instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnValue {
    pub name: String,
    pub type_token: String,
}

impl ReturnValue {
    pub fn new(name: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
        }
    }
}

/// Documentation text for one parameter, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    pub meaning: String,
}

impl ParamDoc {
    pub fn new(name: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meaning: meaning.into(),
        }
    }
}
