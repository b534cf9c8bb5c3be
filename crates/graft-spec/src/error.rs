use std::fmt;

use serde::Serialize;

use crate::function::{Parameter, ReturnValue};

/// An error raised while emitting one function's stub.
///
/// Every variant carries enough of the offending spec for the orchestrator
/// to log the failure with full context and continue with the remaining
/// functions; a single malformed spec never aborts the batch. Emission is a
/// deterministic pure transform, so there is no retry path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EmitError {
    /// A bracket character survived into a flattened signature position
    /// after type resolution, or a required parameter was declared after an
    /// optional one. Carries the full parameter list for diagnosis.
    Format {
        detail: String,
        parameters: Vec<Parameter>,
    },
    /// A return value's derived category fell outside the fixed set
    /// (Matrix/Frame/Scalar/List).
    TypeResolution {
        function: String,
        token: String,
        parameters: Vec<Parameter>,
        return_values: Vec<ReturnValue>,
    },
    /// A return value's type token could not be reduced to a leading token
    /// at all (malformed input).
    ReturnPattern { function: String, token: String },
    /// The spec declared no return values, violating the input contract.
    EmptyReturns { function: String },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { detail, parameters } => {
                write!(f, "failed formatting parameters ({detail}): {parameters:?}")
            }
            Self::TypeResolution {
                function, token, ..
            } => {
                write!(f, "unknown return category '{token}' in function '{function}'")
            }
            Self::ReturnPattern { function, token } => {
                write!(f, "malformed return type token '{token}' in function '{function}'")
            }
            Self::EmptyReturns { function } => {
                write!(f, "function '{function}' declares no return values")
            }
        }
    }
}

impl std::error::Error for EmitError {}

/// A non-fatal condition surfaced alongside a successfully generated stub.
///
/// Warnings are values, not log lines; the orchestrator decides how to
/// report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Warning {
    /// The spec carried a description, but documentation assembly produced
    /// no doc text.
    EmptyDocBlock { function: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDocBlock { function } => {
                write!(f, "function '{function}' has a description but produced no doc block")
            }
        }
    }
}
