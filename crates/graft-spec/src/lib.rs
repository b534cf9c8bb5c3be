//! Shared types for the Graft stub generator.
//!
//! This crate holds everything the emission engine and the package writer
//! have in common:
//!
//! - [`FunctionSpec`] and friends: the structured description of one builtin
//!   function, produced by the external script parser and consumed read-only.
//! - [`TypeMappingTable`]: the immutable base-token-to-stub-type lookup table,
//!   loaded once from a JSON resource and injected into the engine.
//! - [`EmitError`] and [`Warning`]: the error taxonomy and the non-fatal
//!   documentation signal surfaced per function.

pub mod error;
pub mod function;
pub mod mapping;

// Re-export key types for convenience.
pub use error::{EmitError, Warning};
pub use function::{FunctionSpec, ParamDoc, Parameter, ReturnValue};
pub use mapping::TypeMappingTable;
