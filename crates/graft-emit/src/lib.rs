//! Stub emission engine for the Graft generator.
//!
//! Turns one [`graft_spec::FunctionSpec`] into the source text of a Python
//! stub wired into the lazy computation-graph library. The pipeline:
//!
//! - [`signature`]: aligned parameter list + `**kwargs` catch-all
//! - [`bindings`]: the `params_dict` named-argument map
//! - [`returns`]: single-return expression or multi-return producer graph
//! - [`docs`]: the docstring block
//! - [`emitter`]: fragment composition into the final definition
//!
//! Emission is a pure transform: the injected [`graft_spec::TypeMappingTable`]
//! is the only shared input and is never written to, so independent specs
//! can be generated in parallel against one table.
//!
//! # Example
//!
//! ```
//! use graft_emit::emit_function;
//! use graft_spec::{FunctionSpec, Parameter, ReturnValue, TypeMappingTable};
//!
//! let table = TypeMappingTable::bundled().unwrap();
//! let spec = FunctionSpec::new(
//!     "foo",
//!     vec![
//!         Parameter::required("X", "matrix[double]"),
//!         Parameter::optional("eps", "double", "1e-3"),
//!     ],
//!     vec![ReturnValue::new("Y", "matrix[double]")],
//! );
//!
//! let generated = emit_function(&spec, &table).unwrap();
//! assert!(generated.source.starts_with("def foo(X: Matrix,"));
//! assert!(generated.source.contains("params_dict.update(kwargs)"));
//! ```

pub mod bindings;
pub mod docs;
pub mod emitter;
pub mod returns;
pub mod signature;
pub mod token;
pub mod types;

// Re-export the entry point and its result type.
pub use emitter::{emit_function, GeneratedFunction};
