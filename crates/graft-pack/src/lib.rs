//! File writer and package export manifest for the Graft generator.
//!
//! The emission engine hands over finished stub text; this crate persists
//! it. Each generated function becomes one file (license header, provenance
//! lines, import preamble, then the definition), and the names written so
//! far are aggregated into the package's `__init__.py` export manifest.
//!
//! License and preamble text are injected configuration: nothing here
//! hard-codes boilerplate.

pub mod manifest;
pub mod writer;

// Re-export key types for convenience.
pub use manifest::render_manifest;
pub use writer::{PackageConfig, PackageWriter};
