//! Raw type token to stub type resolution.
//!
//! Resolution is permissive by design: a token whose base is absent from
//! the table passes through verbatim, so callers still see the original
//! annotation. Hard failures (a compound token surviving into a signature
//! position) are the signature formatter's concern, not this module's.
//!
//! # Token mapping (bundled table)
//!
//! | Base token | Stub type |
//! |------------|-----------|
//! | matrix     | Matrix    |
//! | frame      | Frame     |
//! | list       | List      |
//! | double     | float     |
//! | integer    | int       |
//! | boolean    | bool      |
//! | string     | str       |

use graft_spec::{Parameter, TypeMappingTable};

use crate::token::base_token;

/// Resolves raw type tokens against an injected, immutable mapping table.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    table: &'a TypeMappingTable,
}

impl<'a> TypeMapper<'a> {
    pub fn new(table: &'a TypeMappingTable) -> Self {
        Self { table }
    }

    /// Resolve a raw type token to its stub type name.
    ///
    /// The base token (longest leading run of non-whitespace, non-bracket
    /// characters) is lowercased and looked up; on a miss the original
    /// token is returned unchanged. Empty input is returned unchanged with
    /// no lookup attempted.
    pub fn resolve(&self, token: &str) -> String {
        if token.is_empty() {
            return String::new();
        }
        let base = base_token(token).to_lowercase();
        match self.table.lookup(&base) {
            Some(mapped) => mapped.to_string(),
            None => token.to_string(),
        }
    }

    /// Produce a new parameter list with every `type_token` resolved.
    ///
    /// The input list is left untouched; emission stays referentially
    /// transparent across parallel generation of independent functions.
    pub fn normalize_parameters(&self, parameters: &[Parameter]) -> Vec<Parameter> {
        parameters
            .iter()
            .map(|p| Parameter {
                name: p.name.clone(),
                type_token: self.resolve(&p.type_token),
                default: p.default.clone(),
            })
            .collect()
    }
}
