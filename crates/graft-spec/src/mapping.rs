use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// The base-token-to-stub-type lookup table.
///
/// Loaded once from a JSON resource of the shape
/// `{"type": {"matrix": "Matrix", "double": "float", ...}}` before any
/// generation starts, then treated as immutable. The table has no interior
/// mutability, so a shared reference can be handed to generation of
/// independent functions running in parallel without locking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeMappingTable {
    #[serde(rename = "type")]
    types: FxHashMap<String, String>,
}

impl TypeMappingTable {
    /// Parse a mapping table from its JSON resource text.
    pub fn from_str(content: &str) -> Result<TypeMappingTable, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to parse type mapping: {}", e))
    }

    /// Read and parse a mapping table from a file path.
    pub fn from_file(path: &Path) -> Result<TypeMappingTable, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_str(&content)
    }

    /// The mapping table bundled with this crate.
    pub fn bundled() -> Result<TypeMappingTable, String> {
        Self::from_str(include_str!("../resources/type_mapping.json"))
    }

    /// Look up a lowercase base token. A miss is not an error; callers fall
    /// back to the original token unchanged.
    pub fn lookup(&self, base_token: &str) -> Option<&str> {
        self.types.get(base_token).map(String::as_str)
    }

    /// Number of mapped base tokens.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the table maps no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
