//! Persisting generated stubs.

use std::path::{Path, PathBuf};

use graft_emit::GeneratedFunction;

use crate::manifest::render_manifest;

/// Injected configuration for the package writer.
///
/// The license header and import preamble are opaque text supplied by the
/// orchestrator; the writer only splices them in front of each stub.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Directory the per-function files are written into.
    pub target_dir: PathBuf,
    /// Text placed at the very top of every written file.
    pub license_header: String,
    /// Provenance line(s) naming the generating tool.
    pub generated_by: String,
    /// Import block shared by all generated stubs.
    pub import_preamble: String,
    /// File extension without the dot, e.g. `py`.
    pub extension: String,
}

/// Writes generated stubs to disk and aggregates the export manifest.
#[derive(Debug)]
pub struct PackageWriter {
    config: PackageConfig,
    names: Vec<String>,
}

impl PackageWriter {
    /// Create a writer, ensuring the target directory exists.
    pub fn new(config: PackageConfig) -> Result<PackageWriter, String> {
        std::fs::create_dir_all(&config.target_dir).map_err(|e| {
            format!(
                "Failed to create directory '{}': {}",
                config.target_dir.display(),
                e
            )
        })?;
        Ok(PackageWriter {
            config,
            names: Vec::new(),
        })
    }

    /// Write one generated function to `{target_dir}/{name}.{ext}` and
    /// record its name for the manifest.
    ///
    /// `origin` names the script file the spec was parsed from and is
    /// recorded in the file's provenance lines.
    pub fn write_function(
        &mut self,
        generated: &GeneratedFunction,
        origin: &str,
    ) -> Result<PathBuf, String> {
        let path = self
            .config
            .target_dir
            .join(format!("{}.{}", generated.name, self.config.extension));

        let mut content = String::new();
        content.push_str(&self.config.license_header);
        content.push_str(&self.config.generated_by);
        content.push_str(&format!("# Autogenerated From : {origin}\n"));
        content.push_str(&self.config.import_preamble);
        content.push_str(&generated.source);

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        self.names.push(generated.name.clone());
        Ok(path)
    }

    /// Write the export manifest over every name written so far.
    pub fn write_manifest(&self, path: &Path) -> Result<(), String> {
        let mut content = String::new();
        content.push_str(&self.config.license_header);
        content.push_str(&self.config.generated_by);
        content.push('\n');
        content.push_str(&render_manifest(&self.names));

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// The function names written so far, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
