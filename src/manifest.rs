//! Package manifest model and its byte-stable serialization.

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::{MANIFEST_VERSION, START_COMMAND};
use crate::context::GenerationContext;
use crate::error::Result;

/// The generated package.json. Field order follows declaration order;
/// dependencies are sorted before serialization so the output is
/// byte-for-byte reproducible.
#[derive(Debug, Serialize)]
pub struct PackageManifest {
    name: String,
    version: String,
    private: bool,
    scripts: IndexMap<String, String>,
    dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    pub fn from_context(context: &GenerationContext) -> Self {
        let mut dependencies = context.dependencies.clone();
        // Deliberate normalization: manifests list dependencies in
        // lexicographic key order.
        dependencies.sort_keys();

        let mut scripts = IndexMap::new();
        scripts.insert("start".to_string(), START_COMMAND.to_string());

        Self {
            name: context.app_name.clone(),
            version: MANIFEST_VERSION.to_string(),
            private: true,
            scripts,
            dependencies,
        }
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
