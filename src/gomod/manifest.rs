use crate::error::{Result, UpdaterError};
use crate::gomod::snapshot::{Dependency, DependencySnapshot};
use serde::Deserialize;

/// `go.mod` as printed by `go mod edit -json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GoMod {
    #[serde(default)]
    pub module: Module,
    #[serde(default)]
    #[allow(dead_code)]
    pub go: Option<String>,
    #[serde(default)]
    pub require: Vec<Require>,
    #[serde(default)]
    #[allow(dead_code)]
    pub exclude: Vec<Module>,
    #[serde(default)]
    #[allow(dead_code)]
    pub replace: Vec<Replace>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Module {
    pub path: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Require {
    pub path: String,
    pub version: String,
    #[serde(default)]
    pub indirect: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[allow(dead_code)]
pub struct Replace {
    pub old: Module,
    pub new: Module,
}

impl GoMod {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            UpdaterError::ManifestParsing(format!("Failed to parse `go mod edit -json` output: {e}"))
        })
    }

    /// Captures the `require` block as an immutable snapshot.
    pub fn snapshot(&self) -> DependencySnapshot {
        self.require
            .iter()
            .map(|r| Dependency::new(&r.path, &r.version, r.indirect))
            .collect()
    }
}
