use crate::error::{Result, UpdaterError};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "go.mod";
pub const CHECKSUM_FILE: &str = "go.sum";

/// ProjectScannerAgent validates the Go module layout before anything runs.
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    pub fn validate(&self) -> Result<ProjectInfo> {
        let project_path = self.project_path.canonicalize().map_err(|e| {
            UpdaterError::ProjectValidation(format!(
                "Invalid path '{}': {e}",
                self.project_path.display()
            ))
        })?;

        if !project_path.is_dir() {
            return Err(UpdaterError::ProjectValidation(format!(
                "Path '{}' is not a directory",
                project_path.display()
            )));
        }

        let manifest_path = project_path.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(UpdaterError::ProjectValidation(format!(
                "{MANIFEST_FILE} not found in '{}'",
                project_path.display()
            )));
        }

        Ok(ProjectInfo {
            project_path,
            manifest_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project_path: PathBuf,
    #[allow(dead_code)]
    pub manifest_path: PathBuf,
}

impl ProjectInfo {
    /// `go.mod` plus `go.sum` when the module has one.
    pub fn tracked_files(&self) -> Vec<&'static str> {
        let mut files = vec![MANIFEST_FILE];
        if self.has_checksum() {
            files.push(CHECKSUM_FILE);
        }
        files
    }

    pub fn has_checksum(&self) -> bool {
        self.checksum_path().is_file()
    }

    pub fn checksum_path(&self) -> PathBuf {
        self.project_path.join(CHECKSUM_FILE)
    }
}
