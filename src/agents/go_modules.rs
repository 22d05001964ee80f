use crate::agents::project_scanner::MANIFEST_FILE;
use crate::error::Result;
use crate::gomod::GoMod;
use crate::process::{Invocation, ProcessRunner};
use std::path::{Path, PathBuf};

/// GoModulesAgent drives the `go` tool for one module directory.
pub struct GoModulesAgent<'a> {
    runner: &'a dyn ProcessRunner,
    project_path: PathBuf,
}

impl<'a> GoModulesAgent<'a> {
    pub fn new<P: AsRef<Path>>(runner: &'a dyn ProcessRunner, project_path: P) -> Self {
        Self {
            runner,
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Dump `go.mod` through `go mod edit -json`
    pub fn read_manifest(&self) -> Result<GoMod> {
        let output = self
            .runner
            .run_checked(&self.go(&["mod", "edit", "-json", MANIFEST_FILE]))?;
        GoMod::from_json(&output)
    }

    /// Upgrade every dependency in place with `go get -u`
    pub fn upgrade(&self) -> Result<()> {
        self.runner.run_checked(&self.go(&["get", "-u"]))?;
        Ok(())
    }

    fn go(&self, args: &[&str]) -> Invocation {
        Invocation::new("go", args, &self.project_path).env("GO111MODULE", "on")
    }
}
