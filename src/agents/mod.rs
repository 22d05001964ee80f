pub mod go_modules;
pub mod project_scanner;
pub mod version_control;

pub use go_modules::GoModulesAgent;
pub use project_scanner::ProjectScannerAgent;
pub use version_control::{VersionControlAgent, branch_name};
