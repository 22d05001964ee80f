pub mod manifest;
pub mod snapshot;

pub use manifest::GoMod;
pub use snapshot::{Dependency, DependencySnapshot};
