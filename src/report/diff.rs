use crate::gomod::DependencySnapshot;
use std::collections::HashMap;

/// A dependency that differs between the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    Added {
        path: String,
        version: String,
    },
    Changed {
        path: String,
        old_version: String,
        new_version: String,
    },
}

impl DiffEntry {
    pub fn path(&self) -> &str {
        match self {
            DiffEntry::Added { path, .. } | DiffEntry::Changed { path, .. } => path,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, DiffEntry::Added { .. })
    }

    /// One-line summary with the raw versions, for log output.
    pub fn describe(&self) -> String {
        match self {
            DiffEntry::Added { path, version } => format!("{path} {version} (added)"),
            DiffEntry::Changed {
                path,
                old_version,
                new_version,
            } => format!("{path} {old_version} -> {new_version}"),
        }
    }
}

/// Compares two snapshots by module path.
///
/// Entries follow the order of `after`. Modules only present in `before`
/// are not reported. If `before` lists a path twice the first one counts.
pub fn diff(before: &DependencySnapshot, after: &DependencySnapshot) -> Vec<DiffEntry> {
    let mut previous: HashMap<&str, &str> = HashMap::with_capacity(before.len());
    for dependency in before {
        previous
            .entry(dependency.path.as_str())
            .or_insert(dependency.version.as_str());
    }

    after
        .iter()
        .filter_map(|dependency| match previous.get(dependency.path.as_str()) {
            Some(old) if *old == dependency.version => None,
            Some(old) => Some(DiffEntry::Changed {
                path: dependency.path.clone(),
                old_version: (*old).to_string(),
                new_version: dependency.version.clone(),
            }),
            None => Some(DiffEntry::Added {
                path: dependency.path.clone(),
                version: dependency.version.clone(),
            }),
        })
        .collect()
}
