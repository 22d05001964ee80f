use std::slice::Iter;

/// One `require` line of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub path: String,
    pub version: String,
    pub indirect: bool,
}

impl Dependency {
    pub fn new(path: impl Into<String>, version: impl Into<String>, indirect: bool) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            indirect,
        }
    }
}

/// Dependency list captured at one point in time. Not mutable after capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySnapshot {
    dependencies: Vec<Dependency>,
}

impl DependencySnapshot {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    pub fn iter(&self) -> Iter<'_, Dependency> {
        self.dependencies.iter()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<Dependency> for DependencySnapshot {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DependencySnapshot {
    type Item = &'a Dependency;
    type IntoIter = Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
