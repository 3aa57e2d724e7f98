//! Library text lookup.

use rustc_hash::FxHashMap;

/// Resolves an imported library name to its program text.
///
/// How names map to text (files, bundled sources, a package index) is up to
/// the implementation; the loader only asks by name.
pub trait LibrarySource {
    fn library(&self, name: &str) -> Option<&str>;
}

/// Libraries held in memory, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemoryLibraries {
    libraries: FxHashMap<String, String>,
}

impl MemoryLibraries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a library.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.libraries.insert(name.into(), text.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl LibrarySource for MemoryLibraries {
    fn library(&self, name: &str) -> Option<&str> {
        self.libraries.get(name).map(String::as_str)
    }
}
