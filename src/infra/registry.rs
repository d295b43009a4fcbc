// ============================================================
// Layer 5 — Problem Registry
// ============================================================
// Maps problem names to their ProblemConfig values.
//
// The original framework registered problems through a global
// table mutated at import time. Here registration is explicit:
// the registry is built once in the application layer from a
// ProblemCatalog and then passed to whoever needs lookups.
//
// Why explicit construction instead of a global?
//   - No hidden load-order dependencies
//   - Duplicate names fail loudly at one call site
//   - Tests can build small registries in isolation
//
// A BTreeMap keeps `names()` sorted without extra work.
//
// Reference: Rust Book §8 (Collections — HashMap/BTreeMap)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Result};
use std::collections::BTreeMap;

use crate::domain::problem::ProblemConfig;
use crate::domain::traits::ProblemCatalog;

/// The process-wide lookup table of translation problems.
/// Built once at startup; read-only afterwards.
pub struct ProblemRegistry {
    /// name → config, sorted by name
    problems: BTreeMap<String, ProblemConfig>,
}

impl ProblemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { problems: BTreeMap::new() }
    }

    /// Build a registry holding every problem a catalog declares.
    ///
    /// This is the one place where registration happens —
    /// call it from the application layer and pass the result on.
    pub fn from_catalog(catalog: &dyn ProblemCatalog) -> Result<Self> {
        let mut registry = Self::new();
        for config in catalog.problems() {
            registry.register(config)?;
        }
        tracing::debug!("Registered {} problems", registry.len());
        Ok(registry)
    }

    /// Insert one problem under its name.
    ///
    /// Registering the same name twice is a configuration error —
    /// two declarations would silently shadow each other otherwise.
    pub fn register(&mut self, config: ProblemConfig) -> Result<()> {
        let name = config.name.clone();
        if self.problems.contains_key(&name) {
            bail!("Problem '{name}' is already registered — problem names must be unique");
        }
        tracing::debug!("Registering problem '{}'", name);
        self.problems.insert(name, config);
        Ok(())
    }

    /// Look up a problem by name.
    pub fn get(&self, name: &str) -> Option<&ProblemConfig> {
        self.problems.get(name)
    }

    /// All registered names, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        self.problems.keys().map(String::as_str).collect()
    }

    /// Iterate over the registered configs in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ProblemConfig> {
        self.problems.values()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl Default for ProblemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::envi::EnviCatalog;

    #[test]
    fn test_all_builtin_problems_resolve_by_name() {
        let registry = ProblemRegistry::from_catalog(&EnviCatalog).unwrap();
        for name in [
            "envi_iwslt32k",
            "vien_iwslt32k",
            "opensubtitles_envi",
            "opensubtitles_vien",
        ] {
            let cfg = registry.get(name);
            assert!(cfg.is_some(), "'{name}' not registered");
            assert_eq!(cfg.unwrap().name, name);
        }
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_unknown_name_returns_none() {
        let registry = ProblemRegistry::from_catalog(&EnviCatalog).unwrap();
        assert!(registry.get("envi_wmt32k").is_none());
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let mut registry = ProblemRegistry::new();
        registry.register(crate::catalog::envi::envi_iwslt32k()).unwrap();

        let err = registry
            .register(crate::catalog::envi::envi_iwslt32k())
            .unwrap_err();
        assert!(err.to_string().contains("envi_iwslt32k"));
        // The first registration survives untouched
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let registry = ProblemRegistry::from_catalog(&EnviCatalog).unwrap();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
