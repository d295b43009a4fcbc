// ============================================================
// Layer 2 — ShowUseCase
// ============================================================
// Resolves one problem by name and selects a split's table:
//
//   Step 1: Build the registry         (Layer 5 - infra)
//   Step 2: Look up the problem        (Layer 5 - infra)
//   Step 3: Select the split's table   (Layer 3 - domain)
//   Step 4: Optionally write manifest  (Layer 5 - infra)
//
// An unknown problem name is the one user-facing error in this
// crate — the message lists the names that DO exist so the fix
// is a copy-paste away.

use anyhow::{anyhow, Result};

use crate::catalog::envi::EnviCatalog;
use crate::domain::split::DatasetSplit;
use crate::infra::manifest::DatasetManifest;
use crate::infra::registry::ProblemRegistry;

/// Resolves a problem/split selection into a manifest value.
pub struct ShowUseCase {
    registry: ProblemRegistry,
}

impl ShowUseCase {
    /// Build the registry once; reuse it across calls.
    pub fn new() -> Result<Self> {
        let registry = ProblemRegistry::from_catalog(&EnviCatalog)?;
        Ok(Self { registry })
    }

    /// Resolve `name` and snapshot its `split` table.
    pub fn resolve(&self, name: &str, split: DatasetSplit) -> Result<DatasetManifest> {
        let config = self.registry.get(name).ok_or_else(|| {
            anyhow!(
                "Unknown problem '{}'. Registered problems: {}",
                name,
                self.registry.names().join(", "),
            )
        })?;

        tracing::info!(
            "Resolved '{}' ({} split): {} corpus source(s)",
            name,
            split,
            config.source_data_files(split).len(),
        );

        Ok(DatasetManifest::for_split(config, split))
    }

    /// Resolve and additionally write the manifest JSON to `out`.
    pub fn resolve_to_file(
        &self,
        name: &str,
        split: DatasetSplit,
        out: &str,
    ) -> Result<DatasetManifest> {
        let manifest = self.resolve(name, split)?;
        manifest.write(out)?;
        Ok(manifest)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_a_known_problem() {
        let use_case = ShowUseCase::new().unwrap();
        let manifest = use_case
            .resolve("opensubtitles_vien", DatasetSplit::Train)
            .unwrap();
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[1].filenames().0, "OpenSubtitles.vi.subset");
    }

    #[test]
    fn test_unknown_problem_is_a_helpful_error() {
        let use_case = ShowUseCase::new().unwrap();
        let err = use_case
            .resolve("enfr_wmt32k", DatasetSplit::Train)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("enfr_wmt32k"));
        // The error names the problems that do exist
        assert!(msg.contains("envi_iwslt32k"));
    }
}
