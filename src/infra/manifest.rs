// ============================================================
// Layer 5 — Dataset Manifest Writer
// ============================================================
// Writes the dataset table of one problem/split selection to a
// JSON file on disk.
//
// Why a manifest file?
//   The corpus-materialisation step (downloader + concatenator)
//   lives outside this crate. A manifest on disk lets it be
//   driven without linking against us — it just reads the JSON.
//
// Example manifest:
//   {
//     "problem": "envi_iwslt32k",
//     "split": "train",
//     "approx_vocab_size": 32768,
//     "vocab_filename": "vocab.envi_iwslt32k.32768.subwords",
//     "files": [
//       {
//         "location": "",
//         "source_filename": "train.en",
//         "target_filename": "train.vi"
//       }
//     ]
//   }
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::file_spec::DatasetFileSpec;
use crate::domain::problem::ProblemConfig;
use crate::domain::split::DatasetSplit;

/// One problem/split selection, flattened for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetManifest {
    /// Name of the problem the table came from
    pub problem: String,

    /// Which split the table belongs to ("train" or "eval")
    pub split: String,

    /// Vocabulary-size target for the tokenizer-training step
    pub approx_vocab_size: usize,

    /// Conventional filename of the subword vocabulary
    pub vocab_filename: String,

    /// The ordered corpus sources to concatenate
    pub files: Vec<DatasetFileSpec>,
}

impl DatasetManifest {
    /// Snapshot one split of a problem into a manifest value.
    pub fn for_split(config: &ProblemConfig, split: DatasetSplit) -> Self {
        Self {
            problem:           config.name.clone(),
            split:             split.as_str().to_string(),
            approx_vocab_size: config.approx_vocab_size,
            vocab_filename:    config.vocab_filename(),
            files:             config.source_data_files(split).to_vec(),
        }
    }

    /// Serialise to pretty-printed JSON and write to `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::info!(
            "Wrote manifest for '{}' ({} split) to '{}'",
            self.problem,
            self.split,
            path.display(),
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::envi::envi_iwslt32k;

    #[test]
    fn test_manifest_snapshots_the_selected_split() {
        let cfg = envi_iwslt32k();
        let manifest = DatasetManifest::for_split(&cfg, DatasetSplit::Eval);

        assert_eq!(manifest.problem, "envi_iwslt32k");
        assert_eq!(manifest.split, "eval");
        assert_eq!(manifest.approx_vocab_size, 32_768);
        assert_eq!(manifest.files.len(), 1);
        assert!(!manifest.files[0].is_local());
    }

    #[test]
    fn test_manifest_writes_readable_json_to_disk() {
        let cfg = envi_iwslt32k();
        let manifest = DatasetManifest::for_split(&cfg, DatasetSplit::Train);

        let path = std::env::temp_dir()
            .join(format!("envi_problems_manifest_{}.json", std::process::id()));
        manifest.write(&path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let back: DatasetManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, back);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_failure_names_the_manifest_path() {
        let cfg = envi_iwslt32k();
        let manifest = DatasetManifest::for_split(&cfg, DatasetSplit::Eval);

        // Parent directory does not exist, so the write must fail
        let err = manifest
            .write("/nonexistent-envi-problems-dir/manifest.json")
            .unwrap_err();
        assert!(err.to_string().contains("Cannot write manifest"));
        assert!(err.to_string().contains("manifest.json"));
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let cfg = envi_iwslt32k();
        let manifest = DatasetManifest::for_split(&cfg, DatasetSplit::Train);

        let json = serde_json::to_string(&manifest).unwrap();
        let back: DatasetManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, back);
    }
}
