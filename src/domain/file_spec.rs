// ============================================================
// Layer 3 — DatasetFileSpec Domain Type
// ============================================================
// Represents a single corpus source: WHERE to get an archive
// (or that it is already staged locally) and WHICH two files
// inside it hold the parallel text.
//
// The location field has exactly two meanings:
//   - a URL          → the external downloader fetches it
//   - an empty string → the files are pre-staged on disk
//
// The filename pair is ordered: source language first, target
// language second. For a vi→en problem the pair is simply
// swapped relative to the en→vi problem — same files on disk,
// different reading direction.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// One corpus source: a location plus an ordered pair of
/// parallel-text filenames (source language, target language).
///
/// The location is resolved by an external corpus-materialisation
/// component; this type never touches the network or disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFileSpec {
    /// URL of the archive holding the files, or "" when the
    /// files are already staged locally by the operator
    pub location: String,

    /// Filename of the source-language side (e.g. "train.en")
    pub source_filename: String,

    /// Filename of the target-language side (e.g. "train.vi")
    pub target_filename: String,
}

impl DatasetFileSpec {
    /// A corpus source that must be downloaded from `location`.
    pub fn remote(
        location: impl Into<String>,
        source_filename: impl Into<String>,
        target_filename: impl Into<String>,
    ) -> Self {
        Self {
            location:        location.into(),
            source_filename: source_filename.into(),
            target_filename: target_filename.into(),
        }
    }

    /// A corpus source that is already staged locally —
    /// encoded as an empty location string.
    pub fn local(
        source_filename: impl Into<String>,
        target_filename: impl Into<String>,
    ) -> Self {
        Self {
            location:        String::new(),
            source_filename: source_filename.into(),
            target_filename: target_filename.into(),
        }
    }

    /// True when the files are pre-staged rather than downloaded.
    /// An empty location is the agreed "local" marker.
    pub fn is_local(&self) -> bool {
        self.location.is_empty()
    }

    /// The ordered (source, target) filename pair.
    pub fn filenames(&self) -> (&str, &str) {
        (&self.source_filename, &self.target_filename)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_spec_has_empty_location() {
        let spec = DatasetFileSpec::local("train.en", "train.vi");
        assert!(spec.is_local());
        assert_eq!(spec.location, "");
        assert_eq!(spec.filenames(), ("train.en", "train.vi"));
    }

    #[test]
    fn test_remote_spec_is_not_local() {
        let spec = DatasetFileSpec::remote(
            "https://example.com/dev.tgz",
            "tst2012.en",
            "tst2012.vi",
        );
        assert!(!spec.is_local());
        assert_eq!(spec.location, "https://example.com/dev.tgz");
    }

    #[test]
    fn test_specs_compare_by_value() {
        let a = DatasetFileSpec::local("train.en", "train.vi");
        let b = DatasetFileSpec::local("train.en", "train.vi");
        let c = DatasetFileSpec::local("train.vi", "train.en");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
