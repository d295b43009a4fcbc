// ============================================================
// Layer 3 — DatasetSplit Domain Type
// ============================================================
// The split selector: was a dataset table requested for
// TRAINING or for EVALUATION?
//
// The training framework that consumes this crate only ever
// passes these two values, so the enum is deliberately closed —
// no "Test" or "Predict" variants until a consumer needs them.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which dataset table of a problem to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSplit {
    /// Corpora used to update model weights
    Train,

    /// Held-out corpora used to score the model (dev set)
    Eval,
}

impl DatasetSplit {
    /// Stable lowercase name, used in logs and manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Eval  => "eval",
        }
    }
}

impl fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_names() {
        assert_eq!(DatasetSplit::Train.as_str(), "train");
        assert_eq!(DatasetSplit::Eval.as_str(), "eval");
        assert_eq!(DatasetSplit::Eval.to_string(), "eval");
    }
}
