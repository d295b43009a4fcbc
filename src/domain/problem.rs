// ============================================================
// Layer 3 — ProblemConfig Domain Type
// ============================================================
// One registered translation problem: a name, a vocabulary-size
// target, and the two dataset tables (train and eval).
//
// A "dataset table" is an ordered list of DatasetFileSpec —
// the external data-generation pipeline concatenates the file
// contents across the list in order, so order matters and is
// part of the contract.
//
// ProblemConfig is a plain immutable value:
//   - built once at startup by the catalog
//   - handed to the registry
//   - never mutated afterwards
//
// The original framework exposed approx_vocab_size as a
// property method; here it is a plain field — there is nothing
// to compute.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

use crate::domain::file_spec::DatasetFileSpec;
use crate::domain::split::DatasetSplit;

/// An immutable translation problem configuration.
///
/// `source_data_files` is a total, pure function over the two
/// split values — no error conditions, no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Registry key, snake_case (e.g. "envi_iwslt32k")
    pub name: String,

    /// Target subword-vocabulary cardinality handed to the
    /// external tokenizer-training step (32768 for every
    /// problem declared in this crate)
    pub approx_vocab_size: usize,

    /// Corpus sources concatenated for the TRAIN split
    pub train_table: Vec<DatasetFileSpec>,

    /// Corpus sources concatenated for the EVAL split
    pub eval_table: Vec<DatasetFileSpec>,
}

impl ProblemConfig {
    pub fn new(
        name: impl Into<String>,
        approx_vocab_size: usize,
        train_table: Vec<DatasetFileSpec>,
        eval_table: Vec<DatasetFileSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            approx_vocab_size,
            train_table,
            eval_table,
        }
    }

    /// Select the dataset table for a split.
    ///
    /// Pure and idempotent: the same split always yields the
    /// same (deep-equal) table, borrowed from this config.
    pub fn source_data_files(&self, split: DatasetSplit) -> &[DatasetFileSpec] {
        match split {
            DatasetSplit::Train => &self.train_table,
            DatasetSplit::Eval  => &self.eval_table,
        }
    }

    /// Conventional vocabulary filename for this problem,
    /// e.g. "vocab.envi_iwslt32k.32768.subwords".
    ///
    /// The tokenizer-training step writes its subword vocabulary
    /// under this name so later runs can find it again.
    pub fn vocab_filename(&self) -> String {
        format!("vocab.{}.{}.subwords", self.name, self.approx_vocab_size)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> ProblemConfig {
        ProblemConfig::new(
            "envi_iwslt32k",
            32_768,
            vec![DatasetFileSpec::local("train.en", "train.vi")],
            vec![DatasetFileSpec::remote(
                "https://example.com/dev.tgz",
                "tst2012.en",
                "tst2012.vi",
            )],
        )
    }

    #[test]
    fn test_split_selects_the_right_table() {
        let cfg = sample_config();
        assert_eq!(cfg.source_data_files(DatasetSplit::Train), &cfg.train_table[..]);
        assert_eq!(cfg.source_data_files(DatasetSplit::Eval),  &cfg.eval_table[..]);
        assert_ne!(
            cfg.source_data_files(DatasetSplit::Train),
            cfg.source_data_files(DatasetSplit::Eval),
        );
    }

    #[test]
    fn test_source_data_files_is_idempotent() {
        let cfg = sample_config();
        let first  = cfg.source_data_files(DatasetSplit::Train).to_vec();
        let second = cfg.source_data_files(DatasetSplit::Train).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_vocab_filename_convention() {
        let cfg = sample_config();
        assert_eq!(cfg.vocab_filename(), "vocab.envi_iwslt32k.32768.subwords");
    }
}
