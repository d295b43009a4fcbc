// ============================================================
// Layer 4 — En–Vi Problem Declarations
// ============================================================
// For English-Vietnamese the IWSLT'15 corpus
// from https://nlp.stanford.edu/projects/nmt/ is used.
// The original dataset has 133K parallel sentences; the
// training files are pre-staged locally (empty location).
//
// For development, 1,553 parallel sentences from the IWSLT
// tst2012 set are used. Every problem — including the vi→en
// directions — evaluates on this same dev table; the dev
// corpus is shared and scoring is direction-symmetric.
//
// Two additional problems append an in-domain OpenSubtitles
// subset after the IWSLT training data. Table order matters:
// the data pipeline concatenates sources in sequence, so the
// original corpus always comes first.
//
// Reference: Rust Book §8 (Collections)

use crate::domain::file_spec::DatasetFileSpec;
use crate::domain::problem::ProblemConfig;
use crate::domain::traits::ProblemCatalog;

/// Target subword-vocabulary size shared by every problem
/// declared here: 2^15 = 32768.
pub const APPROX_VOCAB_SIZE: usize = 1 << 15;

/// URL of the archive holding the IWSLT tst2012 dev files.
pub const DEV_2012_URL: &str =
    "https://github.com/stefan-it/nmt-en-vi/raw/master/data/dev-2012-en-vi.tgz";

// ─── Dataset tables ───────────────────────────────────────────────────────────

/// TRAIN table for en→vi: the pre-staged IWSLT'15 corpus.
fn iwslt15_train_envi() -> Vec<DatasetFileSpec> {
    vec![DatasetFileSpec::local("train.en", "train.vi")]
}

/// TRAIN table for vi→en: same files, swapped reading direction.
fn iwslt15_train_vien() -> Vec<DatasetFileSpec> {
    vec![DatasetFileSpec::local("train.vi", "train.en")]
}

/// TRAIN table for en→vi with the OpenSubtitles subset appended.
fn opensubtitles_train_envi() -> Vec<DatasetFileSpec> {
    vec![
        DatasetFileSpec::local("train.en", "train.vi"),
        DatasetFileSpec::local("OpenSubtitles.en.subset", "OpenSubtitles.vi.subset"),
    ]
}

/// TRAIN table for vi→en with the OpenSubtitles subset appended.
fn opensubtitles_train_vien() -> Vec<DatasetFileSpec> {
    vec![
        DatasetFileSpec::local("train.vi", "train.en"),
        DatasetFileSpec::local("OpenSubtitles.vi.subset", "OpenSubtitles.en.subset"),
    ]
}

/// EVAL table shared by every problem: the IWSLT tst2012 dev set.
fn iwslt15_dev() -> Vec<DatasetFileSpec> {
    vec![DatasetFileSpec::remote(DEV_2012_URL, "tst2012.en", "tst2012.vi")]
}

// ─── Problem builders ─────────────────────────────────────────────────────────

/// IWSLT'15 En→Vi translation, 32k subword vocabulary.
pub fn envi_iwslt32k() -> ProblemConfig {
    ProblemConfig::new(
        "envi_iwslt32k",
        APPROX_VOCAB_SIZE,
        iwslt15_train_envi(),
        iwslt15_dev(),
    )
}

/// IWSLT'15 Vi→En translation, 32k subword vocabulary.
pub fn vien_iwslt32k() -> ProblemConfig {
    ProblemConfig::new(
        "vien_iwslt32k",
        APPROX_VOCAB_SIZE,
        iwslt15_train_vien(),
        iwslt15_dev(),
    )
}

/// En→Vi translation with the OpenSubtitles in-domain subset.
pub fn opensubtitles_envi() -> ProblemConfig {
    ProblemConfig::new(
        "opensubtitles_envi",
        APPROX_VOCAB_SIZE,
        opensubtitles_train_envi(),
        iwslt15_dev(),
    )
}

/// Vi→En translation with the OpenSubtitles in-domain subset.
pub fn opensubtitles_vien() -> ProblemConfig {
    ProblemConfig::new(
        "opensubtitles_vien",
        APPROX_VOCAB_SIZE,
        opensubtitles_train_vien(),
        iwslt15_dev(),
    )
}

// ─── EnviCatalog ──────────────────────────────────────────────────────────────

/// The built-in catalog of En–Vi translation problems.
/// Implements the ProblemCatalog trait from Layer 3 so the
/// registry can consume it without knowing about IWSLT at all.
pub struct EnviCatalog;

impl ProblemCatalog for EnviCatalog {
    fn problems(&self) -> Vec<ProblemConfig> {
        vec![
            envi_iwslt32k(),
            vien_iwslt32k(),
            opensubtitles_envi(),
            opensubtitles_vien(),
        ]
    }
}
