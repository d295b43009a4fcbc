// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `list` and `show`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → enum, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use crate::domain::split::DatasetSplit;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every registered translation problem
    List(ListArgs),

    /// Show one problem's dataset table for a split
    Show(ShowArgs),
}

/// Arguments for the `list` command (none yet — kept as a
/// struct so flags can be added without touching the enum).
#[derive(Args, Debug)]
pub struct ListArgs {}

/// All arguments for the `show` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Registered name of the problem (e.g. envi_iwslt32k)
    #[arg(long)]
    pub problem: String,

    /// Which dataset table to show
    #[arg(long, value_enum, default_value = "train")]
    pub split: SplitArg,

    /// Optional path to write the table as a JSON manifest
    #[arg(long)]
    pub out: Option<String>,
}

/// CLI-facing split selector. clap's ValueEnum derive handles
/// parsing "train" / "eval" from the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SplitArg {
    Train,
    Eval,
}

/// Convert the CLI SplitArg into the domain DatasetSplit.
/// This is the boundary between Layer 1 and Layer 3 —
/// the domain layer never sees clap types.
impl From<SplitArg> for DatasetSplit {
    fn from(s: SplitArg) -> Self {
        match s {
            SplitArg::Train => DatasetSplit::Train,
            SplitArg::Eval  => DatasetSplit::Eval,
        }
    }
}
