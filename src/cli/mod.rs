// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `list` — print every registered translation problem
//   2. `show` — print one problem's dataset table for a split
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ListArgs, ShowArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "envi-problems",
    version = "0.1.0",
    about = "Dataset configuration registry for En-Vi translation problems."
)]
pub struct Cli {
    /// The subcommand to run (list or show)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// Matching on a reference keeps `self` whole while the
    /// handlers borrow it.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::List(args) => self.run_list(args),
            Commands::Show(args) => self.run_show(args),
        }
    }

    /// Handles the `list` subcommand.
    fn run_list(&self, _args: &ListArgs) -> Result<()> {
        use crate::application::list_use_case::ListUseCase;

        let rows = ListUseCase::execute()?;

        println!("{:<22} {:>10} {:>14} {:>13}", "problem", "vocab", "train sources", "eval sources");
        for row in rows {
            println!(
                "{:<22} {:>10} {:>14} {:>13}",
                row.name, row.approx_vocab_size, row.train_sources, row.eval_sources,
            );
        }
        Ok(())
    }

    /// Handles the `show` subcommand.
    /// Resolves the problem, prints its table, and optionally
    /// writes the JSON manifest for the external data pipeline.
    fn run_show(&self, args: &ShowArgs) -> Result<()> {
        use crate::application::show_use_case::ShowUseCase;

        let use_case = ShowUseCase::new()?;

        // Convert CLI args → domain split (separates presentation from domain)
        let split = args.split.into();

        let manifest = match &args.out {
            Some(path) => use_case.resolve_to_file(&args.problem, split, path)?,
            None       => use_case.resolve(&args.problem, split)?,
        };

        println!("problem: {} ({} split)", manifest.problem, manifest.split);
        println!("vocab:   {} → {}", manifest.approx_vocab_size, manifest.vocab_filename);
        for spec in &manifest.files {
            let location = if spec.is_local() { "<local>" } else { spec.location.as_str() };
            println!("  {} / {}  [{}]", spec.source_filename, spec.target_filename, location);
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_dispatches_the_list_subcommand() {
        let cli = Cli::parse_from(["envi-problems", "list"]);
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_run_dispatches_the_show_subcommand() {
        let cli = Cli::parse_from([
            "envi-problems",
            "show",
            "--problem",
            "envi_iwslt32k",
            "--split",
            "eval",
        ]);
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_show_surfaces_unknown_problem_errors() {
        let cli = Cli::parse_from(["envi-problems", "show", "--problem", "enfr_wmt32k"]);
        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("enfr_wmt32k"));
    }
}
