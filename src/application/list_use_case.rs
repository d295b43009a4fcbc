// ============================================================
// Layer 2 — ListUseCase
// ============================================================
// Produces one summary row per registered problem:
//
//   Step 1: Build the registry     (Layer 5 - infra)
//   Step 2: Walk it in name order  (Layer 5 - infra)
//   Step 3: Summarise each config  (this layer)
//
// The CLI layer turns the rows into printed output;
// this layer never prints.

use anyhow::Result;

use crate::catalog::envi::EnviCatalog;
use crate::infra::registry::ProblemRegistry;

/// One row of the `list` output, in plain domain terms.
#[derive(Debug, Clone)]
pub struct ProblemSummary {
    pub name: String,
    pub approx_vocab_size: usize,
    pub train_sources: usize,
    pub eval_sources: usize,
}

/// Lists every problem the built-in catalog registers.
pub struct ListUseCase;

impl ListUseCase {
    pub fn execute() -> Result<Vec<ProblemSummary>> {
        let registry = ProblemRegistry::from_catalog(&EnviCatalog)?;

        tracing::info!("Listing {} registered problems", registry.len());

        let summaries = registry
            .iter()
            .map(|cfg| ProblemSummary {
                name:              cfg.name.clone(),
                approx_vocab_size: cfg.approx_vocab_size,
                train_sources:     cfg.train_table.len(),
                eval_sources:      cfg.eval_table.len(),
            })
            .collect();

        Ok(summaries)
    }
}
