// ============================================================
// Layer 4 — Problem Catalog
// ============================================================
// This layer holds the actual dataset declarations — the WHAT
// of the system. Everything flows from here:
//
//   static tables (envi.rs)
//       │
//       ▼
//   ProblemConfig values   → built once per process
//       │
//       ▼
//   ProblemRegistry        → lookup by name (Layer 5 - infra)
//       │
//       ▼
//   external data pipeline → downloads, tokenises, trains
//
// The catalog is pure data: no I/O, no network, no mutation.
// Adding a new corpus means adding one table and one builder
// function in envi.rs — nothing else changes.
//
// Reference: Rust Book §7 (Modules)

/// The IWSLT'15 / OpenSubtitles En–Vi problem declarations
pub mod envi;
