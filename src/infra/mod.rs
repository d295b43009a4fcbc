// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting concerns that don't belong in
// any specific business layer:
//
//   registry.rs — The problem registry
//                 A name → ProblemConfig map built explicitly
//                 at startup from a catalog. Duplicate names
//                 are a configuration error, caught here
//                 rather than silently overwritten.
//
//   manifest.rs — Dataset manifest export
//                 Writes one problem/split selection as a
//                 JSON file so the external corpus pipeline
//                 can be driven from disk.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap the JSON manifest for a YAML one)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Name → ProblemConfig lookup table
pub mod registry;

/// JSON manifest writer for dataset tables
pub mod manifest;
