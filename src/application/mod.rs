// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (listing problems or resolving one problem's
// dataset table).
//
// Rules for this layer:
//   - No dataset declarations here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Summarise every registered problem
pub mod list_use_case;

// Resolve one problem and select a split's dataset table
pub mod show_use_case;
