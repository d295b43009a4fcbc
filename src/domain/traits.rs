// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - EnviCatalog implements ProblemCatalog
//   - A future FileCatalog could read problem declarations
//     from a TOML file and also implement ProblemCatalog
//   - The registry only sees ProblemCatalog
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::problem::ProblemConfig;

// ─── ProblemCatalog ───────────────────────────────────────────────────────────
/// Any component that can produce a batch of problem
/// configurations for registration.
///
/// Implementations:
///   - EnviCatalog → the built-in En–Vi / Vi–En declarations
///   - (future) FileCatalog → declarations loaded from disk
pub trait ProblemCatalog {
    /// Build every problem this catalog declares, in a fixed,
    /// deterministic order. Infallible: catalogs hold static
    /// declarations, not I/O.
    fn problems(&self) -> Vec<ProblemConfig>;
}
