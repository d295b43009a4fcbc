// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs,
// enums and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO clap types allowed here
//   - NO file I/O or network calls
//   - NO knowledge of how corpora are downloaded or tokenised
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no downloads needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One (location, filename-pair) corpus source descriptor
pub mod file_spec;

// The train/eval split selector enumeration
pub mod split;

// A named, immutable translation problem configuration
pub mod problem;

// Core abstractions (traits) that other layers implement
pub mod traits;
