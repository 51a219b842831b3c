/// Command-line interface and document discovery
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Tiled TMX document access
pub mod document;
/// Error types and context helpers
pub mod error;
/// Per-document mapping pipeline
pub mod pipeline;
/// Batch progress display
pub mod progress;
