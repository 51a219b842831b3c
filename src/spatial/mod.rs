//! Spatial data structures for tile layers
//!
//! This module contains spatial-related functionality including:
//! - Grid storage and the flat cell-sequence codec
//! - Compass directions and neighbourhood signatures

/// Grid storage and cell-sequence codec
pub mod grid;
/// Neighbourhood signature construction
pub mod neighborhood;

pub use grid::TileGrid;
