//! Neighbour-aware tile variant mapping for Tiled maze layouts
//!
//! Occupied cells of a tile layer are classified by which of their eight
//! neighbours are occupied (cross, T-junction, corner, straight, dead end)
//! and replaced with the tile identifier configured for that shape.

#![forbid(unsafe_code)]

/// Shape classification, role lookup and the grid mapping pass
pub mod algorithm;
/// Documents, command line, configuration, errors and the batch pipeline
pub mod io;
/// Tile grids and neighbourhood signatures
pub mod spatial;

pub use io::error::{MapperError, Result};
