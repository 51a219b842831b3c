//! Grid-wide classification pass
//!
//! Visits every occupied cell in row-major order, classifies its
//! neighbourhood and writes the resolved tile identifier back into the grid
//! before moving on. Later cells therefore see earlier substitutions, which
//! only matters when a role resolves to the empty identifier `0`.

use log::trace;
use std::collections::BTreeMap;

use crate::algorithm::classifier::{ShapeRole, classify};
use crate::algorithm::resolver::RoleTable;
use crate::spatial::grid::TileGrid;
use crate::spatial::neighborhood::build_signature;

/// Counters gathered while mapping one or more grids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingStats {
    /// Cells holding a non-zero identifier
    pub occupied: usize,
    /// Cells whose identifier was replaced
    pub substituted: usize,
    /// Occupied cells without any cardinal neighbour
    pub unclassified: usize,
    /// Number of cells assigned to each role
    pub role_counts: BTreeMap<ShapeRole, usize>,
}

impl MappingStats {
    /// Cells classified as `role`
    pub fn count(&self, role: ShapeRole) -> usize {
        self.role_counts.get(&role).copied().unwrap_or(0)
    }

    /// Fold another set of counters into this one
    pub fn merge(&mut self, other: &Self) {
        self.occupied += other.occupied;
        self.substituted += other.substituted;
        self.unclassified += other.unclassified;
        for (role, count) in &other.role_counts {
            *self.role_counts.entry(*role).or_insert(0) += count;
        }
    }
}

/// Classify every occupied cell of `grid` and apply `table` substitutions
///
/// Empty cells are skipped, unclassified cells and roles the table cannot
/// resolve keep their original identifier.
pub fn map_grid(grid: &mut TileGrid, table: &RoleTable) -> MappingStats {
    let mut stats = MappingStats::default();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if !grid.is_occupied(row, col) {
                continue;
            }
            stats.occupied += 1;

            let signature = build_signature(grid, row, col);
            let Some(role) = classify(&signature) else {
                trace!("({row}, {col}) {signature:?} unclassified");
                stats.unclassified += 1;
                continue;
            };
            *stats.role_counts.entry(role).or_insert(0) += 1;

            let resolved = table.resolve(role);
            trace!("({row}, {col}) {signature:?} -> {role} -> {resolved:?}");
            if let Some(id) = resolved
                && grid.set(row, col, id)
            {
                stats.substituted += 1;
            }
        }
    }

    stats
}
