//! Tests for the grid-wide classification and substitution pass

#[cfg(test)]
mod tests {
    use gidmap::algorithm::classifier::ShapeRole;
    use gidmap::algorithm::mapper::{MappingStats, map_grid};
    use gidmap::algorithm::resolver::RoleTable;
    use gidmap::spatial::grid::TileGrid;

    /// One distinct id per role: 100 + priority
    fn numbered_table() -> RoleTable {
        RoleTable::from_entries(
            ShapeRole::ALL
                .into_iter()
                .map(|role| (role, 100 + role.priority() as u32)),
            None,
        )
    }

    fn id(role: ShapeRole) -> u32 {
        100 + role.priority() as u32
    }

    fn grid(rows: &[Vec<u32>]) -> TileGrid {
        TileGrid::from_rows(rows).expect("rectangular rows")
    }

    // Tests the full 3x3 scenario decoded from a flat sequence
    // Verified by classifying against the partially mapped grid
    #[test]
    fn test_full_square_centre_is_cross() {
        let mut full = TileGrid::decode("1,1,1,1,1,1,1,1,1", ',', 3, 3).expect("valid sequence");
        let stats = map_grid(&mut full, &numbered_table());

        assert_eq!(full.get(1, 1), Some(id(ShapeRole::Cross)));
        assert_eq!(full.get(0, 0), Some(id(ShapeRole::CornerUpRight)));
        assert_eq!(full.get(0, 1), Some(id(ShapeRole::HorizontalTUp)));
        assert_eq!(full.get(2, 2), Some(id(ShapeRole::CornerBottomLeft)));
        assert_eq!(stats.occupied, 9);
        assert_eq!(stats.substituted, 9);
        assert_eq!(stats.count(ShapeRole::Cross), 1);
    }

    // Tests a T-junction with north, west and south neighbours
    // Verified by swapping the vertical T rules
    #[test]
    fn test_vertical_t_left_scenario() {
        let mut maze = grid(&[vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]);
        map_grid(&mut maze, &numbered_table());

        assert_eq!(maze.get(1, 1), Some(id(ShapeRole::VerticalTLeft)));
        assert_eq!(maze.get(1, 0), Some(id(ShapeRole::EndFacingLeft)));
        assert_eq!(maze.get(0, 1), Some(id(ShapeRole::EndFacingDown)));
        assert_eq!(maze.get(2, 1), Some(id(ShapeRole::EndFacingUp)));
    }

    // Tests that diagonal neighbours do not form junctions
    // Verified by counting diagonals as west/east
    #[test]
    fn test_diagonals_do_not_join_segments() {
        let mut maze = grid(&[vec![1, 1, 1], vec![0, 1, 0], vec![0, 1, 0]]);
        map_grid(&mut maze, &numbered_table());

        assert_eq!(maze.get(1, 1), Some(id(ShapeRole::VerticalStraight)));
        assert_eq!(maze.get(0, 1), Some(id(ShapeRole::HorizontalTUp)));
    }

    // Tests an isolated cell keeps its identifier
    // Verified by resolving unclassified cells through the default id
    #[test]
    fn test_isolated_cell_is_unchanged() {
        let mut maze = grid(&[vec![0, 0, 0], vec![0, 7, 0], vec![0, 0, 0]]);
        let table = RoleTable::from_entries([(ShapeRole::Cross, 5)], Some(1));
        let stats = map_grid(&mut maze, &table);

        assert_eq!(maze.get(1, 1), Some(7));
        assert_eq!(stats.unclassified, 1);
        assert_eq!(stats.substituted, 0);
    }

    // Tests that an empty table leaves the grid untouched
    // Verified by writing 0 for unresolved roles
    #[test]
    fn test_empty_table_leaves_grid_unchanged() {
        let original = grid(&[vec![1, 1, 0, 1], vec![0, 1, 1, 1], vec![1, 0, 0, 1]]);
        let mut mapped = original.clone();
        let stats = map_grid(&mut mapped, &RoleTable::empty());

        assert_eq!(mapped, original);
        assert_eq!(stats.substituted, 0);
        assert_eq!(stats.occupied, original.occupied_count());
    }

    // Tests that earlier substitutions are visible to later cells
    // Verified by applying substitutions only after the scan
    #[test]
    fn test_substitutions_apply_in_row_major_order() {
        let mut line = grid(&[vec![1, 1, 1]]);
        let table = RoleTable::from_entries(
            [(ShapeRole::EndFacingLeft, 0), (ShapeRole::EndFacingRight, 9)],
            None,
        );
        let stats = map_grid(&mut line, &table);

        // Each emptied cell removes the western neighbour of the next one
        assert_eq!(
            (line.get(0, 0), line.get(0, 1), line.get(0, 2)),
            (Some(0), Some(0), Some(1))
        );
        assert_eq!(stats.count(ShapeRole::EndFacingLeft), 2);
        assert_eq!(stats.unclassified, 1);
        assert_eq!(stats.substituted, 2);
    }

    // Tests merging of counters across documents
    // Verified by overwriting role counts instead of adding
    #[test]
    fn test_stats_merge() {
        let mut first = grid(&[vec![1, 1]]);
        let mut second = grid(&[vec![1, 1, 1]]);
        let table = numbered_table();

        let mut total = MappingStats::default();
        total.merge(&map_grid(&mut first, &table));
        total.merge(&map_grid(&mut second, &table));

        assert_eq!(total.occupied, 5);
        assert_eq!(total.substituted, 5);
        assert_eq!(total.count(ShapeRole::EndFacingLeft), 2);
        assert_eq!(total.count(ShapeRole::EndFacingRight), 2);
        assert_eq!(total.count(ShapeRole::HorizontalStraight), 1);
    }
}
