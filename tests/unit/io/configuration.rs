//! Tests for mapping constants and runtime defaults

#[cfg(test)]
mod tests {
    use gidmap::algorithm::classifier::ShapeRole;
    use gidmap::io::configuration::{
        CELL_DELIMITER, CONFIG_FILE_NAME, DOCUMENT_EXTENSION, GID_DEFAULT_KEY, GID_MAPPER_KEY,
        MAX_GRID_DIMENSION, MAX_SEQUENCE_PROBE,
    };

    // Tests the document format constants used by Tiled
    // Verified by changing the delimiter to a semicolon
    #[test]
    fn test_document_format_constants() {
        assert_eq!(CELL_DELIMITER, ',');
        assert_eq!(DOCUMENT_EXTENSION, "tmx");
        assert_eq!(CONFIG_FILE_NAME, "config.json");
    }

    // Tests that the table keys cannot be mistaken for role keys
    // Verified by renaming the mapper key to a gid_ prefix
    #[test]
    fn test_table_keys_do_not_collide_with_roles() {
        assert!(ShapeRole::from_key(GID_MAPPER_KEY).is_none());
        assert!(ShapeRole::from_key(GID_DEFAULT_KEY).is_none());
    }

    // Tests safety limits are non-trivial
    // Verified by setting the limits to zero
    #[test]
    fn test_safety_limits() {
        const { assert!(MAX_GRID_DIMENSION >= 1024) };
        const { assert!(MAX_SEQUENCE_PROBE >= 1000) };
    }
}
