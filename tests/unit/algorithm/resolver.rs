//! Tests for the role lookup table and its degrade-to-empty loading

#[cfg(test)]
mod tests {
    use gidmap::MapperError;
    use gidmap::algorithm::classifier::ShapeRole;
    use gidmap::algorithm::resolver::{RoleTable, resolve};
    use std::path::Path;

    const TABLE_JSON: &str = r#"{
        "tmx_gid_mapper": {
            "gid_cross": 12,
            "gid_horizontal": 3,
            "gid_vertical": 4,
            "gid_diagonal": 99
        }
    }"#;

    // Tests parsing of the nested mapper object
    // Verified by reading role keys from the top level
    #[test]
    fn test_from_json_reads_mapper_entries() {
        let table = RoleTable::from_json_str(Path::new("config.json"), TABLE_JSON)
            .expect("valid table");

        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve(ShapeRole::Cross), Some(12));
        assert_eq!(table.resolve(ShapeRole::HorizontalStraight), Some(3));
        assert_eq!(resolve(ShapeRole::VerticalStraight, &table), Some(4));
        assert_eq!(table.resolve(ShapeRole::EndFacingUp), None);
        assert_eq!(table.default_id(), None);
    }

    // Tests the optional default entry for roles without their own id
    // Verified by ignoring tmx_gid_default
    #[test]
    fn test_default_id_fills_missing_roles() {
        let json = r#"{ "tmx_gid_mapper": { "gid_cross": 12 }, "tmx_gid_default": 1 }"#;
        let table = RoleTable::from_json_str(Path::new("config.json"), json).expect("valid table");

        assert_eq!(table.resolve(ShapeRole::Cross), Some(12));
        assert_eq!(table.resolve(ShapeRole::EndFacingLeft), Some(1));
        assert_eq!(table.len(), 1);
    }

    // Tests that an empty table never substitutes
    // Verified by returning 0 for missing roles
    #[test]
    fn test_empty_table_resolves_nothing() {
        let table = RoleTable::empty();

        assert!(table.is_empty());
        assert!(ShapeRole::ALL.iter().all(|&role| table.resolve(role).is_none()));
    }

    // Tests that malformed JSON is a lookup table error
    // Verified by defaulting to an empty table inside from_json_str
    #[test]
    fn test_corrupt_json_is_lookup_table_error() {
        let result = RoleTable::from_json_str(Path::new("config.json"), "{ not json");
        assert!(matches!(result, Err(MapperError::LookupTable { .. })));

        let wrong_type = r#"{ "tmx_gid_mapper": { "gid_cross": "twelve" } }"#;
        let result = RoleTable::from_json_str(Path::new("config.json"), wrong_type);
        assert!(matches!(result, Err(MapperError::LookupTable { .. })));
    }

    // Tests loading from disk and graceful degradation
    // Verified by propagating the error from load_or_empty
    #[test]
    fn test_load_and_load_or_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, TABLE_JSON).expect("write table");

        let loaded = RoleTable::load(&path).expect("table loads");
        assert_eq!(loaded.resolve(ShapeRole::Cross), Some(12));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            RoleTable::load(&missing),
            Err(MapperError::LookupTable { .. })
        ));
        assert!(RoleTable::load_or_empty(&missing).is_empty());

        std::fs::write(&path, "[1, 2, 3]").expect("write table");
        assert!(RoleTable::load_or_empty(&path).is_empty());
    }

    // Tests building a table from explicit entries
    // Verified by dropping the default id in from_entries
    #[test]
    fn test_from_entries() {
        let table = RoleTable::from_entries([(ShapeRole::CornerUpLeft, 8)], Some(2));

        assert_eq!(table.resolve(ShapeRole::CornerUpLeft), Some(8));
        assert_eq!(table.resolve(ShapeRole::CornerUpRight), Some(2));
        assert!(!table.is_empty());
    }
}
