//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use gidmap::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a full document lifecycle without panicking
    // Verified by unwrapping the bar before initialize
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.start_document(Path::new("maze1.tmx"));
        pm.complete_document();

        pm.initialize(2);
        pm.start_document(Path::new("maze1.tmx"));
        pm.complete_document();
        pm.start_document(Path::new("maze2.tmx"));
        pm.skip_document(Path::new("maze2.tmx"), "bad data");
        pm.finish();

        assert_eq!(pm.skipped(), 1);
    }

    // Tests skip counting resets on initialize
    // Verified by removing the reset in initialize
    #[test]
    fn test_initialize_resets_skips() {
        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.skip_document(Path::new("maze1.tmx"), "missing");
        assert_eq!(pm.skipped(), 1);

        pm.initialize(1);
        assert_eq!(pm.skipped(), 0);
    }
}
