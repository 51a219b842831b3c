//! Mapping constants and runtime configuration defaults

// Document layout
/// Separator between cell identifiers in layer data
pub const CELL_DELIMITER: char = ',';
/// Extension of tile-map documents
pub const DOCUMENT_EXTENSION: &str = "tmx";
/// Only this layer data encoding carries plain cell text
pub const CSV_ENCODING: &str = "csv";

// Lookup table settings
/// File name of the lookup table inside the source directory
pub const CONFIG_FILE_NAME: &str = "config.json";
/// JSON object holding the per-role identifiers
pub const GID_MAPPER_KEY: &str = "tmx_gid_mapper";
/// JSON entry used when a classified role has no identifier of its own
pub const GID_DEFAULT_KEY: &str = "tmx_gid_default";

// Default values for configurable parameters
/// Directory mapped documents are written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Directory documents are read from
pub const DEFAULT_SOURCE_DIR: &str = ".";

// Safety limits to prevent runaway allocation and probing
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Highest sequence number probed when discovering documents by prefix
pub const MAX_SEQUENCE_PROBE: usize = 100_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
