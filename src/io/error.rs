//! Error types and context management for mapping operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mapping operations
#[derive(Debug)]
pub enum MapperError {
    /// Role lookup table could not be read or parsed
    LookupTable {
        /// Path of the lookup table file
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// Cell sequence does not describe a valid grid
    ///
    /// Raised by the grid codec when:
    /// - A token is not a non-negative integer
    /// - The token count differs from `width * height`
    /// - A declared dimension is zero or too large
    Format {
        /// Description of the malformed input
        reason: String,
    },

    /// Tile-map document is malformed or uses an unsupported layout
    Document {
        /// Path of the offending document
        path: PathBuf,
        /// Description of the structural problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Run configuration rejected before any document was touched
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

/// User-visible error classes reported in run summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lookup table missing or corrupt
    LookupTable,
    /// Grid dimensions or cell data invalid
    Format,
    /// Reading or writing a file failed
    Io,
    /// Unusable command-line configuration
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::LookupTable => "lookup table error",
            Self::Format => "format error",
            Self::Io => "I/O error",
            Self::Configuration => "configuration error",
        };
        f.write_str(label)
    }
}

impl MapperError {
    /// Classify the error into one of the reported error kinds
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LookupTable { .. } => ErrorKind::LookupTable,
            Self::Format { .. } | Self::Document { .. } => ErrorKind::Format,
            Self::FileSystem { .. } => ErrorKind::Io,
            Self::InvalidParameter { .. } => ErrorKind::Configuration,
        }
    }
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookupTable { path, reason } => {
                write!(
                    f,
                    "Lookup table '{}' is unusable: {reason}",
                    path.display()
                )
            }
            Self::Format { reason } => write!(f, "Invalid cell data: {reason}"),
            Self::Document { path, reason } => {
                write!(f, "Invalid document '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MapperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mapping results
pub type Result<T> = std::result::Result<T, MapperError>;

/// Attaches a document path to errors raised by path-agnostic code
pub trait WithPath<T> {
    /// Add the document path to the error, if any
    ///
    /// Codec `Format` errors become `Document` errors for `path`; every
    /// other error already names its own path and passes through.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for Result<T> {
    fn with_path(self, path: &Path) -> Self {
        self.map_err(|e| match e {
            MapperError::Format { reason } => MapperError::Document {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }
}

/// Create a codec format error
pub fn format_error(reason: &impl ToString) -> MapperError {
    MapperError::Format {
        reason: reason.to_string(),
    }
}

/// Create a document structure error
pub fn document_error(path: &Path, reason: &impl ToString) -> MapperError {
    MapperError::Document {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on `path`
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> MapperError {
    MapperError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapperError {
    MapperError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
