//! Per-document mapping pipeline
//!
//! Each document goes through load, decode, classify, encode and write in
//! that order. A failure at any stage skips only that document; the batch
//! always runs to the end of the input list.

use log::{debug, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::algorithm::mapper::{MappingStats, map_grid};
use crate::algorithm::resolver::RoleTable;
use crate::io::configuration::CELL_DELIMITER;
use crate::io::document::TmxDocument;
use crate::io::error::{MapperError, Result, WithPath};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::TileGrid;

/// Last stage a document completed before it finished or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DocumentStage {
    /// Nothing succeeded yet (reading the file)
    Pending,
    /// Document read and its layout extracted
    Loaded,
    /// Cell text parsed into a grid
    Decoded,
    /// Every occupied cell classified and substituted
    Classified,
    /// Grid serialized back to cell text
    Encoded,
    /// Output document persisted
    Written,
}

impl fmt::Display for DocumentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Loaded => "loaded",
            Self::Decoded => "decoded",
            Self::Classified => "classified",
            Self::Encoded => "encoded",
            Self::Written => "written",
        };
        f.write_str(label)
    }
}

/// A document that could not be mapped
#[derive(Debug)]
pub struct SkippedDocument {
    /// Document identifier as supplied to [`process`]
    pub path: PathBuf,
    /// Last stage completed before the failure
    pub stage: DocumentStage,
    /// Cause of the failure
    pub error: MapperError,
}

impl fmt::Display for SkippedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} after stage '{}'): {}",
            self.path.display(),
            self.error.kind(),
            self.stage,
            self.error
        )
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct ProcessSummary {
    /// Output paths of successfully mapped documents, in input order
    pub written: Vec<PathBuf>,
    /// Documents that were skipped, in input order
    pub skipped: Vec<SkippedDocument>,
    /// Classification counters over all written documents
    pub stats: MappingStats,
}

impl ProcessSummary {
    /// Number of documents written
    pub fn processed_count(&self) -> usize {
        self.written.len()
    }

    /// Number of documents skipped
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Output location for `document` inside `output_dir`
pub fn output_path(document: &Path, output_dir: &Path) -> PathBuf {
    document
        .file_name()
        .map_or_else(|| output_dir.join(document), |name| output_dir.join(name))
}

/// Map every document in `documents`, reading from `source_dir` and
/// writing to `output_dir`
pub fn process(
    documents: &[PathBuf],
    source_dir: &Path,
    output_dir: &Path,
    table: &RoleTable,
) -> ProcessSummary {
    process_with_progress(documents, source_dir, output_dir, table, None)
}

/// [`process`] with an optional progress display
pub fn process_with_progress(
    documents: &[PathBuf],
    source_dir: &Path,
    output_dir: &Path,
    table: &RoleTable,
    mut progress: Option<&mut ProgressManager>,
) -> ProcessSummary {
    let mut summary = ProcessSummary::default();

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(documents.len());
    }

    for document in documents {
        if let Some(pm) = progress.as_deref() {
            pm.start_document(document);
        }

        let source = source_dir.join(document);
        let target = output_path(document, output_dir);
        let mut stage = DocumentStage::Pending;

        match map_document(&source, &target, table, &mut stage) {
            Ok(stats) => {
                debug!(
                    "{}: {} occupied, {} substituted, {} unclassified",
                    document.display(),
                    stats.occupied,
                    stats.substituted,
                    stats.unclassified
                );
                summary.stats.merge(&stats);
                summary.written.push(target);
                if let Some(pm) = progress.as_deref() {
                    pm.complete_document();
                }
            }
            Err(error) => {
                let skipped = SkippedDocument {
                    path: document.clone(),
                    stage,
                    error,
                };
                if let Some(pm) = progress.as_deref_mut() {
                    pm.skip_document(document, &skipped.error.to_string());
                } else {
                    warn!("Skipping {skipped}");
                }
                summary.skipped.push(skipped);
            }
        }
    }

    if let Some(pm) = progress.as_deref() {
        pm.finish();
    }

    info!(
        "Mapped {} document(s), skipped {}",
        summary.processed_count(),
        summary.skipped_count()
    );
    summary
}

fn map_document(
    source: &Path,
    target: &Path,
    table: &RoleTable,
    stage: &mut DocumentStage,
) -> Result<MappingStats> {
    let document = TmxDocument::load(source)?;
    *stage = DocumentStage::Loaded;

    let mut grid = TileGrid::decode(
        document.cell_text(),
        CELL_DELIMITER,
        document.width(),
        document.height(),
    )
    .with_path(source)?;
    *stage = DocumentStage::Decoded;

    let stats = map_grid(&mut grid, table);
    *stage = DocumentStage::Classified;

    let cell_text = grid.encode(CELL_DELIMITER);
    *stage = DocumentStage::Encoded;

    document.write(target, &cell_text)?;
    *stage = DocumentStage::Written;

    Ok(stats)
}
