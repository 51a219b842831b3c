//! Command-line interface for batch mapping of Tiled maze documents

use crate::algorithm::resolver::RoleTable;
use crate::io::configuration::{
    CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR, DOCUMENT_EXTENSION,
    MAX_SEQUENCE_PROBE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::pipeline::{ProcessSummary, process_with_progress};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::{LevelFilter, info};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gidmap")]
#[command(
    author,
    version,
    about = "Map maze tiles to neighbour-aware tile variants in Tiled maps"
)]
/// Command-line arguments for the mapping tool
pub struct Cli {
    /// A specific document to map (relative to --directory)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Map <PREFIX>1.tmx, <PREFIX>2.tmx, ... until a number is missing
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Directory the documents are located in
    #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
    pub directory: PathBuf,

    /// Directory mapped documents are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Role lookup table (defaults to config.json in --directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-document statistics
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Location of the role lookup table
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.directory.join(CONFIG_FILE_NAME))
    }
}

/// Orchestrates discovery, table loading and batch mapping
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Discover documents, load the lookup table and map every document
    ///
    /// # Errors
    ///
    /// Returns a configuration error if neither a file nor a prefix was
    /// given, or the requested file does not exist. Problems with
    /// individual documents are reported in the summary instead.
    pub fn process(&mut self) -> Result<ProcessSummary> {
        let documents = self.collect_documents()?;
        info!(
            "Mapping {} file{}",
            documents.len(),
            if documents.len() == 1 { "" } else { "s" }
        );

        if documents.is_empty() {
            return Ok(ProcessSummary::default());
        }

        let table = RoleTable::load_or_empty(&self.cli.config_path());

        Ok(process_with_progress(
            &documents,
            &self.cli.directory,
            &self.cli.output,
            &table,
            self.progress_manager.as_mut(),
        ))
    }

    /// Document identifiers to map, relative to the source directory
    ///
    /// # Errors
    ///
    /// Returns a configuration error if neither `--file` nor `--prefix`
    /// is usable
    pub fn collect_documents(&self) -> Result<Vec<PathBuf>> {
        if let Some(file) = &self.cli.file {
            if self.cli.directory.join(file).is_file() {
                return Ok(vec![file.clone()]);
            }
            return Err(invalid_parameter(
                "file",
                &file.display(),
                &format!("not found in '{}'", self.cli.directory.display()),
            ));
        }

        match self.cli.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                Ok(probe_sequence(&self.cli.directory, prefix))
            }
            _ => Err(invalid_parameter(
                "prefix",
                &"",
                &"either --file or --prefix is required",
            )),
        }
    }
}

/// Numbered documents `<prefix>1.tmx`, `<prefix>2.tmx`, ... present in
/// `directory`, stopping at the first gap
pub fn probe_sequence(directory: &Path, prefix: &str) -> Vec<PathBuf> {
    (1..=MAX_SEQUENCE_PROBE)
        .map(|number| PathBuf::from(format!("{prefix}{number}.{DOCUMENT_EXTENSION}")))
        .take_while(|name| directory.join(name).is_file())
        .collect()
}

/// Print the run summary with one line per skipped document
// Allow print for the user-facing run summary
#[allow(clippy::print_stdout)]
pub fn print_summary(summary: &ProcessSummary) {
    println!(
        "Processed {} file(s), skipped {}",
        summary.processed_count(),
        summary.skipped_count()
    );
    for skipped in &summary.skipped {
        println!("  skipped {skipped}");
    }
}
