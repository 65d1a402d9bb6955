//! Batch processing of layout dumps.
//!
//! Each document is analyzed independently on a rayon pool. Outcomes are
//! streamed back over a channel as they finish, so callers can report
//! progress, and a failing document never stops the rest of the batch.
//!
//! # Example
//!
//! ```no_run
//! use pdf_outline::batch::{run_batch, BatchOptions};
//!
//! let report = run_batch("layouts", "outputs", &BatchOptions::default(), |outcome| {
//!     println!("{}", outcome.input().display());
//! })?;
//! println!("{} written, {} failed", report.succeeded(), report.failed());
//! # Ok::<(), pdf_outline::Error>(())
//! ```

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::analysis::{AnalysisConfig, StructureAnalyzer};
use crate::error::{Error, Result};
use crate::layout::LayoutDocument;
use crate::render::{write_json, JsonFormat};

/// Extension of layout dump files.
pub const DEFAULT_EXTENSION: &str = "json";

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of worker threads (0 = one per CPU)
    pub jobs: usize,

    /// Output JSON format
    pub format: JsonFormat,

    /// Extension of input files, without the dot
    pub extension: String,

    /// Analysis thresholds
    pub config: AnalysisConfig,
}

impl BatchOptions {
    /// Create batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the input file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the analysis configuration.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            jobs: 0,
            format: JsonFormat::Pretty,
            extension: DEFAULT_EXTENSION.to_string(),
            config: AnalysisConfig::default(),
        }
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    /// The result was written.
    Written {
        /// Input layout dump
        input: PathBuf,
        /// Written result file
        output: PathBuf,
        /// Number of outline entries
        headings: usize,
    },
    /// The document could not be processed.
    Failed {
        /// Input layout dump
        input: PathBuf,
        /// Error description
        error: String,
    },
}

impl DocumentOutcome {
    /// The input file this outcome refers to.
    pub fn input(&self) -> &Path {
        match self {
            DocumentOutcome::Written { input, .. } | DocumentOutcome::Failed { input, .. } => input,
        }
    }

    /// Whether the document was written.
    pub fn is_success(&self) -> bool {
        matches!(self, DocumentOutcome::Written { .. })
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Outcomes sorted by input path
    pub outcomes: Vec<DocumentOutcome>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of documents written.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of documents that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every document was written.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// List the files in `dir` with the given extension, sorted by path.
pub fn collect_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let wanted = extension.trim_start_matches('.').to_lowercase();
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase() == wanted)
            .unwrap_or(false);
        if matches && path.is_file() {
            inputs.push(path);
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Path of the result file for an input: `<output_dir>/<stem>.json`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}.json", stem))
}

/// Analyze one layout dump and write its result.
///
/// Returns the written path and the number of outline entries.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    analyzer: &StructureAnalyzer,
    format: JsonFormat,
) -> Result<(PathBuf, usize)> {
    let layout = LayoutDocument::open(input)?;
    let mut result = analyzer.analyze(&layout);

    if result.title.trim().is_empty() {
        result.title = input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
    }

    let output = output_path_for(input, output_dir);
    let writer = BufWriter::new(File::create(&output)?);
    write_json(writer, &result, format)?;

    Ok((output, result.outline.len()))
}

fn process_guarded(
    input: &Path,
    output_dir: &Path,
    analyzer: &StructureAnalyzer,
    format: JsonFormat,
) -> DocumentOutcome {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        process_file(input, output_dir, analyzer, format)
    }));

    match attempt {
        Ok(Ok((output, headings))) => DocumentOutcome::Written {
            input: input.to_path_buf(),
            output,
            headings,
        },
        Ok(Err(e)) => {
            log::warn!("Failed to process {}: {}", input.display(), e);
            DocumentOutcome::Failed {
                input: input.to_path_buf(),
                error: e.to_string(),
            }
        }
        Err(_) => {
            log::warn!("Analysis panicked for {}", input.display());
            DocumentOutcome::Failed {
                input: input.to_path_buf(),
                error: "analysis panicked".to_string(),
            }
        }
    }
}

/// Refuse to run when a result file would replace one of the inputs.
fn check_no_overwrite(inputs: &[PathBuf], output_dir: &Path) -> Result<()> {
    let output_dir = output_dir.canonicalize()?;
    let sources: HashSet<PathBuf> = inputs
        .iter()
        .map(|p| p.canonicalize().unwrap_or_else(|_| p.clone()))
        .collect();

    for input in inputs {
        let output = output_path_for(input, &output_dir);
        if sources.contains(&output) {
            return Err(Error::InvalidInput(format!(
                "writing {} would overwrite an input; choose another output directory",
                output.display()
            )));
        }
    }
    Ok(())
}

/// Analyze a list of files in parallel, writing results to `output_dir`.
///
/// `on_outcome` is called on the calling thread once per document, in
/// completion order. Fails with [`Error::InvalidInput`] before any work if a
/// result path is also one of the inputs.
pub fn process_files<F>(
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &BatchOptions,
    mut on_outcome: F,
) -> Result<BatchReport>
where
    F: FnMut(&DocumentOutcome),
{
    let start = Instant::now();
    fs::create_dir_all(output_dir)?;
    check_no_overwrite(inputs, output_dir)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;
    let analyzer = StructureAnalyzer::with_config(options.config.clone());
    let format = options.format;

    log::debug!(
        "Processing {} documents on {} workers",
        inputs.len(),
        pool.current_num_threads()
    );

    let (tx, rx) = crossbeam_channel::unbounded();
    let mut outcomes = Vec::with_capacity(inputs.len());

    let pool = &pool;
    let analyzer = &analyzer;
    thread::scope(|scope| {
        scope.spawn(move || {
            pool.install(|| {
                inputs.par_iter().for_each_with(tx, |tx, input| {
                    let outcome = process_guarded(input, output_dir, analyzer, format);
                    // The receiver lives until every sender is dropped.
                    let _ = tx.send(outcome);
                });
            });
        });

        for outcome in rx.iter() {
            on_outcome(&outcome);
            outcomes.push(outcome);
        }
    });

    outcomes.sort_by(|a, b| a.input().cmp(b.input()));
    Ok(BatchReport {
        outcomes,
        elapsed: start.elapsed(),
    })
}

/// Analyze every layout dump in `input_dir`, writing results to `output_dir`.
pub fn run_batch<P, Q, F>(
    input_dir: P,
    output_dir: Q,
    options: &BatchOptions,
    on_outcome: F,
) -> Result<BatchReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(&DocumentOutcome),
{
    let inputs = collect_inputs(input_dir.as_ref(), &options.extension)?;
    process_files(&inputs, output_dir.as_ref(), options, on_outcome)
}
