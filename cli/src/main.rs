//! pdf-outline CLI - heading outline inference tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outline::batch::{collect_inputs, process_files, DEFAULT_EXTENSION};
use pdf_outline::{
    AnalysisConfig, BatchOptions, DocumentOutcome, JsonFormat, LayoutDocument, StructureAnalyzer,
};

/// Name of the default output directory, created next to the input directory.
const DEFAULT_OUTPUT_DIR: &str = "outputs";

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(version)]
#[command(about = "Infer titles and heading outlines from PDF layout dumps", long_about = None)]
struct Cli {
    /// Directory of layout dumps
    #[arg(value_name = "INPUT_DIR")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every layout dump in a directory
    Batch {
        /// Directory of layout dumps
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Worker threads (0 = one per CPU)
        #[arg(short, long, default_value = "0", env = "PDF_OUTLINE_JOBS")]
        jobs: usize,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Extension of input files
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        extension: String,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Infer the outline of a single layout dump
    Outline {
        /// Input layout dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Show analysis details for a layout dump
    Info {
        /// Input layout dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Show version information
    Version,
}

/// Analysis knobs shared by the commands.
#[derive(clap::Args, Clone, Copy)]
struct Tuning {
    /// Minimum score for a line to become a heading
    #[arg(long, value_name = "N")]
    min_score: Option<i32>,

    /// Count each sampled page once when detecting footers
    #[arg(long)]
    dedup_footer_pages: bool,
}

impl Tuning {
    fn config(self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new().with_dedup_footer_pages(self.dedup_footer_pages);
        if let Some(score) = self.min_score {
            config = config.with_min_heading_score(score);
        }
        config
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            input,
            output,
            jobs,
            compact,
            extension,
            tuning,
        }) => {
            let options = BatchOptions::new()
                .with_jobs(jobs)
                .with_format(json_format(compact))
                .with_extension(extension)
                .with_config(tuning.config());
            cmd_batch(&input, output.as_deref(), &options)
        }
        Some(Commands::Outline {
            input,
            output,
            compact,
            tuning,
        }) => cmd_outline(&input, output.as_deref(), compact, tuning),
        Some(Commands::Info { input, tuning }) => cmd_info(&input, tuning),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: batch over the input directory
            if let Some(input) = cli.input {
                cmd_batch(&input, cli.output.as_deref(), &BatchOptions::default())
            } else {
                println!(
                    "{}",
                    "Usage: pdf-outline <INPUT_DIR> [OUTPUT_DIR]".yellow()
                );
                println!("       pdf-outline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// `outputs` next to the input directory.
fn default_output_dir(input: &Path) -> PathBuf {
    let parent = input
        .canonicalize()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    parent.join(DEFAULT_OUTPUT_DIR)
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    options: &BatchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_dir(input));

    let inputs = collect_inputs(input, &options.extension)?;
    if inputs.is_empty() {
        println!(
            "{} no .{} files in {}",
            "Nothing to do:".yellow(),
            options.extension,
            input.display()
        );
        return Ok(());
    }

    log::debug!(
        "Writing {} results to {}",
        inputs.len(),
        output_dir.display()
    );

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = process_files(&inputs, &output_dir, options, |outcome| {
        let name = outcome
            .input()
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        match outcome {
            DocumentOutcome::Written {
                output, headings, ..
            } => pb.println(format!(
                "{} {} -> {} ({} headings)",
                "✓".green(),
                name,
                output.display(),
                headings
            )),
            DocumentOutcome::Failed { error, .. } => {
                pb.println(format!("{} {}: {}", "✗".red(), name, error))
            }
        }
        pb.set_message(name);
        pb.inc(1);
    })?;

    pb.finish_and_clear();

    println!("\n{}", "Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Processed".bold(), report.outcomes.len());
    println!("{}: {}", "Written".bold(), report.succeeded().to_string().green());
    if !report.is_clean() {
        println!("{}: {}", "Failed".bold(), report.failed().to_string().red());
    }
    println!("{}: {}", "Output".bold(), output_dir.display());
    println!(
        "{}: {:.2} seconds",
        "Total execution time".bold(),
        report.elapsed.as_secs_f64()
    );

    if !report.is_clean() {
        return Err(format!(
            "{} of {} documents failed",
            report.failed(),
            report.outcomes.len()
        )
        .into());
    }

    Ok(())
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    tuning: Tuning,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = pdf_outline::analyze_file_with_config(input, tuning.config())?;
    let json = pdf_outline::render::to_json(&result, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, tuning: Tuning) -> Result<(), Box<dyn std::error::Error>> {
    let layout = LayoutDocument::open(input)?;
    let report = StructureAnalyzer::with_config(tuning.config()).inspect(&layout);

    println!("{}", "Document Analysis".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), report.page_count);
    if let Some(ref title) = layout.metadata.title {
        println!("{}: {}", "Metadata title".bold(), title);
    }
    println!("{}: {}", "Lines".bold(), report.line_count);
    println!("{}: {}pt", "Body size".bold(), report.body_size);
    println!(
        "{}: {}",
        "Cover page".bold(),
        if report.is_cover { "Yes" } else { "No" }
    );
    println!("{}: {}", "Heading candidates".bold(), report.candidate_count);

    if !report.footers.is_empty() {
        println!();
        println!("{}", "Suppressed Footers".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for footer in &report.footers {
            println!("  {}", footer.dimmed());
        }
    }

    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), report.result.title);
    for entry in &report.result.outline {
        let indent = "  ".repeat(entry.level.depth().saturating_sub(1) as usize);
        println!(
            "{}{} {} {}",
            indent,
            entry.level.to_string().yellow(),
            entry.text,
            format!("(p. {})", entry.page).dimmed()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf-outline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Title and heading outline inference for PDF layout dumps");
    println!();
    println!("License: MIT");
}
