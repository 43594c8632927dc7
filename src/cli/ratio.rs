use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::contig::MtIdentifier;
use crate::core::metrics::CoverageMetrics;
use crate::parsing::sam::{read_alignment_file, read_sam_stream, AlignmentFormat, AlignmentSummary};
use crate::report::{self, ReportPaths};

#[derive(Args)]
pub struct RatioArgs {
    /// Input file (SAM or BAM), coordinate sorted.
    /// Use '-' for SAM on stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Substring identifying the mitochondrial reference sequence (e.g. chrM, MT)
    #[arg(required = true)]
    pub mt_identifier: String,

    /// Prefix for the report files (defaults to the absolute input path).
    /// Required when reading from stdin
    #[arg(short, long)]
    pub output_prefix: Option<PathBuf>,

    /// Input format (auto-detected from the extension by default)
    #[arg(long)]
    pub input_format: Option<AlignmentFormat>,
}

/// Execute the ratio computation and write both reports
///
/// # Errors
///
/// Returns an error if the identifier is invalid, the input cannot be read, or
/// the reports cannot be written. Nothing is written on failure.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RatioArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let identifier = MtIdentifier::new(args.mt_identifier.as_str())?;
    let reading_stdin = args.input.to_string_lossy() == "-";

    let prefix = match (&args.output_prefix, reading_stdin) {
        (Some(prefix), _) => prefix.clone(),
        (None, true) => anyhow::bail!("--output-prefix is required when reading from stdin"),
        (None, false) => absolute_path(&args.input)?,
    };

    let summary = read_input(&args, &identifier)?;

    if verbose {
        eprintln!(
            "Parsed {} contigs ({} bp total)",
            summary.dictionary.len(),
            summary.lengths.total_length
        );
        match (&summary.lengths.mt_contig, summary.lengths.mt_length) {
            (Some(name), Some(length)) => {
                eprintln!("Mitochondrial contig: {name} ({length} bp)");
            }
            _ => eprintln!("No contig name contains '{identifier}'"),
        }
    }

    let metrics = CoverageMetrics::compute(&summary.tally, &summary.lengths);

    let sample = if reading_stdin {
        report::sample_name(&prefix)
    } else {
        report::sample_name(&args.input)
    };

    let text = report::text::render(&metrics);
    let json = report::json::render(&sample, &metrics)?;
    report::write_reports(&ReportPaths::from_prefix(&prefix), &text, &json)?;

    match format {
        OutputFormat::Text => print!("{text}"),
        OutputFormat::Json => println!("{json}"),
        OutputFormat::Tsv => print!("{}", report::text::render_tsv(&sample, &metrics)),
    }

    Ok(())
}

fn read_input(args: &RatioArgs, identifier: &MtIdentifier) -> anyhow::Result<AlignmentSummary> {
    // Handle stdin
    if args.input.to_string_lossy() == "-" {
        let stdin = std::io::stdin();
        return Ok(read_sam_stream(stdin.lock(), identifier)?);
    }

    let format = match args.input_format {
        Some(format) => format,
        None => AlignmentFormat::detect(&args.input)?,
    };

    Ok(read_alignment_file(&args.input, format, identifier)?)
}

fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
