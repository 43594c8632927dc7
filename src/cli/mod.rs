//! Command-line interface for mtnucratio.
//!
//! ## Usage
//!
//! ```text
//! # Compute the ratio for a BAM file, writing sample.bam.mtnucratio and
//! # sample.bam.mtnucratiomtnuc.json next to it
//! mtnucratio sample.bam chrM
//!
//! # Pipe SAM from samtools, choosing where the reports go
//! samtools view -h sample.bam | mtnucratio - MT --output-prefix out/sample
//!
//! # JSON summary on stdout for scripting
//! mtnucratio sample.bam chrM --format json
//! ```

use clap::Parser;

pub mod ratio;

#[derive(Parser)]
#[command(name = "mtnucratio")]
#[command(version)]
#[command(about = "Compute the mitochondrial to nuclear coverage ratio from SAM/BAM files")]
#[command(
    long_about = "mtnucratio counts mapped reads on the mitochondrial contig and on the rest of the genome, derives average coverage for each, and reports the mt/nuc coverage ratio.\n\nThe mitochondrial contig is any reference sequence whose name contains MT_IDENTIFIER.\n\nThe input should be coordinate sorted and carry a complete @SQ header."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: ratio::RatioArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of the summary printed to stdout
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
