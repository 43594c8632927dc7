//! # mtnucratio
//!
//! A library for computing the ratio of mitochondrial to nuclear sequencing coverage
//! from SAM/BAM alignment files.
//!
//! The mitochondrial copy number of a sample is commonly estimated from the relative
//! depth of reads on the mitochondrial genome versus the nuclear genome. `mtnucratio`
//! makes a single streaming pass over the alignments:
//!
//! - **Header resolution**: the mitochondrial contig length and total reference length
//!   are taken from the `@SQ` dictionary
//! - **Classification**: every mapped read whose reference name contains the
//!   mitochondrial identifier is mitochondrial, every other mapped read is nuclear
//! - **Coverage**: aligned bases over compartment length
//! - **Ratio**: mt coverage over nuclear coverage, rounded to two decimals, with `NF`
//!   when there are no nuclear reads and `0.0` when there are no mitochondrial reads
//!
//! ## Example
//!
//! ```rust
//! use mtnucratio::{AlignmentObservation, CompartmentTally, CoverageMetrics, MtIdentifier};
//! use mtnucratio::parsing::sam::parse_header_text;
//!
//! let identifier = MtIdentifier::new("chrM").unwrap();
//! let dict = parse_header_text("@SQ\tSN:chr1\tLN:1000\n@SQ\tSN:chrM\tLN:100\n").unwrap();
//! let lengths = dict.resolve(&identifier);
//!
//! let tally = CompartmentTally::from_observations(
//!     [
//!         AlignmentObservation::mapped("chrM", 50),
//!         AlignmentObservation::mapped("chrM", 50),
//!         AlignmentObservation::mapped("chr1", 100),
//!     ],
//!     &identifier,
//! );
//!
//! let metrics = CoverageMetrics::compute(&tally, &lengths);
//! assert_eq!(metrics.ratio.to_string(), "11");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Dictionary, tally and coverage types
//! - [`parsing`]: SAM/BAM readers built on noodles
//! - [`report`]: Text and JSON report writers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::contig::{Contig, MtIdentifier};
pub use core::dictionary::{ReferenceDictionary, ResolvedLengths};
pub use core::metrics::{CoverageMetrics, MtNucRatio};
pub use core::tally::{AlignmentObservation, Compartment, CompartmentStats, CompartmentTally};
