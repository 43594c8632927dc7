//! Readers for alignment headers and records.
//!
//! This module reads SAM (text) and BAM (binary) files with noodles, extracts the
//! `@SQ` reference dictionary from the header, and streams records through the
//! per-compartment tally in a single pass.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mtnucratio::core::contig::MtIdentifier;
//! use mtnucratio::parsing::sam::{parse_header_text, read_alignment_file, AlignmentFormat};
//! use std::path::Path;
//!
//! let identifier = MtIdentifier::new("chrM").unwrap();
//!
//! // Stream a BAM file
//! let summary =
//!     read_alignment_file(Path::new("sample.bam"), AlignmentFormat::Bam, &identifier).unwrap();
//!
//! // Or resolve lengths from raw header text
//! let dict = parse_header_text("@SQ\tSN:chrM\tLN:16569\n").unwrap();
//! let lengths = dict.resolve(&identifier);
//! ```
//!
//! ## Supported Tags
//!
//! From SAM `@SQ` lines, the following tags are extracted:
//!
//! | Tag | Description | Required |
//! |-----|-------------|----------|
//! | SN  | Sequence name | Yes |
//! | LN  | Sequence length | Yes |

pub mod sam;
