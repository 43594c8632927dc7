use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use noodles::sam::alignment::RecordBuf;

use crate::core::contig::{Contig, MtIdentifier};
use crate::core::dictionary::{ReferenceDictionary, ResolvedLengths};
use crate::core::tally::{AlignmentObservation, CompartmentTally, NO_REFERENCE};
use crate::utils::validation::check_contig_limit;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SAM header format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Too many contigs: {0} exceeds maximum allowed (100000)")]
    TooManyContigs(usize),

    #[error("Record references sequence id {0} which is not in the header")]
    UnknownReference(usize),
}

/// Alignment file encodings that can be streamed
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AlignmentFormat {
    Sam,
    Bam,
}

impl AlignmentFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` for extensions other than `sam`/`bam`.
    pub fn detect(path: &Path) -> Result<Self, ParseError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("sam") => Ok(Self::Sam),
            Some("bam") => Ok(Self::Bam),
            Some(ext) => Err(ParseError::UnsupportedFormat(ext.to_string())),
            // No extension, assume SAM text
            None => Ok(Self::Sam),
        }
    }
}

/// Everything gathered from one pass over an alignment file
#[derive(Debug, Clone)]
pub struct AlignmentSummary {
    pub dictionary: ReferenceDictionary,
    pub lengths: ResolvedLengths,
    pub tally: CompartmentTally,
}

/// Read a SAM/BAM file: resolve lengths from its header, then stream its records once
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or a record cannot be read,
/// `ParseError::Noodles` if the header cannot be parsed, or the errors of
/// [`header_to_dictionary`].
pub fn read_alignment_file(
    path: &Path,
    format: AlignmentFormat,
    identifier: &MtIdentifier,
) -> Result<AlignmentSummary, ParseError> {
    match format {
        AlignmentFormat::Sam => {
            let reader = std::fs::File::open(path).map(BufReader::new)?;
            summarize_sam(reader, identifier)
        }
        AlignmentFormat::Bam => summarize_bam(path, identifier),
    }
}

/// Read SAM text (header and records) from any buffered source, e.g. stdin
///
/// # Errors
///
/// Same as [`read_alignment_file`].
pub fn read_sam_stream<R: BufRead>(
    reader: R,
    identifier: &MtIdentifier,
) -> Result<AlignmentSummary, ParseError> {
    summarize_sam(reader, identifier)
}

fn summarize_sam<R: BufRead>(
    inner: R,
    identifier: &MtIdentifier,
) -> Result<AlignmentSummary, ParseError> {
    use noodles::sam;

    let mut reader = sam::io::Reader::new(inner);

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    let dictionary = header_to_dictionary(&header)?;
    let lengths = dictionary.resolve(identifier);
    let tally = tally_records(reader.record_bufs(&header), &dictionary, identifier)?;

    Ok(AlignmentSummary {
        dictionary,
        lengths,
        tally,
    })
}

fn summarize_bam(path: &Path, identifier: &MtIdentifier) -> Result<AlignmentSummary, ParseError> {
    use noodles::bam;

    let mut reader = std::fs::File::open(path).map(bam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    let dictionary = header_to_dictionary(&header)?;
    let lengths = dictionary.resolve(identifier);
    let tally = tally_records(reader.record_bufs(&header), &dictionary, identifier)?;

    Ok(AlignmentSummary {
        dictionary,
        lengths,
        tally,
    })
}

/// Fold a record stream into per-compartment counters.
///
/// Aligned length is the read's sequence length; records without a stored
/// sequence contribute zero bases but are still counted.
///
/// # Errors
///
/// Returns `ParseError::Io` on the first unreadable record, or
/// `ParseError::UnknownReference` if a record points outside the dictionary.
pub fn tally_records<I>(
    records: I,
    dictionary: &ReferenceDictionary,
    identifier: &MtIdentifier,
) -> Result<CompartmentTally, ParseError>
where
    I: IntoIterator<Item = std::io::Result<RecordBuf>>,
{
    let mut tally = CompartmentTally::new();
    let mut unmapped: u64 = 0;

    for result in records {
        let record = result?;

        let reference_name = match record.reference_sequence_id() {
            Some(id) => dictionary
                .name_of(id)
                .ok_or(ParseError::UnknownReference(id))?,
            None => NO_REFERENCE,
        };

        let observation = AlignmentObservation {
            is_mapped: !record.flags().is_unmapped(),
            reference_name,
            aligned_length: record.sequence().len() as u64,
        };

        if tally.observe(&observation, identifier).is_none() {
            unmapped += 1;
        }
    }

    info!(
        mt_reads = tally.mitochondrial.read_count,
        mt_bases = tally.mitochondrial.aligned_bases,
        nuc_reads = tally.nuclear.read_count,
        nuc_bases = tally.nuclear.aligned_bases,
        unmapped,
        "Finished streaming alignment records"
    );

    Ok(tally)
}

/// Convert noodles header to `ReferenceDictionary`
///
/// # Errors
///
/// Returns `ParseError::TooManyContigs` if the limit is exceeded.
pub fn header_to_dictionary(
    header: &noodles::sam::Header,
) -> Result<ReferenceDictionary, ParseError> {
    let mut contigs = Vec::new();

    for (name, map) in header.reference_sequences() {
        // Check contig limit for DOS protection
        if check_contig_limit(contigs.len()).is_some() {
            return Err(ParseError::TooManyContigs(contigs.len()));
        }

        contigs.push(Contig::new(name.to_string(), map.length().get() as u64));
    }

    debug!(contigs = contigs.len(), "Parsed reference dictionary");

    Ok(ReferenceDictionary::new(contigs))
}

/// Parse a reference dictionary from raw header text
///
/// Only `@SQ` lines are considered; lines missing `SN` or a numeric `LN` are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no usable `@SQ` lines are found, or
/// `ParseError::TooManyContigs` if the limit is exceeded.
pub fn parse_header_text(text: &str) -> Result<ReferenceDictionary, ParseError> {
    let mut contigs = Vec::new();

    for line in text.lines() {
        if !line.starts_with("@SQ") {
            continue;
        }

        let mut name: Option<&str> = None;
        let mut length: Option<u64> = None;

        for field in line.split('\t').skip(1) {
            if let Some((tag, value)) = field.split_once(':') {
                match tag {
                    "SN" => name = Some(value),
                    "LN" => length = value.trim().parse().ok(),
                    _ => {}
                }
            }
        }

        if let (Some(name), Some(length)) = (name, length) {
            // Check contig limit for DOS protection
            if check_contig_limit(contigs.len()).is_some() {
                return Err(ParseError::TooManyContigs(contigs.len()));
            }
            contigs.push(Contig::new(name, length));
        }
    }

    if contigs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No @SQ lines found in header".to_string(),
        ));
    }

    Ok(ReferenceDictionary::new(contigs))
}
