//! Core data types and arithmetic for the mt/nuc coverage ratio.
//!
//! - [`Contig`](contig::Contig) and [`MtIdentifier`](contig::MtIdentifier): dictionary
//!   entries and the substring rule that marks a contig as mitochondrial
//! - [`ReferenceDictionary`](dictionary::ReferenceDictionary): the `@SQ` dictionary and
//!   resolution of the mitochondrial and total reference lengths
//! - [`CompartmentTally`](tally::CompartmentTally): single-pass per-compartment counters
//! - [`CoverageMetrics`](metrics::CoverageMetrics): average coverages and the ratio
//!
//! ## Identifier Matching
//!
//! A contig or read is mitochondrial when its reference name *contains* the identifier:
//!
//! | Identifier | Reference name      | Mitochondrial |
//! |------------|---------------------|---------------|
//! | chrM       | chrM                | yes           |
//! | chrM       | chrM_NC_012920.1    | yes           |
//! | MT         | chrMT_extra         | yes           |
//! | MT         | chr2                | no            |
//!
//! When several dictionary entries match, the first declared one supplies the
//! mitochondrial length.

pub mod contig;
pub mod dictionary;
pub mod metrics;
pub mod tally;
