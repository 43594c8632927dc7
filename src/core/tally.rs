use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::core::contig::MtIdentifier;

/// Placeholder reference name for mapped records that carry no reference sequence
pub const NO_REFERENCE: &str = "*";

/// The parts of an alignment record the tally needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentObservation<'a> {
    pub is_mapped: bool,
    pub reference_name: &'a str,
    pub aligned_length: u64,
}

impl<'a> AlignmentObservation<'a> {
    #[must_use]
    pub fn mapped(reference_name: &'a str, aligned_length: u64) -> Self {
        Self {
            is_mapped: true,
            reference_name,
            aligned_length,
        }
    }

    #[must_use]
    pub fn unmapped(reference_name: &'a str, aligned_length: u64) -> Self {
        Self {
            is_mapped: false,
            reference_name,
            aligned_length,
        }
    }
}

/// Which partition of the genome a read was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compartment {
    Mitochondrial,
    Nuclear,
}

/// Read count and aligned bases for one compartment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentStats {
    pub read_count: u64,
    pub aligned_bases: u64,
}

impl CompartmentStats {
    #[inline]
    fn record(&mut self, aligned_length: u64) {
        self.read_count += 1;
        self.aligned_bases += aligned_length;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_count == 0
    }
}

impl Add for CompartmentStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            read_count: self.read_count + rhs.read_count,
            aligned_bases: self.aligned_bases + rhs.aligned_bases,
        }
    }
}

impl AddAssign for CompartmentStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Running per-compartment counters for a single pass over an alignment stream.
///
/// Records are folded in one at a time and never retained. Two tallies over
/// disjoint parts of a stream can be merged with [`CompartmentTally::merge`]
/// and give the same result as a single pass over the whole stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentTally {
    pub mitochondrial: CompartmentStats,
    pub nuclear: CompartmentStats,
}

impl CompartmentTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the tally.
    ///
    /// Returns the compartment the record was counted in, or `None` for unmapped records.
    pub fn observe(
        &mut self,
        observation: &AlignmentObservation<'_>,
        identifier: &MtIdentifier,
    ) -> Option<Compartment> {
        if !observation.is_mapped {
            return None;
        }

        if identifier.matches(observation.reference_name) {
            self.mitochondrial.record(observation.aligned_length);
            Some(Compartment::Mitochondrial)
        } else {
            self.nuclear.record(observation.aligned_length);
            Some(Compartment::Nuclear)
        }
    }

    /// Tally a whole sequence of records
    pub fn from_observations<'a, I>(observations: I, identifier: &MtIdentifier) -> Self
    where
        I: IntoIterator<Item = AlignmentObservation<'a>>,
    {
        observations
            .into_iter()
            .fold(Self::new(), |mut tally, observation| {
                tally.observe(&observation, identifier);
                tally
            })
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            mitochondrial: self.mitochondrial + other.mitochondrial,
            nuclear: self.nuclear + other.nuclear,
        }
    }

    #[must_use]
    pub fn mapped_reads(&self) -> u64 {
        self.mitochondrial.read_count + self.nuclear.read_count
    }
}
