use serde::{Serialize, Serializer};

use crate::core::dictionary::ResolvedLengths;
use crate::core::tally::{CompartmentStats, CompartmentTally};

/// Helper function to convert u64 count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Outcome of the mt/nuc ratio computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MtNucRatio {
    /// Both compartments have reads; coverage ratio rounded half-up to 2 decimals
    Value(f64),
    /// Mitochondrial reads only, no nuclear reads to compare against
    NotFeasible,
    /// No mitochondrial reads (or no resolvable mitochondrial length)
    Zero,
}

impl std::fmt::Display for MtNucRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::NotFeasible => write!(f, "NF"),
            Self::Zero => write!(f, "0.0"),
        }
    }
}

impl Serialize for MtNucRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::NotFeasible => serializer.serialize_str("NF"),
            Self::Zero => serializer.serialize_f64(0.0),
        }
    }
}

/// Round half-up to two decimal places
#[must_use]
pub fn round_ratio(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average coverage of one compartment: `reads * (bases / reads) / length`.
///
/// `None` when the compartment has no reads or the length is missing or zero.
#[must_use]
pub fn average_coverage(stats: &CompartmentStats, length: Option<u64>) -> Option<f64> {
    if stats.is_empty() {
        return None;
    }
    let length = length.filter(|&l| l > 0)?;

    let reads = count_to_f64(stats.read_count);
    let mean_read_length = count_to_f64(stats.aligned_bases) / reads;
    Some(reads * mean_read_length / count_to_f64(length))
}

/// Final per-run metrics handed to the report writers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageMetrics {
    pub mt_reads: u64,
    pub mt_coverage: Option<f64>,
    pub nuc_reads: u64,
    pub nuc_coverage: Option<f64>,
    pub ratio: MtNucRatio,
}

impl CoverageMetrics {
    /// Derive coverages and the mt/nuc ratio from a finished tally.
    ///
    /// Ratio policy, first match wins:
    /// 1. both compartments have reads: `round(mt / nuc, 2)`
    /// 2. only mitochondrial reads: [`MtNucRatio::NotFeasible`]
    /// 3. otherwise: [`MtNucRatio::Zero`]
    ///
    /// A mitochondrial length that could not be resolved makes mitochondrial
    /// coverage undefined and the ratio falls through to `Zero`.
    #[must_use]
    pub fn compute(tally: &CompartmentTally, lengths: &ResolvedLengths) -> Self {
        let mt_coverage = average_coverage(&tally.mitochondrial, lengths.mt_length);
        let nuc_coverage = average_coverage(&tally.nuclear, Some(lengths.total_length));

        let ratio = match (mt_coverage, nuc_coverage) {
            (None, _) => MtNucRatio::Zero,
            (Some(mt), Some(nuc)) if nuc > 0.0 => MtNucRatio::Value(round_ratio(mt / nuc)),
            (Some(_), _) => MtNucRatio::NotFeasible,
        };

        Self {
            mt_reads: tally.mitochondrial.read_count,
            mt_coverage,
            nuc_reads: tally.nuclear.read_count,
            nuc_coverage,
            ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contig::{Contig, MtIdentifier};
    use crate::core::dictionary::ReferenceDictionary;
    use crate::core::tally::AlignmentObservation;

    fn lengths(identifier: &str) -> ResolvedLengths {
        ReferenceDictionary::new(vec![Contig::new("chr1", 1000), Contig::new("chrM", 100)])
            .resolve(&MtIdentifier::new(identifier).unwrap())
    }

    fn tally(observations: &[AlignmentObservation<'_>]) -> CompartmentTally {
        CompartmentTally::from_observations(
            observations.iter().copied(),
            &MtIdentifier::new("chrM").unwrap(),
        )
    }

    #[test]
    fn test_scenario_a_both_compartments() {
        let tally = tally(&[
            AlignmentObservation::mapped("chrM", 50),
            AlignmentObservation::mapped("chrM", 50),
            AlignmentObservation::mapped("chr1", 100),
        ]);
        let metrics = CoverageMetrics::compute(&tally, &lengths("chrM"));

        assert_eq!(metrics.mt_reads, 2);
        assert_eq!(metrics.nuc_reads, 1);
        assert!((metrics.mt_coverage.unwrap() - 1.0).abs() < 1e-12);
        assert!((metrics.nuc_coverage.unwrap() - 100.0 / 1100.0).abs() < 1e-12);
        assert_eq!(metrics.ratio, MtNucRatio::Value(11.0));
        assert_eq!(metrics.ratio.to_string(), "11");
    }

    #[test]
    fn test_scenario_b_no_mt_reads() {
        let tally = tally(&[AlignmentObservation::mapped("chr1", 100)]);
        let metrics = CoverageMetrics::compute(&tally, &lengths("chrM"));

        assert_eq!(metrics.mt_reads, 0);
        assert_eq!(metrics.mt_coverage, None);
        assert_eq!(metrics.nuc_reads, 1);
        assert_eq!(metrics.ratio, MtNucRatio::Zero);
        assert_eq!(metrics.ratio.to_string(), "0.0");
    }

    #[test]
    fn test_scenario_c_only_mt_reads() {
        let tally = tally(&[
            AlignmentObservation::mapped("chrM", 50),
            AlignmentObservation::mapped("chrM", 60),
        ]);
        let metrics = CoverageMetrics::compute(&tally, &lengths("chrM"));

        assert_eq!(metrics.nuc_reads, 0);
        assert_eq!(metrics.nuc_coverage, None);
        assert_eq!(metrics.ratio, MtNucRatio::NotFeasible);
        assert_eq!(metrics.ratio.to_string(), "NF");
    }

    #[test]
    fn test_no_mapped_reads() {
        let metrics = CoverageMetrics::compute(&CompartmentTally::new(), &lengths("chrM"));
        assert_eq!(metrics.mt_reads, 0);
        assert_eq!(metrics.nuc_reads, 0);
        assert_eq!(metrics.ratio, MtNucRatio::Zero);
    }

    #[test]
    fn test_unresolved_mt_length_guarded() {
        // Identifier matches no contig, but reads were still classified as mitochondrial
        let tally = tally(&[
            AlignmentObservation::mapped("chrM", 50),
            AlignmentObservation::mapped("chr1", 100),
        ]);
        let metrics = CoverageMetrics::compute(&tally, &lengths("MT"));

        assert_eq!(metrics.mt_reads, 1);
        assert_eq!(metrics.mt_coverage, None);
        assert_eq!(metrics.ratio, MtNucRatio::Zero);
    }

    #[test]
    fn test_zero_nuclear_bases_not_feasible() {
        let tally = tally(&[
            AlignmentObservation::mapped("chrM", 50),
            AlignmentObservation::mapped("chr1", 0),
        ]);
        let metrics = CoverageMetrics::compute(&tally, &lengths("chrM"));

        assert_eq!(metrics.nuc_coverage, Some(0.0));
        assert_eq!(metrics.ratio, MtNucRatio::NotFeasible);
    }

    #[test]
    fn test_round_ratio_half_up() {
        assert!((round_ratio(1.125) - 1.13).abs() < 1e-12);
        assert!((round_ratio(2.004) - 2.0).abs() < 1e-12);
        assert!((round_ratio(11.000_000_000_000_002) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_coverage_guards() {
        let empty = CompartmentStats::default();
        assert_eq!(average_coverage(&empty, Some(100)), None);

        let stats = CompartmentStats {
            read_count: 4,
            aligned_bases: 400,
        };
        assert_eq!(average_coverage(&stats, None), None);
        assert_eq!(average_coverage(&stats, Some(0)), None);
        assert!((average_coverage(&stats, Some(200)).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_serialization() {
        assert_eq!(
            serde_json::to_string(&MtNucRatio::Value(11.0)).unwrap(),
            "11.0"
        );
        assert_eq!(
            serde_json::to_string(&MtNucRatio::NotFeasible).unwrap(),
            "\"NF\""
        );
        assert_eq!(serde_json::to_string(&MtNucRatio::Zero).unwrap(), "0.0");
    }
}
