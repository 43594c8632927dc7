use serde::Serialize;

use crate::core::metrics::{CoverageMetrics, MtNucRatio};
use crate::report::TOOL_NAME;

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    sample_name: &'a str,
    tool_name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Metrics {
    mtreads: u64,
    mt_cov_avg: Option<f64>,
    nucreads: u64,
    nuc_cov_avg: Option<f64>,
    mt_nuc_ratio: MtNucRatio,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    metrics: Metrics,
}

/// Render the JSON report. Undefined coverages are `null`.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render(sample_name: &str, metrics: &CoverageMetrics) -> Result<String, serde_json::Error> {
    let report = Report {
        metadata: Metadata {
            sample_name,
            tool_name: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
        },
        metrics: Metrics {
            mtreads: metrics.mt_reads,
            mt_cov_avg: metrics.mt_coverage,
            nucreads: metrics.nuc_reads,
            nuc_cov_avg: metrics.nuc_coverage,
            mt_nuc_ratio: metrics.ratio,
        },
    };

    serde_json::to_string_pretty(&report)
}
