use crate::core::metrics::CoverageMetrics;

/// Render an average coverage; undefined coverage shows as `NA`
fn format_coverage(coverage: Option<f64>) -> String {
    // Debug keeps the trailing ".0" on integral values
    coverage.map_or_else(|| "NA".to_string(), |c| format!("{c:?}"))
}

/// Render the five-line plain text report
#[must_use]
pub fn render(metrics: &CoverageMetrics) -> String {
    format!(
        "# of reads on mitochondrium: {}\n\
         AVG Coverage on MT: {}\n\
         # of reads on nuclear chromosomes: {}\n\
         AVG Coverage on nuclear chromosomes: {}\n\
         mt/nuc Ratio: {}\n",
        metrics.mt_reads,
        format_coverage(metrics.mt_coverage),
        metrics.nuc_reads,
        format_coverage(metrics.nuc_coverage),
        metrics.ratio,
    )
}

/// Render a header line and one data row, tab separated
#[must_use]
pub fn render_tsv(sample: &str, metrics: &CoverageMetrics) -> String {
    format!(
        "sample\tmt_reads\tmt_cov_avg\tnuc_reads\tnuc_cov_avg\tmt_nuc_ratio\n{sample}\t{}\t{}\t{}\t{}\t{}\n",
        metrics.mt_reads,
        format_coverage(metrics.mt_coverage),
        metrics.nuc_reads,
        format_coverage(metrics.nuc_coverage),
        metrics.ratio,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::MtNucRatio;

    fn metrics(ratio: MtNucRatio) -> CoverageMetrics {
        CoverageMetrics {
            mt_reads: 2,
            mt_coverage: Some(1.0),
            nuc_reads: 1,
            nuc_coverage: Some(0.5),
            ratio,
        }
    }

    #[test]
    fn test_render_value() {
        let text = render(&metrics(MtNucRatio::Value(2.0)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# of reads on mitochondrium: 2",
                "AVG Coverage on MT: 1.0",
                "# of reads on nuclear chromosomes: 1",
                "AVG Coverage on nuclear chromosomes: 0.5",
                "mt/nuc Ratio: 2",
            ]
        );
    }

    #[test]
    fn test_render_degenerate() {
        let mut m = metrics(MtNucRatio::NotFeasible);
        m.nuc_reads = 0;
        m.nuc_coverage = None;
        let text = render(&m);
        assert!(text.contains("AVG Coverage on nuclear chromosomes: NA\n"));
        assert!(text.ends_with("mt/nuc Ratio: NF\n"));

        let text = render(&metrics(MtNucRatio::Zero));
        assert!(text.ends_with("mt/nuc Ratio: 0.0\n"));
    }

    #[test]
    fn test_render_tsv() {
        let tsv = render_tsv("s.bam", &metrics(MtNucRatio::Value(2.0)));
        let rows: Vec<&str> = tsv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], "s.bam\t2\t1.0\t1\t0.5\t2");
    }
}
