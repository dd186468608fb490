//! Run statistics and the end-of-run report

use crate::format::SequenceFormat;
use std::fmt::Write as _;

/// Counters accumulated over one run
///
/// Invariant: `total_reads >= passed_length_filter >= retained_reads`. Each
/// counter only ever increments, in strict record-arrival order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records pulled from the input, regardless of outcome
    pub total_reads: u64,
    /// Records whose sequence length met the minimum
    pub passed_length_filter: u64,
    /// Records that also survived the sampling draw and were written
    pub retained_reads: u64,
}

impl RunStats {
    /// Retained fraction of all observed reads, `None` when no reads were seen
    pub fn actual_ratio(&self) -> Option<f64> {
        if self.total_reads == 0 {
            None
        } else {
            Some(self.retained_reads as f64 / self.total_reads as f64)
        }
    }
}

/// Render the end-of-run report
///
/// Layout follows the classic subsampling tools: dashed rule, one line per
/// figure, actual retention ratio at two decimals. The ratio line is omitted
/// for empty inputs.
pub fn render_report(
    format: SequenceFormat,
    stats: &RunStats,
    percent: f64,
    min_len: usize,
) -> String {
    let mut out = String::new();
    let rule = "-".repeat(40);

    // Whole-number percentages keep their decimal (50 renders as "50.0%")
    let percent_label = if percent.fract() == 0.0 {
        format!("{percent:.1}")
    } else {
        format!("{percent}")
    };

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Processing Complete");
    let _ = writeln!(out, "Input type:                    {format}");
    let _ = writeln!(out, "Total Raw Reads:               {}", stats.total_reads);
    let _ = writeln!(
        out,
        "Reads >= {min_len}bp:                {}",
        stats.passed_length_filter
    );
    let _ = writeln!(
        out,
        "Retained Reads ({percent_label}% target): {}",
        stats.retained_reads
    );
    if let Some(ratio) = stats.actual_ratio() {
        let _ = writeln!(out, "Actual Retention Ratio:        {:.2}%", ratio * 100.0);
    }
    let _ = writeln!(out, "{rule}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guarded_against_empty_input() {
        let stats = RunStats::default();
        assert_eq!(stats.actual_ratio(), None);
    }

    #[test]
    fn test_ratio_of_retained_to_total() {
        let stats = RunStats {
            total_reads: 4,
            passed_length_filter: 3,
            retained_reads: 1,
        };
        assert_eq!(stats.actual_ratio(), Some(0.25));
    }

    #[test]
    fn test_report_contains_all_figures() {
        let stats = RunStats {
            total_reads: 3,
            passed_length_filter: 2,
            retained_reads: 2,
        };
        let report = render_report(SequenceFormat::Fasta, &stats, 100.0, 10_000);

        assert!(report.contains("Input type:                    FASTA"));
        assert!(report.contains("Total Raw Reads:               3"));
        assert!(report.contains("Reads >= 10000bp:                2"));
        assert!(report.contains("Actual Retention Ratio:        66.67%"));
    }

    #[test]
    fn test_report_percent_keeps_decimal() {
        let stats = RunStats {
            total_reads: 10,
            passed_length_filter: 10,
            retained_reads: 5,
        };

        let report = render_report(SequenceFormat::Fastq, &stats, 50.0, 0);
        assert!(report.contains("Retained Reads (50.0% target): 5"));

        let report = render_report(SequenceFormat::Fastq, &stats, 12.5, 0);
        assert!(report.contains("Retained Reads (12.5% target): 5"));
    }

    #[test]
    fn test_report_omits_ratio_for_empty_run() {
        let report = render_report(SequenceFormat::Fastq, &RunStats::default(), 50.0, 0);
        assert!(!report.contains("Actual Retention Ratio"));
        assert!(report.contains("Total Raw Reads:               0"));
    }
}
