//! Structured text-based session reports.
//!
//! Reports are natural language, not JSON, because a human scanning a
//! failing test log reads structured text better than raw data.
//! Measurement values are printed to four decimals here; the engines
//! keep full precision.

use std::fmt;

use geo_types::{Domain, Measurement};

use crate::oracle::OracleVerdict;
use crate::workflow::StatsView;

/// A complete session report with all sections.
pub struct StudyReport {
    pub domain: Domain,
    pub entry_count: usize,
    pub stats: Option<StatsView>,
    pub measurements: Vec<Measurement>,
    pub quiz: Option<QuizSummary>,
    pub oracle_results: Vec<OracleVerdict>,
}

/// Quiz outcome for a report.
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub message: String,
}

impl StudyReport {
    pub fn new(domain: Domain, entry_count: usize) -> Self {
        Self {
            domain,
            entry_count,
            stats: None,
            measurements: Vec::new(),
            quiz: None,
            oracle_results: Vec::new(),
        }
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== GeoMaster Study Report ===\n\n");

        out.push_str(&format!(
            "Domain: {} ({} entries)\n",
            self.domain.prefix(),
            self.entry_count,
        ));

        if let Some(stats) = &self.stats {
            out.push_str(&format!(
                "Progress: {} learned, {} favorites of {} ({}% complete)\n",
                stats.learned_count, stats.favorites_count, stats.total, stats.percentage,
            ));
        }

        if !self.measurements.is_empty() {
            out.push_str("\nMeasurements:\n");
            for m in &self.measurements {
                out.push_str(&format!("  {}: {:.4} {}\n", m.label, m.value, m.unit));
            }
        }

        if let Some(quiz) = &self.quiz {
            out.push_str(&format!(
                "\nQuiz: {}/{} - {}\n",
                quiz.score, quiz.total, quiz.message,
            ));
        }

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        out
    }

    /// Whether every oracle in the report passed.
    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
