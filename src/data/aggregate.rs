use crate::error::AggregateError;

use super::filter::{FilterCriteria, filter_records};
use super::loader::Datasets;
use super::model::{Measure, ReportRecord, ReportType, TableKind};

/// Display sentinel for values that could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// How a measure is reduced to one figure. Always chosen per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateMode {
    Sum,
    /// Mean of the remaining rows. For median columns this is a mean of
    /// medians whenever more than one row survives filtering.
    Mean,
}

/// Reduce `rows` to a single value of `measure`.
///
/// Rows without a value for `measure` are skipped. `Sum` of nothing is 0,
/// `Mean` of nothing is an error.
pub fn aggregate(
    rows: &[ReportRecord],
    measure: Measure,
    mode: AggregateMode,
) -> Result<f64, AggregateError> {
    let values = rows.iter().filter_map(|r| r.measure(measure));
    match mode {
        AggregateMode::Sum => Ok(values.sum()),
        AggregateMode::Mean => {
            let (total, count) = values.fold((0.0, 0usize), |(t, n), v| (t + v, n + 1));
            if count == 0 {
                Err(AggregateError::Empty {
                    measure: measure.column().to_string(),
                })
            } else {
                Ok(total / count as f64)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// How a metric value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFormat {
    /// `12,345`
    Integer,
    /// `$12,345`
    Currency,
}

impl MetricFormat {
    pub fn format(self, value: f64) -> String {
        let digits = group_thousands(round_half_even(value));
        match self {
            MetricFormat::Integer => digits,
            MetricFormat::Currency => format!("${digits}"),
        }
    }

    /// Format an aggregation result, rendering failures as `N/A`.
    pub fn format_result(self, result: &Result<f64, AggregateError>) -> String {
        match result {
            Ok(v) => self.format(*v),
            Err(e) => {
                log::debug!("{e}");
                NOT_AVAILABLE.to_string()
            }
        }
    }
}

/// Nearest integer, ties to even.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// One of the summary figures shown under the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub table: TableKind,
    pub measure: Measure,
    pub mode: AggregateMode,
    pub format: MetricFormat,
}

impl MetricSpec {
    pub const REPORT_COUNT: MetricSpec = MetricSpec {
        table: TableKind::Fraud,
        measure: Measure::StateFraudOtherCount,
        mode: AggregateMode::Sum,
        format: MetricFormat::Integer,
    };
    pub const MEDIAN_LOSSES: MetricSpec = MetricSpec {
        table: TableKind::MedianLosses,
        measure: Measure::OverallMedianLossesYr,
        mode: AggregateMode::Mean,
        format: MetricFormat::Currency,
    };
    pub const TOTAL_LOSSES: MetricSpec = MetricSpec {
        table: TableKind::TotalLosses,
        measure: Measure::TotalLosses,
        mode: AggregateMode::Sum,
        format: MetricFormat::Currency,
    };

    pub const ALL: [MetricSpec; 3] = [
        MetricSpec::REPORT_COUNT,
        MetricSpec::MEDIAN_LOSSES,
        MetricSpec::TOTAL_LOSSES,
    ];

    pub fn title(&self, report_type: ReportType) -> String {
        match self.table {
            TableKind::MedianLosses => "Median Dollar Losses".to_string(),
            TableKind::TotalLosses => "Total Dollar Losses".to_string(),
            _ => format!("# of {report_type} Reports"),
        }
    }
}

/// A computed metric ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Surviving rows after filter and dedup.
    pub row_count: usize,
}

/// Filter, dedup and aggregate one metric.
pub fn compute_metric(datasets: &Datasets, spec: &MetricSpec, criteria: &FilterCriteria) -> MetricCard {
    let rows = filter_records(datasets.table(spec.table), criteria);
    let result = aggregate(&rows, spec.measure, spec.mode);
    MetricCard {
        title: spec.title(criteria.report_type.unwrap_or_default()),
        value: spec.format.format_result(&result),
        row_count: rows.len(),
    }
}

/// Compute every metric card for the given criteria.
pub fn compute_metrics(datasets: &Datasets, criteria: &FilterCriteria) -> Vec<MetricCard> {
    MetricSpec::ALL
        .iter()
        .map(|spec| compute_metric(datasets, spec, criteria))
        .collect()
}
