use std::collections::HashSet;

use super::model::{ReportRecord, ReportTable, ReportType};

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// What a single query asks of a report table.
///
/// * `report_type == None` → every report type (the map view)
/// * `state == None`       → every state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: i32,
    pub quarter: u8,
    pub report_type: Option<ReportType>,
    pub state: Option<String>,
}

impl FilterCriteria {
    /// Criteria for one period and report type across all states.
    pub fn new(year: i32, quarter: u8, report_type: ReportType) -> Self {
        FilterCriteria {
            year,
            quarter,
            report_type: Some(report_type),
            state: None,
        }
    }

    /// Criteria for one period, any report type.
    pub fn period(year: i32, quarter: u8) -> Self {
        FilterCriteria {
            year,
            quarter,
            report_type: None,
            state: None,
        }
    }

    /// Narrow to one state. An empty name means "all states".
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = if state.is_empty() {
            None
        } else {
            Some(state.to_string())
        };
        self
    }

    pub fn matches(&self, record: &ReportRecord) -> bool {
        record.year == self.year
            && record.quarter == self.quarter
            && self.report_type.is_none_or(|rt| record.report_type == rt)
            && self
                .state
                .as_deref()
                .is_none_or(|s| record.state_name == s)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the rows of `table` matching `criteria`, exact duplicates removed.
///
/// Source order is kept and the first occurrence of a repeated row wins.
/// Rows are compared only on the columns the table schema keeps (key and
/// measure columns); extra file columns dropped at load play no part.
/// No match is a valid outcome and yields an empty vector.
pub fn filter_records(table: &ReportTable, criteria: &FilterCriteria) -> Vec<ReportRecord> {
    dedup(
        table
            .records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned(),
    )
}

/// Remove exact-duplicate rows, keeping first occurrences in order.
pub fn dedup(records: impl IntoIterator<Item = ReportRecord>) -> Vec<ReportRecord> {
    let mut seen: HashSet<ReportRecord> = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}
