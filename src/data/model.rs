use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Column names shared by every report table
// ---------------------------------------------------------------------------

pub const YEAR: &str = "Year";
pub const QUARTER: &str = "Quarter";
pub const STATE_NAME: &str = "State Name";
pub const REPORT_TYPE: &str = "Report Type";

/// Key columns every report table must carry, in file order.
pub const KEY_COLUMNS: [&str; 4] = [YEAR, QUARTER, STATE_NAME, REPORT_TYPE];

// ---------------------------------------------------------------------------
// ReportType
// ---------------------------------------------------------------------------

/// Classification of a complaint record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ReportType {
    #[default]
    Fraud,
    Other,
}

impl ReportType {
    pub const ALL: [ReportType; 2] = [ReportType::Fraud, ReportType::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Fraud => "Fraud",
            ReportType::Other => "Other",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Fraud" => Ok(ReportType::Fraud),
            "Other" => Ok(ReportType::Other),
            other => Err(format!("unknown report type '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Measure – one numeric column of a report table
// ---------------------------------------------------------------------------

/// Numeric measure columns found across the four report tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measure {
    /// Per-state number of reports in the quarter (choropleth intensity).
    StateTotalReportsQuarter,
    StatePop,
    /// Fraud and Other reports combined, per 100K residents.
    ReportsPer100k,
    StateFraudOtherCount,
    OverallMedianLossesYr,
    TotalLosses,
}

impl Measure {
    /// Column header as it appears in the source files.
    pub fn column(self) -> &'static str {
        match self {
            Measure::StateTotalReportsQuarter => "State Total Reports Quarter",
            Measure::StatePop => "State Pop",
            Measure::ReportsPer100k => "Reports per 100K-F&O together",
            Measure::StateFraudOtherCount => "State Fraud/Other Count",
            Measure::OverallMedianLossesYr => "Overall Median Losses Yr",
            Measure::TotalLosses => "Total Losses",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// TableKind – explicit schema per input table
// ---------------------------------------------------------------------------

/// The four report tables the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    Continental,
    Fraud,
    MedianLosses,
    TotalLosses,
}

impl TableKind {
    /// Measure columns this table must provide besides the key columns.
    pub fn measures(self) -> &'static [Measure] {
        match self {
            TableKind::Continental => &[
                Measure::StateTotalReportsQuarter,
                Measure::StatePop,
                Measure::ReportsPer100k,
            ],
            TableKind::Fraud => &[Measure::StateFraudOtherCount],
            TableKind::MedianLosses => &[Measure::OverallMedianLossesYr],
            TableKind::TotalLosses => &[Measure::TotalLosses],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TableKind::Continental => "continental",
            TableKind::Fraud => "fraud",
            TableKind::MedianLosses => "median losses",
            TableKind::TotalLosses => "total losses",
        }
    }
}

// ---------------------------------------------------------------------------
// ReportRecord – one row of a report table
// ---------------------------------------------------------------------------

/// A single typed row. Measures with an empty source cell are absent.
#[derive(Debug, Clone)]
pub struct ReportRecord {
    pub year: i32,
    pub quarter: u8,
    pub state_name: String,
    pub report_type: ReportType,
    pub measures: BTreeMap<Measure, f64>,
}

impl ReportRecord {
    pub fn new(year: i32, quarter: u8, state_name: impl Into<String>, report_type: ReportType) -> Self {
        ReportRecord {
            year,
            quarter,
            state_name: state_name.into(),
            report_type,
            measures: BTreeMap::new(),
        }
    }

    /// Builder-style helper to attach a measure value.
    pub fn with(mut self, measure: Measure, value: f64) -> Self {
        self.measures.insert(measure, value);
        self
    }

    pub fn measure(&self, measure: Measure) -> Option<f64> {
        self.measures.get(&measure).copied()
    }
}

// -- Exact-row equality: floats compare by bit pattern so rows can be hashed --

impl PartialEq for ReportRecord {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.quarter == other.quarter
            && self.state_name == other.state_name
            && self.report_type == other.report_type
            && self.measures.len() == other.measures.len()
            && self
                .measures
                .iter()
                .zip(other.measures.iter())
                .all(|((ma, va), (mb, vb))| ma == mb && va.to_bits() == vb.to_bits())
    }
}

impl Eq for ReportRecord {}

impl Hash for ReportRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.quarter.hash(state);
        self.state_name.hash(state);
        self.report_type.hash(state);
        for (measure, value) in &self.measures {
            measure.hash(state);
            value.to_bits().hash(state);
        }
    }
}

// ---------------------------------------------------------------------------
// ReportTable – a loaded table with its filter domains
// ---------------------------------------------------------------------------

/// A fully loaded report table with pre-computed filter domains.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub kind: TableKind,
    /// All rows, in source order, duplicates included.
    pub records: Vec<ReportRecord>,
    /// Distinct years present.
    pub years: BTreeSet<i32>,
    /// Distinct state names present.
    pub states: BTreeSet<String>,
}

impl ReportTable {
    pub fn from_records(kind: TableKind, records: Vec<ReportRecord>) -> Self {
        let years = records.iter().map(|r| r.year).collect();
        let states = records.iter().map(|r| r.state_name.clone()).collect();
        ReportTable {
            kind,
            records,
            years,
            states,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Years newest first, as offered by the year selector.
    pub fn years_descending(&self) -> Vec<i32> {
        self.years.iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn report_type_parses_known_values_only() {
        assert_eq!("Fraud".parse::<ReportType>(), Ok(ReportType::Fraud));
        assert_eq!(" Other ".parse::<ReportType>(), Ok(ReportType::Other));
        assert!("Identity Theft".parse::<ReportType>().is_err());
    }

    #[test]
    fn identical_rows_are_equal_and_hash_together() {
        let a = ReportRecord::new(2023, 1, "Ohio", ReportType::Fraud)
            .with(Measure::StateFraudOtherCount, 150.0);
        let b = a.clone();
        let c = a.clone().with(Measure::StateFraudOtherCount, 151.0);

        let set: HashSet<_> = [a.clone(), b, c.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_ne!(a, c);
    }

    #[test]
    fn table_domains_are_sorted() {
        let table = ReportTable::from_records(
            TableKind::Fraud,
            vec![
                ReportRecord::new(2022, 1, "Texas", ReportType::Fraud),
                ReportRecord::new(2024, 2, "Ohio", ReportType::Other),
                ReportRecord::new(2023, 3, "Texas", ReportType::Fraud),
            ],
        );
        assert_eq!(table.years_descending(), vec![2024, 2023, 2022]);
        assert_eq!(
            table.states.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Ohio", "Texas"]
        );
    }
}
