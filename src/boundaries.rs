//! State boundaries and the per-query join of report rows onto them.

use std::collections::HashMap;

use geo::{Contains, MultiPolygon, Point};

use crate::data::aggregate::{NOT_AVAILABLE, group_thousands, round_half_even};
use crate::data::model::{Measure, ReportRecord};

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

/// A state boundary as loaded from the boundary file. Never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// A boundary joined with the data of one query.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedFeature {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
    /// Tooltip line, e.g. `Population: 11,785,935`.
    pub population: String,
    /// Tooltip line, e.g. `Reports: 1,234`.
    pub reports: String,
    /// Choropleth fill value; `None` when the state has no data.
    pub intensity: Option<f64>,
}

impl AnnotatedFeature {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.geometry.contains(&Point::new(x, y))
    }

    /// Tooltip text: name, population and report rate on separate lines.
    pub fn tooltip(&self) -> String {
        format!("{}\n{}\n{}", self.name, self.population, self.reports)
    }
}

/// Which measures feed the tooltip and the fill scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingFields {
    pub population: Measure,
    pub rate: Measure,
    pub intensity: Measure,
}

impl Default for BindingFields {
    fn default() -> Self {
        BindingFields {
            population: Measure::StatePop,
            rate: Measure::ReportsPer100k,
            intensity: Measure::StateTotalReportsQuarter,
        }
    }
}

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// Join `rows` onto `features` by state name.
///
/// The first row per state name is used. States without a row, or without a
/// value for a field, get the `N/A` sentinel instead of zero.
pub fn bind_features(
    features: &[GeoFeature],
    rows: &[ReportRecord],
    fields: &BindingFields,
) -> Vec<AnnotatedFeature> {
    let mut by_state: HashMap<&str, &ReportRecord> = HashMap::new();
    for row in rows {
        by_state.entry(row.state_name.as_str()).or_insert(row);
    }

    features
        .iter()
        .map(|feature| {
            let row = by_state.get(feature.name.as_str()).copied();
            let value = |measure: Measure| row.and_then(|r| r.measure(measure));

            AnnotatedFeature {
                name: feature.name.clone(),
                geometry: feature.geometry.clone(),
                population: format!("Population: {}", display_integer(value(fields.population))),
                reports: format!("Reports: {}", display_integer(value(fields.rate))),
                intensity: value(fields.intensity),
            }
        })
        .collect()
}

fn display_integer(value: Option<f64>) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |v| group_thousands(round_half_even(v)),
    )
}

/// Name of the feature under the point, if any.
pub fn hit_test(features: &[AnnotatedFeature], x: f64, y: f64) -> Option<&str> {
    features
        .iter()
        .find(|f| f.contains(x, y))
        .map(|f| f.name.as_str())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::model::ReportType;
    use geo::{LineString, Polygon};

    /// Axis-aligned rectangle as a single-polygon boundary.
    pub(crate) fn rect(name: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> GeoFeature {
        let ring = LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]);
        GeoFeature {
            name: name.to_string(),
            geometry: MultiPolygon::new(vec![Polygon::new(ring, vec![])]),
        }
    }

    fn continental(state: &str, pop: f64, rate: f64, total: f64) -> ReportRecord {
        ReportRecord::new(2023, 1, state, ReportType::Fraud)
            .with(Measure::StatePop, pop)
            .with(Measure::ReportsPer100k, rate)
            .with(Measure::StateTotalReportsQuarter, total)
    }

    #[test]
    fn known_state_gets_formatted_tooltip() {
        let features = vec![rect("Ohio", 0.0, 0.0, 1.0, 1.0)];
        let rows = vec![continental("Ohio", 11_785_935.0, 123.6, 14_560.0)];

        let bound = bind_features(&features, &rows, &BindingFields::default());
        assert_eq!(bound[0].population, "Population: 11,785,935");
        assert_eq!(bound[0].reports, "Reports: 124");
        assert_eq!(bound[0].intensity, Some(14_560.0));
    }

    #[test]
    fn absent_state_gets_sentinels_not_zero() {
        let features = vec![rect("Puerto Rico", 0.0, 0.0, 1.0, 1.0)];
        let rows = vec![continental("Ohio", 1.0, 1.0, 1.0)];

        let bound = bind_features(&features, &rows, &BindingFields::default());
        assert_eq!(bound[0].population, "Population: N/A");
        assert_eq!(bound[0].reports, "Reports: N/A");
        assert_eq!(bound[0].intensity, None);
    }

    #[test]
    fn first_row_per_state_wins() {
        let features = vec![rect("Ohio", 0.0, 0.0, 1.0, 1.0)];
        let mut other = continental("Ohio", 2_000.0, 7.0, 9.0);
        other.report_type = ReportType::Other;
        let rows = vec![continental("Ohio", 1_000.0, 5.0, 8.0), other];

        let bound = bind_features(&features, &rows, &BindingFields::default());
        assert_eq!(bound[0].population, "Population: 1,000");
        assert_eq!(bound[0].reports, "Reports: 5");
    }

    #[test]
    fn missing_cell_only_affects_its_own_line() {
        let features = vec![rect("Ohio", 0.0, 0.0, 1.0, 1.0)];
        let rows = vec![
            ReportRecord::new(2023, 1, "Ohio", ReportType::Fraud).with(Measure::ReportsPer100k, 42.0),
        ];

        let bound = bind_features(&features, &rows, &BindingFields::default());
        assert_eq!(bound[0].population, "Population: N/A");
        assert_eq!(bound[0].reports, "Reports: 42");
    }

    #[test]
    fn binding_leaves_inputs_untouched() {
        let features = vec![rect("Ohio", 0.0, 0.0, 1.0, 1.0)];
        let before = features.clone();
        let _ = bind_features(&features, &[continental("Ohio", 1.0, 1.0, 1.0)], &BindingFields::default());
        assert_eq!(features, before);
    }

    #[test]
    fn hit_test_finds_containing_feature() {
        let features = bind_features(
            &[rect("Ohio", 0.0, 0.0, 1.0, 1.0), rect("Texas", 2.0, 0.0, 4.0, 2.0)],
            &[],
            &BindingFields::default(),
        );
        assert_eq!(hit_test(&features, 3.0, 1.0), Some("Texas"));
        assert_eq!(hit_test(&features, 0.5, 0.5), Some("Ohio"));
        assert_eq!(hit_test(&features, 1.5, 0.5), None);
    }
}
