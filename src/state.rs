use crate::boundaries::{AnnotatedFeature, BindingFields, bind_features};
use crate::color::ChoroplethScale;
use crate::data::aggregate::{MetricCard, compute_metrics};
use crate::data::filter::{FilterCriteria, filter_records};
use crate::data::loader::Datasets;
use crate::data::model::{ReportTable, ReportType};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The state the dashboard is currently focused on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(String),
}

/// Reconciles the map control and the state dropdown into one selection.
///
/// Whichever producer set the selection most recently wins.
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    selection: Selection,
}

impl SelectionCoordinator {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected state name, empty for "all states".
    pub fn current(&self) -> &str {
        match &self.selection {
            Selection::None => "",
            Selection::Selected(name) => name,
        }
    }

    /// A feature was clicked on the map. `None` means no active feature.
    pub fn on_map_interaction(&mut self, clicked: Option<&str>) {
        if let Some(name) = clicked.filter(|n| !n.is_empty()) {
            if self.current() != name {
                log::debug!("Map selected '{name}'");
            }
            self.selection = Selection::Selected(name.to_string());
        }
    }

    /// The dropdown's explicit choice. The empty option clears the selection.
    pub fn on_filter_choice(&mut self, choice: &str) {
        log::debug!("Dropdown selected '{choice}'");
        self.selection = if choice.is_empty() {
            Selection::None
        } else {
            Selection::Selected(choice.to_string())
        };
    }

    /// Drop a selection that is no longer offered by the dropdown.
    pub fn reconcile(&mut self, options: &[String]) {
        if let Selection::Selected(name) = &self.selection {
            if !options.iter().any(|o| o == name) {
                log::debug!("'{name}' is not in the state list, clearing selection");
                self.selection = Selection::None;
            }
        }
    }

    /// Index of the current selection in `options`, 0 (the empty option)
    /// when nothing valid is selected.
    pub fn dropdown_index(&self, options: &[String]) -> usize {
        let current = self.current();
        if current.is_empty() {
            return 0;
        }
        options.iter().position(|o| o == current).unwrap_or(0)
    }
}

/// Dropdown options: the empty "all states" entry, then every state in the
/// table, sorted. Independent of the time filters.
pub fn state_options(table: &ReportTable) -> Vec<String> {
    std::iter::once(String::new())
        .chain(table.states.iter().cloned())
        .collect()
}

// ---------------------------------------------------------------------------
// Dashboard session
// ---------------------------------------------------------------------------

/// Everything one render pass produces for the presentation layer.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Year selector entries, newest first.
    pub years: Vec<i32>,
    pub year: i32,
    pub quarter: u8,
    pub report_type: ReportType,
    pub state_options: Vec<String>,
    pub state_index: usize,
    /// Resolved selection used for the metrics, empty for all states.
    pub selected_state: String,
    pub subheading: String,
    pub features: Vec<AnnotatedFeature>,
    pub scale: Option<ChoroplethScale>,
    pub metrics: Vec<MetricCard>,
}

/// Session-scoped filter state carried from one render pass to the next.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub year: i32,
    pub quarter: u8,
    pub report_type: ReportType,
    pub selection: SelectionCoordinator,
}

impl DashboardSession {
    /// Start on the newest year, first quarter, fraud reports, all states.
    pub fn new(datasets: &Datasets) -> Self {
        DashboardSession {
            year: newest_year(datasets).unwrap_or_default(),
            quarter: 1,
            report_type: ReportType::default(),
            selection: SelectionCoordinator::default(),
        }
    }

    pub fn set_quarter(&mut self, quarter: u8) {
        if (1..=4).contains(&quarter) {
            self.quarter = quarter;
        } else {
            log::warn!("Ignoring invalid quarter {quarter}");
        }
    }

    /// Run one full recomputation.
    ///
    /// The map's interaction is applied first and becomes the dropdown's
    /// default; the reconciled dropdown value then drives the metrics.
    pub fn render_pass(&mut self, datasets: &Datasets, map_click: Option<&str>) -> DashboardView {
        let years = datasets.continental.years_descending();
        if !years.contains(&self.year) {
            if let Some(&newest) = years.first() {
                self.year = newest;
            }
        }

        let period_rows = filter_records(
            &datasets.continental,
            &FilterCriteria::period(self.year, self.quarter),
        );
        let features = bind_features(&datasets.boundaries, &period_rows, &BindingFields::default());
        let scale = ChoroplethScale::from_features(&features);

        self.selection.on_map_interaction(map_click);

        let state_options = state_options(&datasets.continental);
        self.selection.reconcile(&state_options);
        let state_index = self.selection.dropdown_index(&state_options);
        let selected_state = self.selection.current().to_string();

        let criteria =
            FilterCriteria::new(self.year, self.quarter, self.report_type).with_state(&selected_state);
        let metrics = compute_metrics(datasets, &criteria);

        let subheading = format!(
            "{} Q{} {} {} Report Facts",
            self.year, self.quarter, selected_state, self.report_type
        );

        DashboardView {
            years,
            year: self.year,
            quarter: self.quarter,
            report_type: self.report_type,
            state_options,
            state_index,
            selected_state,
            subheading,
            features,
            scale,
            metrics,
        }
    }
}

fn newest_year(datasets: &Datasets) -> Option<i32> {
    datasets.continental.years.last().copied()
}
