use eframe::egui::{self, RichText, Ui};

use crate::data::aggregate::MetricCard;
use crate::data::model::ReportType;
use crate::state::{DashboardSession, DashboardView};

pub const APP_TITLE: &str = "Fraud and Identity Theft Report";
pub const APP_SUBTITLE: &str = "Source: Federal Trade Commission";

const ALL_STATES: &str = "All states";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel. Returns `true` when any filter changed.
pub fn side_panel(ui: &mut Ui, session: &mut DashboardSession, view: &DashboardView) -> bool {
    let mut changed = false;

    ui.heading("Filters");
    ui.separator();

    // ---- Year ----
    ui.strong("Year");
    egui::ComboBox::from_id_salt("year")
        .selected_text(view.year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for &year in &view.years {
                if ui.selectable_label(view.year == year, year.to_string()).clicked() {
                    session.year = year;
                    changed = true;
                }
            }
        });
    ui.add_space(4.0);

    // ---- Quarter ----
    ui.strong("Quarter");
    ui.horizontal(|ui: &mut Ui| {
        for quarter in 1..=4u8 {
            if ui
                .radio(view.quarter == quarter, quarter.to_string())
                .clicked()
            {
                session.set_quarter(quarter);
                changed = true;
            }
        }
    });
    ui.add_space(4.0);

    // ---- State ----
    ui.strong("State");
    let current = view
        .state_options
        .get(view.state_index)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(ALL_STATES);
    egui::ComboBox::from_id_salt("state")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for (i, name) in view.state_options.iter().enumerate() {
                let label = if name.is_empty() { ALL_STATES } else { name.as_str() };
                if ui.selectable_label(view.state_index == i, label).clicked() {
                    session.selection.on_filter_choice(name);
                    changed = true;
                }
            }
        });
    ui.add_space(4.0);

    // ---- Report type ----
    ui.strong("Report Type");
    for report_type in ReportType::ALL {
        if ui
            .radio(view.report_type == report_type, report_type.as_str())
            .clicked()
        {
            session.report_type = report_type;
            changed = true;
        }
    }

    changed
}

// ---------------------------------------------------------------------------
// Header and metric cards
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(RichText::new(APP_TITLE).size(26.0));
    ui.label(RichText::new(APP_SUBTITLE).italics().weak());
    ui.separator();
}

/// The summary figures, side by side.
pub fn metric_cards(ui: &mut Ui, view: &DashboardView) {
    ui.heading(view.subheading.as_str());
    ui.columns(view.metrics.len().max(1), |columns: &mut [Ui]| {
        for (col, card) in columns.iter_mut().zip(&view.metrics) {
            metric_card(col, card);
        }
    });
}

fn metric_card(ui: &mut Ui, card: &MetricCard) {
    ui.group(|ui: &mut Ui| {
        ui.label(RichText::new(&card.title).weak());
        ui.label(RichText::new(&card.value).size(28.0).strong());
    });
}
