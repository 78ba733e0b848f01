use eframe::egui;

use crate::data::loader::Datasets;
use crate::state::{DashboardSession, DashboardView};
use crate::ui::map::{self, MapShapes};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FraudAtlasApp {
    datasets: Datasets,
    session: DashboardSession,
    shapes: MapShapes,
    /// Output of the latest render pass.
    view: DashboardView,
    /// State clicked on the map, applied by the next render pass.
    pending_click: Option<String>,
    dirty: bool,
}

impl FraudAtlasApp {
    pub fn new(datasets: Datasets) -> Self {
        let mut session = DashboardSession::new(&datasets);
        let view = session.render_pass(&datasets, None);
        let shapes = MapShapes::new(&datasets.boundaries);
        Self {
            datasets,
            session,
            shapes,
            view,
            pending_click: None,
            dirty: false,
        }
    }
}

impl eframe::App for FraudAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A new pass supersedes whatever the previous one produced.
        if self.dirty {
            self.view = self
                .session
                .render_pass(&self.datasets, self.pending_click.take().as_deref());
            self.dirty = false;
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                if panels::side_panel(ui, &mut self.session, &self.view) {
                    self.dirty = true;
                }
            });

        // ---- Central panel: map and metrics ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::header(ui);
                if let Some(state) = map::choropleth(ui, &self.view, &self.shapes) {
                    self.pending_click = Some(state);
                    self.dirty = true;
                }
                map::legend(ui, &self.view);
                ui.add_space(12.0);
                panels::metric_cards(ui, &self.view);
            });
        });

        if self.dirty {
            ctx.request_repaint();
        }
    }
}
