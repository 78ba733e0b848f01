use std::collections::HashMap;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Line, Plot, PlotPoints, Polygon};
use geo::TriangulateEarcut;

use crate::boundaries::{GeoFeature, hit_test};
use crate::color::NO_DATA;
use crate::state::DashboardView;

// ---------------------------------------------------------------------------
// Pre-tessellated state shapes
// ---------------------------------------------------------------------------

/// Triangles and outlines per state, built once from the static boundaries.
///
/// egui only fills convex polygons, so each state is drawn as triangles.
pub struct MapShapes {
    shapes: HashMap<String, StateShape>,
}

struct StateShape {
    triangles: Vec<[[f64; 2]; 3]>,
    outlines: Vec<Vec<[f64; 2]>>,
}

impl MapShapes {
    pub fn new(boundaries: &[GeoFeature]) -> Self {
        let shapes = boundaries
            .iter()
            .map(|feature| {
                let mut shape = StateShape {
                    triangles: Vec::new(),
                    outlines: Vec::new(),
                };
                for polygon in &feature.geometry.0 {
                    shape.triangles.extend(
                        polygon
                            .earcut_triangles_iter()
                            .map(|t| t.to_array().map(|c| [c.x, c.y])),
                    );
                    shape
                        .outlines
                        .push(polygon.exterior().coords().map(|c| [c.x, c.y]).collect());
                }
                (feature.name.clone(), shape)
            })
            .collect();
        log::debug!("Tessellated {} state shapes", boundaries.len());
        MapShapes { shapes }
    }
}

// ---------------------------------------------------------------------------
// Choropleth (central panel)
// ---------------------------------------------------------------------------

/// Draw the choropleth and return the state clicked this frame, if any.
pub fn choropleth(ui: &mut Ui, view: &DashboardView, shapes: &MapShapes) -> Option<String> {
    let outline = Stroke::new(1.0, Color32::WHITE);

    let response = Plot::new("choropleth")
        .height(450.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for feature in &view.features {
                let Some(shape) = shapes.shapes.get(&feature.name) else {
                    continue;
                };
                let fill = view
                    .scale
                    .as_ref()
                    .map_or(NO_DATA, |s| s.color_for(feature.intensity));

                for triangle in &shape.triangles {
                    let points: PlotPoints = triangle.iter().copied().collect();
                    plot_ui.polygon(
                        Polygon::new(points)
                            .fill_color(fill)
                            .stroke(Stroke::new(0.5, fill)),
                    );
                }
                for ring in &shape.outlines {
                    let points: PlotPoints = ring.iter().copied().collect();
                    plot_ui.line(Line::new(points).stroke(outline));
                }
            }
            plot_ui.pointer_coordinate()
        });

    let hovered = response
        .inner
        .and_then(|p| hit_test(&view.features, p.x, p.y))
        .and_then(|name| view.features.iter().find(|f| f.name == name));

    let clicked = response.response.clicked();
    let hovered = hovered?;
    response.response.on_hover_text_at_pointer(hovered.tooltip());

    clicked.then(|| hovered.name.clone())
}

/// Colour key for the choropleth classes.
pub fn legend(ui: &mut Ui, view: &DashboardView) {
    let Some(scale) = &view.scale else {
        ui.label("No report totals for this period.");
        return;
    };
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (label, color) in scale.legend_entries() {
            ui.colored_label(color, "■");
            ui.label(label);
            ui.add_space(6.0);
        }
        ui.colored_label(NO_DATA, "■");
        ui.label("No data");
    });
}
