//! Live network map: tracks, stations, and the wandering trains.
//!
//! Painted directly on an allocated canvas. Clicking near a train selects
//! it (click again to deselect); the detail strip under the canvas shows
//! the selection. Zoom steps through 50%-200%.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::network_map::{MapTrainStatus, NetworkMap, StationStatus};

use crate::theme;
use crate::ui_widgets::{caption, section_separator, stat_row, stat_row_colored, themed_button};

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// UI-side map state: selection and zoom never touch the simulation.
#[derive(Resource)]
pub struct MapViewState {
    pub selected: Option<String>,
    pub zoom: f32,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self {
            selected: None,
            zoom: 1.0,
        }
    }
}

const CANVAS_W: f32 = 500.0;
const CANVAS_H: f32 = 340.0;
const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 2.0;
const ZOOM_STEP: f32 = 0.2;

/// Station index pairs the painted track segments connect, in seed order
/// (Central, North Junction, South Station, East Terminal, West Yard).
const TRACK_LINKS: [(usize, usize); 4] = [(4, 0), (0, 1), (1, 3), (0, 2)];

fn train_color(status: MapTrainStatus) -> egui::Color32 {
    match status {
        MapTrainStatus::Normal => theme::SUCCESS,
        MapTrainStatus::Delayed => theme::WARNING,
        MapTrainStatus::Maintenance => theme::ERROR,
    }
}

fn station_color(status: StationStatus) -> egui::Color32 {
    match status {
        StationStatus::Normal => theme::SUCCESS,
        StationStatus::Congested => theme::WARNING,
        StationStatus::Closed => theme::ERROR,
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

pub fn map_panel_ui(mut contexts: EguiContexts, map: Res<NetworkMap>, mut view: ResMut<MapViewState>) {
    egui::Window::new("Network Map")
        .default_pos((12.0, 48.0))
        .default_width(CANVAS_W + 24.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            // Zoom controls
            ui.horizontal(|ui| {
                if themed_button(ui, "-").clicked() {
                    view.zoom = (view.zoom - ZOOM_STEP).max(ZOOM_MIN);
                }
                ui.label(
                    egui::RichText::new(format!("{:.0}%", view.zoom * 100.0))
                        .color(theme::TEXT_MUTED),
                );
                if themed_button(ui, "+").clicked() {
                    view.zoom = (view.zoom + ZOOM_STEP).min(ZOOM_MAX);
                }
            });

            let zoom = view.zoom;
            let size = egui::vec2(CANVAS_W * zoom, CANVAS_H * zoom);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let origin = response.rect.min;
            let at = |x: f32, y: f32| origin + egui::vec2(x * zoom, y * zoom);

            painter.rect_filled(
                response.rect,
                egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS),
                theme::BG_DARK,
            );

            // Tracks first so everything else paints on top
            let track_stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(70, 75, 88));
            for (a, b) in TRACK_LINKS {
                if let (Some(sa), Some(sb)) = (map.stations.get(a), map.stations.get(b)) {
                    painter.line_segment([at(sa.x, sa.y), at(sb.x, sb.y)], track_stroke);
                }
            }

            for station in &map.stations {
                let pos = at(station.x, station.y);
                painter.circle_filled(pos, 5.0 * zoom, station_color(station.status));
                painter.text(
                    pos + egui::vec2(0.0, 9.0 * zoom),
                    egui::Align2::CENTER_TOP,
                    &station.name,
                    egui::FontId::proportional(theme::FONT_SMALL),
                    theme::TEXT_MUTED,
                );
            }

            for train in &map.trains {
                let pos = at(train.x, train.y);
                let rect = egui::Rect::from_center_size(pos, egui::vec2(10.0 * zoom, 10.0 * zoom));
                painter.rect_filled(rect, egui::CornerRadius::same(2), train_color(train.status));
                if view.selected.as_deref() == Some(train.id.as_str()) {
                    painter.rect_stroke(
                        rect.expand(3.0),
                        egui::CornerRadius::same(2),
                        egui::Stroke::new(2.0, theme::PRIMARY),
                        egui::StrokeKind::Outside,
                    );
                }
            }

            // Click near a train selects it; clicking it again deselects.
            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let hit = map
                        .trains
                        .iter()
                        .find(|t| at(t.x, t.y).distance(pointer) <= 12.0 * zoom);
                    view.selected = match hit {
                        Some(t) if view.selected.as_deref() == Some(t.id.as_str()) => None,
                        Some(t) => Some(t.id.clone()),
                        None => None,
                    };
                }
            }

            section_separator(ui);

            match view.selected.as_deref().and_then(|id| map.train(id)) {
                Some(train) => {
                    stat_row(ui, "Train", &train.id);
                    stat_row(ui, "Speed", &format!("{:.0} km/h", train.speed));
                    stat_row_colored(
                        ui,
                        "Status",
                        train.status.label(),
                        train_color(train.status),
                    );
                }
                None => caption(ui, "Click a train to inspect it."),
            }
        });
}
