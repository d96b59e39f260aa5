//! Track occupancy panel: section blocks per line with train markers.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::occupancy::{OccupancyBoard, SectionStatus};

use crate::theme;
use crate::ui_widgets::caption;

const BLOCK_W: f32 = 104.0;
const BLOCK_H: f32 = 18.0;

fn section_fill(status: SectionStatus) -> egui::Color32 {
    match status {
        SectionStatus::Normal => egui::Color32::from_rgb(40, 70, 50),
        SectionStatus::Occupied => egui::Color32::from_rgb(90, 70, 30),
        SectionStatus::Maintenance => egui::Color32::from_rgb(90, 40, 35),
    }
}

pub fn occupancy_panel_ui(mut contexts: EguiContexts, board: Res<OccupancyBoard>) {
    egui::Window::new("Track Occupancy")
        .default_pos((550.0, 812.0))
        .default_width(340.0)
        .show(contexts.ctx_mut(), |ui| {
            for line in ["A", "B", "C"] {
                caption(ui, &format!("Line {line}"));
                ui.horizontal(|ui| {
                    for section in board.line_sections(line) {
                        let (response, painter) = ui.allocate_painter(
                            egui::vec2(BLOCK_W, BLOCK_H),
                            egui::Sense::hover(),
                        );
                        let rect = response.rect;
                        painter.rect_filled(
                            rect,
                            egui::CornerRadius::same(3),
                            section_fill(section.status),
                        );
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            &section.id,
                            egui::FontId::proportional(theme::FONT_SMALL),
                            theme::TEXT,
                        );
                        // Marker at percent progress along the section
                        for position in board.trains_on(&section.id) {
                            let x = rect.left() + rect.width() * position.percent / 100.0;
                            painter.circle_filled(
                                egui::pos2(x, rect.center().y),
                                4.0,
                                theme::PRIMARY,
                            );
                        }
                        response.on_hover_text(format!(
                            "{} ({})",
                            section.id,
                            section.status.label()
                        ));
                    }
                });
                ui.add_space(4.0);
            }

            ui.horizontal(|ui| {
                for (status, name) in [
                    (SectionStatus::Normal, "Clear"),
                    (SectionStatus::Occupied, "Occupied"),
                    (SectionStatus::Maintenance, "Maintenance"),
                ] {
                    let (response, painter) =
                        ui.allocate_painter(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    painter.circle_filled(response.rect.center(), 4.0, section_fill(status));
                    caption(ui, name);
                }
            });
        });
}
