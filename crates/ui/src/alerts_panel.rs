//! System alerts panel: acknowledge keeps a row, dismiss drops it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::alerts::{AlertBoard, AlertSeverity};
use simulation::clock::format_stamp;

use crate::theme;
use crate::ui_widgets::{caption, section_separator, themed_button};

fn severity_color(severity: AlertSeverity) -> egui::Color32 {
    match severity {
        AlertSeverity::Critical => theme::ERROR,
        AlertSeverity::Warning => theme::WARNING,
        AlertSeverity::Info => theme::SECONDARY,
    }
}

pub fn alerts_panel_ui(mut contexts: EguiContexts, mut board: ResMut<AlertBoard>) {
    egui::Window::new("System Alerts")
        .default_pos((960.0, 48.0))
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            if board.alerts.is_empty() {
                caption(ui, "All systems operational.");
                return;
            }

            let mut pending_ack: Option<u64> = None;
            let mut pending_dismiss: Option<u64> = None;

            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                for alert in &board.alerts {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(alert.severity.label())
                                .size(theme::FONT_SMALL)
                                .color(severity_color(alert.severity))
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(&alert.title)
                                .color(theme::TEXT_HEADING)
                                .strong(),
                        );
                    });
                    ui.label(egui::RichText::new(&alert.message).color(theme::TEXT));
                    ui.horizontal(|ui| {
                        caption(ui, &format_stamp(alert.day, alert.hour));
                        if !alert.acknowledged && themed_button(ui, "Acknowledge").clicked() {
                            pending_ack = Some(alert.id);
                        }
                        if themed_button(ui, "Dismiss").clicked() {
                            pending_dismiss = Some(alert.id);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

            if let Some(id) = pending_ack {
                board.acknowledge(id);
            }
            if let Some(id) = pending_dismiss {
                board.dismiss(id);
            }

            section_separator(ui);
            caption(
                ui,
                &format!("{} unacknowledged", board.unacknowledged_count()),
            );
        });
}
