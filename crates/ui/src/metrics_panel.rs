//! Network KPI panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::metrics::KpiBoard;

use crate::theme;
use crate::ui_widgets::progress_bar;

pub fn metrics_panel_ui(mut contexts: EguiContexts, board: Res<KpiBoard>) {
    egui::Window::new("Network Metrics")
        .default_pos((1280.0, 480.0))
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            for kpi in &board.kpis {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&kpi.label).color(theme::TEXT_MUTED));
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            let trend_color = if kpi.change >= 0.0 {
                                theme::SUCCESS
                            } else {
                                theme::ERROR
                            };
                            ui.label(
                                egui::RichText::new(format!("{:+.1}", kpi.change))
                                    .size(theme::FONT_SMALL)
                                    .color(trend_color),
                            );
                            let value = if kpi.unit.is_empty() {
                                kpi.formatted_value()
                            } else {
                                format!("{} {}", kpi.formatted_value(), kpi.unit)
                            };
                            ui.label(
                                egui::RichText::new(value)
                                    .size(theme::FONT_SUBHEADING)
                                    .color(theme::TEXT_HEADING)
                                    .strong(),
                            );
                        },
                    );
                });
                if kpi.percent {
                    progress_bar(ui, kpi.gauge_fraction(), Some(theme::PRIMARY));
                }
                ui.add_space(4.0);
            }
        });
}
