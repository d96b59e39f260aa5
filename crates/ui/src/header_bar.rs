//! Top status strip: title, system badge, alert count, service clock.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::alerts::AlertBoard;
use simulation::clock::OpsClock;

use crate::theme;

pub fn header_bar_ui(mut contexts: EguiContexts, clock: Res<OpsClock>, alerts: Res<AlertBoard>) {
    egui::TopBottomPanel::top("header_bar")
        .exact_height(36.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                ui.label(
                    egui::RichText::new("Railway Control Center")
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_HEADING),
                );

                ui.separator();

                ui.label(egui::RichText::new("System Online").color(theme::SUCCESS));

                ui.separator();

                let open = alerts.unacknowledged_count();
                if open > 0 {
                    ui.label(
                        egui::RichText::new(format!("{} open alerts", open)).color(theme::ERROR),
                    );
                } else {
                    ui.label(egui::RichText::new("No open alerts").color(theme::TEXT_MUTED));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(clock.formatted_hms())
                            .monospace()
                            .color(theme::TEXT),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("Day {}", clock.day)).color(theme::TEXT_MUTED),
                    );
                });
            });
        });
}
