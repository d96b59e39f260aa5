//! Fleet roster panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::roster::{RosterStatus, TrainRoster};

use crate::theme;
use crate::ui_widgets::{caption, progress_bar, section_separator, stat_row, stat_row_colored};

fn status_color(status: RosterStatus) -> egui::Color32 {
    match status {
        RosterStatus::OnTime => theme::SUCCESS,
        RosterStatus::Delayed => theme::WARNING,
        RosterStatus::Maintenance => theme::ERROR,
    }
}

pub fn roster_panel_ui(mut contexts: EguiContexts, roster: Res<TrainRoster>) {
    egui::Window::new("Train Status")
        .default_pos((960.0, 404.0))
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            for (i, train) in roster.trains.iter().enumerate() {
                if i > 0 {
                    section_separator(ui);
                }
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&train.id)
                            .size(theme::FONT_SUBHEADING)
                            .color(theme::TEXT_HEADING)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(train.status.label())
                            .size(theme::FONT_SMALL)
                            .color(status_color(train.status))
                            .strong(),
                    );
                });
                stat_row(ui, "Section", &train.section);
                stat_row(ui, "Next stop", &train.next_station);
                if train.delay_min > 0 {
                    stat_row_colored(
                        ui,
                        "Delay",
                        &format!("{} min", train.delay_min),
                        theme::ERROR,
                    );
                }
                caption(ui, &format!("{:.0} km/h", train.speed));
                progress_bar(ui, train.speed_fraction(), Some(theme::PRIMARY));
            }
        });
}
