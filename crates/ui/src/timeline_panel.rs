//! Departure timeline panel.
//!
//! Rows are drag sources and the list body is one drop zone; dropping a
//! row on another inserts it there, dropping on empty space sends it to
//! the end. Any edit flips the board into simulation mode (shown in the
//! header) until the operator resets.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::sim_rng::SimRng;
use simulation::timeline::{EventStatus, ScheduleBoard};

use crate::theme;
use crate::ui_widgets::{caption, section_separator, stat_row, stat_row_colored, themed_button};

fn status_color(status: EventStatus) -> egui::Color32 {
    match status {
        EventStatus::Completed => theme::TEXT_MUTED,
        EventStatus::OnTime => theme::SUCCESS,
        EventStatus::Delayed => theme::WARNING,
        EventStatus::Cancelled => theme::ERROR,
    }
}

pub fn timeline_panel_ui(
    mut contexts: EguiContexts,
    mut board: ResMut<ScheduleBoard>,
    mut rng: ResMut<SimRng>,
) {
    egui::Window::new("Departure Timeline")
        .default_pos((550.0, 48.0))
        .default_width(400.0)
        .show(contexts.ctx_mut(), |ui| {
            if board.simulation_mode {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("SIMULATION MODE")
                            .size(theme::FONT_SMALL)
                            .color(theme::WARNING)
                            .strong(),
                    );
                    if themed_button(ui, "Reset").clicked() {
                        board.reset_to_original();
                    }
                });
            } else {
                caption(ui, "Live timetable. Drag a row to reorder; edits pause drift.");
            }
            ui.add_space(4.0);

            // Mutations are collected here and applied after the list so the
            // rows can borrow the board immutably while painting.
            let mut pending_move: Option<(usize, usize)> = None;
            let mut pending_delay: Option<u64> = None;

            let frame = egui::Frame::default().inner_margin(4.0);
            let (_, dropped) = ui.dnd_drop_zone::<usize, ()>(frame, |ui| {
                for (row_idx, event) in board.events.iter().enumerate() {
                    let response = ui
                        .dnd_drag_source(
                            egui::Id::new(("timeline_row", event.id)),
                            row_idx,
                            |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new("::").color(theme::TEXT_MUTED),
                                    );
                                    ui.label(
                                        egui::RichText::new(&event.scheduled)
                                            .monospace()
                                            .color(theme::TEXT),
                                    );
                                    ui.label(format!("{} - {}", event.train, event.station));
                                    ui.label(
                                        egui::RichText::new(event.status.label())
                                            .size(theme::FONT_SMALL)
                                            .color(status_color(event.status))
                                            .strong(),
                                    );
                                    if event.delay_min > 0 {
                                        ui.label(
                                            egui::RichText::new(format!(
                                                "+{}m",
                                                event.delay_min
                                            ))
                                            .size(theme::FONT_SMALL)
                                            .color(theme::ERROR),
                                        );
                                    }
                                    if let Some(estimated) = &event.estimated {
                                        ui.label(
                                            egui::RichText::new(format!("est {estimated}"))
                                                .size(theme::FONT_SMALL)
                                                .color(theme::TEXT_MUTED),
                                        );
                                    }
                                    if matches!(
                                        event.status,
                                        EventStatus::OnTime | EventStatus::Delayed
                                    ) && ui.small_button("Simulate").clicked()
                                    {
                                        pending_delay = Some(event.id);
                                    }
                                });
                            },
                        )
                        .response;

                    // Insert hint while another row hovers over this one
                    if response.dnd_hover_payload::<usize>().is_some() {
                        let rect = response.rect;
                        ui.painter().hline(
                            rect.x_range(),
                            rect.top(),
                            egui::Stroke::new(2.0, theme::PRIMARY),
                        );
                    }
                    if let Some(payload) = response.dnd_release_payload::<usize>() {
                        pending_move = Some((*payload, row_idx));
                    }
                }
            });

            // A release over a row fires both the row and the zone; the zone
            // only catches drops on empty space below the list.
            if pending_move.is_none() {
                if let Some(payload) = dropped {
                    pending_move = Some((*payload, board.events.len().saturating_sub(1)));
                }
            }

            if let Some((from, to)) = pending_move {
                board.reorder(from, to);
            }
            if let Some(id) = pending_delay {
                board.inject_delay(id, &mut rng.0);
            }

            section_separator(ui);
            stat_row(
                ui,
                "On time",
                &format!("{:.0}%", board.on_time_share() * 100.0),
            );
            stat_row(
                ui,
                "Avg delay",
                &format!("{:.1} min", board.average_delay_min()),
            );
            if board.simulation_mode {
                let net = board.net_impact_min();
                let color = if net > 0 { theme::ERROR } else { theme::SUCCESS };
                stat_row_colored(ui, "Net impact", &format!("{net:+} min"), color);
            }
        });
}
