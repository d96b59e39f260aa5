//! What-if scenario planner panel.
//!
//! The delay slider and alternate-route field only show for the kinds
//! that use them. Run buttons dim while a run started this session is
//! outstanding; the lock is advisory, so nothing else enforces it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::scenarios::{format_cost, ScenarioKind, ScenarioLab, ScenarioStatus};
use simulation::sim_rng::SimRng;
use simulation::TickCounter;

use crate::theme;
use crate::ui_widgets::{
    caption, section_separator, stat_row, themed_button, themed_button_primary, themed_subheading,
};

fn status_color(status: ScenarioStatus) -> egui::Color32 {
    match status {
        ScenarioStatus::Pending => theme::TEXT_MUTED,
        ScenarioStatus::Running => theme::WARNING,
        ScenarioStatus::Completed => theme::SUCCESS,
    }
}

pub fn scenario_panel_ui(
    mut contexts: EguiContexts,
    mut lab: ResMut<ScenarioLab>,
    mut rng: ResMut<SimRng>,
    tick: Res<TickCounter>,
) {
    egui::Window::new("Scenario Planner")
        .default_pos((550.0, 400.0))
        .default_width(340.0)
        .show(contexts.ctx_mut(), |ui| {
            themed_subheading(ui, "New Scenario");
            ui.add(egui::TextEdit::singleline(&mut lab.draft.train).hint_text("Train ID"));
            ui.add(egui::TextEdit::singleline(&mut lab.draft.station).hint_text("Station"));
            egui::ComboBox::from_id_salt("scenario_kind")
                .selected_text(lab.draft.kind.label())
                .show_ui(ui, |ui| {
                    for kind in ScenarioKind::ALL {
                        ui.selectable_value(&mut lab.draft.kind, kind, kind.label());
                    }
                });
            if matches!(lab.draft.kind, ScenarioKind::Delay | ScenarioKind::Weather) {
                ui.add(egui::Slider::new(&mut lab.draft.delay_min, 1..=60).suffix(" min"));
            }
            if matches!(
                lab.draft.kind,
                ScenarioKind::Reroute | ScenarioKind::Maintenance
            ) {
                ui.add(
                    egui::TextEdit::singleline(&mut lab.draft.alternate_route)
                        .hint_text("Alternate route"),
                );
            }
            if themed_button_primary(ui, "Create Scenario").clicked() {
                // Empty required fields are a silent no-op.
                let _ = lab.create(&mut rng.0);
            }
            section_separator(ui);

            let run_locked = lab.run_in_flight();
            let mut pending_run: Option<u64> = None;
            for scenario in &lab.scenarios {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&scenario.name)
                            .size(theme::FONT_SUBHEADING)
                            .color(theme::TEXT_HEADING)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(scenario.status.label())
                            .size(theme::FONT_SMALL)
                            .color(status_color(scenario.status))
                            .strong(),
                    );
                });
                caption(
                    ui,
                    &format!(
                        "{} / {} at {}",
                        scenario.kind.label(),
                        scenario.train,
                        scenario.station
                    ),
                );
                stat_row(
                    ui,
                    "Cascaded delays",
                    &scenario.impact.cascaded_delays.to_string(),
                );
                stat_row(
                    ui,
                    "Affected trains",
                    &scenario.impact.affected_trains.to_string(),
                );
                stat_row(
                    ui,
                    "Total delay",
                    &format!("{} min", scenario.impact.total_delay_min),
                );
                stat_row(ui, "Est. cost", &format_cost(scenario.impact.cost_dollars));
                if scenario.status == ScenarioStatus::Running {
                    caption(ui, "Running...");
                } else {
                    ui.add_enabled_ui(!run_locked, |ui| {
                        if themed_button(ui, "Run").clicked() {
                            pending_run = Some(scenario.id);
                        }
                    });
                }
                ui.add_space(4.0);
            }
            if let Some(id) = pending_run {
                lab.start_run(id, tick.0);
            }

            if themed_button(ui, "Reset All").clicked() {
                lab.reset_all();
            }

            section_separator(ui);
            stat_row(ui, "Completed", &lab.completed_count().to_string());
            stat_row(
                ui,
                "Avg delay",
                &format!("{:.0} min", lab.average_delay_min()),
            );
            stat_row(ui, "Total cost", &format_cost(lab.total_cost_dollars()));
        });
}
