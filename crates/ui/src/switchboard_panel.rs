//! System switchboard panel: master toggles and ungated quick actions.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::overrides::format_duration;
use simulation::switchboard::{SwitchboardAction, SwitchboardActionEvent, SwitchId, SystemSwitchboard};
use simulation::TickCounter;

use crate::ui_widgets::{section_separator, stat_row, themed_button, themed_subheading};

pub fn switchboard_panel_ui(
    mut contexts: EguiContexts,
    mut board: ResMut<SystemSwitchboard>,
    mut actions: EventWriter<SwitchboardActionEvent>,
    tick: Res<TickCounter>,
) {
    egui::Window::new("System Control")
        .default_pos((960.0, 796.0))
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            // Checkboxes edit a copy; the real flip goes through toggle()
            // after the loop releases the borrow.
            let mut pending: Option<SwitchId> = None;
            for entry in &board.toggles {
                let mut on = entry.enabled;
                if ui.checkbox(&mut on, entry.id.label()).changed() {
                    pending = Some(entry.id);
                }
            }
            if let Some(id) = pending {
                board.toggle(id);
            }
            section_separator(ui);

            themed_subheading(ui, "Quick Actions");
            ui.horizontal_wrapped(|ui| {
                for action in SwitchboardAction::ALL {
                    if themed_button(ui, action.label()).clicked() {
                        actions.send(SwitchboardActionEvent(action));
                    }
                }
            });
            section_separator(ui);

            stat_row(ui, "Controller", "Admin User");
            // 600 ticks at 10 Hz is one minute of session time
            stat_row(ui, "Session", &format_duration((tick.0 / 600) as u32));
        });
}
