//! Manual override desk panel.
//!
//! The form is greyed out while the desk is locked, but the Execute and
//! quick-action buttons stay clickable so a denied attempt can surface
//! the blocking notice instead of doing nothing.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::clock::{format_stamp, OpsClock};
use simulation::notices::NoticeEvent;
use simulation::overrides::{
    format_duration, locked_notice, ControlAction, ControlActionEvent, LockState, OverrideDesk,
    OverrideKind, SubmitOutcome,
};

use crate::theme;
use crate::ui_widgets::{
    caption, section_separator, stat_row_colored, themed_button, themed_button_primary,
    themed_subheading,
};

/// Quick actions in button order. ExecuteOverride goes through the form.
const QUICK_ACTIONS: [ControlAction; 4] = [
    ControlAction::EmergencyStopAll,
    ControlAction::PriorityClearTrack,
    ControlAction::AutoReroute,
    ControlAction::ResumeSchedule,
];

pub fn overrides_panel_ui(
    mut contexts: EguiContexts,
    mut desk: ResMut<OverrideDesk>,
    clock: Res<OpsClock>,
    mut actions: EventWriter<ControlActionEvent>,
    mut notices: EventWriter<NoticeEvent>,
) {
    egui::Window::new("Manual Overrides")
        .default_pos((12.0, 544.0))
        .default_width(330.0)
        .show(contexts.ctx_mut(), |ui| {
            let lock_color = match desk.lock {
                LockState::Locked => theme::ERROR,
                LockState::Unlocked => theme::SUCCESS,
            };
            ui.horizontal(|ui| {
                stat_row_colored(ui, "Desk", desk.lock.label(), lock_color);
                let toggle_label = match desk.lock {
                    LockState::Locked => "Unlock",
                    LockState::Unlocked => "Lock",
                };
                if themed_button(ui, toggle_label).clicked() {
                    desk.toggle_lock();
                }
            });
            section_separator(ui);

            themed_subheading(ui, "New Override");
            ui.add_enabled_ui(desk.lock == LockState::Unlocked, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut desk.draft.target).hint_text("Train ID"),
                );
                egui::ComboBox::from_id_salt("override_kind")
                    .selected_text(desk.draft.kind.label())
                    .show_ui(ui, |ui| {
                        for kind in OverrideKind::ALL {
                            ui.selectable_value(&mut desk.draft.kind, kind, kind.label());
                        }
                    });
                ui.add(egui::TextEdit::singleline(&mut desk.draft.value).hint_text("Value"));
                ui.add(
                    egui::Slider::new(&mut desk.draft.duration_min, 1..=120).suffix(" min"),
                );
            });
            // Stays clickable while locked so the denial notice can fire.
            if themed_button_primary(ui, "Execute Override").clicked() {
                match desk.submit(&clock) {
                    SubmitOutcome::Locked => {
                        notices.send(locked_notice());
                    }
                    SubmitOutcome::Created | SubmitOutcome::MissingFields => {}
                }
            }
            section_separator(ui);

            themed_subheading(ui, "Quick Actions");
            ui.horizontal_wrapped(|ui| {
                for action in QUICK_ACTIONS {
                    if themed_button(ui, action.label()).clicked() {
                        actions.send(ControlActionEvent(action));
                    }
                }
            });
            section_separator(ui);

            themed_subheading(ui, "Active Overrides");
            if desk.overrides.is_empty() {
                caption(ui, "No overrides in effect.");
            }

            let mut pending_cancel: Option<u64> = None;
            for issued in &desk.overrides {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&issued.target)
                            .color(theme::TEXT_HEADING)
                            .strong(),
                    );
                    ui.label(format!("{}: {}", issued.kind.label(), issued.value));
                    ui.label(
                        egui::RichText::new(format_duration(issued.duration_min))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                    if themed_button(ui, "Cancel").clicked() {
                        pending_cancel = Some(issued.id);
                    }
                });
                caption(
                    ui,
                    &format!(
                        "{} at {}",
                        issued.operator,
                        format_stamp(issued.day, issued.hour)
                    ),
                );
            }
            if let Some(id) = pending_cancel {
                desk.cancel(id);
            }
        });
}
