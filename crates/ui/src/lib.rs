//! egui panel layer for the operations dashboard.
//!
//! Every panel is a thin render-plus-input system over the resources in
//! the simulation crate; no dashboard state lives on this side except
//! per-panel view state like map selection and zoom.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod alerts_panel;
pub mod header_bar;
pub mod map_panel;
pub mod metrics_panel;
pub mod notice_modal;
pub mod occupancy_panel;
pub mod overrides_panel;
pub mod roster_panel;
pub mod scenario_panel;
pub mod suggestions_panel;
pub mod switchboard_panel;
pub mod theme;
pub mod timeline_panel;
pub mod ui_widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<map_panel::MapViewState>()
            .add_systems(Startup, theme::apply_control_room_theme)
            .add_systems(
                Update,
                (
                    header_bar::header_bar_ui,
                    map_panel::map_panel_ui,
                    timeline_panel::timeline_panel_ui,
                    metrics_panel::metrics_panel_ui,
                    roster_panel::roster_panel_ui,
                    alerts_panel::alerts_panel_ui,
                ),
            )
            .add_systems(
                Update,
                (
                    suggestions_panel::suggestions_panel_ui,
                    overrides_panel::overrides_panel_ui,
                    scenario_panel::scenario_panel_ui,
                    occupancy_panel::occupancy_panel_ui,
                    switchboard_panel::switchboard_panel_ui,
                    notice_modal::notice_modal_ui,
                ),
            );
    }
}
