//! System switchboard.
//!
//! Three master toggles plus the ungated quick actions. Unlike the manual
//! override desk these never consult the lock; each quick action just
//! confirms itself through the notice queue.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::notices::NoticeEvent;
use crate::SimulationSet;

// ===========================================================================
// Types
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwitchId {
    AutoSignalControl,
    EmergencyBrakeSystem,
    TrackMonitoring,
}

impl SwitchId {
    pub fn label(self) -> &'static str {
        match self {
            SwitchId::AutoSignalControl => "Auto Signal Control",
            SwitchId::EmergencyBrakeSystem => "Emergency Brake System",
            SwitchId::TrackMonitoring => "Track Monitoring",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SystemToggle {
    pub id: SwitchId,
    pub enabled: bool,
}

/// Quick actions along the bottom of the switchboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchboardAction {
    EmergencyStop,
    SystemReset,
    MaintenanceMode,
    ResumeOperations,
}

impl SwitchboardAction {
    pub const ALL: [SwitchboardAction; 4] = [
        SwitchboardAction::EmergencyStop,
        SwitchboardAction::SystemReset,
        SwitchboardAction::MaintenanceMode,
        SwitchboardAction::ResumeOperations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SwitchboardAction::EmergencyStop => "Emergency Stop",
            SwitchboardAction::SystemReset => "System Reset",
            SwitchboardAction::MaintenanceMode => "Maintenance Mode",
            SwitchboardAction::ResumeOperations => "Resume Operations",
        }
    }

    /// Confirmation text for the notice queue.
    pub fn message(self) -> &'static str {
        match self {
            SwitchboardAction::EmergencyStop => {
                "Emergency stop engaged across all active systems."
            }
            SwitchboardAction::SystemReset => {
                "All systems reset to nominal configuration."
            }
            SwitchboardAction::MaintenanceMode => {
                "Maintenance mode activated. Non-essential systems paused."
            }
            SwitchboardAction::ResumeOperations => "Normal operations resumed.",
        }
    }
}

/// Fired by the switchboard panel when a quick action button is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchboardActionEvent(pub SwitchboardAction);

// ===========================================================================
// Resources
// ===========================================================================

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SystemSwitchboard {
    pub toggles: Vec<SystemToggle>,
}

impl Default for SystemSwitchboard {
    fn default() -> Self {
        Self {
            toggles: [
                SwitchId::AutoSignalControl,
                SwitchId::EmergencyBrakeSystem,
                SwitchId::TrackMonitoring,
            ]
            .into_iter()
            .map(|id| SystemToggle { id, enabled: true })
            .collect(),
        }
    }
}

impl SystemSwitchboard {
    pub fn toggle(&mut self, id: SwitchId) {
        if let Some(entry) = self.toggles.iter_mut().find(|t| t.id == id) {
            entry.enabled = !entry.enabled;
        }
    }

    pub fn is_enabled(&self, id: SwitchId) -> bool {
        self.toggles
            .iter()
            .find(|t| t.id == id)
            .is_some_and(|t| t.enabled)
    }
}

// ===========================================================================
// Systems
// ===========================================================================

/// Turn each quick action into a confirmation notice.
pub fn apply_switchboard_actions(
    mut events: EventReader<SwitchboardActionEvent>,
    mut notices: EventWriter<NoticeEvent>,
) {
    for SwitchboardActionEvent(action) in events.read() {
        info!("Switchboard action: {}", action.label());
        notices.send(NoticeEvent {
            title: action.label().to_string(),
            body: action.message().to_string(),
        });
    }
}

// ===========================================================================
// Plugin
// ===========================================================================

pub struct SwitchboardPlugin;

impl Plugin for SwitchboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SystemSwitchboard>()
            .add_event::<SwitchboardActionEvent>()
            .add_systems(
                FixedUpdate,
                apply_switchboard_actions.in_set(SimulationSet::Panels),
            );
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_toggles_start_enabled() {
        let board = SystemSwitchboard::default();
        assert_eq!(board.toggles.len(), 3);
        assert!(board.is_enabled(SwitchId::AutoSignalControl));
        assert!(board.is_enabled(SwitchId::EmergencyBrakeSystem));
        assert!(board.is_enabled(SwitchId::TrackMonitoring));
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut board = SystemSwitchboard::default();
        board.toggle(SwitchId::EmergencyBrakeSystem);

        assert!(board.is_enabled(SwitchId::AutoSignalControl));
        assert!(!board.is_enabled(SwitchId::EmergencyBrakeSystem));
        assert!(board.is_enabled(SwitchId::TrackMonitoring));

        board.toggle(SwitchId::EmergencyBrakeSystem);
        assert!(board.is_enabled(SwitchId::EmergencyBrakeSystem));
    }

    #[test]
    fn test_action_messages_are_distinct() {
        for (i, a) in SwitchboardAction::ALL.into_iter().enumerate() {
            assert!(!a.message().is_empty());
            for b in SwitchboardAction::ALL.into_iter().skip(i + 1) {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
