//! Manual override desk.
//!
//! The desk gates every manual control action behind an explicit
//! LOCKED/UNLOCKED state machine. Each state declares the set of actions it
//! permits; denied actions surface a blocking notice rather than silently
//! dropping. Re-locking clears the in-progress override form so a stale
//! draft can't be submitted after the desk changes hands.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::alerts::{AlertBoard, AlertSeverity};
use crate::clock::OpsClock;
use crate::notices::NoticeEvent;
use crate::SimulationSet;

// ---------------------------------------------------------------------------
// Lock state machine
// ---------------------------------------------------------------------------

/// Every manual control action the desk can gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Submit the override form.
    ExecuteOverride,
    /// Halt all active trains.
    EmergencyStopAll,
    /// Flush a track section for a priority service.
    PriorityClearTrack,
    /// Let the system reroute around blockages on its own.
    AutoReroute,
    /// Return to the published timetable.
    ResumeSchedule,
}

impl ControlAction {
    /// Button label for this action.
    pub fn label(self) -> &'static str {
        match self {
            ControlAction::ExecuteOverride => "Execute Override",
            ControlAction::EmergencyStopAll => "Emergency Stop All",
            ControlAction::PriorityClearTrack => "Priority Clear Track",
            ControlAction::AutoReroute => "Auto Reroute",
            ControlAction::ResumeSchedule => "Resume Schedule",
        }
    }
}

/// Two-state gate over the desk. The permitted-action sets are declared
/// here, not scattered through the panel code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

impl LockState {
    /// Whether `action` may run in this state. Locked still allows the
    /// hands-off actions that return control to the automatic systems.
    pub fn permits(self, action: ControlAction) -> bool {
        match self {
            LockState::Unlocked => true,
            LockState::Locked => matches!(
                action,
                ControlAction::AutoReroute | ControlAction::ResumeSchedule
            ),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LockState::Locked => LockState::Unlocked,
            LockState::Unlocked => LockState::Locked,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LockState::Locked => "LOCKED",
            LockState::Unlocked => "UNLOCKED",
        }
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverrideKind {
    Speed,
    Route,
    Signal,
    Priority,
}

impl OverrideKind {
    /// All kinds, in form dropdown order.
    pub const ALL: [OverrideKind; 4] = [
        OverrideKind::Speed,
        OverrideKind::Route,
        OverrideKind::Signal,
        OverrideKind::Priority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OverrideKind::Speed => "Speed",
            OverrideKind::Route => "Route",
            OverrideKind::Signal => "Signal",
            OverrideKind::Priority => "Priority",
        }
    }
}

/// An issued override, listed until the operator cancels it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Override {
    /// Unique ID within the desk.
    pub id: u64,
    /// Free text; not validated against any train registry.
    pub target: String,
    pub kind: OverrideKind,
    pub value: String,
    pub duration_min: u32,
    pub active: bool,
    pub operator: String,
    pub day: u32,
    pub hour: f32,
}

/// In-progress form state for the next override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideDraft {
    pub target: String,
    pub kind: OverrideKind,
    pub value: String,
    pub duration_min: u32,
}

impl Default for OverrideDraft {
    fn default() -> Self {
        Self {
            target: String::new(),
            kind: OverrideKind::Speed,
            value: String::new(),
            duration_min: 5,
        }
    }
}

/// Result of a form submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// Target or value was empty; silently ignored per the form contract.
    MissingFields,
    /// The desk is locked; surfaces a blocking notice.
    Locked,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The override desk: lock gate, form draft, and active overrides.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct OverrideDesk {
    pub lock: LockState,
    pub draft: OverrideDraft,
    pub overrides: Vec<Override>,
    next_id: u64,
}

impl Default for OverrideDesk {
    fn default() -> Self {
        Self {
            lock: LockState::Locked,
            draft: OverrideDraft::default(),
            overrides: vec![Override {
                id: 1,
                target: "TR-002".to_string(),
                kind: OverrideKind::Speed,
                value: "80 km/h".to_string(),
                duration_min: 15,
                active: true,
                operator: "Admin".to_string(),
                day: 1,
                hour: 13.5,
            }],
            next_id: 2,
        }
    }
}

impl OverrideDesk {
    /// Whether the current lock state permits `action`.
    pub fn permits(&self, action: ControlAction) -> bool {
        self.lock.permits(action)
    }

    /// Flip the lock. Entering LOCKED discards the form draft.
    pub fn toggle_lock(&mut self) {
        self.lock = self.lock.toggled();
        if self.lock == LockState::Locked {
            self.draft = OverrideDraft::default();
        }
    }

    /// Submit the current draft. On success the override is prepended and
    /// the draft resets for the next entry.
    pub fn submit(&mut self, clock: &OpsClock) -> SubmitOutcome {
        if !self.permits(ControlAction::ExecuteOverride) {
            return SubmitOutcome::Locked;
        }
        if self.draft.target.trim().is_empty() || self.draft.value.trim().is_empty() {
            return SubmitOutcome::MissingFields;
        }

        let id = self.next_id;
        self.next_id += 1;
        let draft = std::mem::take(&mut self.draft);
        self.overrides.insert(
            0,
            Override {
                id,
                target: draft.target,
                kind: draft.kind,
                value: draft.value,
                duration_min: draft.duration_min,
                active: true,
                operator: "Current User".to_string(),
                day: clock.day,
                hour: clock.hour,
            },
        );
        SubmitOutcome::Created
    }

    /// Cancel an issued override. Unknown ids are ignored.
    pub fn cancel(&mut self, id: u64) {
        self.overrides.retain(|o| o.id != id);
    }
}

/// "45m" under an hour, "1h 15m" from there up.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// The notice shown whenever the locked desk denies an action.
pub fn locked_notice() -> NoticeEvent {
    NoticeEvent {
        title: "Controls Locked".to_string(),
        body: "Manual override controls are locked. Unlock to proceed.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Quick actions
// ---------------------------------------------------------------------------

/// Sent by the UI when the operator hits a quick-action button.
#[derive(Event, Debug, Clone, Copy)]
pub struct ControlActionEvent(pub ControlAction);

/// Applies quick actions against the lock gate: denied actions queue the
/// locked notice, permitted ones post their confirmation (and an emergency
/// stop also lands on the alert board).
pub fn apply_control_actions(
    mut events: EventReader<ControlActionEvent>,
    desk: Res<OverrideDesk>,
    mut notices: EventWriter<NoticeEvent>,
    mut alerts: ResMut<AlertBoard>,
    clock: Res<OpsClock>,
) {
    for ControlActionEvent(action) in events.read() {
        if !desk.permits(*action) {
            warn!("quick action {:?} denied while desk is locked", action);
            notices.send(locked_notice());
            continue;
        }
        let body = match action {
            ControlAction::EmergencyStopAll => {
                alerts.raise(
                    AlertSeverity::Critical,
                    "Emergency Stop",
                    "All trains halted by operator command",
                    &clock,
                );
                "Emergency stop initiated for all active trains."
            }
            ControlAction::PriorityClearTrack => "Priority track clearance is in effect.",
            ControlAction::AutoReroute => "Automatic rerouting engaged for affected services.",
            ControlAction::ResumeSchedule => "Standard schedule resumed.",
            // The form path goes through OverrideDesk::submit, not here.
            ControlAction::ExecuteOverride => continue,
        };
        info!("quick action {:?} applied", action);
        notices.send(NoticeEvent {
            title: action.label().to_string(),
            body: body.to_string(),
        });
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct OverridesPlugin;

impl Plugin for OverridesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverrideDesk>()
            .add_event::<ControlActionEvent>()
            .add_systems(
                FixedUpdate,
                apply_control_actions.in_set(SimulationSet::Panels),
            );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_starts_locked() {
        let desk = OverrideDesk::default();
        assert_eq!(desk.lock, LockState::Locked);
        assert_eq!(desk.overrides.len(), 1);
    }

    #[test]
    fn test_locked_permits_exactly_hands_off_actions() {
        let lock = LockState::Locked;
        assert!(lock.permits(ControlAction::AutoReroute));
        assert!(lock.permits(ControlAction::ResumeSchedule));
        assert!(!lock.permits(ControlAction::ExecuteOverride));
        assert!(!lock.permits(ControlAction::EmergencyStopAll));
        assert!(!lock.permits(ControlAction::PriorityClearTrack));
    }

    #[test]
    fn test_unlocked_permits_everything() {
        let lock = LockState::Unlocked;
        assert!(lock.permits(ControlAction::ExecuteOverride));
        assert!(lock.permits(ControlAction::EmergencyStopAll));
        assert!(lock.permits(ControlAction::PriorityClearTrack));
        assert!(lock.permits(ControlAction::AutoReroute));
        assert!(lock.permits(ControlAction::ResumeSchedule));
    }

    #[test]
    fn test_submit_while_locked_adds_nothing() {
        let mut desk = OverrideDesk::default();
        desk.draft.target = "TR-001".to_string();
        desk.draft.value = "60 km/h".to_string();

        let outcome = desk.submit(&OpsClock::default());
        assert_eq!(outcome, SubmitOutcome::Locked);
        assert_eq!(desk.overrides.len(), 1);
    }

    #[test]
    fn test_submit_missing_fields_is_silent_noop() {
        let mut desk = OverrideDesk::default();
        desk.toggle_lock();
        desk.draft.target = "TR-001".to_string();
        desk.draft.value = "   ".to_string();

        let outcome = desk.submit(&OpsClock::default());
        assert_eq!(outcome, SubmitOutcome::MissingFields);
        assert_eq!(desk.overrides.len(), 1);
    }

    #[test]
    fn test_submit_prepends_and_resets_draft() {
        let mut desk = OverrideDesk::default();
        desk.toggle_lock();
        desk.draft.target = "TR-004".to_string();
        desk.draft.kind = OverrideKind::Signal;
        desk.draft.value = "Hold at red".to_string();
        desk.draft.duration_min = 20;

        let outcome = desk.submit(&OpsClock::default());
        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(desk.overrides.len(), 2);

        let created = &desk.overrides[0];
        assert_eq!(created.target, "TR-004");
        assert_eq!(created.kind, OverrideKind::Signal);
        assert_eq!(created.operator, "Current User");
        assert!(created.active);
        assert_eq!(desk.draft, OverrideDraft::default());
    }

    #[test]
    fn test_relock_clears_draft() {
        let mut desk = OverrideDesk::default();
        desk.toggle_lock(); // unlock
        desk.draft.target = "TR-003".to_string();
        desk.draft.value = "Divert via C-1".to_string();

        desk.toggle_lock(); // re-lock
        assert_eq!(desk.lock, LockState::Locked);
        assert_eq!(desk.draft, OverrideDraft::default());
    }

    #[test]
    fn test_cancel_removes_by_id() {
        let mut desk = OverrideDesk::default();
        desk.cancel(1);
        assert!(desk.overrides.is_empty());
        desk.cancel(99); // unknown id is fine
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5), "5m");
        assert_eq!(format_duration(59), "59m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(75), "1h 15m");
        assert_eq!(format_duration(135), "2h 15m");
    }
}
