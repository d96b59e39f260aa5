//! System alert board.
//!
//! Holds the ordered list of operational alerts shown in the alerts panel.
//! Alerts are seeded at startup and only change through operator action
//! (acknowledge, dismiss) or when another panel raises a new one; there is
//! no background mutation timer on this board.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::clock::OpsClock;

// =============================================================================
// Types
// =============================================================================

/// Alert severity, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "CRITICAL",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Info => "INFO",
        }
    }
}

/// A single operational alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique ID within the board.
    pub id: u64,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    /// Service day the alert was raised.
    pub day: u32,
    /// Service hour the alert was raised.
    pub hour: f32,
    /// Set by the operator; acknowledged alerts stay listed until dismissed.
    pub acknowledged: bool,
}

// =============================================================================
// AlertBoard Resource
// =============================================================================

/// Ordered alert collection, newest concerns first.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AlertBoard {
    pub alerts: Vec<Alert>,
    next_id: u64,
}

impl Default for AlertBoard {
    fn default() -> Self {
        // Sample records from the shift leading up to the session start.
        Self {
            alerts: vec![
                Alert {
                    id: 1,
                    severity: AlertSeverity::Critical,
                    title: "Signal Failure".to_string(),
                    message: "Signal malfunction detected at Junction B-2".to_string(),
                    day: 1,
                    hour: 13.0 + 40.0 / 60.0,
                    acknowledged: false,
                },
                Alert {
                    id: 2,
                    severity: AlertSeverity::Warning,
                    title: "Speed Limit Exceeded".to_string(),
                    message: "Train TR-002 exceeding speed limit in Section A-1".to_string(),
                    day: 1,
                    hour: 13.0 + 33.0 / 60.0,
                    acknowledged: false,
                },
                Alert {
                    id: 3,
                    severity: AlertSeverity::Info,
                    title: "Maintenance Scheduled".to_string(),
                    message: "Routine maintenance planned for Section C-1 at 14:00".to_string(),
                    day: 1,
                    hour: 13.25,
                    acknowledged: true,
                },
            ],
            next_id: 4,
        }
    }
}

impl AlertBoard {
    /// Raise a new alert at the front of the board.
    pub fn raise(
        &mut self,
        severity: AlertSeverity,
        title: &str,
        message: &str,
        clock: &OpsClock,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.insert(
            0,
            Alert {
                id,
                severity,
                title: title.to_string(),
                message: message.to_string(),
                day: clock.day,
                hour: clock.hour,
                acknowledged: false,
            },
        );
        id
    }

    /// Mark an alert acknowledged. Unknown ids are ignored.
    pub fn acknowledge(&mut self, id: u64) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.acknowledged = true;
        }
    }

    /// Remove an alert from the board. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.alerts.retain(|a| a.id != id);
    }

    /// Count feeding the header badge.
    pub fn unacknowledged_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.acknowledged).count()
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct AlertsPlugin;

impl Plugin for AlertsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AlertBoard>();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let board = AlertBoard::default();
        assert_eq!(board.alerts.len(), 3);
        assert_eq!(board.unacknowledged_count(), 2);
    }

    #[test]
    fn test_acknowledge_only_sets_flag() {
        let mut board = AlertBoard::default();
        let before = board.alerts[0].clone();
        assert_eq!(before.severity, AlertSeverity::Critical);

        board.acknowledge(before.id);

        let after = &board.alerts[0];
        assert!(after.acknowledged);
        assert_eq!(after.title, before.title);
        assert_eq!(after.message, before.message);
        assert_eq!(after.severity, before.severity);
        assert_eq!(after.day, before.day);
        assert_eq!(board.alerts.len(), 3);
        assert_eq!(board.unacknowledged_count(), 1);
    }

    #[test]
    fn test_dismiss_removes_exactly_one() {
        let mut board = AlertBoard::default();
        board.dismiss(2);
        assert_eq!(board.alerts.len(), 2);
        assert!(board.alerts.iter().all(|a| a.id != 2));
    }

    #[test]
    fn test_acknowledge_unknown_id_is_noop() {
        let mut board = AlertBoard::default();
        board.acknowledge(999);
        assert_eq!(board.unacknowledged_count(), 2);
    }

    #[test]
    fn test_raise_prepends_unacknowledged() {
        let mut board = AlertBoard::default();
        let clock = OpsClock::default();
        let id = board.raise(
            AlertSeverity::Critical,
            "Emergency Stop",
            "All trains halted by operator",
            &clock,
        );

        assert_eq!(board.alerts.len(), 4);
        assert_eq!(board.alerts[0].id, id);
        assert!(!board.alerts[0].acknowledged);
        assert_eq!(board.unacknowledged_count(), 3);
    }

    #[test]
    fn test_raised_ids_stay_unique() {
        let mut board = AlertBoard::default();
        let clock = OpsClock::default();
        for _ in 0..5 {
            board.raise(AlertSeverity::Info, "t", "m", &clock);
        }
        let mut ids: Vec<u64> = board.alerts.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), board.alerts.len());
    }
}
