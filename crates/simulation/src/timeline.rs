//! Departure timeline board.
//!
//! Ordered list of schedule events the operator can reorder by drag. The
//! first manual edit of a session (reorder or delay injection) snapshots
//! the pre-edit order and enters simulation mode; while in simulation mode
//! the periodic drift mutator leaves the board alone so manual edits are
//! not overwritten. Reset restores the snapshot and leaves simulation mode.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim_rng::SimRng;
use crate::TickCounter;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Completed,
    Delayed,
    OnTime,
    Cancelled,
}

impl EventStatus {
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Completed => "COMPLETED",
            EventStatus::Delayed => "DELAYED",
            EventStatus::OnTime => "ON TIME",
            EventStatus::Cancelled => "CANCELLED",
        }
    }
}

/// A single departure on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Unique ID within the board.
    pub id: u64,
    pub train: String,
    pub station: String,
    /// Timetable slot, "HH:MM".
    pub scheduled: String,
    /// Recorded time for events that already ran.
    pub actual: Option<String>,
    /// Projection for events still ahead.
    pub estimated: Option<String>,
    pub status: EventStatus,
    pub delay_min: u32,
    /// Index the event held in the seeded timetable; survives reorders.
    pub original_position: usize,
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// Stable move of one element from `from` to `to`; every other element keeps
/// its relative order. Out-of-range indices and `from == to` are no-ops.
pub fn move_element<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Add minutes to an "HH:MM" string, wrapping past midnight.
/// Anything unparsable is returned unchanged.
pub fn add_minutes(hhmm: &str, minutes: u32) -> String {
    let Some((h, m)) = hhmm.split_once(':') else {
        return hhmm.to_string();
    };
    let (Ok(h), Ok(m)) = (h.parse::<u32>(), m.parse::<u32>()) else {
        return hhmm.to_string();
    };
    let total = h * 60 + m + minutes;
    format!("{:02}:{:02}", (total / 60) % 24, total % 60)
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The drift mutator runs every N ticks (10 seconds at the 10 Hz fixed tick).
pub(crate) const DRIFT_INTERVAL_TICKS: u64 = 100;

/// Chance per drift pass that an on-time event slips.
pub(crate) const DRIFT_PROBABILITY: f32 = 0.2;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBoard {
    pub events: Vec<TimelineEvent>,
    /// True once the operator has edited the board this session.
    pub simulation_mode: bool,
    /// Order captured at the first manual edit, restored by reset.
    original_order: Option<Vec<TimelineEvent>>,
}

impl Default for ScheduleBoard {
    fn default() -> Self {
        Self {
            events: vec![
                TimelineEvent {
                    id: 1,
                    train: "TR-001".to_string(),
                    station: "Central Station".to_string(),
                    scheduled: "14:30".to_string(),
                    actual: Some("14:30".to_string()),
                    estimated: None,
                    status: EventStatus::Completed,
                    delay_min: 0,
                    original_position: 0,
                },
                TimelineEvent {
                    id: 2,
                    train: "TR-001".to_string(),
                    station: "Junction Alpha".to_string(),
                    scheduled: "14:45".to_string(),
                    actual: Some("14:47".to_string()),
                    estimated: None,
                    status: EventStatus::Delayed,
                    delay_min: 2,
                    original_position: 1,
                },
                TimelineEvent {
                    id: 3,
                    train: "TR-001".to_string(),
                    station: "South Bridge".to_string(),
                    scheduled: "15:00".to_string(),
                    actual: None,
                    estimated: Some("15:02".to_string()),
                    status: EventStatus::OnTime,
                    delay_min: 0,
                    original_position: 2,
                },
                TimelineEvent {
                    id: 4,
                    train: "TR-002".to_string(),
                    station: "North Terminal".to_string(),
                    scheduled: "15:15".to_string(),
                    actual: None,
                    estimated: Some("15:20".to_string()),
                    status: EventStatus::Delayed,
                    delay_min: 5,
                    original_position: 3,
                },
            ],
            simulation_mode: false,
            original_order: None,
        }
    }
}

impl ScheduleBoard {
    /// Snapshot the current order on the first edit and flag simulation mode.
    fn enter_simulation_mode(&mut self) {
        if self.original_order.is_none() {
            self.original_order = Some(self.events.clone());
        }
        self.simulation_mode = true;
    }

    /// Operator drag: stable move from `from` to `to`. The first reorder of
    /// a session snapshots the pre-edit order.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.events.len() || to >= self.events.len() {
            return;
        }
        self.enter_simulation_mode();
        move_element(&mut self.events, from, to);
    }

    /// Operator "simulate delay" on one event: injects a 5-14 minute slip
    /// and reprojects the estimate. Unknown ids are ignored.
    pub fn inject_delay(&mut self, id: u64, rng: &mut impl Rng) {
        let Some(idx) = self.events.iter().position(|e| e.id == id) else {
            return;
        };
        self.enter_simulation_mode();
        let delay = rng.gen_range(5..15);
        let event = &mut self.events[idx];
        event.status = EventStatus::Delayed;
        event.delay_min = delay;
        event.estimated = Some(add_minutes(&event.scheduled, delay));
    }

    /// Restore the snapshot taken at the first edit and leave simulation
    /// mode. Without a snapshot this only clears the mode flag.
    pub fn reset_to_original(&mut self) {
        if let Some(original) = self.original_order.take() {
            self.events = original;
        }
        self.simulation_mode = false;
    }

    /// Background drift: each on-time event has a small chance to slip 1-3
    /// minutes per pass. Suspension during simulation mode is handled by the
    /// calling system.
    pub fn drift(&mut self, rng: &mut impl Rng) {
        for event in &mut self.events {
            if event.status != EventStatus::OnTime {
                continue;
            }
            if rng.gen::<f32>() >= DRIFT_PROBABILITY {
                continue;
            }
            let delay = rng.gen_range(1..=3);
            event.status = EventStatus::Delayed;
            event.delay_min = delay;
            event.estimated = Some(add_minutes(&event.scheduled, delay));
        }
    }

    /// Share of events that are on time or already completed, 0.0-1.0.
    pub fn on_time_share(&self) -> f32 {
        if self.events.is_empty() {
            return 0.0;
        }
        let good = self
            .events
            .iter()
            .filter(|e| matches!(e.status, EventStatus::OnTime | EventStatus::Completed))
            .count();
        good as f32 / self.events.len() as f32
    }

    /// Mean delay across the board in minutes.
    pub fn average_delay_min(&self) -> f32 {
        if self.events.is_empty() {
            return 0.0;
        }
        let total: u32 = self.events.iter().map(|e| e.delay_min).sum();
        total as f32 / self.events.len() as f32
    }

    /// Minutes of delay added relative to the snapshot; 0 outside
    /// simulation mode.
    pub fn net_impact_min(&self) -> i64 {
        let Some(original) = &self.original_order else {
            return 0;
        };
        let now: i64 = self.events.iter().map(|e| e.delay_min as i64).sum();
        let then: i64 = original.iter().map(|e| e.delay_min as i64).sum();
        now - then
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Every 10 seconds, let on-time departures slip, unless the operator is
/// mid-edit (simulation mode suspends drift).
pub fn update_timeline_drift(
    tick: Res<TickCounter>,
    mut rng: ResMut<SimRng>,
    mut board: ResMut<ScheduleBoard>,
) {
    if !tick.0.is_multiple_of(DRIFT_INTERVAL_TICKS) {
        return;
    }
    if board.simulation_mode {
        return;
    }
    board.drift(&mut rng.0);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct TimelinePlugin;

impl Plugin for TimelinePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScheduleBoard>();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
