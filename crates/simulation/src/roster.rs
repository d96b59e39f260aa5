//! Fleet roster.
//!
//! Static status cards for the tracked trains. Nothing here mutates at
//! runtime; the map and occupancy boards carry the live motion.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterStatus {
    OnTime,
    Delayed,
    Maintenance,
}

impl RosterStatus {
    pub fn label(self) -> &'static str {
        match self {
            RosterStatus::OnTime => "ON TIME",
            RosterStatus::Delayed => "DELAYED",
            RosterStatus::Maintenance => "MAINTENANCE",
        }
    }
}

/// One card on the roster panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSummary {
    pub id: String,
    pub status: RosterStatus,
    /// Current speed in km/h.
    pub speed: f32,
    pub section: String,
    pub next_station: String,
    pub delay_min: u32,
}

impl TrainSummary {
    /// Speed bar fill against the 120 km/h line limit.
    pub fn speed_fraction(&self) -> f32 {
        (self.speed / 120.0).min(1.0)
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TrainRoster {
    pub trains: Vec<TrainSummary>,
}

impl Default for TrainRoster {
    fn default() -> Self {
        Self {
            trains: vec![
                TrainSummary {
                    id: "TR-001".to_string(),
                    status: RosterStatus::OnTime,
                    speed: 95.0,
                    section: "Section A-2".to_string(),
                    next_station: "Central Station".to_string(),
                    delay_min: 0,
                },
                TrainSummary {
                    id: "TR-002".to_string(),
                    status: RosterStatus::Delayed,
                    speed: 72.0,
                    section: "Section B-1".to_string(),
                    next_station: "North Junction".to_string(),
                    delay_min: 5,
                },
                TrainSummary {
                    id: "TR-003".to_string(),
                    status: RosterStatus::Maintenance,
                    speed: 0.0,
                    section: "Depot".to_string(),
                    next_station: "Maintenance Bay".to_string(),
                    delay_min: 0,
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct RosterPlugin;

impl Plugin for RosterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrainRoster>();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
