//! Live network map state.
//!
//! Train markers do a bounded random walk across the map canvas to fake
//! live telemetry; stations are fixed. Selection and zoom are view state
//! and live with the map panel, not here.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim_rng::SimRng;
use crate::TickCounter;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapTrainStatus {
    Normal,
    Delayed,
    Maintenance,
}

impl MapTrainStatus {
    pub fn label(self) -> &'static str {
        match self {
            MapTrainStatus::Normal => "NORMAL",
            MapTrainStatus::Delayed => "DELAYED",
            MapTrainStatus::Maintenance => "MAINTENANCE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationKind {
    Terminal,
    Junction,
    Platform,
}

impl StationKind {
    pub fn label(self) -> &'static str {
        match self {
            StationKind::Terminal => "Terminal",
            StationKind::Junction => "Junction",
            StationKind::Platform => "Platform",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationStatus {
    Normal,
    Congested,
    Closed,
}

impl StationStatus {
    pub fn label(self) -> &'static str {
        match self {
            StationStatus::Normal => "NORMAL",
            StationStatus::Congested => "CONGESTED",
            StationStatus::Closed => "CLOSED",
        }
    }
}

/// A train marker in map coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTrain {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Degrees, 0 pointing right.
    pub heading: f32,
    /// km/h; also scales the walk step.
    pub speed: f32,
    pub status: MapTrainStatus,
}

/// A fixed station marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapStation {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub kind: StationKind,
    pub status: StationStatus,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The walk runs every N ticks (1 second at the 10 Hz fixed tick).
pub(crate) const WALK_INTERVAL_TICKS: u64 = 10;

/// Map-space bounds the walk clamps to; the canvas itself is 500 x 340.
pub const MAP_MIN_X: f32 = 20.0;
pub const MAP_MAX_X: f32 = 480.0;
pub const MAP_MIN_Y: f32 = 20.0;
pub const MAP_MAX_Y: f32 = 320.0;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct NetworkMap {
    pub trains: Vec<MapTrain>,
    pub stations: Vec<MapStation>,
}

impl Default for NetworkMap {
    fn default() -> Self {
        Self {
            trains: vec![
                MapTrain {
                    id: "TR-001".to_string(),
                    x: 150.0,
                    y: 100.0,
                    heading: 45.0,
                    speed: 95.0,
                    status: MapTrainStatus::Normal,
                },
                MapTrain {
                    id: "TR-002".to_string(),
                    x: 300.0,
                    y: 180.0,
                    heading: 135.0,
                    speed: 72.0,
                    status: MapTrainStatus::Delayed,
                },
                MapTrain {
                    id: "TR-003".to_string(),
                    x: 80.0,
                    y: 250.0,
                    heading: 0.0,
                    speed: 0.0,
                    status: MapTrainStatus::Maintenance,
                },
                MapTrain {
                    id: "TR-004".to_string(),
                    x: 420.0,
                    y: 120.0,
                    heading: 270.0,
                    speed: 88.0,
                    status: MapTrainStatus::Normal,
                },
            ],
            stations: vec![
                MapStation {
                    name: "Central Station".to_string(),
                    x: 200.0,
                    y: 150.0,
                    kind: StationKind::Terminal,
                    status: StationStatus::Normal,
                },
                MapStation {
                    name: "North Junction".to_string(),
                    x: 350.0,
                    y: 80.0,
                    kind: StationKind::Junction,
                    status: StationStatus::Congested,
                },
                MapStation {
                    name: "South Station".to_string(),
                    x: 150.0,
                    y: 300.0,
                    kind: StationKind::Platform,
                    status: StationStatus::Normal,
                },
                MapStation {
                    name: "East Terminal".to_string(),
                    x: 450.0,
                    y: 200.0,
                    kind: StationKind::Terminal,
                    status: StationStatus::Normal,
                },
                MapStation {
                    name: "West Yard".to_string(),
                    x: 50.0,
                    y: 180.0,
                    kind: StationKind::Platform,
                    status: StationStatus::Closed,
                },
            ],
        }
    }
}

impl NetworkMap {
    /// One walk step: every non-maintenance train advances along its
    /// heading (scaled by speed), clamped to the map bounds, and the
    /// heading wanders by up to +/-5 degrees.
    pub fn walk(&mut self, rng: &mut impl Rng) {
        for train in &mut self.trains {
            if train.status == MapTrainStatus::Maintenance {
                continue;
            }
            let step = train.speed / 100.0;
            let radians = train.heading.to_radians();
            train.x = (train.x + radians.cos() * step).clamp(MAP_MIN_X, MAP_MAX_X);
            train.y = (train.y + radians.sin() * step).clamp(MAP_MIN_Y, MAP_MAX_Y);
            train.heading =
                (train.heading + (rng.gen::<f32>() - 0.5) * 10.0).rem_euclid(360.0);
        }
    }

    pub fn train(&self, id: &str) -> Option<&MapTrain> {
        self.trains.iter().find(|t| t.id == id)
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Every second, advance the train markers.
pub fn update_network_map(
    tick: Res<TickCounter>,
    mut rng: ResMut<SimRng>,
    mut map: ResMut<NetworkMap>,
) {
    if !tick.0.is_multiple_of(WALK_INTERVAL_TICKS) {
        return;
    }
    map.walk(&mut rng.0);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct NetworkMapPlugin;

impl Plugin for NetworkMapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NetworkMap>();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
