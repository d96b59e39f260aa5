//! Network KPI board.
//!
//! Four headline figures with a trend-since-last-refresh delta. Values
//! wander on a timer; percent figures stay pinned to 0-100 so gauges
//! never overrun.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim_rng::SimRng;
use crate::TickCounter;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One headline figure on the KPI board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: f32,
    pub unit: String,
    /// Percent figures render with a gauge and clamp to 0-100.
    pub percent: bool,
    /// Signed delta shown next to the value.
    pub change: f32,
}

impl Kpi {
    /// Value formatted for display, whole numbers without a decimal.
    pub fn formatted_value(&self) -> String {
        if self.value.fract().abs() < f32::EPSILON {
            format!("{:.0}", self.value)
        } else {
            format!("{:.1}", self.value)
        }
    }

    /// Gauge fill for percent figures.
    pub fn gauge_fraction(&self) -> f32 {
        (self.value / 100.0).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Figures refresh every N ticks (5 seconds at the 10 Hz fixed tick).
pub(crate) const REFRESH_INTERVAL_TICKS: u64 = 50;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct KpiBoard {
    pub kpis: Vec<Kpi>,
}

fn kpi(label: &str, value: f32, unit: &str, percent: bool, change: f32) -> Kpi {
    Kpi {
        label: label.to_string(),
        value,
        unit: unit.to_string(),
        percent,
        change,
    }
}

impl Default for KpiBoard {
    fn default() -> Self {
        Self {
            kpis: vec![
                kpi("Active Trains", 12.0, "", false, 8.3),
                kpi("Average Speed", 87.0, "km/h", false, 2.1),
                kpi("On-Time Performance", 94.2, "%", true, -1.2),
                kpi("System Health", 98.7, "%", true, 0.5),
            ],
        }
    }
}

impl KpiBoard {
    /// One refresh step. The train count re-rolls in 10..13; the rest
    /// drift by up to one unit either way.
    pub fn refresh(&mut self, rng: &mut impl Rng) {
        for kpi in &mut self.kpis {
            if kpi.label == "Active Trains" {
                kpi.value = rng.gen_range(10..13) as f32;
            } else {
                kpi.value += (rng.gen::<f32>() - 0.5) * 2.0;
                if kpi.percent {
                    kpi.value = kpi.value.clamp(0.0, 100.0);
                }
            }
            kpi.change = (rng.gen::<f32>() - 0.5) * 5.0;
        }
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Every 5 seconds, let the figures wander.
pub fn update_kpis(
    tick: Res<TickCounter>,
    mut rng: ResMut<SimRng>,
    mut board: ResMut<KpiBoard>,
) {
    if !tick.0.is_multiple_of(REFRESH_INTERVAL_TICKS) {
        return;
    }
    board.refresh(&mut rng.0);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct MetricsPlugin;

impl Plugin for MetricsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KpiBoard>();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
