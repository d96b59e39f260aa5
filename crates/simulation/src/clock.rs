//! Service clock for the dashboard header.
//!
//! Purely presentational time: it advances with the fixed tick and is the
//! timestamp source for records created at runtime (overrides, notices).
//! It never drives mutation on its own -- interval gating uses
//! [`crate::TickCounter`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::SimulationSet;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct OpsClock {
    pub day: u32,
    pub hour: f32,
}

impl Default for OpsClock {
    fn default() -> Self {
        Self {
            day: 1,
            hour: 13.75, // shift start 13:45, just ahead of the seeded departures
        }
    }
}

impl OpsClock {
    /// Service minutes per fixed tick. One real second is one service minute.
    const MINUTES_PER_TICK: f32 = 0.1;

    pub fn tick(&mut self) {
        self.hour += Self::MINUTES_PER_TICK / 60.0;
        if self.hour >= 24.0 {
            self.hour -= 24.0;
            self.day += 1;
        }
    }

    /// "Day 1 13:45" -- used on record timestamps.
    pub fn formatted(&self) -> String {
        format_stamp(self.day, self.hour)
    }

    /// "13:45:36" -- header clock with seconds.
    pub fn formatted_hms(&self) -> String {
        let h = self.hour as u32;
        let total_secs = ((self.hour - h as f32) * 3600.0) as u32;
        format!("{:02}:{:02}:{:02}", h, total_secs / 60, total_secs % 60)
    }
}

/// Format a stored day/hour pair the way [`OpsClock::formatted`] does.
/// Records keep their creation stamp as raw day + fractional hour.
pub fn format_stamp(day: u32, hour: f32) -> String {
    let h = hour as u32;
    let m = ((hour - h as f32) * 60.0) as u32;
    format!("Day {} {:02}:{:02}", day, h, m)
}

pub fn tick_ops_clock(mut clock: ResMut<OpsClock>) {
    clock.tick();
}

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OpsClock>()
            .add_systems(FixedUpdate, tick_ops_clock.in_set(SimulationSet::Tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_wraps_at_24h() {
        let mut clock = OpsClock {
            day: 1,
            hour: 23.99,
        };
        // Tick enough to pass midnight
        for _ in 0..20 {
            clock.tick();
        }
        assert_eq!(clock.day, 2);
        assert!(clock.hour < 24.0);
        assert!(clock.hour >= 0.0);
    }

    #[test]
    fn test_formatted_pads_hour_and_minute() {
        let clock = OpsClock { day: 3, hour: 9.5 };
        assert_eq!(clock.formatted(), "Day 3 09:30");
    }

    #[test]
    fn test_formatted_hms_splits_seconds() {
        // 0.25 h = 15 min exactly, so no float rounding in the assertion.
        let clock = OpsClock { day: 1, hour: 14.25 };
        assert_eq!(clock.formatted_hms(), "14:15:00");
    }

    #[test]
    fn test_ticking_advances_time() {
        let mut clock = OpsClock::default();
        let before = clock.hour;
        for _ in 0..10 {
            clock.tick();
        }
        assert!(clock.hour > before);
        assert_eq!(clock.day, 1);
    }
}
