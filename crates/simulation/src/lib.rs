//! Core state and fixed-tick mutators for the TrackSight operations dashboard.
//!
//! Every panel owns one resource seeded with the demo dataset, mutated by
//! throttled systems on the shared 10 Hz fixed tick. The UI crate reads these
//! resources and calls the operations exposed here; nothing in this crate
//! knows about egui.

use bevy::prelude::*;

pub mod alerts;
pub mod clock;
pub mod metrics;
pub mod network_map;
pub mod notices;
pub mod occupancy;
pub mod overrides;
pub mod roster;
pub mod scenarios;
pub mod sim_rng;
pub mod suggestions;
pub mod switchboard;
pub mod timeline;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Fixed timestep rate. All mutation intervals are multiples of this tick.
pub const TICK_HZ: f64 = 10.0;

/// Global tick counter incremented each FixedUpdate, used for throttling
/// the panel mutators.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct TickCounter(pub u64);

/// FixedUpdate ordering: the counter and clock advance in `Tick`, panel
/// mutators run in `Panels`, and the notice collector runs last in
/// `Notices` so notices posted by panel systems surface the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Tick,
    Panels,
    Notices,
}

pub fn advance_tick(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Shared tick infrastructure
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<TickCounter>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Tick,
                    SimulationSet::Panels,
                    SimulationSet::Notices,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, advance_tick.in_set(SimulationSet::Tick));

        // Mutators that draw from the shared rng run in one fixed order;
        // seeded replays depend on it.
        app.add_systems(
            FixedUpdate,
            (
                network_map::update_network_map,
                occupancy::update_occupancy,
                metrics::update_kpis,
                timeline::update_timeline_drift,
                suggestions::update_suggestions,
            )
                .chain()
                .in_set(SimulationSet::Panels),
        );

        // Clock, rng and the notice queue
        app.add_plugins((
            sim_rng::SimRngPlugin,
            clock::ClockPlugin,
            notices::NoticesPlugin,
        ));

        // Panel state
        app.add_plugins((
            alerts::AlertsPlugin,
            metrics::MetricsPlugin,
            network_map::NetworkMapPlugin,
            occupancy::OccupancyPlugin,
            overrides::OverridesPlugin,
            roster::RosterPlugin,
            scenarios::ScenariosPlugin,
            suggestions::SuggestionsPlugin,
            switchboard::SwitchboardPlugin,
            timeline::TimelinePlugin,
        ));
    }
}
