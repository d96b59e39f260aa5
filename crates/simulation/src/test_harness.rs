//! # TestDashboard -- headless integration test harness
//!
//! Provides a small builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::alerts::AlertBoard;
use crate::clock::OpsClock;
use crate::network_map::NetworkMap;
use crate::notices::NoticeLog;
use crate::overrides::OverrideDesk;
use crate::scenarios::ScenarioLab;
use crate::sim_rng::SimRng;
use crate::timeline::ScheduleBoard;
use crate::{SimulationPlugin, TickCounter};

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Construct one, call `tick()` to advance the fixed schedule, then assert
/// on the panel resources.
pub struct TestDashboard {
    app: App,
}

impl TestDashboard {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Dashboard with the default seed (the one the binary boots with).
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    /// Dashboard with an explicit rng seed, for determinism tests.
    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Insert the seeded rng BEFORE SimulationPlugin so init_resource keeps it.
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks.
    ///
    /// The dashboard runs at 10 Hz (100ms per tick). Each call advances
    /// virtual time by 100ms and calls `app.update()`, which triggers the
    /// `FixedUpdate` schedule exactly once.
    pub fn tick(&mut self, n: u32) {
        let dt = std::time::Duration::from_millis(100);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Virtual>>()
                .advance_by(dt);
            self.app.update();
        }
    }

    /// Queue an event for the next tick's systems.
    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// Get a mutable reference to any resource.
    pub fn resource_mut<T: Resource>(&mut self) -> Mut<'_, T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn tick_count(&self) -> u64 {
        self.resource::<TickCounter>().0
    }

    pub fn clock(&self) -> &OpsClock {
        self.resource::<OpsClock>()
    }

    pub fn alerts(&self) -> &AlertBoard {
        self.resource::<AlertBoard>()
    }

    pub fn schedule(&self) -> &ScheduleBoard {
        self.resource::<ScheduleBoard>()
    }

    pub fn scenarios(&self) -> &ScenarioLab {
        self.resource::<ScenarioLab>()
    }

    pub fn notices(&self) -> &NoticeLog {
        self.resource::<NoticeLog>()
    }

    pub fn desk(&self) -> &OverrideDesk {
        self.resource::<OverrideDesk>()
    }

    pub fn map(&self) -> &NetworkMap {
        self.resource::<NetworkMap>()
    }
}
