use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::sim_rng::SimRng;

fn main() {
    let mut app = App::new();

    // TRACKSIGHT_SEED pins the session rng for reproducible demos. The
    // resource must land before SimulationPlugin or init_resource wins.
    if let Ok(seed) = std::env::var("TRACKSIGHT_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(SimRng::from_seed_u64(seed));
            }
            Err(_) => {
                eprintln!("ignoring unparsable TRACKSIGHT_SEED {seed:?}");
            }
        }
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "TrackSight Operations".to_string(),
            resolution: (1920.0, 1080.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((simulation::SimulationPlugin, ui::UiPlugin));

    app.run();
}
