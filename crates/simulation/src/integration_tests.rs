//! Integration tests for the dashboard using the `TestDashboard` harness.
//!
//! These tests spin up a headless Bevy App with `SimulationPlugin` and verify
//! behavior across the tick schedule: interval throttling, the lock gate,
//! scenario run completion, and seed determinism.

use crate::metrics::KpiBoard;
use crate::notices::NoticeEvent;
use crate::occupancy::OccupancyBoard;
use crate::overrides::{ControlAction, ControlActionEvent, OverrideDesk};
use crate::scenarios::{ScenarioLab, ScenarioStatus, RUN_TICKS};
use crate::suggestions::SuggestionFeed;
use crate::switchboard::{SwitchboardAction, SwitchboardActionEvent};
use crate::test_harness::TestDashboard;
use crate::timeline::ScheduleBoard;

// ===========================================================================
// 1. Harness bootstrap
// ===========================================================================

#[test]
fn fresh_dashboard_carries_the_seed_dataset() {
    let dash = TestDashboard::new();
    assert_eq!(dash.tick_count(), 0, "no fixed tick before time advances");
    assert_eq!(dash.alerts().alerts.len(), 3);
    assert_eq!(dash.schedule().events.len(), 4);
    assert_eq!(dash.scenarios().scenarios.len(), 2);
    assert_eq!(dash.map().trains.len(), 4);
    assert_eq!(dash.map().stations.len(), 5);
    assert_eq!(dash.resource::<OccupancyBoard>().positions.len(), 3);
    assert_eq!(dash.resource::<SuggestionFeed>().suggestions.len(), 5);
    assert!(dash.notices().pending.is_empty(), "no notice owed at boot");
}

#[test]
fn tick_counter_advances_once_per_fixed_step() {
    let mut dash = TestDashboard::new();
    dash.tick(5);
    assert_eq!(dash.tick_count(), 5);
    dash.tick(7);
    assert_eq!(dash.tick_count(), 12);
}

#[test]
fn service_clock_gains_one_minute_per_ten_ticks() {
    let mut dash = TestDashboard::new();
    let before = dash.clock().hour;
    dash.tick(600);
    let gained = dash.clock().hour - before;
    assert!(
        (gained - 1.0).abs() < 0.01,
        "600 ticks should be one service hour, got {}",
        gained
    );
}

// ===========================================================================
// 2. Interval throttling
// ===========================================================================

#[test]
fn map_walk_waits_for_its_interval() {
    let mut dash = TestDashboard::new();
    let x_before = dash.map().trains[0].x;

    dash.tick(9);
    assert_eq!(
        dash.map().trains[0].x,
        x_before,
        "no walk before the interval tick"
    );

    dash.tick(1);
    assert_ne!(dash.map().trains[0].x, x_before, "walk on the interval tick");
}

#[test]
fn maintenance_train_stays_parked() {
    let mut dash = TestDashboard::new();
    dash.tick(200);
    let parked = dash
        .map()
        .train("TR-003")
        .expect("TR-003 is a seeded train");
    assert_eq!((parked.x, parked.y), (80.0, 250.0));
}

#[test]
fn occupancy_advances_only_running_trains() {
    let mut dash = TestDashboard::new();
    dash.tick(40);
    let board = dash.resource::<OccupancyBoard>();
    assert_ne!(board.positions[0].percent, 65.0, "running train moved");
    assert_eq!(board.positions[1].percent, 30.0, "delayed train held");
    assert_eq!(board.positions[2].percent, 0.0, "shopped train held");
}

#[test]
fn kpis_refresh_on_their_interval() {
    let mut dash = TestDashboard::new();

    dash.tick(49);
    // The seeded +8.3 trend sits outside the refresh band, so any refresh
    // must replace it.
    assert_eq!(dash.resource::<KpiBoard>().kpis[0].change, 8.3);

    dash.tick(1);
    assert_ne!(dash.resource::<KpiBoard>().kpis[0].change, 8.3);
}

#[test]
fn suggestion_feed_stays_bounded() {
    let mut dash = TestDashboard::new();
    dash.tick(3000);
    let len = dash.resource::<SuggestionFeed>().suggestions.len();
    assert!((5..=10).contains(&len), "feed length {} out of band", len);
}

// ===========================================================================
// 3. Timeline drift vs simulation mode
// ===========================================================================

#[test]
fn simulation_mode_freezes_background_drift() {
    let mut dash = TestDashboard::new();
    dash.resource_mut::<ScheduleBoard>().reorder(0, 1);
    let frozen = dash.schedule().events.clone();

    dash.tick(500); // five drift windows
    assert_eq!(
        dash.schedule().events,
        frozen,
        "manual edits must not be drifted over"
    );
}

#[test]
fn reset_rearms_background_drift() {
    let mut dash = TestDashboard::new();
    {
        let mut board = dash.resource_mut::<ScheduleBoard>();
        board.reorder(0, 1);
        board.reset_to_original();
    }
    assert!(!dash.schedule().simulation_mode);
    // Not asserting a slip happens (it's probabilistic); just that the
    // board is live again and the schedule still runs.
    dash.tick(100);
    assert_eq!(dash.schedule().events.len(), 4);
}

// ===========================================================================
// 4. Lock gate and notices
// ===========================================================================

#[test]
fn denied_quick_action_queues_the_locked_notice() {
    let mut dash = TestDashboard::new();
    dash.send(ControlActionEvent(ControlAction::EmergencyStopAll));
    dash.tick(1);

    let notices = dash.notices();
    assert_eq!(notices.pending.len(), 1);
    assert_eq!(
        notices.current().map(|n| n.title.as_str()),
        Some("Controls Locked")
    );
    assert_eq!(dash.alerts().alerts.len(), 3, "no alert while locked");
}

#[test]
fn unlocked_emergency_stop_raises_an_alert() {
    let mut dash = TestDashboard::new();
    dash.resource_mut::<OverrideDesk>().toggle_lock();
    dash.send(ControlActionEvent(ControlAction::EmergencyStopAll));
    dash.tick(1);

    assert_eq!(dash.alerts().alerts.len(), 4);
    assert_eq!(dash.alerts().alerts[0].title, "Emergency Stop");
    assert_eq!(
        dash.notices().current().map(|n| n.title.as_str()),
        Some("Emergency Stop All")
    );
}

#[test]
fn hands_off_actions_pass_the_locked_gate() {
    let mut dash = TestDashboard::new();
    dash.send(ControlActionEvent(ControlAction::AutoReroute));
    dash.tick(1);

    assert_eq!(
        dash.notices().current().map(|n| n.title.as_str()),
        Some("Auto Reroute"),
        "confirmation, not the locked notice"
    );
}

#[test]
fn notice_stamps_carry_the_service_clock() {
    let mut dash = TestDashboard::new();
    dash.send(NoticeEvent {
        title: "Test".to_string(),
        body: "Test body".to_string(),
    });
    dash.tick(1);

    let notice = dash.notices().current().expect("notice queued");
    assert_eq!(notice.day, 1);
    assert!(notice.hour >= 13.75, "stamped at or after shift start");
}

// ===========================================================================
// 5. Scenario runs through the schedule
// ===========================================================================

#[test]
fn started_run_completes_on_its_tick() {
    let mut dash = TestDashboard::new();
    let started_at = dash.tick_count();
    dash.resource_mut::<ScenarioLab>().start_run(1, started_at);

    dash.tick(RUN_TICKS as u32 - 1);
    let status = dash.scenarios().scenarios[0].status;
    assert_eq!(status, ScenarioStatus::Running, "one tick early");

    dash.tick(1);
    let status = dash.scenarios().scenarios[0].status;
    assert_eq!(status, ScenarioStatus::Completed);
    assert!(!dash.scenarios().run_in_flight());
}

#[test]
fn reset_during_a_run_prevents_late_completion() {
    let mut dash = TestDashboard::new();
    let started_at = dash.tick_count();
    {
        let mut lab = dash.resource_mut::<ScenarioLab>();
        lab.start_run(1, started_at);
    }
    dash.tick(10);
    dash.resource_mut::<ScenarioLab>().reset_all();

    dash.tick(100);
    assert!(dash
        .scenarios()
        .scenarios
        .iter()
        .all(|s| s.status == ScenarioStatus::Pending));
}

// ===========================================================================
// 6. Switchboard
// ===========================================================================

#[test]
fn switchboard_quick_action_posts_a_confirmation() {
    let mut dash = TestDashboard::new();
    dash.send(SwitchboardActionEvent(SwitchboardAction::SystemReset));
    dash.tick(1);

    let notice = dash.notices().current().expect("confirmation queued");
    assert_eq!(notice.title, "System Reset");
    assert_eq!(notice.body, "All systems reset to nominal configuration.");
}

// ===========================================================================
// 7. Determinism
// ===========================================================================

#[test]
fn same_seed_replays_the_same_session() {
    let mut a = TestDashboard::with_seed(7);
    let mut b = TestDashboard::with_seed(7);
    a.tick(400);
    b.tick(400);

    let trains_a: Vec<(f32, f32)> = a.map().trains.iter().map(|t| (t.x, t.y)).collect();
    let trains_b: Vec<(f32, f32)> = b.map().trains.iter().map(|t| (t.x, t.y)).collect();
    assert_eq!(trains_a, trains_b);

    let kpis_a: Vec<f32> = a.resource::<KpiBoard>().kpis.iter().map(|k| k.value).collect();
    let kpis_b: Vec<f32> = b.resource::<KpiBoard>().kpis.iter().map(|k| k.value).collect();
    assert_eq!(kpis_a, kpis_b);

    assert_eq!(
        a.resource::<SuggestionFeed>().suggestions.len(),
        b.resource::<SuggestionFeed>().suggestions.len()
    );
}

#[test]
fn different_seeds_diverge() {
    let mut a = TestDashboard::with_seed(1);
    let mut b = TestDashboard::with_seed(2);
    a.tick(100);
    b.tick(100);

    let trains_a: Vec<(f32, f32)> = a.map().trains.iter().map(|t| (t.x, t.y)).collect();
    let trains_b: Vec<(f32, f32)> = b.map().trains.iter().map(|t| (t.x, t.y)).collect();
    assert_ne!(trains_a, trains_b);
}
