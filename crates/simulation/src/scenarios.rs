//! What-if scenario lab.
//!
//! Operators sketch hypothetical disruptions (delay, reroute, maintenance,
//! weather) against a train and station, and the lab fabricates an impact
//! estimate from random draws. Impact numbers are decorative, not a model.
//! Runs transition pending -> running immediately and running -> completed
//! once their completion tick comes up; the run lock is advisory and only
//! dims the UI triggers while a run started this session is outstanding.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim_rng::SimRng;
use crate::{SimulationSet, TickCounter};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    Delay,
    Reroute,
    Maintenance,
    Weather,
}

impl ScenarioKind {
    /// All kinds, in form dropdown order.
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Delay,
        ScenarioKind::Reroute,
        ScenarioKind::Maintenance,
        ScenarioKind::Weather,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Delay => "Delay",
            ScenarioKind::Reroute => "Reroute",
            ScenarioKind::Maintenance => "Maintenance",
            ScenarioKind::Weather => "Weather",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioStatus {
    Pending,
    Running,
    Completed,
}

impl ScenarioStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioStatus::Pending => "PENDING",
            ScenarioStatus::Running => "RUNNING",
            ScenarioStatus::Completed => "COMPLETED",
        }
    }
}

/// Fabricated consequences of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioImpact {
    pub cascaded_delays: u32,
    pub affected_trains: u32,
    pub total_delay_min: u32,
    pub cost_dollars: u32,
}

/// A what-if case on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique ID within the lab.
    pub id: u64,
    pub name: String,
    pub kind: ScenarioKind,
    pub train: String,
    pub station: String,
    /// Minutes of injected delay; meaningful for delay/weather kinds.
    pub delay_min: u32,
    /// Diversion path; meaningful for reroute/maintenance kinds.
    pub alternate_route: String,
    pub impact: ScenarioImpact,
    pub status: ScenarioStatus,
    /// Tick at which an in-flight run completes. Only set by `start_run`.
    completes_at_tick: Option<u64>,
}

/// Form state for the next scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    pub kind: ScenarioKind,
    pub train: String,
    pub station: String,
    pub delay_min: u32,
    pub alternate_route: String,
}

impl Default for ScenarioDraft {
    fn default() -> Self {
        Self {
            kind: ScenarioKind::Delay,
            train: String::new(),
            station: String::new(),
            delay_min: 10,
            alternate_route: String::new(),
        }
    }
}

/// Result of a creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// Train or station was empty; silently ignored per the form contract.
    MissingFields,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A started run completes this many ticks later (3 seconds at 10 Hz).
pub(crate) const RUN_TICKS: u64 = 30;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioLab {
    pub scenarios: Vec<Scenario>,
    pub draft: ScenarioDraft,
    next_id: u64,
}

impl Default for ScenarioLab {
    fn default() -> Self {
        Self {
            scenarios: vec![
                Scenario {
                    id: 1,
                    name: "TR-001 Delay Simulation".to_string(),
                    kind: ScenarioKind::Delay,
                    train: "TR-001".to_string(),
                    station: "Junction Alpha".to_string(),
                    delay_min: 10,
                    alternate_route: String::new(),
                    impact: ScenarioImpact {
                        cascaded_delays: 3,
                        affected_trains: 5,
                        total_delay_min: 25,
                        cost_dollars: 2500,
                    },
                    status: ScenarioStatus::Completed,
                    completes_at_tick: None,
                },
                Scenario {
                    id: 2,
                    name: "Track B-2 Maintenance".to_string(),
                    kind: ScenarioKind::Maintenance,
                    train: "TR-002".to_string(),
                    station: "Central Hub".to_string(),
                    delay_min: 0,
                    alternate_route: "Track C-1".to_string(),
                    impact: ScenarioImpact {
                        cascaded_delays: 7,
                        affected_trains: 12,
                        total_delay_min: 45,
                        cost_dollars: 8900,
                    },
                    status: ScenarioStatus::Running,
                    completes_at_tick: None,
                },
            ],
            draft: ScenarioDraft::default(),
            next_id: 3,
        }
    }
}

impl ScenarioLab {
    /// Create a scenario from the draft, drawing its impact numbers.
    /// Rejected drafts leave the board unchanged.
    pub fn create(&mut self, rng: &mut impl Rng) -> CreateOutcome {
        if self.draft.train.trim().is_empty() || self.draft.station.trim().is_empty() {
            return CreateOutcome::MissingFields;
        }

        let id = self.next_id;
        self.next_id += 1;
        let draft = std::mem::take(&mut self.draft);
        let impact = ScenarioImpact {
            cascaded_delays: rng.gen_range(1..=10),
            affected_trains: rng.gen_range(3..=17),
            total_delay_min: rng.gen_range(10..70),
            cost_dollars: rng.gen_range(1000..11000),
        };
        self.scenarios.insert(
            0,
            Scenario {
                id,
                name: format!("{} {} Simulation", draft.train, draft.kind.label()),
                kind: draft.kind,
                train: draft.train,
                station: draft.station,
                delay_min: draft.delay_min,
                alternate_route: draft.alternate_route,
                impact,
                status: ScenarioStatus::Pending,
                completes_at_tick: None,
            },
        );
        CreateOutcome::Created
    }

    /// Start (or re-run) a scenario. Already-running entries are left alone.
    pub fn start_run(&mut self, id: u64, current_tick: u64) {
        let Some(scenario) = self.scenarios.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if scenario.status == ScenarioStatus::Running {
            return;
        }
        scenario.status = ScenarioStatus::Running;
        scenario.completes_at_tick = Some(current_tick + RUN_TICKS);
    }

    /// Complete every in-flight run whose tick has come up; returns their
    /// names for logging.
    pub fn complete_due(&mut self, current_tick: u64) -> Vec<String> {
        let mut finished = Vec::new();
        for scenario in &mut self.scenarios {
            let Some(due) = scenario.completes_at_tick else {
                continue;
            };
            if current_tick >= due {
                scenario.status = ScenarioStatus::Completed;
                scenario.completes_at_tick = None;
                finished.push(scenario.name.clone());
            }
        }
        finished
    }

    /// Return every scenario to pending, cancelling in-flight runs.
    pub fn reset_all(&mut self) {
        for scenario in &mut self.scenarios {
            scenario.status = ScenarioStatus::Pending;
            scenario.completes_at_tick = None;
        }
    }

    /// True while a run started this session is outstanding. The UI uses
    /// this to dim triggers; nothing stops a direct second `start_run`.
    pub fn run_in_flight(&self) -> bool {
        self.scenarios.iter().any(|s| s.completes_at_tick.is_some())
    }

    pub fn completed_count(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|s| s.status == ScenarioStatus::Completed)
            .count()
    }

    /// Mean of the fabricated total-delay figures, for the footer.
    pub fn average_delay_min(&self) -> f32 {
        if self.scenarios.is_empty() {
            return 0.0;
        }
        let total: u32 = self.scenarios.iter().map(|s| s.impact.total_delay_min).sum();
        total as f32 / self.scenarios.len() as f32
    }

    /// Summed fabricated cost, for the footer.
    pub fn total_cost_dollars(&self) -> u32 {
        self.scenarios.iter().map(|s| s.impact.cost_dollars).sum()
    }
}

/// "$8,900" style rendering for the fabricated cost figures.
pub fn format_cost(dollars: u32) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Completes in-flight runs whose tick has come up.
pub fn run_scenario_completions(tick: Res<TickCounter>, mut lab: ResMut<ScenarioLab>) {
    if !lab.run_in_flight() {
        return;
    }
    for name in lab.complete_due(tick.0) {
        info!("scenario '{}' completed", name);
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct ScenariosPlugin;

impl Plugin for ScenariosPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioLab>()
            .add_systems(
                FixedUpdate,
                run_scenario_completions.in_set(SimulationSet::Panels),
            );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn filled_lab() -> ScenarioLab {
        let mut lab = ScenarioLab::default();
        lab.draft.train = "TR-003".to_string();
        lab.draft.station = "Central Station".to_string();
        lab
    }

    #[test]
    fn test_create_rejects_empty_required_fields() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut lab = ScenarioLab::default();
        lab.draft.station = "Central Station".to_string();
        assert_eq!(lab.create(&mut rng), CreateOutcome::MissingFields);
        assert_eq!(lab.scenarios.len(), 2);

        let mut lab = ScenarioLab::default();
        lab.draft.train = "TR-003".to_string();
        lab.draft.station = "  ".to_string();
        assert_eq!(lab.create(&mut rng), CreateOutcome::MissingFields);
        assert_eq!(lab.scenarios.len(), 2);
    }

    #[test]
    fn test_create_prepends_pending_with_derived_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut lab = filled_lab();

        assert_eq!(lab.create(&mut rng), CreateOutcome::Created);
        assert_eq!(lab.scenarios.len(), 3);

        let created = &lab.scenarios[0];
        assert_eq!(created.name, "TR-003 Delay Simulation");
        assert_eq!(created.status, ScenarioStatus::Pending);
        assert_eq!(lab.draft, ScenarioDraft::default());
    }

    #[test]
    fn test_impact_draw_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..40 {
            let mut lab = filled_lab();
            lab.create(&mut rng);
            let impact = lab.scenarios[0].impact;
            assert!((1..=10).contains(&impact.cascaded_delays));
            assert!((3..=17).contains(&impact.affected_trains));
            assert!((10..70).contains(&impact.total_delay_min));
            assert!((1000..11000).contains(&impact.cost_dollars));
        }
    }

    #[test]
    fn test_run_transitions_and_completion_timing() {
        let mut lab = ScenarioLab::default();
        let pending_id = 1; // seeded completed scenario, re-run allowed

        lab.start_run(pending_id, 100);
        let scenario = lab.scenarios.iter().find(|s| s.id == pending_id).unwrap();
        assert_eq!(scenario.status, ScenarioStatus::Running);
        assert!(lab.run_in_flight());

        // One tick early: nothing happens.
        assert!(lab.complete_due(100 + RUN_TICKS - 1).is_empty());
        let scenario = lab.scenarios.iter().find(|s| s.id == pending_id).unwrap();
        assert_eq!(scenario.status, ScenarioStatus::Running);

        // Due tick: completes.
        let done = lab.complete_due(100 + RUN_TICKS);
        assert_eq!(done, vec!["TR-001 Delay Simulation".to_string()]);
        let scenario = lab.scenarios.iter().find(|s| s.id == pending_id).unwrap();
        assert_eq!(scenario.status, ScenarioStatus::Completed);
        assert!(!lab.run_in_flight());
    }

    #[test]
    fn test_seeded_running_scenario_does_not_hold_the_advisory_lock() {
        let lab = ScenarioLab::default();
        // Seed id 2 is Running but was never started this session.
        assert!(!lab.run_in_flight());
    }

    #[test]
    fn test_start_run_on_running_scenario_is_noop() {
        let mut lab = ScenarioLab::default();
        lab.start_run(2, 50); // seeded Running
        let scenario = lab.scenarios.iter().find(|s| s.id == 2).unwrap();
        assert_eq!(scenario.status, ScenarioStatus::Running);
        assert!(!lab.run_in_flight());
    }

    #[test]
    fn test_reset_all_cancels_in_flight_runs() {
        let mut lab = ScenarioLab::default();
        lab.start_run(1, 10);
        assert!(lab.run_in_flight());

        lab.reset_all();
        assert!(!lab.run_in_flight());
        assert!(lab
            .scenarios
            .iter()
            .all(|s| s.status == ScenarioStatus::Pending));

        // A cancelled run must not complete later.
        assert!(lab.complete_due(10_000).is_empty());
    }

    #[test]
    fn test_footer_aggregates() {
        let lab = ScenarioLab::default();
        assert_eq!(lab.completed_count(), 1);
        assert!((lab.average_delay_min() - 35.0).abs() < 1e-6);
        assert_eq!(lab.total_cost_dollars(), 11_400);
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0), "$0");
        assert_eq!(format_cost(999), "$999");
        assert_eq!(format_cost(2500), "$2,500");
        assert_eq!(format_cost(11400), "$11,400");
        assert_eq!(format_cost(1_234_567), "$1,234,567");
    }
}
