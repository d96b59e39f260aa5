//! Track occupancy board state.
//!
//! Static section inventory per line plus a per-train position expressed as
//! percent progress along its section. Positions creep forward on a timer
//! for trains running normally; delayed and shopped trains hold.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim_rng::SimRng;
use crate::TickCounter;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionStatus {
    Normal,
    Occupied,
    Maintenance,
}

impl SectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SectionStatus::Normal => "NORMAL",
            SectionStatus::Occupied => "OCCUPIED",
            SectionStatus::Maintenance => "MAINTENANCE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    Normal,
    Delayed,
    Maintenance,
}

/// One block of track on a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSection {
    pub id: String,
    /// Line grouping for display ("A", "B", "C").
    pub line: String,
    pub status: SectionStatus,
}

/// Where a train sits along its section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainPosition {
    pub train: String,
    pub section: String,
    /// Progress along the section, 0-100.
    pub percent: f32,
    pub status: PositionStatus,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Positions advance every N ticks (2 seconds at the 10 Hz fixed tick).
pub(crate) const ADVANCE_INTERVAL_TICKS: u64 = 20;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyBoard {
    pub sections: Vec<TrackSection>,
    pub positions: Vec<TrainPosition>,
}

fn section(id: &str, line: &str, status: SectionStatus) -> TrackSection {
    TrackSection {
        id: id.to_string(),
        line: line.to_string(),
        status,
    }
}

impl Default for OccupancyBoard {
    fn default() -> Self {
        Self {
            sections: vec![
                section("A-1", "A", SectionStatus::Normal),
                section("A-2", "A", SectionStatus::Occupied),
                section("A-3", "A", SectionStatus::Normal),
                section("B-1", "B", SectionStatus::Occupied),
                section("B-2", "B", SectionStatus::Maintenance),
                section("C-1", "C", SectionStatus::Normal),
            ],
            positions: vec![
                TrainPosition {
                    train: "TR-001".to_string(),
                    section: "A-2".to_string(),
                    percent: 65.0,
                    status: PositionStatus::Normal,
                },
                TrainPosition {
                    train: "TR-002".to_string(),
                    section: "B-1".to_string(),
                    percent: 30.0,
                    status: PositionStatus::Delayed,
                },
                TrainPosition {
                    train: "TR-003".to_string(),
                    section: "DEPOT".to_string(),
                    percent: 0.0,
                    status: PositionStatus::Maintenance,
                },
            ],
        }
    }
}

impl OccupancyBoard {
    /// One advance step: trains running normally creep up to 2% along
    /// their section, wrapping at 100.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        for position in &mut self.positions {
            if position.status != PositionStatus::Normal {
                continue;
            }
            position.percent = (position.percent + rng.gen::<f32>() * 2.0) % 100.0;
        }
    }

    /// Sections on one line, in seed order.
    pub fn line_sections(&self, line: &str) -> impl Iterator<Item = &TrackSection> {
        self.sections.iter().filter(move |s| s.line == line)
    }

    /// Trains currently positioned on a section.
    pub fn trains_on(&self, section_id: &str) -> impl Iterator<Item = &TrainPosition> {
        self.positions
            .iter()
            .filter(move |p| p.section == section_id)
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Every 2 seconds, advance the running trains.
pub fn update_occupancy(
    tick: Res<TickCounter>,
    mut rng: ResMut<SimRng>,
    mut board: ResMut<OccupancyBoard>,
) {
    if !tick.0.is_multiple_of(ADVANCE_INTERVAL_TICKS) {
        return;
    }
    board.advance(&mut rng.0);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct OccupancyPlugin;

impl Plugin for OccupancyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OccupancyBoard>();
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

    #[test]
    fn test_seed_shape() {
        let board = OccupancyBoard::default();
        assert_eq!(board.sections.len(), 6);
        assert_eq!(board.positions.len(), 3);
        assert_eq!(board.line_sections("A").count(), 3);
        assert_eq!(board.line_sections("B").count(), 2);
        assert_eq!(board.line_sections("C").count(), 1);
        assert_eq!(board.trains_on("A-2").count(), 1);
        assert_eq!(board.trains_on("C-1").count(), 0);
    }

    #[test]
    fn test_advance_keeps_percent_in_range() {
        let mut board = OccupancyBoard::default();
        let mut rng = ChaCha8Rng::seed_from_u64(31);

        for _ in 0..500 {
            board.advance(&mut rng);
            for position in &board.positions {
                assert!(
                    (0.0..100.0).contains(&position.percent),
                    "{}",
                    position.train
                );
            }
        }
    }

    #[test]
    fn test_only_normal_trains_move() {
        let mut board = OccupancyBoard::default();
        let mut rng = ChaCha8Rng::seed_from_u64(32);

        for _ in 0..100 {
            board.advance(&mut rng);
        }

        assert_eq!(board.positions[1].percent, 30.0); // delayed holds
        assert_eq!(board.positions[2].percent, 0.0); // maintenance holds
        assert_ne!(board.positions[0].percent, 65.0);
    }

    #[test]
    fn test_advance_is_deterministic() {
        let mut board_a = OccupancyBoard::default();
        let mut board_b = OccupancyBoard::default();
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            board_a.advance(&mut rng_a);
            board_b.advance(&mut rng_b);
        }

        assert_eq!(board_a.positions[0].percent, board_b.positions[0].percent);
    }
}
