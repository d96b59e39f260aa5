//! AI advisory feed.
//!
//! Synthetic optimization suggestions shown in the suggestions panel. The
//! confidence and savings figures are decorative random draws, not output
//! of a predictive model; they exist to exercise the feed lifecycle
//! (synthesize, acknowledge, dismiss, bounded retention).

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clock::OpsClock;
use crate::sim_rng::SimRng;
use crate::TickCounter;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Advisory domains the feed draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionCategory {
    Optimization,
    Predictive,
    Efficiency,
    Energy,
    Routing,
}

impl SuggestionCategory {
    /// Display name for this category.
    pub fn name(self) -> &'static str {
        match self {
            SuggestionCategory::Optimization => "Optimization",
            SuggestionCategory::Predictive => "Predictive",
            SuggestionCategory::Efficiency => "Efficiency",
            SuggestionCategory::Energy => "Energy",
            SuggestionCategory::Routing => "Routing",
        }
    }

    /// Icon character for this category (for the panel row).
    pub fn icon(self) -> &'static str {
        match self {
            SuggestionCategory::Optimization => "^",
            SuggestionCategory::Predictive => "~",
            SuggestionCategory::Efficiency => "+",
            SuggestionCategory::Energy => "#",
            SuggestionCategory::Routing => ">",
        }
    }
}

/// Suggestion priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuggestionPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl SuggestionPriority {
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            SuggestionPriority::Critical => "CRITICAL",
            SuggestionPriority::High => "HIGH",
            SuggestionPriority::Medium => "MEDIUM",
            SuggestionPriority::Low => "LOW",
        }
    }
}

/// A single advisory entry in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique ID within the feed.
    pub id: u64,
    pub category: SuggestionCategory,
    pub priority: SuggestionPriority,
    pub title: String,
    pub detail: String,
    /// Synthetic confidence score, 0-100.
    pub confidence: u8,
    /// Estimated minutes saved if applied, when the generator bothered to guess.
    pub savings_min: Option<u32>,
    pub acknowledged: bool,
    /// Service day the suggestion appeared.
    pub day: u32,
    /// Service hour the suggestion appeared.
    pub hour: f32,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Maximum number of suggestions kept in the feed at any time.
pub(crate) const MAX_RETAINED: usize = 10;

/// The synthesizer runs every N ticks (30 seconds at the 10 Hz fixed tick).
pub(crate) const SYNTH_INTERVAL_TICKS: u64 = 300;

/// Probability that a synthesizer pass actually emits a suggestion.
pub(crate) const SYNTH_PROBABILITY: f32 = 0.3;

/// Categories and priorities the synthesizer draws from.
const SYNTH_CATEGORIES: [SuggestionCategory; 3] = [
    SuggestionCategory::Optimization,
    SuggestionCategory::Predictive,
    SuggestionCategory::Efficiency,
];
const SYNTH_PRIORITIES: [SuggestionPriority; 3] = [
    SuggestionPriority::Critical,
    SuggestionPriority::High,
    SuggestionPriority::Medium,
];

/// Ordered advisory feed, newest first.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionFeed {
    pub suggestions: Vec<Suggestion>,
    next_id: u64,
}

impl Default for SuggestionFeed {
    fn default() -> Self {
        Self {
            suggestions: vec![
                Suggestion {
                    id: 1,
                    category: SuggestionCategory::Optimization,
                    priority: SuggestionPriority::High,
                    title: "Optimize Train Spacing".to_string(),
                    detail: "Shifting TR-002's departure by 3 minutes would ease \
                             congestion at North Junction"
                        .to_string(),
                    confidence: 92,
                    savings_min: Some(4),
                    acknowledged: false,
                    day: 1,
                    hour: 13.5,
                },
                Suggestion {
                    id: 2,
                    category: SuggestionCategory::Predictive,
                    priority: SuggestionPriority::Critical,
                    title: "Delay Cascade Risk".to_string(),
                    detail: "TR-003's dwell pattern suggests a knock-on delay across \
                             Section B-1 within the hour"
                        .to_string(),
                    confidence: 96,
                    savings_min: Some(12),
                    acknowledged: false,
                    day: 1,
                    hour: 13.55,
                },
                Suggestion {
                    id: 3,
                    category: SuggestionCategory::Efficiency,
                    priority: SuggestionPriority::Medium,
                    title: "Dwell Time Reduction".to_string(),
                    detail: "Central Station platform 2 dwell exceeds target by 40 \
                             seconds on average"
                        .to_string(),
                    confidence: 84,
                    savings_min: Some(8),
                    acknowledged: false,
                    day: 1,
                    hour: 13.6,
                },
                Suggestion {
                    id: 4,
                    category: SuggestionCategory::Energy,
                    priority: SuggestionPriority::Low,
                    title: "Coasting Opportunity".to_string(),
                    detail: "Speed profile on Section C-1 allows earlier coasting \
                             without timetable impact"
                        .to_string(),
                    confidence: 79,
                    savings_min: None,
                    acknowledged: true,
                    day: 1,
                    hour: 13.65,
                },
                Suggestion {
                    id: 5,
                    category: SuggestionCategory::Routing,
                    priority: SuggestionPriority::High,
                    title: "Alternate Routing Available".to_string(),
                    detail: "Track B-2 maintenance window opens a faster path for \
                             TR-004 via Section A-3"
                        .to_string(),
                    confidence: 88,
                    savings_min: Some(6),
                    acknowledged: false,
                    day: 1,
                    hour: 13.7,
                },
            ],
            next_id: 6,
        }
    }
}

impl SuggestionFeed {
    /// Prepend a synthetic suggestion and enforce the retention cap.
    pub fn synthesize(&mut self, rng: &mut impl Rng, clock: &OpsClock) {
        let category = SYNTH_CATEGORIES[rng.gen_range(0..SYNTH_CATEGORIES.len())];
        let priority = SYNTH_PRIORITIES[rng.gen_range(0..SYNTH_PRIORITIES.len())];
        let confidence: u8 = rng.gen_range(70..95);
        let savings_min: u32 = rng.gen_range(1..=5);

        let id = self.next_id;
        self.next_id += 1;
        self.suggestions.insert(
            0,
            Suggestion {
                id,
                category,
                priority,
                title: "New Network Insight".to_string(),
                detail: format!(
                    "{} opportunity detected in the live timetable",
                    category.name()
                ),
                confidence,
                savings_min: Some(savings_min),
                acknowledged: false,
                day: clock.day,
                hour: clock.hour,
            },
        );
        self.suggestions.truncate(MAX_RETAINED);
    }

    /// Mark a suggestion acknowledged. Unknown ids are ignored.
    pub fn acknowledge(&mut self, id: u64) {
        if let Some(s) = self.suggestions.iter_mut().find(|s| s.id == id) {
            s.acknowledged = true;
        }
    }

    /// Remove a suggestion from the feed. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.suggestions.retain(|s| s.id != id);
    }

    /// Mean confidence across the feed, for the footer.
    pub fn mean_confidence(&self) -> f32 {
        if self.suggestions.is_empty() {
            return 0.0;
        }
        let total: u32 = self.suggestions.iter().map(|s| s.confidence as u32).sum();
        total as f32 / self.suggestions.len() as f32
    }

    /// Fraction of the feed already acknowledged, 0.0-1.0.
    pub fn acknowledged_share(&self) -> f32 {
        if self.suggestions.is_empty() {
            return 0.0;
        }
        let acked = self.suggestions.iter().filter(|s| s.acknowledged).count();
        acked as f32 / self.suggestions.len() as f32
    }

    /// Summed savings estimates in minutes, for the footer.
    pub fn total_savings_min(&self) -> u32 {
        self.suggestions.iter().filter_map(|s| s.savings_min).sum()
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Every 30 seconds, maybe prepend a synthetic suggestion.
pub fn update_suggestions(
    tick: Res<TickCounter>,
    mut rng: ResMut<SimRng>,
    clock: Res<OpsClock>,
    mut feed: ResMut<SuggestionFeed>,
) {
    let t = tick.0;
    if !t.is_multiple_of(SYNTH_INTERVAL_TICKS) {
        return;
    }
    if rng.0.gen::<f32>() >= SYNTH_PROBABILITY {
        return;
    }
    feed.synthesize(&mut rng.0, &clock);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SuggestionsPlugin;

impl Plugin for SuggestionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SuggestionFeed>();
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
    fn test_seed_feed_shape() {
        let feed = SuggestionFeed::default();
        assert_eq!(feed.suggestions.len(), 5);
        assert_eq!(
            feed.suggestions.iter().filter(|s| s.acknowledged).count(),
            1
        );
    }

    #[test]
    fn test_dismiss_removes_exactly_one() {
        let mut feed = SuggestionFeed::default();
        feed.dismiss(3);
        assert_eq!(feed.suggestions.len(), 4);
        assert!(feed.suggestions.iter().all(|s| s.id != 3));
    }

    #[test]
    fn test_acknowledge_only_sets_flag() {
        let mut feed = SuggestionFeed::default();
        let before = feed.suggestions[0].clone();

        feed.acknowledge(before.id);

        let after = &feed.suggestions[0];
        assert!(after.acknowledged);
        assert_eq!(after.title, before.title);
        assert_eq!(after.confidence, before.confidence);
        assert_eq!(after.savings_min, before.savings_min);
        assert_eq!(feed.suggestions.len(), 5);
    }

    #[test]
    fn test_synthesize_prepends_and_caps() {
        let mut feed = SuggestionFeed::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let clock = OpsClock::default();

        for _ in 0..20 {
            feed.synthesize(&mut rng, &clock);
        }

        assert_eq!(feed.suggestions.len(), MAX_RETAINED);
        assert_eq!(feed.suggestions[0].title, "New Network Insight");
        assert!(!feed.suggestions[0].acknowledged);
    }

    #[test]
    fn test_synthesize_bounds() {
        let mut feed = SuggestionFeed::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let clock = OpsClock::default();

        for _ in 0..50 {
            feed.synthesize(&mut rng, &clock);
            let s = &feed.suggestions[0];
            assert!((70..95).contains(&s.confidence));
            let savings = s.savings_min.unwrap();
            assert!((1..=5).contains(&savings));
        }
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let clock = OpsClock::default();
        let mut feed_a = SuggestionFeed::default();
        let mut feed_b = SuggestionFeed::default();
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..8 {
            feed_a.synthesize(&mut rng_a, &clock);
            feed_b.synthesize(&mut rng_b, &clock);
        }

        let summary_a: Vec<(u8, Option<u32>)> = feed_a
            .suggestions
            .iter()
            .map(|s| (s.confidence, s.savings_min))
            .collect();
        let summary_b: Vec<(u8, Option<u32>)> = feed_b
            .suggestions
            .iter()
            .map(|s| (s.confidence, s.savings_min))
            .collect();
        assert_eq!(summary_a, summary_b);
    }

    #[test]
    fn test_footer_aggregates() {
        let mut feed = SuggestionFeed::default();
        // Seed savings: 4 + 12 + 8 + 6 (one None)
        assert_eq!(feed.total_savings_min(), 30);
        let share = feed.acknowledged_share();
        assert!((share - 0.2).abs() < 1e-6);
        assert!(feed.mean_confidence() > 70.0);

        feed.suggestions.clear();
        assert_eq!(feed.mean_confidence(), 0.0);
        assert_eq!(feed.acknowledged_share(), 0.0);
        assert_eq!(feed.total_savings_min(), 0);
    }
}
