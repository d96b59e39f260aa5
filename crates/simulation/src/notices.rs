//! Operator notices backing the blocking modal layer.
//!
//! Panels emit `NoticeEvent`s for anything the operator must explicitly
//! confirm: denied control actions while the override desk is locked, and
//! switchboard quick-action confirmations. Notices queue FIFO; the modal
//! shows the front of the queue and OK moves it into a bounded journal.

use bevy::prelude::*;

use crate::clock::OpsClock;
use crate::SimulationSet;

// =============================================================================
// Notice Struct
// =============================================================================

/// A single queued operator notice.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Unique ID for this notice.
    pub id: u64,
    /// Short headline, e.g. "Controls Locked".
    pub title: String,
    /// Full message body shown in the modal.
    pub body: String,
    /// Service day when the notice was posted.
    pub day: u32,
    /// Service hour when the notice was posted.
    pub hour: f32,
}

/// An acknowledged notice kept in the journal.
#[derive(Debug, Clone)]
pub struct NoticeJournalEntry {
    pub title: String,
    pub body: String,
    pub day: u32,
    pub hour: f32,
}

// =============================================================================
// Bevy Event
// =============================================================================

/// Event emitted by panels to queue a notice.
///
/// # Example
/// ```ignore
/// fn my_system(mut notices: EventWriter<NoticeEvent>) {
///     notices.send(NoticeEvent {
///         title: "Controls Locked".to_string(),
///         body: "Manual override controls are locked. Unlock to proceed.".to_string(),
///     });
/// }
/// ```
#[derive(Event, Debug, Clone)]
pub struct NoticeEvent {
    pub title: String,
    pub body: String,
}

// =============================================================================
// NoticeLog Resource
// =============================================================================

/// Pending notices (front is the one on screen) plus the acknowledged journal.
#[derive(Resource)]
pub struct NoticeLog {
    /// Notices waiting for acknowledgement, oldest first.
    pub pending: Vec<Notice>,
    /// Acknowledged notices, oldest first.
    pub journal: Vec<NoticeJournalEntry>,
    /// Maximum journal size before old entries are trimmed.
    pub max_journal: usize,
    /// Next notice ID counter.
    next_id: u64,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            journal: Vec::new(),
            max_journal: 100,
            next_id: 1,
        }
    }
}

impl NoticeLog {
    /// Allocate the next unique notice ID.
    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue a notice from an event.
    pub fn push(&mut self, event: &NoticeEvent, clock: &OpsClock) {
        let id = self.next_id();
        self.pending.push(Notice {
            id,
            title: event.title.clone(),
            body: event.body.clone(),
            day: clock.day,
            hour: clock.hour,
        });
    }

    /// The notice currently owed an acknowledgement, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.pending.first()
    }

    /// Acknowledge the front notice, archiving it in the journal.
    pub fn acknowledge_current(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let notice = self.pending.remove(0);
        self.journal.push(NoticeJournalEntry {
            title: notice.title,
            body: notice.body,
            day: notice.day,
            hour: notice.hour,
        });

        // Trim journal if over capacity
        if self.journal.len() > self.max_journal {
            let excess = self.journal.len() - self.max_journal;
            self.journal.drain(0..excess);
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Collects `NoticeEvent`s into the `NoticeLog` queue.
fn collect_notices(
    mut events: EventReader<NoticeEvent>,
    mut log: ResMut<NoticeLog>,
    clock: Res<OpsClock>,
) {
    for event in events.read() {
        log.push(event, &clock);
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct NoticesPlugin;

impl Plugin for NoticesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NoticeLog>()
            .add_event::<NoticeEvent>()
            .add_systems(
                FixedUpdate,
                collect_notices.in_set(SimulationSet::Notices),
            );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str) -> NoticeEvent {
        NoticeEvent {
            title: title.to_string(),
            body: format!("{} body", title),
        }
    }

    #[test]
    fn test_push_queues_fifo() {
        let mut log = NoticeLog::default();
        let clock = OpsClock::default();
        log.push(&event("First"), &clock);
        log.push(&event("Second"), &clock);

        assert_eq!(log.pending.len(), 2);
        assert_eq!(log.current().map(|n| n.title.as_str()), Some("First"));
    }

    #[test]
    fn test_acknowledge_pops_front_into_journal() {
        let mut log = NoticeLog::default();
        let clock = OpsClock::default();
        log.push(&event("First"), &clock);
        log.push(&event("Second"), &clock);

        log.acknowledge_current();
        assert_eq!(log.pending.len(), 1);
        assert_eq!(log.current().map(|n| n.title.as_str()), Some("Second"));
        assert_eq!(log.journal.len(), 1);
        assert_eq!(log.journal[0].title, "First");
    }

    #[test]
    fn test_acknowledge_on_empty_is_noop() {
        let mut log = NoticeLog::default();
        log.acknowledge_current();
        assert!(log.pending.is_empty());
        assert!(log.journal.is_empty());
    }

    #[test]
    fn test_journal_trimming() {
        let mut log = NoticeLog::default();
        log.max_journal = 5;
        let clock = OpsClock::default();

        for i in 0..10 {
            log.push(&event(&format!("Notice {}", i)), &clock);
            log.acknowledge_current();
        }

        assert_eq!(log.journal.len(), 5);
        assert_eq!(log.journal[0].title, "Notice 5"); // oldest kept
        assert_eq!(log.journal[4].title, "Notice 9"); // newest
    }

    #[test]
    fn test_unique_ids() {
        let mut log = NoticeLog::default();
        let clock = OpsClock::default();

        for _ in 0..5 {
            log.push(&event("test"), &clock);
        }

        let ids: Vec<u64> = log.pending.iter().map(|n| n.id).collect();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                assert_ne!(ids[i], ids[j], "IDs must be unique");
            }
        }
    }
}
