//! Transient status messages.
//!
//! Each category holds at most one deadline. Showing a category again moves
//! its deadline forward instead of stacking a second message.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Specify how long a transient message stays visible.
///
pub const MESSAGE_DURATION: Duration = Duration::from_secs(2);

/// Specifying the transient message categories.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum MessageKind {
    Completion,
    Deletion,
    Edit,
}

impl MessageKind {
    pub fn text(&self) -> &'static str {
        match self {
            MessageKind::Completion => "Task status updated!",
            MessageKind::Deletion => "Task deleted successfully!",
            MessageKind::Edit => "Task saved successfully!",
        }
    }
}

/// Tracks the expiry of every visible message.
///
#[derive(Debug, Default, Clone)]
pub struct TransientMessages {
    deadlines: BTreeMap<MessageKind, Instant>,
}

impl TransientMessages {
    /// Show a message of the given kind, resetting its clear time.
    ///
    pub fn show(&mut self, kind: MessageKind, now: Instant) {
        self.deadlines.insert(kind, now + MESSAGE_DURATION);
    }

    /// Drop every message whose window has elapsed.
    ///
    pub fn prune(&mut self, now: Instant) {
        self.deadlines.retain(|_, deadline| *deadline > now);
    }

    /// Return the kinds still visible at the given instant.
    ///
    pub fn active(&self, now: Instant) -> Vec<MessageKind> {
        self.deadlines
            .iter()
            .filter(|(_, deadline)| **deadline > now)
            .map(|(kind, _)| *kind)
            .collect()
    }
}
