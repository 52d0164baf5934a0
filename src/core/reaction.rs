//! Reaction State Machine: one-way latch
//!
//! UNTRIGGERED → TRIGGERED on the first hit. Nothing leads back.

use tracing::info;

use crate::types::ReactionState;

/// Owns the session's reaction state
#[derive(Debug, Clone, Default)]
pub struct ReactionStateMachine {
    state: ReactionState,
    /// Frame at which the transition happened
    triggered_at: Option<u64>,
}

impl ReactionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance on a collision result, return the (possibly new) state.
    /// A miss, or any call after the transition, changes nothing.
    pub fn maybe_trigger(&mut self, hit: bool) -> ReactionState {
        self.maybe_trigger_at(hit, None)
    }

    /// Same as [`maybe_trigger`](Self::maybe_trigger), recording the frame index
    pub fn maybe_trigger_at(&mut self, hit: bool, frame: Option<u64>) -> ReactionState {
        if hit && self.state == ReactionState::Untriggered {
            self.state = ReactionState::Triggered;
            self.triggered_at = frame;
            info!(frame = ?frame, "reaction triggered");
        }
        self.state
    }

    pub fn state(&self) -> ReactionState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state.is_triggered()
    }

    pub fn triggered_at(&self) -> Option<u64> {
        self.triggered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_untriggered() {
        let latch = ReactionStateMachine::new();
        assert_eq!(latch.state(), ReactionState::Untriggered);
        assert_eq!(latch.triggered_at(), None);
    }

    #[test]
    fn test_miss_is_noop() {
        let mut latch = ReactionStateMachine::new();
        for _ in 0..5 {
            assert_eq!(latch.maybe_trigger(false), ReactionState::Untriggered);
        }
    }

    #[test]
    fn test_hit_latches() {
        let mut latch = ReactionStateMachine::new();
        assert_eq!(latch.maybe_trigger(true), ReactionState::Triggered);
        assert_eq!(latch.maybe_trigger(false), ReactionState::Triggered);
        assert_eq!(latch.maybe_trigger(true), ReactionState::Triggered);
    }

    #[test]
    fn test_first_trigger_frame_kept() {
        let mut latch = ReactionStateMachine::new();
        latch.maybe_trigger_at(false, Some(0));
        latch.maybe_trigger_at(true, Some(1));
        latch.maybe_trigger_at(true, Some(7));
        assert_eq!(latch.triggered_at(), Some(1));
    }
}
