//! Movement domain: cooperative scheduler for delayed and interval actions.
//!
//! Sequences never block the tick. Each pending sequence is an entry with a
//! timer; the owner advances the scheduler once per tick and applies the
//! returned [`SequenceEvent`]s to its own state. Entries started during a tick
//! join the schedule only after that tick's advance, so they begin aging on the
//! following tick.

use std::time::Duration;

use bevy::prelude::*;

/// Handle for a started sequence, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimedAction {
    /// Gravity off, jump assist off, dash flags on until it completes.
    Dash,
    /// Early dash refund for a grounded player.
    GroundDash,
    /// Drag interpolation that outlives the dash itself.
    DragRamp,
    /// Movement input ignored until it completes.
    MovementDisable,
}

impl TimedAction {
    /// Starting one of these cancels any pending instance of the same kind.
    pub fn supersedes_pending(self) -> bool {
        matches!(self, TimedAction::MovementDisable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceEvent {
    /// Still running; `fraction` is elapsed / duration.
    Progress { action: TimedAction, fraction: f32 },
    Completed { action: TimedAction },
}

#[derive(Debug)]
struct ScheduledEntry {
    token: ActionToken,
    action: TimedAction,
    timer: Timer,
}

#[derive(Debug, Default)]
pub struct TimedActionScheduler {
    next_token: u64,
    entries: Vec<ScheduledEntry>,
    incoming: Vec<ScheduledEntry>,
}

impl TimedActionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, action: TimedAction, seconds: f32) -> ActionToken {
        if action.supersedes_pending() {
            let cancelled = self.cancel_all(action);
            if cancelled > 0 {
                debug!("{:?} superseded {} pending instance(s)", action, cancelled);
            }
        }

        // Non-finite or overflowing lengths become zero-length entries
        let duration = Duration::try_from_secs_f32(seconds.max(0.0)).unwrap_or_default();
        let token = ActionToken(self.next_token);
        self.next_token += 1;
        self.incoming.push(ScheduledEntry {
            token,
            action,
            timer: Timer::new(duration, TimerMode::Once),
        });
        token
    }

    /// Cancel a pending sequence. Returns false if it already completed or was cancelled.
    pub fn cancel(&mut self, token: ActionToken) -> bool {
        let before = self.len();
        self.entries.retain(|entry| entry.token != token);
        self.incoming.retain(|entry| entry.token != token);
        self.len() != before
    }

    pub fn cancel_all(&mut self, action: TimedAction) -> usize {
        let before = self.len();
        self.entries.retain(|entry| entry.action != action);
        self.incoming.retain(|entry| entry.action != action);
        before - self.len()
    }

    pub fn is_pending(&self, action: TimedAction) -> bool {
        self.iter().any(|entry| entry.action == action)
    }

    pub fn pending_count(&self, action: TimedAction) -> usize {
        self.iter().filter(|entry| entry.action == action).count()
    }

    /// Seconds left on a pending sequence.
    pub fn remaining_secs(&self, token: ActionToken) -> Option<f32> {
        self.iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.timer.remaining_secs())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len() + self.incoming.len()
    }

    /// Age every scheduled entry by `dt` seconds and report what happened, in
    /// start order. Completed entries are removed.
    pub fn advance(&mut self, dt: f32) -> Vec<SequenceEvent> {
        let delta = Duration::try_from_secs_f32(dt).unwrap_or_default();
        let mut events = Vec::with_capacity(self.entries.len());

        self.entries.retain_mut(|entry| {
            entry.timer.tick(delta);
            if entry.timer.remaining_secs() == 0.0 {
                events.push(SequenceEvent::Completed {
                    action: entry.action,
                });
                false
            } else {
                events.push(SequenceEvent::Progress {
                    action: entry.action,
                    fraction: entry.timer.fraction(),
                });
                true
            }
        });

        self.entries.append(&mut self.incoming);
        events
    }

    fn iter(&self) -> impl Iterator<Item = &ScheduledEntry> {
        self.entries.iter().chain(self.incoming.iter())
    }
}
