//! # Hover Debounce
//!
//! The menu opens a fixed delay after the pointer enters it and closes the
//! same delay after the pointer leaves. An opposite pointer event inside the
//! delay cancels the pending transition, so brushing across the trigger does
//! not flicker the menu.
//!
//! [`HoverDebounce`] is driven by explicit millisecond timestamps. Each input
//! returns a [`TimerCommand`] telling the host what to do with its single
//! timer; when the timer elapses the host calls [`HoverDebounce::fire`] with
//! the current time (or the deadline it scheduled for).
//!
//! ```rust
//! use lib_core::nav::{HoverAction, HoverDebounce, TimerCommand};
//!
//! let mut hover = HoverDebounce::new(200);
//! assert_eq!(
//!     hover.pointer_enter(1_000, false),
//!     TimerCommand::Schedule { delay_ms: 200, deadline: 1_200 }
//! );
//! assert_eq!(hover.fire(1_100), None);
//! assert_eq!(hover.fire(1_200), Some(HoverAction::Open));
//! ```

use tracing::trace;

/// Pending transition, if any. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    PendingOpen { deadline: u64 },
    PendingClose { deadline: u64 },
}

/// What the host must do with its timer after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the timer alone.
    Keep,
    /// Drop any outstanding timer and start one that fires after `delay_ms`.
    Schedule { delay_ms: u32, deadline: u64 },
    /// Drop any outstanding timer.
    Cancel,
}

/// Transition due when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverAction {
    Open,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverDebounce {
    delay_ms: u32,
    state: HoverState,
}

impl HoverDebounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            state: HoverState::Idle,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn deadline(&self) -> Option<u64> {
        match self.state {
            HoverState::Idle => None,
            HoverState::PendingOpen { deadline } | HoverState::PendingClose { deadline } => {
                Some(deadline)
            }
        }
    }

    /// Pointer entered the menu at `now`; `open` is the current menu state.
    pub fn pointer_enter(&mut self, now: u64, open: bool) -> TimerCommand {
        match (self.state, open) {
            (HoverState::PendingClose { .. }, _) => self.cancel(),
            (_, false) => self.schedule(now, HoverAction::Open),
            (HoverState::PendingOpen { .. }, true) => self.cancel(),
            (HoverState::Idle, true) => TimerCommand::Keep,
        }
    }

    /// Pointer left the menu at `now`; `open` is the current menu state.
    pub fn pointer_leave(&mut self, now: u64, open: bool) -> TimerCommand {
        match (self.state, open) {
            (HoverState::PendingOpen { .. }, _) => self.cancel(),
            (_, true) => self.schedule(now, HoverAction::Close),
            (HoverState::PendingClose { .. }, false) => self.cancel(),
            (HoverState::Idle, false) => TimerCommand::Keep,
        }
    }

    /// Drop the pending transition, if any.
    pub fn cancel(&mut self) -> TimerCommand {
        if self.state == HoverState::Idle {
            return TimerCommand::Keep;
        }
        trace!(state = ?self.state, "hover transition cancelled");
        self.state = HoverState::Idle;
        TimerCommand::Cancel
    }

    /// Timer elapsed at `now`. Returns the due transition and clears it;
    /// returns `None` when nothing is pending or the deadline is still ahead
    /// (a timer from a superseded schedule).
    pub fn fire(&mut self, now: u64) -> Option<HoverAction> {
        let action = match self.state {
            HoverState::PendingOpen { deadline } if now >= deadline => HoverAction::Open,
            HoverState::PendingClose { deadline } if now >= deadline => HoverAction::Close,
            _ => return None,
        };
        self.state = HoverState::Idle;
        Some(action)
    }

    fn schedule(&mut self, now: u64, action: HoverAction) -> TimerCommand {
        let deadline = now + u64::from(self.delay_ms);
        self.state = match action {
            HoverAction::Open => HoverState::PendingOpen { deadline },
            HoverAction::Close => HoverState::PendingClose { deadline },
        };
        TimerCommand::Schedule {
            delay_ms: self.delay_ms,
            deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_while_closed_opens_after_delay() {
        let mut hover = HoverDebounce::new(200);
        assert_eq!(
            hover.pointer_enter(0, false),
            TimerCommand::Schedule { delay_ms: 200, deadline: 200 }
        );
        assert_eq!(hover.state(), HoverState::PendingOpen { deadline: 200 });
        assert_eq!(hover.fire(199), None);
        assert_eq!(hover.fire(200), Some(HoverAction::Open));
        assert_eq!(hover.state(), HoverState::Idle);
        assert_eq!(hover.fire(400), None);
    }

    #[test]
    fn test_leave_before_delay_cancels_open() {
        let mut hover = HoverDebounce::new(200);
        hover.pointer_enter(0, false);
        assert_eq!(hover.pointer_leave(150, false), TimerCommand::Cancel);
        assert_eq!(hover.fire(200), None);
    }

    #[test]
    fn test_enter_before_delay_cancels_close() {
        let mut hover = HoverDebounce::new(200);
        hover.pointer_leave(0, true);
        assert_eq!(hover.pointer_enter(50, true), TimerCommand::Cancel);
        assert_eq!(hover.fire(250), None);
    }

    #[test]
    fn test_repeated_enter_reschedules() {
        let mut hover = HoverDebounce::new(200);
        hover.pointer_enter(0, false);
        assert_eq!(
            hover.pointer_enter(120, false),
            TimerCommand::Schedule { delay_ms: 200, deadline: 320 }
        );
        // The first timer fires at 200 but its deadline was superseded.
        assert_eq!(hover.fire(200), None);
        assert_eq!(hover.fire(320), Some(HoverAction::Open));
    }

    #[test]
    fn test_events_matching_current_state_do_nothing() {
        let mut hover = HoverDebounce::new(200);
        assert_eq!(hover.pointer_enter(0, true), TimerCommand::Keep);
        assert_eq!(hover.pointer_leave(0, false), TimerCommand::Keep);
        assert_eq!(hover.cancel(), TimerCommand::Keep);
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let mut hover = HoverDebounce::new(0);
        hover.pointer_leave(500, true);
        assert_eq!(hover.fire(500), Some(HoverAction::Close));
    }
}
