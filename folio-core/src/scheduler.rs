//! Timer seam between the state machines and whatever runs them.
//!
//! State machines never hold a clock. They ask a [`Scheduler`] for a timer and
//! keep the returned handle in a [`TimerSlot`]; when the timer fires the host
//! feeds the matching [`TimerEvent`] back through
//! [`Page::update`](crate::Page::update).

use std::fmt;
use std::time::Duration;

use crate::domains::projects::CardKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Fire every `delay` until cancelled.
    Every,
}

/// Everything on the page that happens because time passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    CarouselAdvance,
    AnimateSkillBars,
    HideLoader,
    CardSettled(CardKey),
}

pub trait Scheduler {
    /// Owning handle to a scheduled timer. Deliberately not `Clone`: whoever
    /// holds it is the only party able to cancel the timer.
    type Handle: fmt::Debug;

    fn schedule(
        &mut self,
        delay: Duration,
        repeat: Repeat,
        event: TimerEvent,
    ) -> Self::Handle;

    /// Cancel a timer. Cancelling a one-shot timer that already fired only
    /// releases its resources.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Holds at most one timer handle.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: fmt::Debug> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Start a timer, cancelling whatever this slot held before.
    pub fn start<S>(
        &mut self,
        scheduler: &mut S,
        delay: Duration,
        repeat: Repeat,
        event: TimerEvent,
    ) where
        S: Scheduler<Handle = H>,
    {
        self.cancel(scheduler);
        self.handle = Some(scheduler.schedule(delay, repeat, event));
    }

    /// Returns true if a timer was held.
    pub fn cancel<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        match self.handle.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }
}
