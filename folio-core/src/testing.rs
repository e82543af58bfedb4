//! Deterministic scheduler for driving a [`Page`] without a browser.
//!
//! Time only moves when the test says so. Timers fire in due order (ties in
//! scheduling order), and a timer cancelled while others are being processed
//! never fires afterwards.

use std::time::Duration;

use crate::command::Command;
use crate::message::Message;
use crate::page::Page;
use crate::scheduler::{Repeat, Scheduler, TimerEvent};

/// Handle issued by [`ManualScheduler`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct PendingTimer {
    id: u64,
    due: Duration,
    period: Option<Duration>,
    event: TimerEvent,
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<PendingTimer>,
    fired: Vec<TimerEvent>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of live timers that will deliver `event`.
    pub fn active_for(&self, event: TimerEvent) -> usize {
        self.timers.iter().filter(|t| t.event == event).count()
    }

    /// Due time of the earliest live timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Every event fired so far, in order.
    pub fn fired(&self) -> &[TimerEvent] {
        &self.fired
    }

    /// Fire the earliest timer due at or before `until`, moving the clock to
    /// its due time. Repeating timers are rescheduled one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerEvent> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(position, _)| position)?;

        let timer = self.timers.remove(position);
        self.now = self.now.max(timer.due);
        if let Some(period) = timer.period {
            self.timers.push(PendingTimer {
                due: timer.due + period,
                ..timer.clone()
            });
        }
        self.fired.push(timer.event);
        Some(timer.event)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule(
        &mut self,
        delay: Duration,
        repeat: Repeat,
        event: TimerEvent,
    ) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        let period = match repeat {
            Repeat::Once => None,
            // A zero period would never let the clock move past `now`.
            Repeat::Every => Some(delay.max(Duration::from_millis(1))),
        };
        self.timers.push(PendingTimer {
            id,
            due: self.now + delay,
            period,
            event,
        });
        TimerId(id)
    }

    fn cancel(&mut self, handle: TimerId) {
        self.timers.retain(|t| t.id != handle.0);
    }
}

impl Page<ManualScheduler> {
    /// Advance virtual time by `by`, delivering every timer that comes due to
    /// the page in order. Returns the commands those deliveries produced.
    pub fn advance(&mut self, by: Duration) -> Vec<Command> {
        let target = self.scheduler().now() + by;
        let mut commands = Vec::new();
        while let Some(event) = self.scheduler_mut().pop_due(target) {
            commands.extend(self.update(Message::Timer(event)));
        }
        self.scheduler_mut().set_now(target);
        commands
    }
}
