//! Carousel index and autoplay timer lifecycle.
//!
//! The controller is always idle at some index; autoplay is either armed or
//! disarmed, and while armed a repeating timer may or may not be running
//! (hover pauses it without disarming). The controller owns the timer handle:
//! every path that starts a timer cancels the previous one first, so at most
//! one autoplay timer exists at any time.

use std::fmt;
use std::time::Duration;

use crate::error::{CoreError, Result};
use crate::scheduler::{Repeat, Scheduler, TimerEvent, TimerSlot};

#[derive(Debug)]
pub struct CarouselController<H> {
    slide_count: usize,
    index: usize,
    armed: bool,
    period: Duration,
    timer: TimerSlot<H>,
}

impl<H: fmt::Debug> CarouselController<H> {
    /// Armed at slide 0 but not yet running; call [`start`](Self::start)
    /// once a scheduler is available.
    pub fn new(slide_count: usize, period: Duration) -> Result<Self> {
        if slide_count == 0 {
            return Err(CoreError::EmptyCarousel);
        }
        if period.is_zero() {
            return Err(CoreError::ZeroPeriod);
        }
        Ok(Self {
            slide_count,
            index: 0,
            armed: true,
            period,
            timer: TimerSlot::new(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slide_count
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether an autoplay timer is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    /// Arm autoplay and (re)start the timer.
    pub fn start<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.armed = true;
        self.restart_timer(scheduler);
    }

    /// Restart the timer if autoplay is armed. Any running timer is
    /// cancelled first.
    pub fn resume<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if self.armed {
            self.restart_timer(scheduler);
        }
    }

    /// Cancel the pending timer. Autoplay stays armed, so a later
    /// [`resume`](Self::resume) picks it up again.
    pub fn pause<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if self.timer.cancel(scheduler) {
            log::debug!("carousel: autoplay paused at slide {}", self.index);
        }
    }

    /// Stop autoplay until [`start`](Self::start) is called again.
    pub fn disarm<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.armed = false;
        self.timer.cancel(scheduler);
    }

    pub fn next<S>(&mut self, scheduler: &mut S) -> usize
    where
        S: Scheduler<Handle = H>,
    {
        self.show(self.index + 1);
        self.after_user_navigation(scheduler)
    }

    pub fn prev<S>(&mut self, scheduler: &mut S) -> usize
    where
        S: Scheduler<Handle = H>,
    {
        self.show(self.index + self.slide_count - 1);
        self.after_user_navigation(scheduler)
    }

    /// Jump to `index mod len`.
    pub fn go_to<S>(&mut self, index: usize, scheduler: &mut S) -> usize
    where
        S: Scheduler<Handle = H>,
    {
        self.show(index);
        self.after_user_navigation(scheduler)
    }

    /// Timer-driven advance. The repeating timer keeps running.
    pub fn advance(&mut self) -> usize {
        self.show(self.index + 1);
        self.index
    }

    /// Drop the timer; used when the page goes away.
    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.timer.cancel(scheduler);
    }

    fn show(&mut self, index: usize) {
        self.index = index % self.slide_count;
    }

    fn after_user_navigation<S>(&mut self, scheduler: &mut S) -> usize
    where
        S: Scheduler<Handle = H>,
    {
        // The next auto-advance is a full period after the user's action.
        if self.armed {
            self.restart_timer(scheduler);
        }
        self.index
    }

    fn restart_timer<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.timer.start(
            scheduler,
            self.period,
            Repeat::Every,
            TimerEvent::CarouselAdvance,
        );
    }
}
