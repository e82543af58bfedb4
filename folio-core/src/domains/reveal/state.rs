use std::fmt;
use std::time::Duration;

use crate::command::{Command, ObserveTarget};
use crate::scheduler::{Repeat, Scheduler, TimerEvent, TimerSlot};

/// Position of a fade-in target in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsPhase {
    #[default]
    Waiting,
    /// Seen; bars animate once the delay elapses.
    Scheduled,
    Animated,
}

#[derive(Debug)]
pub struct RevealState<H> {
    revealed: Vec<bool>,
    skills: SkillsPhase,
    skills_timer: TimerSlot<H>,
    loader_visible: bool,
    loader_timer: TimerSlot<H>,
}

impl<H: fmt::Debug> RevealState<H> {
    pub fn new(targets: usize) -> Self {
        Self {
            revealed: vec![false; targets],
            skills: SkillsPhase::Waiting,
            skills_timer: TimerSlot::new(),
            loader_visible: true,
            loader_timer: TimerSlot::new(),
        }
    }

    /// Number of fade-in targets.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.get(key.0).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn skills(&self) -> SkillsPhase {
        self.skills
    }

    pub fn loader_visible(&self) -> bool {
        self.loader_visible
    }

    /// Reveal a target the first time it is seen and stop observing it.
    pub fn intersected(&mut self, key: RevealKey) -> Vec<Command> {
        match self.revealed.get_mut(key.0) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                vec![Command::Unobserve(ObserveTarget::Reveal(key))]
            }
            _ => Vec::new(),
        }
    }

    pub fn skills_visible<S>(
        &mut self,
        scheduler: &mut S,
        delay: Duration,
    ) -> Vec<Command>
    where
        S: Scheduler<Handle = H>,
    {
        if self.skills != SkillsPhase::Waiting {
            return Vec::new();
        }
        self.skills = SkillsPhase::Scheduled;
        self.skills_timer.start(
            scheduler,
            delay,
            Repeat::Once,
            TimerEvent::AnimateSkillBars,
        );
        vec![Command::Unobserve(ObserveTarget::SkillsSection)]
    }

    pub fn animate_skill_bars<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.skills_timer.cancel(scheduler);
        if self.skills == SkillsPhase::Scheduled {
            log::debug!("reveal: animating skill bars");
            self.skills = SkillsPhase::Animated;
        }
    }

    pub fn schedule_loader_hide<S>(&mut self, scheduler: &mut S, delay: Duration)
    where
        S: Scheduler<Handle = H>,
    {
        if self.loader_visible {
            self.loader_timer.start(
                scheduler,
                delay,
                Repeat::Once,
                TimerEvent::HideLoader,
            );
        }
    }

    pub fn hide_loader<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.loader_timer.cancel(scheduler);
        self.loader_visible = false;
    }

    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.skills_timer.cancel(scheduler);
        self.loader_timer.cancel(scheduler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, TimerId};

    #[test]
    fn targets_reveal_once() {
        let mut r = RevealState::<TimerId>::new(2);
        assert_eq!(
            r.intersected(RevealKey(1)),
            vec![Command::Unobserve(ObserveTarget::Reveal(RevealKey(1)))]
        );
        assert!(r.intersected(RevealKey(1)).is_empty());
        assert!(r.intersected(RevealKey(5)).is_empty());
        assert!(r.is_revealed(RevealKey(1)));
        assert!(!r.is_revealed(RevealKey(0)));
        assert_eq!(r.revealed_count(), 1);
    }

    #[test]
    fn skills_animate_after_delay_and_only_once() {
        let mut s = ManualScheduler::new();
        let mut r = RevealState::new(0);
        let delay = Duration::from_millis(200);
        assert_eq!(
            r.skills_visible(&mut s, delay),
            vec![Command::Unobserve(ObserveTarget::SkillsSection)]
        );
        assert!(r.skills_visible(&mut s, delay).is_empty());
        assert_eq!(s.active_timers(), 1);
        assert_eq!(r.skills(), SkillsPhase::Scheduled);

        assert_eq!(s.pop_due(delay), Some(TimerEvent::AnimateSkillBars));
        r.animate_skill_bars(&mut s);
        assert_eq!(r.skills(), SkillsPhase::Animated);
        assert!(r.skills_visible(&mut s, delay).is_empty());
    }

    #[test]
    fn loader_hides_when_its_timer_fires() {
        let mut s = ManualScheduler::new();
        let mut r = RevealState::new(0);
        r.schedule_loader_hide(&mut s, Duration::from_secs(1));
        assert!(r.loader_visible());
        assert_eq!(s.pop_due(Duration::from_secs(1)), Some(TimerEvent::HideLoader));
        r.hide_loader(&mut s);
        assert!(!r.loader_visible());
        r.schedule_loader_hide(&mut s, Duration::from_secs(1));
        assert_eq!(s.active_timers(), 0);
    }
}
