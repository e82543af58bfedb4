//! Category filter over the project cards.
//!
//! Cards animate in two steps. A card being shown is put back into layout
//! first and faded in a moment later; a card being hidden fades out first and
//! leaves layout once the fade is done. Each card owns the timer for its
//! pending step, so a newer filter cancels an older, unfinished transition.

use std::fmt;
use std::time::Duration;

use folio_model::{CategoryTag, FilterTag, ProjectId};

use crate::scheduler::{Repeat, Scheduler, TimerEvent, TimerSlot};

/// Position of a card in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Shown,
    /// In layout, about to fade in.
    Entering,
    /// Fading out, still in layout.
    Leaving,
    Hidden,
}

/// Inline style values for a card in a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub display: &'static str,
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl CardPhase {
    pub fn style(self) -> CardStyle {
        match self {
            CardPhase::Shown => CardStyle {
                display: "block",
                opacity: "1",
                transform: "scale(1)",
            },
            CardPhase::Entering | CardPhase::Leaving => CardStyle {
                display: "block",
                opacity: "0",
                transform: "scale(0.8)",
            },
            CardPhase::Hidden => CardStyle {
                display: "none",
                opacity: "0",
                transform: "scale(0.8)",
            },
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, CardPhase::Shown | CardPhase::Entering)
    }
}

/// What the host knows about a card when the page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    /// `data-project`; cards without one cannot open the modal.
    pub project: Option<ProjectId>,
    /// `data-category`.
    pub category: CategoryTag,
}

#[derive(Debug)]
pub struct ProjectCard<H> {
    pub spec: CardSpec,
    phase: CardPhase,
    timer: TimerSlot<H>,
}

impl<H: fmt::Debug> ProjectCard<H> {
    fn new(spec: CardSpec) -> Self {
        Self {
            spec,
            phase: CardPhase::Shown,
            timer: TimerSlot::new(),
        }
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }
}

#[derive(Debug)]
pub struct ProjectFilter<H> {
    active: FilterTag,
    cards: Vec<ProjectCard<H>>,
    show_delay: Duration,
    hide_delay: Duration,
}

impl<H: fmt::Debug> ProjectFilter<H> {
    pub fn new(
        cards: Vec<CardSpec>,
        show_delay: Duration,
        hide_delay: Duration,
    ) -> Self {
        Self {
            active: FilterTag::All,
            cards: cards.into_iter().map(ProjectCard::new).collect(),
            show_delay,
            hide_delay,
        }
    }

    pub fn active(&self) -> &FilterTag {
        &self.active
    }

    pub fn cards(&self) -> &[ProjectCard<H>] {
        &self.cards
    }

    pub fn card(&self, key: CardKey) -> Option<&ProjectCard<H>> {
        self.cards.get(key.0)
    }

    /// Keys of cards that match the active filter.
    pub fn visible(&self) -> impl Iterator<Item = CardKey> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.phase.is_visible())
            .map(|(index, _)| CardKey(index))
    }

    pub fn apply<S>(&mut self, filter: FilterTag, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        log::debug!("projects: filter set to '{filter}'");
        for (index, card) in self.cards.iter_mut().enumerate() {
            let key = CardKey(index);
            let wanted = filter.matches(&card.spec.category);
            match (wanted, card.phase) {
                (true, CardPhase::Shown) | (false, CardPhase::Hidden) => {}
                (true, _) => {
                    card.phase = CardPhase::Entering;
                    card.timer.start(
                        scheduler,
                        self.show_delay,
                        Repeat::Once,
                        TimerEvent::CardSettled(key),
                    );
                }
                (false, _) => {
                    card.phase = CardPhase::Leaving;
                    card.timer.start(
                        scheduler,
                        self.hide_delay,
                        Repeat::Once,
                        TimerEvent::CardSettled(key),
                    );
                }
            }
        }
        self.active = filter;
    }

    /// Finish a card's pending transition.
    pub fn settle<S>(&mut self, key: CardKey, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        let Some(card) = self.cards.get_mut(key.0) else {
            return;
        };
        card.timer.cancel(scheduler);
        card.phase = match card.phase {
            CardPhase::Entering => CardPhase::Shown,
            CardPhase::Leaving => CardPhase::Hidden,
            settled => settled,
        };
    }

    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        for card in &mut self.cards {
            card.timer.cancel(scheduler);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, TimerId};

    fn filter() -> ProjectFilter<TimerId> {
        let spec = |category: &str| CardSpec {
            project: None,
            category: CategoryTag::from(category),
        };
        ProjectFilter::new(
            vec![spec("clinical"), spec("compliance"), spec("clinical")],
            Duration::from_millis(10),
            Duration::from_millis(300),
        )
    }

    fn settle_all(f: &mut ProjectFilter<TimerId>, s: &mut ManualScheduler) {
        while let Some(TimerEvent::CardSettled(key)) =
            s.pop_due(Duration::from_secs(60))
        {
            f.settle(key, s);
        }
    }

    #[test]
    fn hidden_cards_fade_before_leaving_layout() {
        let mut s = ManualScheduler::new();
        let mut f = filter();
        f.apply(FilterTag::parse("clinical"), &mut s);
        assert_eq!(f.cards()[1].phase(), CardPhase::Leaving);
        assert_eq!(f.cards()[1].phase().style().display, "block");
        assert_eq!(f.cards()[0].phase(), CardPhase::Shown);

        settle_all(&mut f, &mut s);
        assert_eq!(f.cards()[1].phase(), CardPhase::Hidden);
        assert_eq!(f.cards()[1].phase().style().display, "none");
        assert_eq!(f.visible().collect::<Vec<_>>(), vec![CardKey(0), CardKey(2)]);
    }

    #[test]
    fn reshowing_a_leaving_card_cancels_its_hide() {
        let mut s = ManualScheduler::new();
        let mut f = filter();
        f.apply(FilterTag::parse("clinical"), &mut s);
        f.apply(FilterTag::All, &mut s);
        assert_eq!(s.active_timers(), 1);
        settle_all(&mut f, &mut s);
        assert!(f.cards().iter().all(|c| c.phase() == CardPhase::Shown));
    }

    #[test]
    fn settling_an_unknown_card_is_ignored() {
        let mut s = ManualScheduler::new();
        let mut f = filter();
        f.settle(CardKey(42), &mut s);
        assert_eq!(f.cards().len(), 3);
    }
}
