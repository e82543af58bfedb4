mod common;

use std::time::Duration;

use folio_config::Settings;
use folio_core::domains::carousel::{CarouselController, CarouselMessage};
use folio_core::testing::{ManualScheduler, TimerId};
use folio_core::{Message, Page, TimerEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PERIOD: Duration = Duration::from_millis(5000);

fn carousel(page: &Page<ManualScheduler>) -> &CarouselController<TimerId> {
    page.carousel.as_ref().expect("layout has slides")
}

#[test]
fn index_stays_in_range_for_random_navigation() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for slides in 1..=6 {
        let mut scheduler = ManualScheduler::new();
        let mut controller =
            CarouselController::new(slides, PERIOD).expect("controller");
        controller.start(&mut scheduler);

        let mut expected = 0usize;
        for _ in 0..200 {
            let index = match rng.random_range(0..4) {
                0 => {
                    expected = (expected + 1) % slides;
                    controller.next(&mut scheduler)
                }
                1 => {
                    expected = (expected + slides - 1) % slides;
                    controller.prev(&mut scheduler)
                }
                2 => {
                    let target = rng.random_range(0..20);
                    expected = target % slides;
                    controller.go_to(target, &mut scheduler)
                }
                _ => {
                    expected = (expected + 1) % slides;
                    controller.advance()
                }
            };
            assert!(index < slides);
            assert_eq!(index, expected);
            assert_eq!(scheduler.active_timers(), 1);
        }
    }
}

#[test]
fn autoplay_advances_once_per_period() {
    let mut page = common::page();
    page.advance(PERIOD * 2 + Duration::from_millis(10));
    assert_eq!(carousel(&page).index(), 2);
    page.advance(PERIOD);
    assert_eq!(carousel(&page).index(), 0);
    assert_eq!(
        page.scheduler().active_for(TimerEvent::CarouselAdvance),
        1
    );
}

#[test]
fn hover_pause_leaves_no_stale_tick() {
    let mut page = common::page();
    page.advance(Duration::from_millis(4900));
    page.update(Message::Carousel(CarouselMessage::Pause));
    assert_eq!(page.scheduler().active_for(TimerEvent::CarouselAdvance), 0);

    page.advance(PERIOD * 3);
    assert_eq!(carousel(&page).index(), 0);

    page.update(Message::Carousel(CarouselMessage::Resume));
    page.update(Message::Carousel(CarouselMessage::Resume));
    assert_eq!(page.scheduler().active_for(TimerEvent::CarouselAdvance), 1);

    page.advance(PERIOD - Duration::from_millis(1));
    assert_eq!(carousel(&page).index(), 0);
    page.advance(Duration::from_millis(1));
    assert_eq!(carousel(&page).index(), 1);
}

#[test]
fn user_navigation_restarts_the_period() {
    let mut page = common::page();
    page.advance(Duration::from_millis(4000));
    page.update(Message::Carousel(CarouselMessage::Next));
    assert_eq!(carousel(&page).index(), 1);

    // The original tick at 5000 ms must not fire.
    page.advance(Duration::from_millis(4000));
    assert_eq!(carousel(&page).index(), 1);
    page.advance(Duration::from_millis(1000));
    assert_eq!(carousel(&page).index(), 2);
}

#[test]
fn dot_click_wraps_out_of_range() {
    let mut page = common::page();
    page.update(Message::Carousel(CarouselMessage::GoTo(7)));
    assert_eq!(carousel(&page).index(), 1);
}

#[test]
fn disabled_autoplay_never_ticks() {
    let settings = Settings {
        autoplay_enabled: false,
        ..Settings::default()
    };
    let mut page = common::page_with(settings);
    page.update(Message::Carousel(CarouselMessage::Resume));
    page.update(Message::Carousel(CarouselMessage::Next));
    page.advance(PERIOD * 4);
    assert_eq!(carousel(&page).index(), 1);
    assert!(!carousel(&page).is_armed());
    assert_eq!(page.scheduler().active_for(TimerEvent::CarouselAdvance), 0);
}

#[test]
fn teardown_cancels_every_timer() {
    let mut page = common::page();
    page.teardown();
    assert_eq!(page.scheduler().active_timers(), 0);
}
