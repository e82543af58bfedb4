use crate::command::Command;
use crate::scheduler::Scheduler;

use super::controller::CarouselController;
use super::messages::CarouselMessage;

/// Handle carousel messages.
pub fn update_carousel<S: Scheduler>(
    carousel: &mut CarouselController<S::Handle>,
    scheduler: &mut S,
    message: CarouselMessage,
) -> Vec<Command> {
    match message {
        CarouselMessage::Next => {
            carousel.next(scheduler);
        }
        CarouselMessage::Previous => {
            carousel.prev(scheduler);
        }
        CarouselMessage::GoTo(index) => {
            carousel.go_to(index, scheduler);
        }
        CarouselMessage::Pause => carousel.pause(scheduler),
        CarouselMessage::Resume => carousel.resume(scheduler),
    }
    Vec::new()
}
