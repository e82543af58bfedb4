//! Testimonial carousel with autoplay.

pub mod controller;
pub mod messages;
pub mod update;

pub use controller::CarouselController;
pub use messages::CarouselMessage;
pub use update::update_carousel;
