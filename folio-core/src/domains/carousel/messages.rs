#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    Next,
    Previous,
    /// Jump to a slide (dot click). Out-of-range indices wrap.
    GoTo(usize),
    /// Pointer entered the carousel.
    Pause,
    /// Pointer left the carousel.
    Resume,
}
