use thiserror::Error;

/// Construction-time failures. Once a [`Page`](crate::Page) exists every
/// transition is total.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("carousel needs at least one slide")]
    EmptyCarousel,

    #[error("carousel autoplay period must be greater than zero")]
    ZeroPeriod,
}

pub type Result<T> = std::result::Result<T, CoreError>;
