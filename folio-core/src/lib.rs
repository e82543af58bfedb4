//! Page state machines for the folio portfolio.
//!
//! Everything here is plain data and pure transitions. A host (the browser
//! front end, or a test) turns user input into [`Message`]s, feeds them to
//! [`Page::update`], executes the returned [`Command`]s and mirrors the
//! page's state onto whatever it renders. Timers go through the
//! [`Scheduler`] trait so the same logic runs against real browser timers
//! and against [`testing::ManualScheduler`].

#![allow(missing_docs)]

pub mod command;
pub mod domains;
pub mod error;
pub mod message;
pub mod page;
pub mod scheduler;
pub mod testing;

pub use command::{Command, ObserveTarget};
pub use error::{CoreError, Result};
pub use message::{Key, Message};
pub use page::{Page, PageLayout};
pub use scheduler::{Repeat, Scheduler, TimerEvent, TimerSlot};
