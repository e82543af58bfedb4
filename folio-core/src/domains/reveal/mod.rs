//! One-shot visibility effects: fade-in reveal, skill bar animation and the
//! page loader.

pub mod messages;
pub mod state;

pub use messages::RevealMessage;
pub use state::{RevealKey, RevealState, SkillsPhase};
