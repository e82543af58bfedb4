//! Configuration for the folio page.
//!
//! Tunables live as compiled constants in [`constants`]. A page may embed a
//! JSON document that overrides any of them; [`ConfigLoader`] parses it into a
//! [`RuntimeConfig`], applies guard rails, and the resolved [`Settings`] are
//! what the state machines consume.

pub mod constants;
pub mod loader;
pub mod runtime;
pub mod settings;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use runtime::RuntimeConfig;
pub use settings::Settings;
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
