//! Project grid: category filter with animated card transitions, and the
//! project detail modal.

pub mod filter;
pub mod messages;
pub mod modal;
pub mod state;
pub mod update;

pub use filter::{CardKey, CardPhase, CardSpec, CardStyle, ProjectCard, ProjectFilter};
pub use messages::ProjectsMessage;
pub use modal::ProjectModal;
pub use state::ProjectsState;
pub use update::update_projects;
