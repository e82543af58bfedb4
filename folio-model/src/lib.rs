//! Static data model shared by the folio crates.
//!
//! Everything here is immutable for the lifetime of a page session: the
//! section layout is measured once at load, and the project catalog is a
//! compiled-in table.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod filter_types;
pub mod ids;
pub mod project;
pub mod section;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::ProjectCatalog;
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::FilterTag;
pub use ids::{CategoryTag, ProjectId, SectionId};
pub use project::ProjectRecord;
pub use section::Section;
