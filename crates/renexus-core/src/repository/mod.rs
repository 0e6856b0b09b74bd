//! Repository trait definitions (ports).
//!
//! These traits define the persistence interface the services are generic
//! over. `renexus-infra` provides the SQLite implementations.

pub mod companion;
pub mod conversation;
pub mod footprint;
pub mod profile;

pub use companion::{CompanionFilter, CompanionRepository};
pub use conversation::ConversationRepository;
pub use footprint::FootprintRepository;
pub use profile::ProfileRepository;

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}
