//! Application services layered over the repository traits.

pub mod companion;

pub use companion::CompanionService;
