//! Digital footprint research and privacy guidance.
//!
//! The guardian builds search queries from what it knows about the user,
//! runs them through a [`research::ResearchSource`], stores the findings
//! and turns them into assessments, reports and action plans.

pub mod assessment;
pub mod queries;
pub mod report;
pub mod research;
pub mod service;

pub use research::{ResearchSource, SimulatedResearch};
pub use service::GuardianService;
