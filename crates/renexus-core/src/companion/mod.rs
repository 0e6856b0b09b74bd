//! Companion conversation pipeline: reply composition plus the engine
//! that ties analysis, style learning, persistence, and evolution together.

pub mod engine;
pub mod responder;

pub use engine::{CompanionEngine, ExchangeOutcome};
pub use responder::Responder;
