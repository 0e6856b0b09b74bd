//! Communication-style observation and learning.
//!
//! [`analysis`] extracts per-message style signals; [`StyleLearner`] folds
//! them into a long-lived [`renexus_types::style::StyleProfile`] and adapts
//! outgoing replies to match it.

pub mod analysis;
pub mod learner;

pub use learner::StyleLearner;
