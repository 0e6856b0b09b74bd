//! Shared domain types for Renexus.
//!
//! This crate contains the core domain types used across the Renexus
//! companion platform: Companion, ConversationTurn, personality and style
//! profiles, guardian findings, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod companion;
pub mod config;
pub mod conversation;
pub mod error;
pub mod guardian;
pub mod personality;
pub mod style;
pub mod timeline;
