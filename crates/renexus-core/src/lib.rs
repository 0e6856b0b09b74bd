//! Renexus core: domain services and repository trait definitions.
//!
//! Everything in this crate is storage-agnostic. Services are generic over
//! the repository traits in [`repository`], so the SQLite implementations in
//! `renexus-infra` (or test doubles) can be plugged in without the domain
//! logic knowing.

pub mod companion;
pub mod guardian;
pub mod personality;
pub mod repository;
pub mod service;
pub mod style;
pub mod text;
