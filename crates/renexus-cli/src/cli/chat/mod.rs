//! Interactive CLI chat experience for Renexus.
//!
//! This module implements the full chat loop: async readline input, a
//! composing spinner, slash commands, stage-transition notices, and
//! per-exchange persistence. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
