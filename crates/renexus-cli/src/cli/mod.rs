//! CLI command definitions and dispatch for the `ren` binary.
//!
//! Uses clap derive macros for argument parsing. Companion lifecycle
//! commands sit at the top level (e.g. `ren create`, `ren chat <slug>`);
//! privacy features live under `ren guardian`.

pub mod chat;
pub mod companion;
pub mod demo;
pub mod guardian;
pub mod status;
pub mod timeline;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Your adaptive AI companion, living entirely on your machine.
#[derive(Parser)]
#[command(name = "ren", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new companion.
    Create {
        /// Your name (skips the interactive wizard if provided).
        #[arg(long)]
        name: Option<String>,

        /// Display name for the companion persona (defaults to "Ren").
        #[arg(long)]
        companion_name: Option<String>,

        /// Your age, used for the timeline and footprint research.
        #[arg(long)]
        age: Option<u8>,

        /// Your location, used for footprint research.
        #[arg(long)]
        location: Option<String>,
    },

    /// List all companions.
    #[command(alias = "ls")]
    List {
        /// Sort by field (slug, user_name, trust, conversation_count,
        /// created_at, last_active_at).
        #[arg(long, default_value = "created_at")]
        sort: String,
    },

    /// Show a companion's full profile.
    Show {
        /// Companion slug to display.
        slug: String,
    },

    /// Start an interactive chat session with a companion.
    Chat {
        /// Companion slug to chat with.
        slug: String,

        /// Show per-message analysis (sentiment, detected topics).
        #[arg(long, short = 'V')]
        verbose: bool,
    },

    /// System status dashboard.
    Status,

    /// Show the digital-era timeline for a companion's user.
    Timeline {
        /// Companion slug.
        slug: String,

        /// Age to use when none is stored (or to override the stored one).
        #[arg(long)]
        age: Option<u8>,
    },

    /// Digital-footprint research and privacy guidance.
    Guardian {
        #[command(subcommand)]
        action: GuardianCommand,
    },

    /// Delete a companion permanently.
    #[command(alias = "rm")]
    Delete {
        /// Companion slug to delete.
        slug: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Run the guided feature tour against a temporary data directory.
    Demo,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum GuardianCommand {
    /// Research the user's public digital footprint (simulated locally).
    Research {
        /// Companion slug.
        slug: String,

        /// Skip the consent prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Render the full privacy report.
    Report {
        /// Companion slug.
        slug: String,
    },

    /// Privacy tips (general, social_media, passwords, data_brokers).
    Tips {
        /// Tip category; unknown values fall back to general.
        category: Option<String>,
    },

    /// Build a phased privacy action plan (low, medium, high).
    Plan {
        /// How much time you can commit.
        #[arg(default_value = "medium")]
        commitment: String,
    },
}
