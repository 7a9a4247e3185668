//! CLI definition for the hueprint command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hueprint::{Hue, PatternKind};

use crate::config::OutputFormat;

/// hueprint - deterministic avatar identities
///
/// Allocate hues, derive colors and initials, render seeded avatar patterns,
/// and resolve typed assignee names against a roster.
#[derive(Parser, Debug)]
#[command(name = "hueprint")]
#[command(version)]
#[command(about = "Deterministic avatar colors, initials and patterns")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format (overrides configuration)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a hue maximally distant from the hues already in use
    Allocate {
        /// Hues already assigned to other users
        #[arg(allow_negative_numbers = true)]
        hues: Vec<Hue>,
    },
    /// Show the colors derived from a hue
    Colors {
        /// Hue in degrees
        #[arg(allow_negative_numbers = true)]
        hue: Hue,
    },
    /// Derive initials from a display name or email
    Initials {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email address, used when no name is given
        #[arg(long)]
        email: Option<String>,
    },
    /// Render the SVG pattern for a seed
    Pattern {
        /// Opaque seed, usually the user's id
        seed: String,
        /// Hue in degrees
        #[arg(long, allow_negative_numbers = true)]
        hue: Hue,
        /// Size in pixels
        #[arg(long, conflicts_with = "preset")]
        size: Option<u32>,
        /// Named size preset from configuration
        #[arg(long)]
        preset: Option<String>,
        /// Force a pattern style instead of the one the seed picks
        #[arg(long)]
        kind: Option<PatternKind>,
        /// Write the SVG to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Resolve typed text to a roster entry
    Match {
        /// Text typed into an assignee field
        input: String,
        /// YAML or JSON file holding a list of roster entries
        #[arg(long)]
        roster: PathBuf,
    },
    /// Derive the stored identity fields for a new user
    Identity {
        /// The user's stable id, used as the pattern seed
        #[arg(long)]
        id: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Roster of existing users whose hues are taken
        #[arg(long)]
        roster: Option<PathBuf>,
    },
}
