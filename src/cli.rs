//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::domain::Instant;

/// Top-level CLI parser for `varclock`.
#[derive(Debug, Parser)]
#[command(
    name = "varclock",
    version,
    about = "A clock with twelve variable hours of daylight and twelve of night"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the variable time right now.
    Now {
        /// Where to run the clock.
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Keep showing the variable time, once per second.
    Watch {
        /// Stop after this many frames.
        #[arg(long)]
        ticks: Option<u64>,
        /// Where to run the clock.
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Show the resolved location and today's sunrise and sunset.
    Sun {
        /// Where to look up sun times.
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Compute the variable time for explicit instants (RFC 3339 or epoch ms).
    Compute {
        /// The moment to compute.
        #[arg(long)]
        now: Instant,
        /// Sunrise of the day.
        #[arg(long)]
        sunrise: Instant,
        /// Sunset of the day.
        #[arg(long)]
        sunset: Instant,
    },
}

/// Coordinate overriding geolocation and `VARCLOCK_LATITUDE`/`VARCLOCK_LONGITUDE`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LocationArgs {
    /// Latitude in decimal degrees (north positive).
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees (east positive).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}
