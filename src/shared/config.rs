//! Command line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::domain::primitive::{DisplayRounding, RemainingTime};

/// How remaining seconds are bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rounding {
    /// Round up to the next 10 seconds
    Up,
    /// Truncate down to the last 10 seconds
    Down,
}

/// Which canvas pixel grid to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CanvasMarker {
    /// Two square-ish pixels per cell; solid digits
    HalfBlock,
    /// 2x4 braille dots per cell; finer but dotted
    Braille,
    /// One pixel per cell
    Block,
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "ptimer")]
#[command(about = "Full-screen seven-segment countdown timer")]
#[command(version)]
pub struct Config {
    /// Countdown length in minutes at start, and what Enter resets to
    #[arg(short, long, default_value = "20")]
    pub duration: u32,

    /// Switch digits to the warning color at this many minutes left
    #[arg(short, long, default_value = "5")]
    pub warn: u32,

    /// Display rounding of remaining seconds
    #[arg(long, value_enum, default_value_t = Rounding::Up)]
    pub rounding: Rounding,

    /// Canvas pixel grid
    #[arg(long, value_enum, default_value_t = CanvasMarker::HalfBlock)]
    pub marker: CanvasMarker,

    /// Render loop period in milliseconds
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(10..=1000))]
    pub tick_ms: u64,

    /// Write logs to this file (the terminal is used by the display)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn default_interval(&self) -> RemainingTime {
        RemainingTime::from_mins(i64::from(self.duration))
    }

    pub fn warn_threshold(&self) -> RemainingTime {
        RemainingTime::from_mins(i64::from(self.warn))
    }

    pub fn display_rounding(&self) -> DisplayRounding {
        match self.rounding {
            Rounding::Up => DisplayRounding::Up,
            Rounding::Down => DisplayRounding::Down,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
