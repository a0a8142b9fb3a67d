//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::event::types::EventKind;

#[derive(Debug, Parser)]
#[command(
    name = "eventide",
    version,
    about = "AI-assisted event planning from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn saved AI response text into suggestion cards
    Segment {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,

        /// Emit JSON records instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Ask the configured AI provider for event suggestions
    Suggest {
        /// Event name
        #[arg(long)]
        name: String,

        /// Kind of celebration
        #[arg(long, value_enum)]
        kind: EventKind,

        /// Event date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Venue, if already chosen
        #[arg(long)]
        venue: Option<String>,

        /// Expected number of guests
        #[arg(long, default_value_t = 50)]
        guests: u32,

        /// Total budget in dollars
        #[arg(long, default_value_t = 5000.0)]
        budget: f64,

        /// Emit JSON records instead of cards
        #[arg(long)]
        json: bool,
    },

    /// List vendors matching an event kind and budget
    Vendors {
        /// Kind of celebration
        #[arg(long, value_enum)]
        kind: EventKind,

        /// Budget in dollars
        #[arg(long)]
        budget: f64,

        /// Emit JSON records instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compose an invitation for one guest
    Invite {
        /// Event name
        #[arg(long)]
        name: String,

        /// Kind of celebration
        #[arg(long, value_enum)]
        kind: EventKind,

        /// Event date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Venue, if already chosen
        #[arg(long)]
        venue: Option<String>,

        /// Guest name
        #[arg(long)]
        guest: String,

        /// Guest email
        #[arg(long)]
        email: String,
    },

    /// Simulate a payment through the mock processor
    Pay {
        /// Amount in dollars
        #[arg(long)]
        amount: f64,

        /// Card last-4 digits; omit to pay by bank transfer
        #[arg(long)]
        last4: Option<String>,

        /// Receipt reference (e.g. an event id)
        #[arg(long, default_value = "eventide-demo")]
        reference: String,
    },
}

/// Convert a dollar amount from the command line to integral cents
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
