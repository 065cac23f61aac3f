use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prayerlog", version, about = "Log the five daily prayers and keep your streak")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in
    Signup {
        username: String,
        /// Password (prompted for when omitted). Stored as plain text.
        #[arg(long)]
        password: Option<String>,
    },
    /// Log in to an existing account
    Login {
        username: String,
        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Log out of the current account
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Set a prayer's status for a day
    Mark {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Status (jamaah, alone, late, not-prayed)
        status: String,
        /// Day to update as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one day's prayers
    Day {
        /// Day to show as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show streak, totals and breakdowns
    Stats,
    /// Show the status grid, newest day first
    History {
        /// Number of days to show
        #[arg(long)]
        days: Option<u32>,
    },
    /// Print the prayer log as JSON to stdout
    Export,
}
