mod cli;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use prayerlog::config::AppConfig;
use prayerlog::db::SqliteStore;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Ensure the data directory exists and open the store (migrations run on open)
    let db_path = config.ensure_db_dir()?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    log::debug!("using store at {:?}", db_path);

    match cli.command {
        Some(Commands::Signup { username, password }) => {
            handlers::handle_signup(&store, &username, password.as_deref())?;
        }
        Some(Commands::Login { username, password }) => {
            handlers::handle_login(&store, &username, password.as_deref())?;
        }
        Some(Commands::Logout) => handlers::handle_logout(&store)?,
        Some(Commands::Whoami) => handlers::handle_whoami(&store)?,
        Some(Commands::Mark {
            prayer,
            status,
            date,
        }) => {
            handlers::handle_mark(&store, &prayer, &status, date.as_deref())?;
        }
        Some(Commands::Day { date }) => handlers::handle_day(&store, date.as_deref())?,
        Some(Commands::Stats) => handlers::handle_stats(&store)?,
        Some(Commands::History { days }) => handlers::handle_history(&store, &config, days)?,
        Some(Commands::Export) => handlers::handle_export(&store)?,

        // No subcommand → launch the dashboard
        None => tui::app::run(&store, &config)?,
    }

    Ok(())
}
