use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

use prayerlog::config::AppConfig;
use prayerlog::db::{AccountRepo, KvStore};
use prayerlog::models::{parse_date, PrayerName, PrayerStatus};
use prayerlog::stats;
use prayerlog::Session;

use crate::utils::format::{format_percent, progress_bar, status_glyph};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn status_color(status: PrayerStatus) -> &'static str {
    match status {
        PrayerStatus::InCongregation => GREEN,
        PrayerStatus::Alone => AMBER,
        PrayerStatus::Late => RED,
        PrayerStatus::NotPrayed => DIM,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn date_or_today(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today()),
    }
}

fn require_session(store: &dyn KvStore) -> Result<Session> {
    Session::resume_required(store, today())
        .context("Log in first with `prayerlog login <username>`")
}

fn password_or_prompt(password: Option<&str>) -> Result<String> {
    match password {
        Some(p) => Ok(p.to_string()),
        None => prompt("  Password: "),
    }
}

// ─── Accounts ────────────────────────────────────────────────────────────────

pub fn handle_signup(store: &dyn KvStore, username: &str, password: Option<&str>) -> Result<()> {
    let password = password_or_prompt(password)?;
    let session = Session::signup(store, username.trim(), &password, today())?;
    println_colored!(GREEN, "  ✓ Welcome, {}! Your account is ready.", session.username());
    println_colored!(DIM, "  Passwords are stored unencrypted on this machine.");
    Ok(())
}

pub fn handle_login(store: &dyn KvStore, username: &str, password: Option<&str>) -> Result<()> {
    let password = password_or_prompt(password)?;
    let session = Session::login(store, username.trim(), &password, today())?;
    println_colored!(GREEN, "  ✓ Welcome back, {}!", session.username());
    Ok(())
}

pub fn handle_logout(store: &dyn KvStore) -> Result<()> {
    match Session::resume(store, today())? {
        Some(session) => {
            let name = session.username().to_string();
            session.logout(store)?;
            println_colored!(DIM, "  Logged out {}", name);
        }
        None => println_colored!(DIM, "  Nobody is logged in"),
    }
    Ok(())
}

pub fn handle_whoami(store: &dyn KvStore) -> Result<()> {
    match AccountRepo::current_user(store)? {
        Some(name) => println!("  {}", name),
        None => println_colored!(DIM, "  Nobody is logged in"),
    }
    Ok(())
}

// ─── Mark / day ──────────────────────────────────────────────────────────────

pub fn handle_mark(
    store: &dyn KvStore,
    prayer_str: &str,
    status_str: &str,
    date: Option<&str>,
) -> Result<()> {
    let prayer: PrayerName = prayer_str.parse()?;
    let status: PrayerStatus = status_str.parse()?;
    let day = date_or_today(date)?;

    let mut session = require_session(store)?;
    session.view_date(day);
    session
        .update_status(store, prayer, status)
        .context("Saving prayer log")?;

    println_colored!(
        status_color(status),
        "  {} {} on {}: {}",
        status_glyph(status),
        prayer.display_name(),
        session.viewing_key(),
        status.display_name()
    );
    Ok(())
}

pub fn handle_day(store: &dyn KvStore, date: Option<&str>) -> Result<()> {
    let day = date_or_today(date)?;
    let mut session = require_session(store)?;
    session.view_date(day);

    let record = session.viewing_record();
    let progress = stats::day_progress(&record);

    println!();
    println_colored!(GOLD, "  {}", day.format("%A, %b %d, %Y"));
    println!();
    for (prayer, status) in record.resolved() {
        print!("  {:<8} {}", prayer.display_name(), DIM);
        print!("{:<10}\x1b[0m", prayer.period());
        println_colored!(
            status_color(status),
            "{} {}",
            status_glyph(status),
            status.display_name()
        );
    }
    println!();
    println!(
        "  {}  {}/{}",
        progress_bar(progress.completed, progress.total, 20),
        progress.completed,
        progress.total
    );
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(store: &dyn KvStore) -> Result<()> {
    let session = require_session(store)?;
    let summary = session.summary(today());

    println!();
    println_colored!(GOLD, "  Statistics for {}", session.username());
    println!();
    println_colored!(
        BOLD,
        "  Streak:          {} days current  |  {} days best",
        summary.streak.current,
        summary.streak.best
    );
    println!("  Total prayers:   {}", summary.tally.total_non_empty);
    println!(
        "  Today:           {}/{}  {}",
        summary.today.completed,
        summary.today.total,
        format_percent(summary.today.percent)
    );

    if session.log().is_empty() {
        println!();
        println_colored!(DIM, "  No prayers logged yet");
        println!();
        return Ok(());
    }

    println!();
    println_colored!(GOLD, "  All-time breakdown");
    let overall = summary.tally.overall_percentages();
    for status in PrayerStatus::DISPLAY_ORDER {
        println_colored!(
            status_color(status),
            "  {} {:<12} {:>5}  {:>4}",
            status_glyph(status),
            status.display_name(),
            summary.tally.count(status),
            format_percent(overall[&status])
        );
    }

    println!();
    println_colored!(GOLD, "  Per prayer");
    for (prayer, pct) in summary.tally.per_prayer_percentages() {
        print!("  {:<8} ", prayer.display_name());
        for status in PrayerStatus::DISPLAY_ORDER {
            let share = pct[&status];
            if share > 0.0 {
                print!(
                    "{}{} {}\x1b[0m  ",
                    status_color(status),
                    status_glyph(status),
                    format_percent(share)
                );
            }
        }
        println!();
    }
    println!();
    Ok(())
}

// ─── History ─────────────────────────────────────────────────────────────────

pub fn handle_history(store: &dyn KvStore, config: &AppConfig, days: Option<u32>) -> Result<()> {
    let session = require_session(store)?;
    let limit = days
        .unwrap_or(config.history.default_days)
        .min(config.history.max_days);
    let grid = stats::history(session.log(), today(), limit);

    println!();
    if grid.is_empty() {
        println_colored!(DIM, "  No history yet");
        println!();
        return Ok(());
    }

    println_colored!(
        DIM,
        "  ● jama'ah  ◑ alone  ◔ late  ○ not prayed  (newest first)"
    );
    println!();
    print!("  {:<12}", "");
    for prayer in PrayerName::ALL {
        print!("{:<4}", &prayer.display_name()[..1]);
    }
    println!();
    for day in &grid {
        print!("  {:<12}", day.date);
        for (_, status) in day.statuses {
            print!("{}{}\x1b[0m   ", status_color(status), status_glyph(status));
        }
        println!(" {}/5", day.completed());
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(store: &dyn KvStore) -> Result<()> {
    let session = require_session(store)?;
    let json = serde_json::to_string_pretty(session.log()).context("Serializing prayer log")?;
    println!("{}", json);
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())
}
