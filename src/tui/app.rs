use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use prayerlog::config::AppConfig;
use prayerlog::db::KvStore;
use prayerlog::models::{HistoryDay, PrayerName, PrayerStatus, Summary};
use prayerlog::stats;
use prayerlog::Session;

use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{breakdown, header, history, prayers, statusbar, summary};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App<'a> {
    store: &'a dyn KvStore,
    pub session: Session,
    pub view: View,
    pub focus_idx: usize,
    pub should_quit: bool,
    max_history_days: u32,

    // Derived from the session's log (refreshed after every change)
    pub today: NaiveDate,
    pub summary: Summary,
    pub history: Vec<HistoryDay>,
}

impl<'a> App<'a> {
    pub fn new(store: &'a dyn KvStore, session: Session, config: &AppConfig, today: NaiveDate) -> Self {
        let mut app = App {
            store,
            summary: session.summary(today),
            session,
            view: View::Dashboard,
            focus_idx: 0,
            should_quit: false,
            max_history_days: config.history.max_days,
            today,
            history: Vec::new(),
        };
        app.refresh();
        app
    }

    /// Re-derive every statistic from the current log snapshot.
    pub fn refresh(&mut self) {
        self.summary = self.session.summary(self.today);
        self.history = stats::history(self.session.log(), self.today, self.max_history_days);
    }

    /// Called on every tick; picks up the date change at midnight.
    pub fn tick(&mut self, now: NaiveDate) {
        if now != self.today {
            let was_on_today = self.session.is_viewing_today(self.today);
            self.today = now;
            if was_on_today {
                self.session.view_date(now);
            }
            self.refresh();
        }
    }

    fn focused_prayer(&self) -> PrayerName {
        PrayerName::ALL[self.focus_idx.min(PrayerName::ALL.len() - 1)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.focus_idx > 0 {
                    self.focus_idx -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.focus_idx + 1 < PrayerName::ALL.len() {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.session.previous_day();
                self.session.clear_notice();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.session.next_day(self.today);
                self.session.clear_notice();
            }
            KeyCode::Char('t') => {
                self.session.view_date(self.today);
                self.session.clear_notice();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let prayer = self.focused_prayer();
                // A failed save is kept as the session notice and shown in the status bar
                let _ = self.session.cycle_status(self.store, prayer);
                self.refresh();
            }
            KeyCode::Char(c @ '1'..='4') => {
                let status = match c {
                    '1' => PrayerStatus::InCongregation,
                    '2' => PrayerStatus::Alone,
                    '3' => PrayerStatus::Late,
                    _ => PrayerStatus::NotPrayed,
                };
                self.set_focused(status);
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn set_focused(&mut self, status: PrayerStatus) {
        let prayer = self.focused_prayer();
        let _ = self.session.update_status(self.store, prayer, status);
        self.refresh();
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // header
                Constraint::Min(12),    // body
                Constraint::Length(8),  // history
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        let viewing_today = self.session.is_viewing_today(self.today);
        header::render(
            frame,
            outer_chunks[0],
            self.session.username(),
            self.session.viewing(),
            viewing_today,
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // tracker
                Constraint::Min(0),    // summary
            ])
            .split(columns[0]);

        prayers::render(
            frame,
            left_chunks[0],
            &self.session.viewing_record(),
            self.focus_idx,
            !viewing_today,
        );
        summary::render(frame, left_chunks[1], &self.summary);
        breakdown::render(frame, columns[1], &self.summary.tally);
        history::render(frame, outer_chunks[2], &self.history);
        statusbar::render(frame, outer_chunks[3], self.session.notice());
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2)
                .max(14)
                .min(area.height.saturating_sub(area.height / 4)),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[↑ ↓]        ", "Select prayer"),
            ("[1]          ", "In Jama'ah"),
            ("[2]          ", "Alone"),
            ("[3]          ", "Late"),
            ("[4]          ", "Not prayed"),
            ("[Enter]      ", "Cycle status"),
            ("[← →]        ", "Previous / next day"),
            ("[t]          ", "Jump to today"),
            ("[?]          ", "Toggle help"),
            ("[Esc] / [q]  ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {}", key), theme::accent()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::accent())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the dashboard event loop for the logged-in user.
pub fn run(store: &dyn KvStore, config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let session = Session::resume_required(store, today)
        .context("Log in first with `prayerlog login <username>`")?;
    let mut app = App::new(store, session, config, today);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(config.tui.tick_rate_ms);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        break;
                    }
                }
                Event::Resize => {}
                Event::Tick => {
                    app.tick(Local::now().date_naive());
                }
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}
