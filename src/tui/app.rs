//! Application state and event loop

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
    DefaultTerminal, Frame,
};

use crate::config::GraphConfig;
use crate::graph::{GraphView, RenderedGraph, DAYS_PER_WEEK};
use crate::services::{load_or_empty, ActivitySource};
use crate::types::ActivityRecord;

use super::theme::Theme;
use super::widgets::{
    help::HelpPopup,
    overview::{Overview, OverviewData},
    spinner::Spinner,
};

/// Application state
pub enum AppState {
    /// Waiting for the activity record
    Loading { spinner_frame: usize },
    /// Grid built and interactive
    Ready { view: Box<GraphView> },
    /// Grid could not be built (bad window configuration)
    Error { message: String },
}

/// Main application
pub struct App {
    state: AppState,
    config: GraphConfig,
    source_name: String,
    theme: Theme,
    cursor: Option<NaiveDate>,
    should_quit: bool,
    show_help: bool,
    reload_requested: bool,
}

impl App {
    /// Create a new app in loading state
    pub fn new(config: GraphConfig, source_name: impl Into<String>, theme: Theme) -> Self {
        Self {
            state: AppState::Loading { spinner_frame: 0 },
            config,
            source_name: source_name.into(),
            theme,
            cursor: None,
            should_quit: false,
            show_help: false,
            reload_requested: false,
        }
    }

    /// Build a fresh grid from `record`. Selection always starts empty.
    pub fn apply_record(&mut self, record: &ActivityRecord) {
        let today = self.config.evaluation_date();
        match GraphView::build(today, self.config.window_weeks, record) {
            Ok(view) => {
                // Keep the cursor where it was if the new grid still covers it
                self.cursor = match self.cursor {
                    Some(date) if view.grid().contains(date) => Some(date),
                    _ => Some(view.grid().today()),
                };
                self.state = AppState::Ready {
                    view: Box::new(view),
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to build contribution grid");
                self.state = AppState::Error {
                    message: e.to_string(),
                };
            }
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        self.request_reload();
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.move_cursor(-(DAYS_PER_WEEK as i64));
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.move_cursor(DAYS_PER_WEEK as i64);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.move_cursor(-1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.move_cursor(1);
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.toggle_cursor_cell();
                    }
                    KeyCode::Char('c') => {
                        if let AppState::Ready { view } = &mut self.state {
                            view.clear_selection();
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Move the cursor by `days`; moves that leave the grid are ignored
    fn move_cursor(&mut self, days: i64) {
        let AppState::Ready { view } = &self.state else {
            return;
        };
        let Some(cursor) = self.cursor else {
            return;
        };
        let target = cursor.checked_add_signed(chrono::Duration::days(days));
        if let Some(target) = target.filter(|d| view.grid().contains(*d)) {
            self.cursor = Some(target);
        }
    }

    fn toggle_cursor_cell(&mut self) {
        if let (AppState::Ready { view }, Some(cursor)) = (&mut self.state, self.cursor) {
            view.toggle_cell(cursor);
        }
    }

    /// Drop back to the spinner and ask the event loop for a fresh fetch
    fn request_reload(&mut self) {
        if matches!(self.state, AppState::Loading { .. }) {
            return;
        }
        self.state = AppState::Loading { spinner_frame: 0 };
        self.reload_requested = true;
    }

    /// Take a pending reload request
    fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if let AppState::Loading { spinner_frame } = &mut self.state {
            *spinner_frame = Spinner::next_frame(*spinner_frame);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn cursor(&self) -> Option<NaiveDate> {
        self.cursor
    }

    /// Current graph view, if loaded
    pub fn view(&self) -> Option<&GraphView> {
        match &self.state {
            AppState::Ready { view } => Some(view),
            _ => None,
        }
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn render_ready(&self, view: &GraphView, area: Rect, buf: &mut Buffer) {
        let graph: RenderedGraph = view.render();
        let cursor = self
            .cursor
            .and_then(|date| graph.cells().find(|cell| cell.date == date));

        let data = OverviewData {
            graph: &graph,
            cursor,
            selected_count: view.selected_dates().len(),
            source: &self.source_name,
        };
        Overview::new(data, self.theme).render(area, buf);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            AppState::Loading { spinner_frame } => {
                Spinner::new(*spinner_frame, &self.source_name, self.theme).render(area, buf);
            }
            AppState::Ready { view } => {
                self.render_ready(view, area, buf);

                if self.show_help {
                    let popup_area = HelpPopup::centered_area(area);
                    HelpPopup::new(self.theme).render(popup_area, buf);
                }
            }
            AppState::Error { message } => {
                let y = area.y + area.height / 2;
                let text = format!("Error: {}", message);
                let x = area.x + (area.width.saturating_sub(text.len() as u16)) / 2;
                buf.set_string(x, y, &text, Style::default().fg(self.theme.error()));
            }
        }
    }
}

/// Run the TUI application
pub fn run(config: GraphConfig, source: Arc<dyn ActivitySource>) -> anyhow::Result<()> {
    // Theme detection must happen before raw mode
    let theme = Theme::detect();
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, config, source, theme);
    ratatui::restore();
    result
}

/// Fetch the record on a background thread
fn spawn_load(source: Arc<dyn ActivitySource>) -> Receiver<ActivityRecord> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let record = load_or_empty(source.as_ref());
        let _ = tx.send(record);
    });
    rx
}

fn run_app(
    terminal: &mut DefaultTerminal,
    config: GraphConfig,
    source: Arc<dyn ActivitySource>,
    theme: Theme,
) -> anyhow::Result<()> {
    let mut app = App::new(config, source.name(), theme);

    // One outstanding fetch at a time
    let mut data_rx = Some(spawn_load(Arc::clone(&source)));

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if let Some(rx) = &data_rx {
            if let Ok(record) = rx.try_recv() {
                app.apply_record(&record);
                data_rx = None;
            }
        }

        if app.take_reload_request() && data_rx.is_none() {
            data_rx = Some(spawn_load(Arc::clone(&source)));
        }

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}
