//! Main TUI application state and logic

use crate::trace::Trace;
use crate::translator::machine::ParseError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The declarator being explained
    pub declarator: String,

    /// Step history of the translation
    pub trace: Trace,

    /// Final sentence, or the error the machine stopped on
    pub outcome: Result<String, ParseError>,

    /// Current position in the trace
    pub position: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a finished (possibly failed) translation.
    pub fn new(declarator: String, trace: Trace, outcome: Result<String, ParseError>) -> Self {
        App {
            declarator,
            trace,
            outcome,
            position: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_secs(1) {
                    if self.position + 1 < self.trace.len() {
                        self.position += 1;
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Declaration on top, translation below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        if let Some(step) = self.trace.get(self.position) {
            super::panes::render_declaration_pane(frame, chunks[0], &self.declarator, step);
        }

        super::panes::render_translation_pane(
            frame,
            chunks[1],
            &self.trace,
            self.position,
            &self.outcome,
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.position,
            self.trace.len(),
            self.is_playing,
            self.outcome.is_err(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let target = (self.position + n).min(self.trace.len().saturating_sub(1));
                let stepped = target - self.position;
                self.position = target;
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.position > 0 {
                    self.position -= 1;
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at start".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.position + 1 < self.trace.len() {
                    self.position += 1;
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at end".to_string();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.position = self.trace.len().saturating_sub(1);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.position = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}
