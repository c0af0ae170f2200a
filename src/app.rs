//! Application state and core logic

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, View, HOME_ITEMS};
use crate::transport::SubmissionTransport;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Transport carrying accepted submissions
    transport: Arc<dyn SubmissionTransport>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(transport: Arc<dyn SubmissionTransport>) -> Self {
        Self {
            state: AppState::default(),
            transport,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Settle any submission whose round trip completed; called once per
    /// event-loop pass.
    pub fn tick(&mut self) {
        for session in [&mut self.state.claim, &mut self.state.registration] {
            if let Some(outcome) = session.tick() {
                tracing::debug!(form = session.definition().key, ?outcome, "submission settled");
            }
        }
    }

    /// Handle key event, routed by current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::ClaimForm | View::RegistrationForm => self.handle_form_key(key),
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let count = HOME_ITEMS.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.home_selected == 0 {
                    self.state.home_selected = count - 1;
                } else {
                    self.state.home_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.home_selected = (self.state.home_selected + 1) % count;
            }
            KeyCode::Enter => {
                self.state.current_view = match self.state.home_selected {
                    0 => View::ClaimForm,
                    _ => View::RegistrationForm,
                };
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the form views
    fn handle_form_key(&mut self, key: KeyEvent) {
        // Esc unmounts the form: pending completions are cancelled and the
        // instance's state is dropped with the view.
        if key.code == KeyCode::Esc {
            if let Some(session) = self.state.active_session_mut() {
                if !session.form().is_pristine() {
                    tracing::debug!(
                        form = session.definition().key,
                        "discarding form input on unmount"
                    );
                }
                session.unmount();
            }
            self.state.current_view = View::Home;
            return;
        }

        let submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER));

        let transport = Arc::clone(&self.transport);
        let Some(session) = self.state.active_session_mut() else {
            return;
        };

        if submit_shortcut {
            session.submit(transport);
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => session.next_row(),
            KeyCode::BackTab | KeyCode::Up => session.prev_row(),
            KeyCode::Enter if session.on_submit_row() => {
                session.submit(transport);
            }
            KeyCode::Enter if session.active_is_file() => session.confirm_file(),
            KeyCode::Enter if session.active_is_multiline() => session.insert_newline(),
            KeyCode::Char(c) => session.input_char(c),
            KeyCode::Backspace => session.backspace(),
            _ => {}
        }
    }
}
