//! Application state definitions

use super::forms::{claim_form, customer_registration_form, FormSession};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    ClaimForm,
    RegistrationForm,
}

/// Workflows offered on the home menu, in display order
pub const HOME_ITEMS: &[(&str, &str)] = &[
    ("Upload Claim", "Submit an insurance claim with a supporting image"),
    ("Customer Registration", "Register a customer record"),
];

/// Top-level mutable state for the running app. Each form session owns its
/// state exclusively; the two never share storage.
pub struct AppState {
    pub current_view: View,
    pub home_selected: usize,
    pub claim: FormSession,
    pub registration: FormSession,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            home_selected: 0,
            claim: FormSession::new(claim_form()),
            registration: FormSession::new(customer_registration_form()),
        }
    }
}

impl AppState {
    /// Session backing the current view, if a form view is active
    pub fn active_session(&self) -> Option<&FormSession> {
        match self.current_view {
            View::Home => None,
            View::ClaimForm => Some(&self.claim),
            View::RegistrationForm => Some(&self.registration),
        }
    }

    pub fn active_session_mut(&mut self) -> Option<&mut FormSession> {
        match self.current_view {
            View::Home => None,
            View::ClaimForm => Some(&mut self.claim),
            View::RegistrationForm => Some(&mut self.registration),
        }
    }
}
