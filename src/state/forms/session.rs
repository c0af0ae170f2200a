//! One live form view: definition, state, submission lifecycle and cursor

use std::sync::Arc;

use crate::transport::SubmissionTransport;

use super::attachment::load_attachment;
use super::definitions::FormDefinition;
use super::field::{FieldKind, FieldValue};
use super::form_state::FormInstance;
use super::submission::{
    StatusLine, SubmissionController, SubmissionOutcome, SubmissionStatus, SubmitDisposition,
};

/// Everything one form view owns: the parameterizing definition, the field
/// values, the submission controller, the row cursor and the path draft for
/// file fields. Sessions never share storage with each other.
pub struct FormSession {
    definition: FormDefinition,
    form: FormInstance,
    controller: SubmissionController,
    /// Cursor over schema rows plus the trailing submit row
    cursor: usize,
    /// Path being typed into the active file field; cleared on focus move
    path_input: String,
}

impl FormSession {
    pub fn new(definition: FormDefinition) -> Self {
        let form = FormInstance::new(definition.schema().clone());
        Self {
            definition,
            form,
            controller: SubmissionController::default(),
            cursor: 0,
            path_input: String::new(),
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn form(&self) -> &FormInstance {
        &self.form
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn status(&self) -> SubmissionStatus {
        self.controller.status()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    pub fn message(&self) -> Option<&StatusLine> {
        self.controller.message()
    }

    /// Navigable rows: every field plus the submit button
    pub fn row_count(&self) -> usize {
        self.form.schema().len() + 1
    }

    pub fn on_submit_row(&self) -> bool {
        self.cursor == self.form.schema().len()
    }

    fn active_kind(&self) -> Option<FieldKind> {
        self.form.schema().get(self.cursor).map(|d| d.kind)
    }

    pub fn active_is_file(&self) -> bool {
        self.active_kind() == Some(FieldKind::File)
    }

    pub fn active_is_multiline(&self) -> bool {
        self.active_kind() == Some(FieldKind::MultilineText)
    }

    pub fn next_row(&mut self) {
        self.cursor = (self.cursor + 1) % self.row_count();
        self.path_input.clear();
    }

    pub fn prev_row(&mut self) {
        if self.cursor == 0 {
            self.cursor = self.row_count() - 1;
        } else {
            self.cursor -= 1;
        }
        self.path_input.clear();
    }

    /// Route a typed character to the active field. Edits are ignored while
    /// a submission is in flight: inputs are frozen so the post-success
    /// reset can never discard a concurrent edit.
    pub fn input_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        match self.active_kind() {
            Some(FieldKind::File) => self.path_input.push(c),
            Some(_) => self.form.input_char(self.cursor, c),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        match self.active_kind() {
            Some(FieldKind::File) => {
                self.path_input.pop();
            }
            Some(_) => self.form.backspace(self.cursor),
            None => {}
        }
    }

    /// Insert a newline into the active multiline field
    pub fn insert_newline(&mut self) {
        if self.is_submitting() || !self.active_is_multiline() {
            return;
        }
        self.form.input_char(self.cursor, '\n');
    }

    /// Enter on a file row: load the typed path into an attachment, or
    /// clear the current selection when the path is empty. Selection
    /// feedback is synchronous; the submission lifecycle is not involved.
    pub fn confirm_file(&mut self) {
        if self.is_submitting() || !self.active_is_file() {
            return;
        }
        let name = self.form.schema().descriptors()[self.cursor].name;
        if self.path_input.trim().is_empty() {
            self.store(name, FieldValue::Attachment(None));
            return;
        }
        match load_attachment(&self.path_input) {
            Ok(attachment) => {
                self.store(name, FieldValue::Attachment(Some(attachment)));
                self.path_input.clear();
            }
            Err(err) => {
                tracing::warn!(field = name, %err, "attachment load failed");
                self.controller.set_message(StatusLine::error(err.to_string()));
            }
        }
    }

    /// Validate and start the submission round trip
    pub fn submit(&mut self, transport: Arc<dyn SubmissionTransport>) -> SubmitDisposition {
        self.controller.submit(&self.definition, &self.form, transport)
    }

    /// Settle a completed round trip, if any; called once per event loop pass
    pub fn tick(&mut self) -> Option<SubmissionOutcome> {
        self.controller.poll(&mut self.form)
    }

    /// View unmount: cancel any pending completion and drop all input
    pub fn unmount(&mut self) {
        self.controller.cancel();
        self.controller.clear_message();
        self.form.reset();
        self.cursor = 0;
        self.path_input.clear();
    }

    fn store(&mut self, name: &str, value: FieldValue) {
        if let Err(err) = self.form.set(name, value) {
            // schema/state mismatch is a construction bug; surface it loudly
            tracing::error!(%err, "form instance rejected its own field");
            self.controller.set_message(StatusLine::error(err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::definitions::{claim_form, customer_registration_form};
    use super::super::submission::StatusTone;
    use super::*;
    use crate::transport::SimulatedTransport;
    use std::fs;
    use std::time::Duration;

    async fn settle(session: &mut FormSession) -> SubmissionOutcome {
        for _ in 0..500 {
            if let Some(outcome) = session.tick() {
                return outcome;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("submission never settled");
    }

    fn type_into(session: &mut FormSession, text: &str) {
        for c in text.chars() {
            session.input_char(c);
        }
    }

    #[test]
    fn test_cursor_wraps_over_fields_and_submit_row() {
        let mut session = FormSession::new(customer_registration_form());
        assert_eq!(session.row_count(), 8);
        for _ in 0..7 {
            session.next_row();
        }
        assert!(session.on_submit_row());
        session.next_row();
        assert_eq!(session.cursor(), 0);
        session.prev_row();
        assert!(session.on_submit_row());
    }

    #[test]
    fn test_typing_edits_the_active_field() {
        let mut session = FormSession::new(customer_registration_form());
        type_into(&mut session, "Jane Doe");
        assert_eq!(session.form().text("name"), "Jane Doe");
        session.backspace();
        assert_eq!(session.form().text("name"), "Jane Do");
    }

    #[test]
    fn test_typing_on_file_row_builds_path_draft() {
        let mut session = FormSession::new(customer_registration_form());
        for _ in 0..5 {
            session.next_row();
        }
        assert!(session.active_is_file());
        type_into(&mut session, "/tmp/photo.jpg");
        assert_eq!(session.path_input(), "/tmp/photo.jpg");
        assert_eq!(session.form().text("photo"), "");
    }

    #[test]
    fn test_path_draft_cleared_on_focus_move() {
        let mut session = FormSession::new(customer_registration_form());
        for _ in 0..5 {
            session.next_row();
        }
        type_into(&mut session, "/tmp/photo.jpg");
        session.next_row();
        assert_eq!(session.path_input(), "");
    }

    #[test]
    fn test_confirm_file_attaches_synchronously() {
        let path = std::env::temp_dir().join("intake_tui_session_photo.jpg");
        fs::write(&path, b"pixels").unwrap();

        let mut session = FormSession::new(customer_registration_form());
        for _ in 0..5 {
            session.next_row();
        }
        type_into(&mut session, path.to_str().unwrap());
        session.confirm_file();

        let attachment = session.form().attachment("photo").unwrap();
        assert_eq!(
            attachment.selected_label(),
            "Selected: intake_tui_session_photo.jpg"
        );
        assert_eq!(session.path_input(), "");
        // no timer, no status change
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(session.message().is_none());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_confirm_file_with_empty_path_clears_selection() {
        let path = std::env::temp_dir().join("intake_tui_session_clear.png");
        fs::write(&path, b"x").unwrap();

        let mut session = FormSession::new(customer_registration_form());
        for _ in 0..5 {
            session.next_row();
        }
        type_into(&mut session, path.to_str().unwrap());
        session.confirm_file();
        assert!(session.form().attachment("photo").is_some());

        session.confirm_file();
        assert!(session.form().attachment("photo").is_none());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_confirm_file_failure_shows_inline_error() {
        let mut session = FormSession::new(customer_registration_form());
        for _ in 0..5 {
            session.next_row();
        }
        type_into(&mut session, "/no/such/file.png");
        session.confirm_file();
        assert!(session.form().attachment("photo").is_none());
        let message = session.message().unwrap();
        assert_eq!(message.tone, StatusTone::Error);
        assert!(message.text.contains("/no/such/file.png"));
    }

    #[tokio::test]
    async fn test_inputs_frozen_while_submitting() {
        let mut session = FormSession::new(claim_form());
        let description_row = session
            .form()
            .schema()
            .index_of("claim_description")
            .unwrap();
        for _ in 0..description_row {
            session.next_row();
        }
        type_into(&mut session, "hail damage");

        let transport = Arc::new(SimulatedTransport::new(Duration::from_secs(60)));
        assert_eq!(session.submit(transport), SubmitDisposition::Started);
        assert!(session.is_submitting());

        session.input_char('!');
        session.backspace();
        session.insert_newline();
        assert_eq!(session.form().text("claim_description"), "hail damage");

        session.unmount();
    }

    #[tokio::test]
    async fn test_claim_submit_success_scenario() {
        let mut session = FormSession::new(claim_form());
        let description_row = session
            .form()
            .schema()
            .index_of("claim_description")
            .unwrap();
        for _ in 0..description_row {
            session.next_row();
        }
        type_into(&mut session, "Rear-ended at intersection");

        let transport = Arc::new(SimulatedTransport::new(Duration::from_millis(10)));
        session.submit(transport);
        let outcome = settle(&mut session).await;
        assert!(matches!(outcome, SubmissionOutcome::Succeeded(_)));
        assert!(session.form().is_pristine());
        let message = session.message().unwrap();
        assert_eq!(message.tone, StatusTone::Success);
        assert_eq!(message.text, "Claim submitted successfully!");
    }

    #[tokio::test]
    async fn test_unmount_cancels_and_resets() {
        let mut session = FormSession::new(claim_form());
        let description_row = session
            .form()
            .schema()
            .index_of("claim_description")
            .unwrap();
        for _ in 0..description_row {
            session.next_row();
        }
        type_into(&mut session, "storm");
        let transport = Arc::new(SimulatedTransport::new(Duration::from_secs(60)));
        session.submit(transport);

        session.unmount();
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(session.form().is_pristine());
        assert!(session.message().is_none());
        assert_eq!(session.cursor(), 0);
        assert!(session.tick().is_none());
    }

    #[test]
    fn test_newline_only_on_multiline_fields() {
        let mut session = FormSession::new(claim_form());
        session.insert_newline();
        assert_eq!(session.form().text("months_as_customer"), "");

        let description_row = session
            .form()
            .schema()
            .index_of("claim_description")
            .unwrap();
        for _ in 0..description_row {
            session.next_row();
        }
        type_into(&mut session, "line1");
        session.insert_newline();
        type_into(&mut session, "line2");
        assert_eq!(session.form().text("claim_description"), "line1\nline2");
    }
}
