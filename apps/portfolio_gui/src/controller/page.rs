//! Page state owned by the GUI thread: contact form, submission status,
//! section visibility, theme and menu.

use client_core::{
    ContactForm, CredentialSource, IntersectionEntry, RelayError, Submission,
    SubmissionController, VisibilityObserver,
};
use crossbeam_channel::Sender;
use shared::domain::{SectionId, SubmissionStatus};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::theme::ThemeMode;

pub struct PageController {
    cmd_tx: Sender<BackendCommand>,
    credentials: Box<dyn CredentialSource>,

    submission: SubmissionController,
    status_rx: broadcast::Receiver<SubmissionStatus>,
    form: ContactForm,
    form_notice: Option<String>,

    observer: VisibilityObserver,

    theme: ThemeMode,
    menu_open: bool,
    pending_scroll: Option<SectionId>,
    status: String,
}

impl PageController {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        credentials: Box<dyn CredentialSource>,
        visibility_threshold: f32,
    ) -> Self {
        let mut observer = VisibilityObserver::new(visibility_threshold);
        for section in SectionId::ALL {
            observer.observe(section);
        }

        let submission = SubmissionController::new();
        let status_rx = submission.subscribe();

        Self {
            cmd_tx,
            credentials,
            submission,
            status_rx,
            form: ContactForm::default(),
            form_notice: None,
            observer,
            theme: ThemeMode::default(),
            menu_open: false,
            pending_scroll: None,
            status: String::new(),
        }
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    /// Status transitions since the last call, oldest first.
    pub fn take_submission_changes(&mut self) -> Vec<SubmissionStatus> {
        let mut changes = Vec::new();
        loop {
            match self.status_rx.try_recv() {
                Ok(status) => changes.push(status),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "submission status events lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        changes
    }

    pub fn can_submit(&self) -> bool {
        !self.submission.is_sending()
    }

    /// Message shown when a submit is refused before it starts.
    pub fn form_notice(&self) -> Option<&str> {
        self.form_notice.as_deref()
    }

    pub fn submit_contact(&mut self) {
        let submission = match self.submission.begin(&self.form, self.credentials.as_ref()) {
            Ok(submission) => submission,
            Err(rejected) => {
                tracing::debug!("contact submit refused: {rejected}");
                self.form_notice = Some(rejected.to_string());
                return;
            }
        };
        self.form_notice = None;

        let Submission::Dispatched(pending) = submission else {
            return;
        };
        let attempt = pending.attempt;
        let cmd = BackendCommand::DeliverContact {
            attempt,
            request: pending.request,
        };
        if let Err(reason) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.submission
                .complete(attempt, Err(RelayError::Unavailable(reason)), &mut self.form);
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::ContactDelivery { attempt, outcome } => {
                self.submission.complete(attempt, outcome, &mut self.form);
            }
        }
    }

    /// Worker notices for the footer.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn observe(&mut self, entries: &[IntersectionEntry]) {
        for change in self.observer.handle(entries) {
            tracing::debug!(
                section = change.section.anchor(),
                visible = change.visible,
                "section visibility"
            );
        }
    }

    pub fn is_section_visible(&self, section: SectionId) -> bool {
        self.observer.is_visible(section)
    }

    /// Topmost section past the visibility threshold; highlighted in the menu.
    pub fn current_section(&self) -> Option<SectionId> {
        self.observer.visible_sections().first().copied()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.attribute(), "theme changed");
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scrolls to `section` on the next frame and closes the menu.
    pub fn navigate(&mut self, section: SectionId) {
        self.pending_scroll = Some(section);
        self.menu_open = false;
    }

    pub fn take_pending_scroll(&mut self, section: SectionId) -> bool {
        if self.pending_scroll == Some(section) {
            self.pending_scroll = None;
            return true;
        }
        false
    }

    pub fn shutdown(&mut self) {
        self.observer.disconnect();
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_connected()
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
