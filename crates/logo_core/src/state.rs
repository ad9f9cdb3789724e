use std::path::PathBuf;

use crate::view_model::AppViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    /// Cancellation requested; the engine has not yet acknowledged.
    Cancelling,
}

/// Terminal result of a session, mirrored from the engine's taxonomy so the
/// core never depends on IO types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunResult {
    Completed { saved: usize },
    NoImagesFound,
    Canceled,
    Failed,
}

/// Controller state for the harvester window. Pure data; the shell renders
/// from `view()` and mutates only through `update`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    page_url: String,
    destination: Option<PathBuf>,
    session: SessionState,
    progress: u8,
    status: String,
}

impl AppState {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            status: "Waiting...".to_string(),
            ..Self::default()
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn destination(&self) -> Option<&PathBuf> {
        self.destination.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session,
            status: self.status.clone(),
            progress: self.progress,
            destination: self.destination.as_ref().map(|p| p.display().to_string()),
            can_choose_folder: self.session == SessionState::Idle,
            can_start: self.session == SessionState::Idle,
            can_cancel: self.session == SessionState::Running,
        }
    }

    pub(crate) fn set_destination(&mut self, path: impl Into<PathBuf>) {
        self.destination = Some(path.into());
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub(crate) fn start_session(&mut self) {
        self.session = SessionState::Running;
        self.progress = 0;
    }

    pub(crate) fn request_cancel(&mut self) {
        self.session = SessionState::Cancelling;
    }

    pub(crate) fn apply_progress(&mut self, value: u8) {
        self.progress = value;
    }

    pub(crate) fn finish_session(&mut self, result: RunResult) {
        self.session = SessionState::Idle;
        // A canceled run clears the bar instead of freezing mid-way.
        if matches!(result, RunResult::Canceled) {
            self.progress = 0;
        }
    }
}
