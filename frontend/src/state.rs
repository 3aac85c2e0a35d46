//! View-model of the upload page.
//!
//! All form and submission state lives in [`UploadState`]. User actions are
//! plain methods; the two asynchronous sources (the progress ticker and the
//! HTTP response) feed [`UploadState::apply`] with an [`Event`] tagged by
//! the attempt it belongs to, so late or duplicated events are dropped.
//!
//! ```text
//! Idle ──submit──▶ (validate) ──fail──▶ Idle
//!                      │
//!                      └──ok──▶ Submitting ──▶ Succeeded | Failed ──close──▶ Idle
//! ```

use crate::config::{
    ERROR_PREFIX, MSG_PROCESSING, MSG_SUCCESS, PROGRESS_CAP, PROGRESS_STEPS, SUMMARY_SUCCESS,
};
use crate::types::{AppError, AppResult, FormField, ReportForm, ReportParams};
use crate::validation::validate_form;

/// A file handle chosen through the picker.
pub trait PickedFile: Clone {
    fn file_name(&self) -> String;
}

impl PickedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Submission lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Client-side progress animation, not tied to real transfer progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulatedProgress {
    steps: u32,
}

impl SimulatedProgress {
    /// Move one step forward and return the value to display.
    pub fn advance(&mut self) -> u8 {
        self.steps = (self.steps + 1).min(PROGRESS_STEPS);
        self.value()
    }

    /// Rounded percentage, never above [`PROGRESS_CAP`].
    pub fn value(&self) -> u8 {
        let cap = f64::from(PROGRESS_CAP);
        let accumulated = f64::from(self.steps) * cap / f64::from(PROGRESS_STEPS);
        accumulated.round().min(cap) as u8
    }
}

/// Everything needed to send one validated request.
#[derive(Clone, Debug)]
pub struct Submission<F> {
    /// Tag carried by every event of this request
    pub attempt: u64,
    pub params: ReportParams,
    /// PDF sent as the `file` multipart field
    pub file: F,
}

/// Asynchronous inputs of the view-model.
#[derive(Clone, Debug)]
pub enum Event {
    /// The progress ticker fired.
    ProgressTick { attempt: u64 },
    /// The request finished, successfully or not.
    Completed { attempt: u64, result: AppResult<()> },
}

/// State of the upload page.
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    pub form: ReportForm,
    /// Cleared after a successful download
    pub file: Option<F>,
    pub phase: Phase,
    /// Request in flight; drives the disabled button and the progress bar
    pub loading: bool,
    /// Percentage shown in the modal (0-100)
    pub progress: u8,
    pub modal_open: bool,
    pub modal_message: String,
    /// Banner under the form after a successful download
    pub summary: Option<String>,
    attempt: u64,
    simulation: SimulatedProgress,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            form: ReportForm::default(),
            file: None,
            phase: Phase::Idle,
            loading: false,
            progress: 0,
            modal_open: false,
            modal_message: String::new(),
            summary: None,
            attempt: 0,
            simulation: SimulatedProgress::default(),
        }
    }
}

impl<F: PickedFile> UploadState<F> {
    pub fn select_file(&mut self, file: Option<F>) {
        self.file = file;
    }

    pub fn edit(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(PickedFile::file_name)
    }

    /// Validate and, if valid, enter `Submitting`.
    ///
    /// Returns the request to send, or `None` when validation failed (the
    /// modal then shows why) or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission<F>> {
        if self.loading {
            return None;
        }

        if let Err(err) = validate_form(&self.form, self.file.is_some()) {
            self.phase = Phase::Idle;
            self.show_modal(AppError::from(err).to_string(), false);
            return None;
        }
        let file = self.file.clone()?;

        self.attempt += 1;
        self.simulation = SimulatedProgress::default();
        self.progress = 0;
        self.summary = None;
        self.phase = Phase::Submitting;
        self.show_modal(MSG_PROCESSING.to_string(), true);

        Some(Submission {
            attempt: self.attempt,
            params: self.form.to_params(),
            file,
        })
    }

    /// Whether `attempt` is the request currently awaited.
    pub fn is_in_flight(&self, attempt: u64) -> bool {
        self.phase == Phase::Submitting && self.attempt == attempt
    }

    /// Feed an asynchronous event. Returns `false` if it was stale.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::ProgressTick { attempt } => {
                if !self.is_in_flight(attempt) {
                    return false;
                }
                let value = self.simulation.advance();
                self.progress = self.progress.max(value);
                true
            }
            Event::Completed { attempt, result } => {
                if !self.is_in_flight(attempt) {
                    return false;
                }
                match result {
                    Ok(()) => {
                        self.progress = 100;
                        self.phase = Phase::Succeeded;
                        self.summary = Some(SUMMARY_SUCCESS.to_string());
                        self.form.clear();
                        self.file = None;
                        self.show_modal(MSG_SUCCESS.to_string(), false);
                    }
                    Err(err) => {
                        self.progress = 0;
                        self.phase = Phase::Failed;
                        self.show_modal(format!("{}{}", ERROR_PREFIX, err), false);
                    }
                }
                true
            }
        }
    }

    /// Hide the modal. An in-flight request keeps running.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        if matches!(self.phase, Phase::Succeeded | Phase::Failed) {
            self.phase = Phase::Idle;
        }
    }

    fn show_modal(&mut self, message: String, loading: bool) {
        self.modal_message = message;
        self.loading = loading;
        self.modal_open = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl PickedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn filled_state() -> UploadState<FakeFile> {
        let mut state = UploadState::default();
        state.select_file(Some(FakeFile("demanda.pdf")));
        state.edit(FormField::LawyerName, "Ana Pérez".to_string());
        state.edit(FormField::LawyerId, "4521".to_string());
        state.edit(FormField::LawyerDni, "45678912".to_string());
        state.edit(FormField::ClientName, "Luis Gómez".to_string());
        state
    }

    #[test]
    fn test_simulated_progress_sequence() {
        let mut sim = SimulatedProgress::default();
        let values: Vec<u8> = (0..PROGRESS_STEPS).map(|_| sim.advance()).collect();

        assert_eq!(&values[..4], &[5, 9, 14, 18]);
        assert_eq!(values.last(), Some(&90));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(sim.advance(), 90);
    }

    #[test]
    fn test_validation_failure_opens_modal_without_request() {
        let mut state = filled_state();
        state.edit(FormField::LawyerDni, "1234".to_string());

        assert!(state.begin_submit().is_none());
        assert!(state.modal_open);
        assert!(!state.loading);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.modal_message.contains("8 dígitos"));
        assert_eq!(
            state.modal_message,
            AppError::Validation(ValidationError::InvalidDni).to_string()
        );
    }

    #[test]
    fn test_missing_file_blocks_submit() {
        let mut state = filled_state();
        state.select_file(None);

        assert!(state.begin_submit().is_none());
        assert_eq!(state.modal_message, "Todos los campos y el archivo son obligatorios.");
    }

    #[test]
    fn test_submit_enters_submitting() {
        let mut state = filled_state();
        let submission = state.begin_submit().unwrap();

        assert_eq!(submission.file, FakeFile("demanda.pdf"));
        assert_eq!(submission.params.lawyer_id, "4521");
        assert!(state.loading);
        assert!(state.modal_open);
        assert_eq!(state.progress, 0);
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.modal_message, MSG_PROCESSING);

        // Button is disabled: a second submit is ignored.
        assert!(state.begin_submit().is_none());
        assert!(state.is_in_flight(submission.attempt));
    }

    #[test]
    fn test_progress_capped_while_in_flight() {
        let mut state = filled_state();
        let attempt = state.begin_submit().unwrap().attempt;

        let mut last = 0;
        for _ in 0..50 {
            state.apply(Event::ProgressTick { attempt });
            assert!(state.progress >= last);
            assert!(state.progress <= PROGRESS_CAP);
            last = state.progress;
        }
        assert_eq!(state.progress, PROGRESS_CAP);
    }

    #[test]
    fn test_success_clears_form() {
        let mut state = filled_state();
        let attempt = state.begin_submit().unwrap().attempt;
        state.apply(Event::ProgressTick { attempt });

        assert!(state.apply(Event::Completed { attempt, result: Ok(()) }));
        assert_eq!(state.progress, 100);
        assert_eq!(state.phase, Phase::Succeeded);
        assert!(!state.loading);
        assert_eq!(state.modal_message, MSG_SUCCESS);
        assert_eq!(state.summary.as_deref(), Some(SUMMARY_SUCCESS));
        assert_eq!(state.form, ReportForm::default());
        assert!(state.file.is_none());
    }

    #[test]
    fn test_server_error_keeps_form() {
        let mut state = filled_state();
        let before = state.form.clone();
        let attempt = state.begin_submit().unwrap().attempt;
        for _ in 0..5 {
            state.apply(Event::ProgressTick { attempt });
        }

        let result = Err(AppError::Server { status: 500, detail: "server error".to_string() });
        state.apply(Event::Completed { attempt, result });

        assert_eq!(state.progress, 0);
        assert_eq!(state.phase, Phase::Failed);
        assert!(!state.loading);
        assert!(state.modal_message.contains("server error"));
        assert!(state.modal_message.starts_with(ERROR_PREFIX));
        assert_eq!(state.form, before);
        assert_eq!(state.file_name().as_deref(), Some("demanda.pdf"));
    }

    #[test]
    fn test_late_tick_after_resolution_is_ignored() {
        let mut state = filled_state();
        let attempt = state.begin_submit().unwrap().attempt;
        state.apply(Event::Completed { attempt, result: Ok(()) });

        assert!(!state.apply(Event::ProgressTick { attempt }));
        assert_eq!(state.progress, 100);

        let result = Err(AppError::Network("late".to_string()));
        assert!(!state.apply(Event::Completed { attempt, result }));
        assert_eq!(state.phase, Phase::Succeeded);
    }

    #[test]
    fn test_ticks_from_previous_attempt_are_ignored() {
        let mut state = filled_state();
        let first = state.begin_submit().unwrap().attempt;
        let result = Err(AppError::Network("offline".to_string()));
        state.apply(Event::Completed { attempt: first, result });
        state.close_modal();

        let second = state.begin_submit().unwrap().attempt;
        assert_ne!(first, second);
        assert!(!state.apply(Event::ProgressTick { attempt: first }));
        assert_eq!(state.progress, 0);
        assert!(state.apply(Event::ProgressTick { attempt: second }));
        assert_eq!(state.progress, 5);
    }

    #[test]
    fn test_close_modal() {
        let mut state = filled_state();
        let attempt = state.begin_submit().unwrap().attempt;

        // Closing while in flight does not cancel the request.
        state.close_modal();
        assert!(!state.modal_open);
        assert!(state.loading);
        assert_eq!(state.phase, Phase::Submitting);

        state.apply(Event::Completed { attempt, result: Ok(()) });
        assert!(state.modal_open);
        state.close_modal();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.modal_open);
    }
}
