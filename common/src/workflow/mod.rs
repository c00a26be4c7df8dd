//! Upload, validate and update state machine.
//!
//! `Workflow` owns every piece of transient state of the price update page:
//! the picked file, the result of its shape check, the table returned by the
//! validation service and the request currently in flight. The UI reads the
//! derived `Phase` to decide which controls are enabled and forwards events to
//! the operations below.
//!
//! Remote calls are split in two halves so that the caller can await them
//! outside of the state machine:
//! - `begin_validation` / `begin_update` check the phase, mark the request as
//!   in flight and hand back the payload to send.
//! - `complete_validation` / `complete_update` absorb the outcome.
//!
//! Every operation enforces its own precondition and fails with a
//! `WorkflowError` when called out of order, leaving the state untouched.

mod notice;
mod phase;

pub use notice::Notice;
pub use phase::{Action, Phase};

use crate::error::{IntakeError, Result, ServiceError, WorkflowError};
use crate::intake;
use crate::model::csv::{ParsedFile, RawRow};
use crate::model::product::{all_rows_valid, ValidatedProduct};
use crate::shape::{validate_shape, ShapeCheck, ShapeFeedback};

#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    selected_file: Option<ParsedFile>,
    shape: ShapeCheck,
    table_data: Option<Vec<ValidatedProduct>>,
    data_is_invalid: bool,
    pending: Option<Action>,
    notice: Option<Notice>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            shape: validate_shape(None),
            table_data: None,
            data_is_invalid: true,
            pending: None,
            notice: None,
        }
    }

    /// Reads a newly picked file and makes it the selected file.
    ///
    /// Any previous validation table is discarded first. A file that cannot be
    /// read leaves the workflow idle with an `UnreadableFile` notice; that is a
    /// handled outcome, not an `Err`.
    pub fn select_file(&mut self, name: &str, contents: &[u8]) -> Result<()> {
        self.ensure_idle_request()?;
        match intake::read_price_file(name, contents) {
            Ok(parsed) => self.accept_file(parsed),
            Err(err) => self.reject_file(err),
        }
        Ok(())
    }

    /// Records a file that could not be read at all (browser read failure,
    /// wrong extension, malformed CSV).
    pub fn reject_file(&mut self, err: IntakeError) {
        log::warn!("file rejected: {err}");
        self.reset_results();
        self.set_selected_file(None);
        self.notice = Some(Notice::UnreadableFile(err));
    }

    fn accept_file(&mut self, parsed: ParsedFile) {
        self.reset_results();
        self.notice = None;
        self.set_selected_file(Some(parsed));
        log::debug!("file selected, workflow is {}", self.phase());
    }

    /// Starts a validation request and returns the rows to send.
    ///
    /// Only allowed in `Phase::ReadyToValidate` with nothing in flight.
    pub fn begin_validation(&mut self) -> Result<Vec<RawRow>> {
        self.ensure_allowed(Action::Validate)?;
        let rows = self
            .selected_file
            .as_ref()
            .map(|file| file.data.clone())
            .unwrap_or_default();
        self.pending = Some(Action::Validate);
        self.notice = None;
        log::debug!("validating {} row(s)", rows.len());
        Ok(rows)
    }

    /// Absorbs the validation service response.
    ///
    /// On success the response becomes the table and `is_invalid_data` is set
    /// unless every row came back clean. On failure the state is left as it was
    /// before `begin_validation` and a notice is raised.
    pub fn complete_validation(
        &mut self,
        response: std::result::Result<Vec<ValidatedProduct>, ServiceError>,
    ) -> Result<()> {
        self.finish_request(Action::Validate)?;
        match response {
            Ok(rows) => {
                self.data_is_invalid = !all_rows_valid(&rows);
                self.table_data = Some(rows);
                log::debug!("validation finished, workflow is {}", self.phase());
            }
            Err(error) => self.record_service_failure(Action::Validate, error),
        }
        Ok(())
    }

    /// Starts an update request and returns the full table to send.
    ///
    /// Only allowed in `Phase::ValidatedAllPass`, so every row has already
    /// passed the service checks.
    pub fn begin_update(&mut self) -> Result<Vec<ValidatedProduct>> {
        self.ensure_allowed(Action::Update)?;
        let rows = self.table_data.clone().unwrap_or_default();
        self.pending = Some(Action::Update);
        self.notice = None;
        log::debug!("updating {} product(s)", rows.len());
        Ok(rows)
    }

    /// Absorbs the update service outcome.
    ///
    /// Success resets the whole workflow back to `Phase::Idle`; the caller is
    /// expected to clear its file input as well. Failure keeps the table so the
    /// user can retry.
    pub fn complete_update(&mut self, outcome: std::result::Result<(), ServiceError>) -> Result<()> {
        self.finish_request(Action::Update)?;
        match outcome {
            Ok(()) => {
                self.reset();
                log::info!("products updated, workflow reset");
            }
            Err(error) => self.record_service_failure(Action::Update, error),
        }
        Ok(())
    }

    /// Drops the picked file and every derived result.
    pub fn reset(&mut self) {
        self.reset_results();
        self.set_selected_file(None);
        self.notice = None;
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected_file, &self.table_data) {
            (None, _) => Phase::Idle,
            (Some(_), Some(_)) if self.data_is_invalid => Phase::ValidatedHasErrors,
            (Some(_), Some(_)) => Phase::ValidatedAllPass,
            (Some(_), None) if self.shape.invalid => Phase::FileInvalid,
            (Some(_), None) => Phase::ReadyToValidate,
        }
    }

    pub fn can_validate(&self) -> bool {
        self.ensure_allowed(Action::Validate).is_ok()
    }

    pub fn can_update(&self) -> bool {
        self.ensure_allowed(Action::Update).is_ok()
    }

    /// Whether a new file may be picked right now.
    pub fn can_select_file(&self) -> bool {
        self.pending.is_none()
    }

    pub fn is_invalid_file(&self) -> bool {
        self.shape.invalid
    }

    pub fn show_feedback(&self) -> bool {
        self.shape.show_feedback
    }

    pub fn is_invalid_data(&self) -> bool {
        self.data_is_invalid
    }

    /// Banner contents, present only when the shape check asks for feedback.
    pub fn feedback(&self) -> Option<ShapeFeedback> {
        if !self.shape.show_feedback {
            return None;
        }
        self.selected_file.as_ref().map(ShapeFeedback::for_file)
    }

    pub fn selected_file(&self) -> Option<&ParsedFile> {
        self.selected_file.as_ref()
    }

    pub fn table_data(&self) -> Option<&[ValidatedProduct]> {
        self.table_data.as_deref()
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn set_selected_file(&mut self, file: Option<ParsedFile>) {
        self.selected_file = file;
        self.shape = validate_shape(self.selected_file.as_ref());
    }

    fn reset_results(&mut self) {
        self.table_data = None;
        self.data_is_invalid = true;
    }

    fn ensure_idle_request(&self) -> Result<()> {
        match self.pending {
            Some(action) => Err(WorkflowError::RequestInFlight(action)),
            None => Ok(()),
        }
    }

    fn ensure_allowed(&self, action: Action) -> Result<()> {
        self.ensure_idle_request()?;
        let phase = self.phase();
        if phase == action.enabled_in() {
            Ok(())
        } else {
            Err(WorkflowError::ActionNotAllowed { action, phase })
        }
    }

    fn finish_request(&mut self, received: Action) -> Result<()> {
        if self.pending != Some(received) {
            return Err(WorkflowError::UnexpectedResponse { received });
        }
        self.pending = None;
        Ok(())
    }

    fn record_service_failure(&mut self, action: Action, error: ServiceError) {
        log::warn!("{action} request failed: {error}");
        self.notice = Some(Notice::ServiceFailure { action, error });
    }
}
