use payloads::FeedbackSubmission;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    client::{SubmitClient, SubmitError},
    field::{FieldError, validate},
    notify::Notification,
    questions::FieldId,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("No such field: {0:?}")]
    UnknownField(FieldId),

    #[error("{} field(s) need attention", .0.len())]
    NotReady(Vec<(FieldId, FieldError)>),

    #[error("A submission is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Text of the six inputs plus where the current submission stands.
///
/// Submission is split in two so a caller sharing the form can release it while the request is
/// out: [`FeedbackForm::begin_submit`] hands out the payload and locks further submits,
/// [`FeedbackForm::finish_submit`] applies the outcome. [`FeedbackForm::submit`] does both.
#[derive(Debug, Default)]
pub struct FeedbackForm {
    values: FeedbackSubmission,
    phase: Phase,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Important(index) => self.values.important_points.get_mut(index),
            FieldId::Interesting(index) => self.values.interesting_points.get_mut(index),
            FieldId::Difficult => Some(&mut self.values.difficult_point),
        }
    }

    pub fn value(&self, id: FieldId) -> Option<&str> {
        match id {
            FieldId::Important(index) => self.values.important_points.get(index),
            FieldId::Interesting(index) => self.values.interesting_points.get(index),
            FieldId::Difficult => Some(&self.values.difficult_point),
        }
        .map(String::as_str)
    }

    pub fn set(&mut self, id: FieldId, text: impl Into<String>) -> Result<(), FormError> {
        let slot = self.slot(id).ok_or(FormError::UnknownField(id))?;
        *slot = text.into();

        Ok(())
    }

    pub fn error(&self, id: FieldId) -> Option<FieldError> {
        self.value(id).and_then(|value| validate(value).err())
    }

    pub fn errors(&self) -> Vec<(FieldId, FieldError)> {
        FieldId::all()
            .filter_map(|id| self.error(id).map(|error| (id, error)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        FieldId::all().all(|id| self.error(id).is_none())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Submit control is enabled only for a valid form with nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && self.is_valid()
    }

    pub fn reset(&mut self) {
        self.values = FeedbackSubmission::default();
    }

    pub fn begin_submit(&mut self) -> Result<FeedbackSubmission, FormError> {
        if self.phase == Phase::Submitting {
            return Err(FormError::InFlight);
        }

        let errors = self.errors();
        if !errors.is_empty() {
            return Err(FormError::NotReady(errors));
        }

        self.phase = Phase::Submitting;

        let submission = self.values.clone();
        info!(?submission, "Submitting feedback");

        Ok(submission)
    }

    /// Success clears every input, failure keeps them for correction.
    pub fn finish_submit(&mut self, result: Result<String, SubmitError>) -> Notification {
        self.phase = Phase::Idle;

        match result {
            Ok(message) => {
                info!("Feedback accepted: {message}");
                self.reset();

                Notification::success(message)
            }
            Err(e) => {
                warn!("Feedback submission failed: {e}");

                Notification::error(e.user_message())
            }
        }
    }

    /// Sends the form once, reporting loading then the outcome to `notify`.
    ///
    /// Returns the final notification.
    pub async fn submit<F>(
        &mut self,
        client: &SubmitClient,
        mut notify: F,
    ) -> Result<Notification, FormError>
    where
        F: FnMut(Notification),
    {
        let submission = self.begin_submit()?;
        notify(Notification::loading());

        let result = client.submit(&submission).await;

        let notification = self.finish_submit(result);
        notify(notification.clone());

        Ok(notification)
    }
}
