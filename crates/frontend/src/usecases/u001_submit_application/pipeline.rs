use super::api::SubmitApi;
use crate::shared::api_utils::ApiError;
use contracts::usecases::u001_submit_application::{ApplicationPayload, SubmissionOutcome};

/// Shown when the request never produced a usable answer
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Не удалось отправить заявку. Проверьте подключение к интернету и попробуйте ещё раз.";

/// Shown when the server answered but not with a usable response
pub const SERVER_FAILURE_MESSAGE: &str =
    "Сервер не смог обработать заявку. Попробуйте ещё раз позже.";

/// User-facing text for a submission that produced no server verdict
pub fn failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
        ApiError::Http(_) | ApiError::Decode(_) | ApiError::Encode(_) => SERVER_FAILURE_MESSAGE,
    }
}

/// What the form does with a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReaction {
    /// Open the feedback panel (container closes after dismiss)
    ShowFeedback(String),
    /// Blocking alert, the form stays open for corrections
    Alert(String),
}

pub fn route_outcome(outcome: SubmissionOutcome) -> SubmitReaction {
    match outcome {
        SubmissionOutcome::Success { message } => SubmitReaction::ShowFeedback(message),
        SubmissionOutcome::Failure { message } => {
            SubmitReaction::Alert(format!("Ошибка: {}", message))
        }
    }
}

/// Send the payload and decide how to present the result
pub async fn submit_application(api: &dyn SubmitApi, payload: &ApplicationPayload) -> SubmitReaction {
    log::debug!(
        "submitting application with {} service(s)",
        payload.services.len()
    );
    match api.submit(payload).await {
        Ok(response) => route_outcome(response.into()),
        Err(e) => {
            log::error!("Ошибка отправки заявки: {}", e);
            SubmitReaction::Alert(failure_message(&e).to_string())
        }
    }
}

/// Guards against a second submit while one is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
}

impl SubmitState {
    /// Returns `false` if a submission is already pending
    pub fn try_begin(&mut self) -> bool {
        match self {
            SubmitState::Idle => {
                *self = SubmitState::Pending;
                true
            }
            SubmitState::Pending => false,
        }
    }

    pub fn finish(&mut self) {
        *self = SubmitState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }
}
