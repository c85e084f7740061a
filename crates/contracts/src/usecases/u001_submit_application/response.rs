use serde::{Deserialize, Serialize};

/// Значение `status`, означающее успешный приём заявки
const STATUS_SUCCESS: &str = "success";

/// Ответ сервера на отправку заявки
///
/// Сервер возвращает это тело и при HTTP 200, и при ошибке валидации (HTTP 400).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Итог отправки заявки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success { message: String },
    Failure { message: String },
}

impl From<SubmitResponse> for SubmissionOutcome {
    fn from(resp: SubmitResponse) -> Self {
        if resp.is_success() {
            SubmissionOutcome::Success {
                message: resp.message,
            }
        } else {
            SubmissionOutcome::Failure {
                message: resp.message,
            }
        }
    }
}
