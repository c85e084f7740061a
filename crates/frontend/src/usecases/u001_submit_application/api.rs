use crate::shared::api_utils::{api_url, ApiError, SUBMIT_APPLICATION_PATH};
use async_trait::async_trait;
use contracts::usecases::u001_submit_application::{ApplicationPayload, SubmitResponse};
use gloo_net::http::Request;

/// Submission endpoint
#[async_trait(?Send)]
pub trait SubmitApi {
    async fn submit(&self, payload: &ApplicationPayload) -> Result<SubmitResponse, ApiError>;
}

pub struct HttpSubmitApi;

#[async_trait(?Send)]
impl SubmitApi for HttpSubmitApi {
    /// Отправить заявку
    ///
    /// The body is decoded whatever the HTTP status: validation errors come
    /// back as 400 with the same `{status, message}` shape.
    async fn submit(&self, payload: &ApplicationPayload) -> Result<SubmitResponse, ApiError> {
        let response = Request::post(&api_url(SUBMIT_APPLICATION_PATH))
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        response.json::<SubmitResponse>().await.map_err(|e| {
            if (200..300).contains(&status) {
                ApiError::Decode(e.to_string())
            } else {
                ApiError::Http(status)
            }
        })
    }
}
