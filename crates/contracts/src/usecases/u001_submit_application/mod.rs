pub mod request;
pub mod response;

pub use request::{ApplicationPayload, ServiceEntry};
pub use response::{SubmissionOutcome, SubmitResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitApplication;

impl UseCaseMetadata for SubmitApplication {
    fn display_name() -> &'static str {
        "Заявка на обучение"
    }

    fn description() -> &'static str {
        "Оформление заявки на коммерческое предложение по программам обучения"
    }
}
