use super::api::SubmitApi;
use super::feedback::FeedbackController;
use super::model::{build_payload, ContactForm};
use super::pipeline::{submit_application, SubmitReaction, SubmitState};
use crate::domain::a001_training_catalog::CatalogService;
use crate::domain::a002_service_block::ui::ServiceListViewModel;
use crate::shared::dialogs;
use crate::system::host::HostContext;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the application form
#[derive(Clone, Copy)]
pub struct ApplicationFormViewModel {
    pub form: RwSignal<ContactForm>,
    pub services: ServiceListViewModel,
    pub submit_state: RwSignal<SubmitState>,
    pub feedback: RwSignal<FeedbackController>,
    api: StoredValue<Rc<dyn SubmitApi>, LocalStorage>,
    host: HostContext,
}

impl ApplicationFormViewModel {
    pub fn new(host: HostContext, catalog: CatalogService, api: Rc<dyn SubmitApi>) -> Self {
        let user = host.user();
        Self {
            form: RwSignal::new(ContactForm::prefilled(user.as_ref())),
            services: ServiceListViewModel::new(catalog),
            submit_state: RwSignal::new(SubmitState::default()),
            feedback: RwSignal::new(FeedbackController::default()),
            api: StoredValue::new_local(api),
            host,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.submit_state.with(|s| s.is_pending())
    }

    /// Assemble the payload from the current field values and send it
    pub fn submit_command(&self) {
        let started = self
            .submit_state
            .try_update(|s| s.try_begin())
            .unwrap_or(false);
        if !started {
            log::debug!("submit ignored: previous request still pending");
            return;
        }

        let form = self.form.get_untracked();
        let payload = build_payload(&form, self.services.extract_all());
        let api = self.api.get_value();
        let submit_state = self.submit_state;
        let feedback = self.feedback;

        spawn_local(async move {
            let reaction = submit_application(api.as_ref(), &payload).await;
            submit_state.update(|s| s.finish());
            match reaction {
                SubmitReaction::ShowFeedback(message) => feedback.update(|f| f.show(message)),
                SubmitReaction::Alert(message) => dialogs::alert(&message),
            }
        });
    }

    /// Close button of the feedback panel
    pub fn dismiss_feedback(&self) {
        let should_close = self
            .feedback
            .try_update(|f| f.dismiss())
            .unwrap_or(false);
        if should_close {
            self.host.request_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_training_catalog::fakes::FakeCatalog;
    use crate::shared::api_utils::ApiError;
    use crate::shared::test_support::{init_executor, run_pending};
    use crate::system::host::tests::CountingHost;
    use async_trait::async_trait;
    use contracts::system::host::HostUser;
    use contracts::usecases::u001_submit_application::{ApplicationPayload, SubmitResponse};
    use std::cell::RefCell;

    #[derive(Default)]
    struct AcceptingSubmit {
        sent: RefCell<Vec<ApplicationPayload>>,
    }

    #[async_trait(?Send)]
    impl SubmitApi for AcceptingSubmit {
        async fn submit(&self, payload: &ApplicationPayload) -> Result<SubmitResponse, ApiError> {
            self.sent.borrow_mut().push(payload.clone());
            Ok(SubmitResponse {
                status: "success".into(),
                message: "OK".into(),
            })
        }
    }

    struct Fixture {
        vm: ApplicationFormViewModel,
        host: Rc<CountingHost>,
        submit: Rc<AcceptingSubmit>,
    }

    fn fixture() -> Fixture {
        init_executor();
        let host = Rc::new(CountingHost {
            user: Some(HostUser {
                id: 7,
                first_name: "Acme".into(),
            }),
            ..CountingHost::default()
        });
        let submit = Rc::new(AcceptingSubmit::default());
        let vm = ApplicationFormViewModel::new(
            HostContext::init_with_close_delay(host.clone(), 0),
            CatalogService::new(Rc::new(FakeCatalog::default())),
            submit.clone(),
        );
        Fixture { vm, host, submit }
    }

    #[test]
    fn test_form_is_prefilled_from_host() {
        let f = fixture();
        let form = f.vm.form.get_untracked();
        assert_eq!(form.user_id, Some(7));
        assert_eq!(form.user_name, "Acme");
    }

    #[test]
    fn test_successful_submit_shows_feedback() {
        let f = fixture();
        f.vm.services.add_block();
        f.vm.form.update(|form| form.company_name = "Co".into());

        f.vm.submit_command();
        assert!(f.vm.is_pending());
        run_pending();

        assert!(!f.vm.is_pending());
        assert_eq!(
            f.vm.feedback.with_untracked(|fb| fb.message().map(str::to_string)),
            Some("OK".to_string())
        );
        let sent = f.submit.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].user_name, "Acme");
        assert_eq!(sent[0].company_name, "Co");
        assert_eq!(sent[0].services.len(), 1);
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let f = fixture();
        f.vm.submit_command();
        f.vm.submit_command();
        run_pending();
        assert_eq!(f.submit.sent.borrow().len(), 1);
    }

    #[test]
    fn test_double_dismiss_closes_container_once() {
        let f = fixture();
        f.vm.submit_command();
        run_pending();

        f.vm.dismiss_feedback();
        f.vm.dismiss_feedback();
        run_pending();

        assert_eq!(f.host.close_calls.get(), 1);
        assert!(!f.vm.feedback.with_untracked(|fb| fb.is_shown()));
    }

    #[test]
    fn test_dismiss_without_feedback_keeps_container_open() {
        let f = fixture();
        f.vm.dismiss_feedback();
        run_pending();
        assert_eq!(f.host.close_calls.get(), 0);
    }
}

