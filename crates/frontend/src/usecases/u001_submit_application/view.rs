use super::api::HttpSubmitApi;
use super::feedback::FeedbackPanel;
use super::model::ContactField;
use super::view_model::ApplicationFormViewModel;
use crate::domain::a001_training_catalog::CatalogService;
use crate::domain::a002_service_block::ui::ServiceBlocks;
use crate::shared::components::ui::Input;
use crate::system::host::HostContext;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_submit_application::SubmitApplication;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ApplicationForm() -> impl IntoView {
    let host = expect_context::<HostContext>();
    let catalog = expect_context::<CatalogService>();
    let vm = ApplicationFormViewModel::new(host, catalog, Rc::new(HttpSubmitApi));

    // Форма открывается с одним блоком услуги
    vm.services.add_block();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="application-page">
            <h3>{SubmitApplication::display_name()}</h3>
            <p class="application-description">{SubmitApplication::description()}</p>

            <form id="application-form" on:submit=on_submit>
                <input
                    type="hidden"
                    id="user_id"
                    name="user_id"
                    prop:value=move || {
                        vm.form.with(|f| f.user_id.map(|id| id.to_string()).unwrap_or_default())
                    }
                />
                <Input
                    id="user_name"
                    name="user_name"
                    label="Ваше имя"
                    readonly=true
                    value=Signal::derive(move || vm.form.with(|f| f.user_name.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.user_name = v))
                />
                {ContactField::EDITABLE
                    .into_iter()
                    .map(move |field| {
                        view! {
                            <Input
                                id=field.name()
                                name=field.name()
                                label=field.label()
                                input_type=field.input_type()
                                placeholder=field.placeholder().unwrap_or_default()
                                value=Signal::derive(move || vm.form.with(|f| f.field(field).to_string()))
                                on_input=Callback::new(move |v| vm.form.update(|f| f.set_field(field, v)))
                            />
                        }
                    })
                    .collect_view()}

                <h3>{"Услуги"}</h3>
                <ServiceBlocks vm=vm.services />

                <button
                    id="add-service"
                    type="button"
                    class="add-service-btn"
                    on:click=move |_| {
                        vm.services.add_block();
                    }
                >
                    {"Добавить услугу"}
                </button>
                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || vm.is_pending()
                >
                    {move || if vm.is_pending() { "Отправка..." } else { "Отправить заявку" }}
                </button>
            </form>

            <FeedbackPanel
                state=vm.feedback
                on_dismiss=Callback::new(move |_| vm.dismiss_feedback())
            />
        </div>
    }
}
