use crate::domain::a001_training_catalog::{CatalogService, HttpCatalogApi};
use crate::system::host::{HostContext, TelegramHost};
use crate::usecases::u001_submit_application::ApplicationForm;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    // Host container is read once, before anything renders.
    provide_context(HostContext::init(Rc::new(TelegramHost)));

    // Single catalog service shared by every service block.
    provide_context(CatalogService::new(Rc::new(HttpCatalogApi)));

    view! {
        <ApplicationForm />
    }
}
