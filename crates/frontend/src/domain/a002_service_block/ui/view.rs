use super::view_model::ServiceListViewModel;
use crate::domain::a002_service_block::{ProgramOptions, ServiceBlockId};
use crate::shared::components::ui::{Input, Select};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// All service blocks, in the order they were added
#[component]
pub fn ServiceBlocks(vm: ServiceListViewModel) -> impl IntoView {
    view! {
        <div id="services-container">
            <For
                each=move || vm.block_ids()
                key=|id| *id
                children=move |id| view! { <ServiceBlockView vm=vm id=id /> }
            />
        </div>
    }
}

#[component]
fn ServiceBlockView(vm: ServiceListViewModel, id: ServiceBlockId) -> impl IntoView {
    let catalog = vm.catalog();
    let prefix = id.dom_prefix();

    let category_value = Signal::derive(move || {
        vm.with_block(id, |b| b.category.map(|c| c.as_string()))
            .flatten()
            .unwrap_or_default()
    });
    let category_options = Signal::derive(move || {
        catalog
            .category_options()
            .into_iter()
            .map(|c| (c.id.as_string(), c.name))
            .collect::<Vec<_>>()
    });
    let category_placeholder = Signal::derive(move || {
        if catalog.is_loading() {
            Some("Загрузка...".to_string())
        } else {
            Some("-- Выберите вид обучения --".to_string())
        }
    });

    let program_value = Signal::derive(move || {
        vm.with_block(id, |b| b.program().map(|p| p.as_string()))
            .flatten()
            .unwrap_or_default()
    });
    let program_options = Signal::derive(move || {
        vm.with_block(id, |b| {
            b.program_list()
                .iter()
                .map(|p| (p.id.as_string(), p.name.clone()))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
    });
    let program_placeholder = Signal::derive(move || {
        vm.with_block(id, |b| match b.programs {
            ProgramOptions::Placeholder => Some("-- Сначала выберите вид обучения --".to_string()),
            ProgramOptions::Loading => Some("Загрузка программ...".to_string()),
            ProgramOptions::Empty => Some("-- Нет доступных программ --".to_string()),
            ProgramOptions::Ready(_) => None,
        })
        .flatten()
    });
    let program_disabled = Signal::derive(move || {
        !vm.with_block(id, |b| b.is_program_select_enabled())
            .unwrap_or(false)
    });

    view! {
        <div class="service-block">
            <Select
                id=format!("{}-training_type", prefix)
                class="training-type"
                label="Выберите вид обучения:"
                value=category_value
                options=category_options
                placeholder=category_placeholder
                disabled=Signal::derive(|| false)
                on_change=Callback::new(move |value| vm.on_category_change(id, value))
            />
            <Select
                id=format!("{}-training_program", prefix)
                class="training-program"
                label="Выберите программу обучения:"
                value=program_value
                options=program_options
                placeholder=program_placeholder
                disabled=program_disabled
                on_change=Callback::new(move |value| vm.on_program_change(id, value))
            />
            <Input
                id=format!("{}-training_rank", prefix)
                name="training_rank"
                label="Разряд (опционально)"
                value=Signal::derive(move || vm.with_block(id, |b| b.rank.clone()).unwrap_or_default())
                on_input=Callback::new(move |value| vm.on_rank_input(id, value))
            />
            <Input
                id=format!("{}-people_count", prefix)
                name="people_count"
                label="Количество человек"
                input_type="number"
                min="1"
                required=true
                value=Signal::derive(move || vm.with_block(id, |b| b.headcount.clone()).unwrap_or_default())
                on_input=Callback::new(move |value| vm.on_headcount_input(id, value))
            />
        </div>
    }
}
