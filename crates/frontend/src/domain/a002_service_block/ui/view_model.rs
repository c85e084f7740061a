use crate::domain::a001_training_catalog::CatalogService;
use crate::domain::a002_service_block::{ServiceBlock, ServiceBlockId, ServiceList};
use contracts::domain::a001_training_catalog::{TrainingProgramId, TrainingTypeId};
use contracts::domain::common::AggregateId;
use contracts::usecases::u001_submit_application::ServiceEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel owning the service blocks of the form
#[derive(Clone, Copy)]
pub struct ServiceListViewModel {
    pub list: RwSignal<ServiceList>,
    catalog: CatalogService,
}

impl ServiceListViewModel {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            list: RwSignal::new(ServiceList::new()),
            catalog,
        }
    }

    pub fn catalog(&self) -> CatalogService {
        self.catalog
    }

    /// Append a block and make sure its category select gets populated
    pub fn add_block(&self) -> Option<ServiceBlockId> {
        let id = self.list.try_update(|list| list.add_block());
        self.catalog.ensure_categories();
        id
    }

    pub fn block_ids(&self) -> Vec<ServiceBlockId> {
        self.list.with(|list| list.ids())
    }

    /// Read one block (reactive)
    pub fn with_block<R>(&self, id: ServiceBlockId, f: impl FnOnce(&ServiceBlock) -> R) -> Option<R> {
        self.list.with(|list| list.block(id).map(f))
    }

    fn update_block(&self, id: ServiceBlockId, f: impl FnOnce(&mut ServiceBlock)) {
        self.list.update(|list| {
            if let Some(block) = list.block_mut(id) {
                f(block);
            }
        });
    }

    /// Category select change: reset the program select and, for a real
    /// category, load its programs. Only the latest lookup is applied.
    pub fn on_category_change(&self, id: ServiceBlockId, value: String) {
        let category = TrainingTypeId::from_select_value(&value);
        let request = self
            .list
            .try_update(|list| list.block_mut(id).and_then(|b| b.select_category(category)))
            .flatten();

        let Some(request) = request else {
            return;
        };

        let list = self.list;
        let catalog = self.catalog;
        spawn_local(async move {
            let programs = catalog.load_programs(request.type_id).await;
            let applied = list
                .try_update(|list| {
                    list.block_mut(request.block_id)
                        .map(|b| b.apply_programs(request, programs))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !applied {
                log::debug!(
                    "stale program list for block {} dropped (request {})",
                    request.block_id,
                    request.seq
                );
            }
        });
    }

    pub fn on_program_change(&self, id: ServiceBlockId, value: String) {
        let program = TrainingProgramId::from_select_value(&value);
        self.update_block(id, |b| b.select_program(program));
    }

    pub fn on_rank_input(&self, id: ServiceBlockId, value: String) {
        self.update_block(id, |b| b.rank = value);
    }

    pub fn on_headcount_input(&self, id: ServiceBlockId, value: String) {
        self.update_block(id, |b| b.headcount = value);
    }

    /// Snapshot of all blocks at call time
    pub fn extract_all(&self) -> Vec<ServiceEntry> {
        self.list.with_untracked(|list| list.extract_all())
    }
}
