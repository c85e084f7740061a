use super::api::CatalogApi;
use super::cache::CategoryCache;
use contracts::domain::a001_training_catalog::{TrainingCategory, TrainingProgram, TrainingTypeId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;

/// Shared catalog handle
///
/// One instance is provided through context; the API implementation is
/// injected so another source can stand in for the HTTP one.
#[derive(Clone, Copy)]
pub struct CatalogService {
    api: StoredValue<Rc<dyn CatalogApi>, LocalStorage>,
    categories: RwSignal<CategoryCache>,
}

impl CatalogService {
    pub fn new(api: Rc<dyn CatalogApi>) -> Self {
        Self {
            api: StoredValue::new_local(api),
            categories: RwSignal::new(CategoryCache::default()),
        }
    }

    /// Start the category load unless it already started. Idempotent.
    pub fn ensure_categories(&self) {
        let should_load = self
            .categories
            .try_update(|cache| cache.begin_load())
            .unwrap_or(false);
        if !should_load {
            return;
        }

        let api = self.api.get_value();
        let categories = self.categories;
        spawn_local(async move {
            let result = api.fetch_categories().await;
            match &result {
                Ok(types) => log::debug!("loaded {} training types", types.len()),
                Err(e) => log::error!("Не удалось загрузить виды обучения: {}", e),
            }
            categories.update(|cache| cache.complete(result));
        });
    }

    /// Reactive list of categories in catalog order
    pub fn category_options(&self) -> Vec<TrainingCategory> {
        self.categories.with(|cache| cache.options().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.categories.with(|cache| cache.is_loading())
    }

    /// Fresh program list for one category
    pub async fn load_programs(&self, type_id: TrainingTypeId) -> Vec<TrainingProgram> {
        let api = self.api.get_value();
        fetch_programs_fail_closed(api.as_ref(), type_id).await
    }
}

/// Program lookup that degrades to an empty list on any failure
pub async fn fetch_programs_fail_closed(
    api: &dyn CatalogApi,
    type_id: TrainingTypeId,
) -> Vec<TrainingProgram> {
    match api.fetch_programs(type_id).await {
        Ok(programs) => programs,
        Err(e) => {
            log::error!(
                "Не удалось загрузить программы для вида {}: {}",
                type_id.value(),
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use crate::shared::test_support::{init_executor, run_pending};
    use async_trait::async_trait;
    use contracts::domain::a001_training_catalog::TrainingProgramId;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    pub(crate) fn program(id: i64, name: &str) -> TrainingProgram {
        TrainingProgram {
            id: TrainingProgramId(id),
            name: name.into(),
        }
    }

    /// In-memory catalog: type 1 has two programs, type 2 fails to decode,
    /// anything else is offline
    #[derive(Default)]
    pub(crate) struct FakeCatalog {
        pub category_calls: Cell<u32>,
        pub program_calls: RefCell<Vec<i64>>,
    }

    #[async_trait(?Send)]
    impl CatalogApi for FakeCatalog {
        async fn fetch_categories(&self) -> Result<Vec<TrainingCategory>, ApiError> {
            self.category_calls.set(self.category_calls.get() + 1);
            Ok(vec![
                TrainingCategory {
                    id: TrainingTypeId(1),
                    name: "Охрана труда".into(),
                },
                TrainingCategory {
                    id: TrainingTypeId(2),
                    name: "Электробезопасность".into(),
                },
            ])
        }

        async fn fetch_programs(
            &self,
            type_id: TrainingTypeId,
        ) -> Result<Vec<TrainingProgram>, ApiError> {
            self.program_calls.borrow_mut().push(type_id.value());
            match type_id.value() {
                1 => Ok(vec![program(5, "P1"), program(6, "P2")]),
                2 => Err(ApiError::Decode("missing field".into())),
                _ => Err(ApiError::Transport("offline".into())),
            }
        }
    }

    #[test]
    fn test_programs_are_fetched_every_time() {
        let api = FakeCatalog::default();
        let first = block_on(fetch_programs_fail_closed(&api, TrainingTypeId(1)));
        let second = block_on(fetch_programs_fail_closed(&api, TrainingTypeId(1)));
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(*api.program_calls.borrow(), vec![1, 1]);
    }

    #[test]
    fn test_failures_fail_closed() {
        let api = FakeCatalog::default();
        assert!(block_on(fetch_programs_fail_closed(&api, TrainingTypeId(2))).is_empty());
        assert!(block_on(fetch_programs_fail_closed(&api, TrainingTypeId(3))).is_empty());
    }

    #[test]
    fn test_categories_are_fetched_once() {
        init_executor();
        let api = Rc::new(FakeCatalog::default());
        let catalog = CatalogService::new(api.clone());

        catalog.ensure_categories();
        catalog.ensure_categories();
        assert!(catalog.is_loading());
        assert!(catalog.category_options().is_empty());

        run_pending();
        catalog.ensure_categories();
        run_pending();

        assert_eq!(api.category_calls.get(), 1);
        assert!(!catalog.is_loading());
        let names: Vec<_> = catalog
            .category_options()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Охрана труда", "Электробезопасность"]);
    }

    #[test]
    fn test_service_loads_programs_through_injected_api() {
        let api = Rc::new(FakeCatalog::default());
        let catalog = CatalogService::new(api.clone());
        assert_eq!(
            block_on(catalog.load_programs(TrainingTypeId(1))),
            vec![program(5, "P1"), program(6, "P2")]
        );
        assert!(block_on(catalog.load_programs(TrainingTypeId(9))).is_empty());
        assert_eq!(*api.program_calls.borrow(), vec![1, 9]);
    }
}
