use crate::shared::api_utils::ApiError;
use contracts::domain::a001_training_catalog::TrainingCategory;

/// Load-once state of the category list
///
/// Only the first `begin_load` wins; every other caller waits for the shared
/// result instead of issuing its own request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryCache {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<TrainingCategory>),
    /// Terminal: there are no retries, selects stay with the placeholder only
    Failed(String),
}

impl CategoryCache {
    /// Returns `true` if the caller must perform the request
    pub fn begin_load(&mut self) -> bool {
        if matches!(self, CategoryCache::NotLoaded) {
            *self = CategoryCache::Loading;
            true
        } else {
            false
        }
    }

    pub fn complete(&mut self, result: Result<Vec<TrainingCategory>, ApiError>) {
        *self = match result {
            Ok(types) => CategoryCache::Loaded(types),
            Err(e) => CategoryCache::Failed(e.to_string()),
        };
    }

    /// Categories in catalog order; empty until loaded
    pub fn options(&self) -> &[TrainingCategory] {
        match self {
            CategoryCache::Loaded(types) => types,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CategoryCache::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_training_catalog::TrainingTypeId;

    fn category(id: i64, name: &str) -> TrainingCategory {
        TrainingCategory {
            id: TrainingTypeId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_only_first_caller_loads() {
        let mut cache = CategoryCache::default();
        assert!(cache.begin_load());
        assert!(!cache.begin_load());
        assert!(cache.is_loading());

        cache.complete(Ok(vec![category(1, "A")]));
        assert!(!cache.begin_load());
    }

    #[test]
    fn test_loaded_preserves_catalog_order() {
        let mut cache = CategoryCache::default();
        cache.begin_load();
        cache.complete(Ok(vec![category(3, "C"), category(1, "A"), category(2, "B")]));
        let ids: Vec<i64> = cache.options().iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_failure_is_terminal_and_empty() {
        let mut cache = CategoryCache::default();
        cache.begin_load();
        cache.complete(Err(ApiError::Http(500)));
        assert!(cache.options().is_empty());
        assert!(!cache.begin_load());
        assert_eq!(cache, CategoryCache::Failed("HTTP error: 500".to_string()));
    }
}
