use crate::shared::api_utils::{api_url, get_json, ApiError, PROGRAMS_PATH, TRAINING_TYPES_PATH};
use async_trait::async_trait;
use contracts::domain::a001_training_catalog::{
    CategoriesResponse, ProgramsResponse, TrainingCategory, TrainingProgram, TrainingTypeId,
};
use contracts::domain::common::AggregateId;

/// Remote catalog lookups
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Получить все виды обучения
    async fn fetch_categories(&self) -> Result<Vec<TrainingCategory>, ApiError>;

    /// Получить программы обучения для вида
    async fn fetch_programs(
        &self,
        type_id: TrainingTypeId,
    ) -> Result<Vec<TrainingProgram>, ApiError>;
}

/// Catalog backed by the application server
pub struct HttpCatalogApi;

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_categories(&self) -> Result<Vec<TrainingCategory>, ApiError> {
        let data: CategoriesResponse = get_json(&api_url(TRAINING_TYPES_PATH)).await?;
        Ok(data.types)
    }

    async fn fetch_programs(
        &self,
        type_id: TrainingTypeId,
    ) -> Result<Vec<TrainingProgram>, ApiError> {
        let url = format!("{}?type_id={}", api_url(PROGRAMS_PATH), type_id.as_string());
        let data: ProgramsResponse = get_json(&url).await?;
        Ok(data.programs)
    }
}
