use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

/// Идентификатор вида обучения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingTypeId(pub i64);

impl TrainingTypeId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for TrainingTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(TrainingTypeId)
            .map_err(|e| format!("Invalid training type id: {}", e))
    }
}

/// Идентификатор программы обучения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingProgramId(pub i64);

impl TrainingProgramId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for TrainingProgramId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(TrainingProgramId)
            .map_err(|e| format!("Invalid training program id: {}", e))
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Вид обучения (верхний уровень каскадного выбора)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCategory {
    pub id: TrainingTypeId,
    pub name: String,
}

/// Программа обучения, принадлежащая одному виду обучения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub id: TrainingProgramId,
    pub name: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Ответ `GET /get_training_types`
///
/// Отсутствующий список трактуется как пустой.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub types: Vec<TrainingCategory>,
}

/// Ответ `GET /get_programs?type_id=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramsResponse {
    #[serde(default)]
    pub programs: Vec<TrainingProgram>,
}
