use crate::domain::a001_training_catalog::{TrainingProgramId, TrainingTypeId};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Одна услуга в заявке (один блок формы)
///
/// Незаполненные поля передаются как `null`: окончательную проверку
/// выполняет сервер.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub training_type_id: Option<TrainingTypeId>,
    pub training_program_id: Option<TrainingProgramId>,
    /// Разряд (необязательно, пустая строка если не указан)
    pub training_rank: String,
    /// Количество человек, только положительное
    pub people_count: Option<NonZeroU32>,
}

/// Тело запроса `POST /submit_application`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    /// ID пользователя в мессенджере
    pub user_id: Option<i64>,
    pub user_name: String,
    pub company_name: String,
    pub phone_number: String,
    pub email: String,
    pub services: Vec<ServiceEntry>,
}
