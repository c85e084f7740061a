use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов справочников
///
/// Значение идентификатора совпадает со значением `<option value=...>`
/// в выпадающих списках формы, поэтому ID умеет превращаться в строку
/// и обратно.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;

    /// Разобрать значение из `<select>`: пустая строка означает "не выбрано"
    fn from_select_value(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Self::from_string(trimmed).ok()
    }
}
