use serde::{Deserialize, Serialize};

/// Пользователь, открывший мини-приложение
///
/// Поля совпадают с объектом `initDataUnsafe.user` контейнера; остальные
/// поля объекта игнорируются.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_container_user_ignoring_extra_fields() {
        let json = r#"{"id":777,"first_name":"Иван","username":"ivan","language_code":"ru"}"#;
        let user: HostUser = serde_json::from_str(json).unwrap();
        assert_eq!(
            user,
            HostUser {
                id: 777,
                first_name: "Иван".to_string()
            }
        );
    }
}
