use serde::{Deserialize, Serialize};

use crate::domain::common::record_id;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сотрудник
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Staff {
    /// Отсутствует, пока запись не сохранена на сервере
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record_id::deserialize_opt"
    )]
    pub id: Option<String>,

    pub name: String,

    /// Отделения (теги), к которым относится сотрудник
    #[serde(default)]
    pub departments: Vec<String>,

    /// Названия позиций из справочника, на которые можно назначить сотрудника
    #[serde(rename = "availablePositions", default)]
    pub available_positions: Vec<String>,

    /// Стаж, лет
    #[serde(default)]
    pub experience: u32,
}

impl Staff {
    /// Относится ли сотрудник к отделению (точное совпадение)
    pub fn has_department(&self, department: &str) -> bool {
        self.departments.iter().any(|d| d == department)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления сотрудника.
///
/// Для POST `/api/staff` отправляется без `id`, для PUT `/api/staff` с `id`.
/// Списки должны быть уже очищены от пустых строк.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StaffDto {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record_id::deserialize_opt"
    )]
    pub id: Option<String>,
    pub name: String,
    pub departments: Vec<String>,
    #[serde(rename = "availablePositions")]
    pub available_positions: Vec<String>,
    pub experience: u32,
}

impl StaffDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Имя обязательно для заполнения");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto() -> StaffDto {
        StaffDto {
            id: None,
            name: "田中".to_string(),
            departments: vec!["病理".to_string()],
            available_positions: vec!["採血".to_string()],
            experience: 3,
        }
    }

    #[test]
    fn test_create_payload_has_no_id() {
        let value = serde_json::to_value(dto()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "田中",
                "departments": ["病理"],
                "availablePositions": ["採血"],
                "experience": 3
            })
        );
    }

    #[test]
    fn test_update_payload_carries_id() {
        let mut d = dto();
        d.id = Some("42".to_string());
        let value = serde_json::to_value(d).unwrap();
        assert_eq!(value["id"], json!("42"));
        assert_eq!(value["availablePositions"], json!(["採血"]));
    }

    #[test]
    fn test_staff_from_server() {
        let staff: Staff = serde_json::from_value(json!({
            "id": 5,
            "name": "佐藤",
            "departments": ["病理", "生化学"],
            "availablePositions": [],
            "experience": 10
        }))
        .unwrap();
        assert_eq!(staff.id.as_deref(), Some("5"));
        assert!(staff.has_department("生化学"));
        assert!(!staff.has_department("生化"));
        assert!(staff.available_positions.is_empty());
    }

    #[test]
    fn test_staff_missing_lists_default_to_empty() {
        let staff: Staff = serde_json::from_value(json!({ "id": "1", "name": "鈴木" })).unwrap();
        assert!(staff.departments.is_empty());
        assert!(staff.available_positions.is_empty());
        assert_eq!(staff.experience, 0);
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(dto().validate().is_ok());
        let mut d = dto();
        d.name = "   ".to_string();
        assert!(d.validate().is_err());
    }
}
