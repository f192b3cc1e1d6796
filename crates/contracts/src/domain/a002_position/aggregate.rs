use serde::{Deserialize, Serialize};

use crate::domain::common::record_id;

/// Позиция из справочника (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOption {
    #[serde(deserialize_with = "record_id::deserialize")]
    pub id: String,
    pub name: String,
    /// Отделения, с которыми связана позиция
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<String>>,
}
