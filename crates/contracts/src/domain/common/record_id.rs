use serde::{Deserialize, Deserializer};

/// Идентификатор записи в том виде, в каком его отдаёт API.
///
/// Сервер может вернуть `id` строкой (`"42"`) или числом (`42`),
/// на стороне клиента id всегда хранится строкой.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// `deserialize_with` для обязательного id
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// `deserialize_with` для необязательного id (`null` и отсутствие поля дают `None`)
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(raw.map(RawId::into_string))
}
