use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque name of the tracked object, only ever used as a path segment.
/// Deserializes from either a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntityId {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawEntityId::deserialize(deserializer)? {
            RawEntityId::Text(id) => Self(id),
            RawEntityId::Number(id) => Self(id.to_string()),
        })
    }
}

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_and_integers() {
        let text: EntityId = serde_json::from_str(r#""bus42""#).unwrap();
        let number: EntityId = serde_json::from_str("42").unwrap();

        assert_eq!(text, EntityId::from("bus42"));
        assert_eq!(number, EntityId::from(42));
        assert_eq!(number.to_string(), "42");
    }

    #[test]
    fn rejects_other_json_types() {
        assert!(serde_json::from_str::<EntityId>("4.2").is_err());
        assert!(serde_json::from_str::<EntityId>("[1]").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&EntityId::from(7)).unwrap(), r#""7""#);
    }
}
