//! Versioned state snapshot schema pushed by the engine.
//!
//! Decoding is lenient: a sub-field with the wrong shape decodes as absent and
//! a malformed inventory entry is skipped, so a bad push can only blank out
//! the sections it broke.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Newest snapshot schema this crate understands.
pub const SCHEMA_VERSION: u32 = 1;

/// One engine push.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub stats: Field<Stats>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub notifications: Field<Vec<String>>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            stats: Field::Absent,
            notifications: Field::Absent,
        }
    }
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Field::Present(stats);
        self
    }

    pub fn with_notifications<I, S>(mut self, notifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notifications = Field::Present(notifications.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

/// Tri-state top-level key: omitted, explicitly `null`, or set.
#[derive(Clone, Debug, PartialEq)]
pub enum Field<T> {
    Absent,
    Cleared,
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn as_present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Cleared => None,
        }
    }

    /// Combine with the previously held value: absent keeps it, cleared drops
    /// it, present replaces it.
    pub fn resolve(self, previous: Option<T>) -> Option<T> {
        match self {
            Field::Absent => previous,
            Field::Cleared => None,
            Field::Present(value) => Some(value),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::Absent | Field::Cleared => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Field::Cleared);
        }

        match T::deserialize(value) {
            Ok(inner) => Ok(Field::Present(inner)),
            Err(err) => {
                tracing::warn!("Malformed snapshot section treated as cleared: {}", err);
                Ok(Field::Cleared)
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub health: Option<Health>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub gold: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::items",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<Item>>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_health(mut self, current: f64, max: f64) -> Self {
        self.health = Some(Health::new(current, max));
        self
    }

    pub fn with_gold(mut self, gold: f64) -> Self {
        self.gold = Some(gold);
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub const fn new(current: f64, max: f64) -> Self {
        Self { current, max }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub amount: f64,
    pub slug: String,
}

impl Item {
    pub fn new(name: impl Into<String>, amount: f64, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            slug: slug.into(),
        }
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Item;

    pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }

        match T::deserialize(value) {
            Ok(inner) => Ok(Some(inner)),
            Err(err) => {
                tracing::debug!("Dropping malformed snapshot field: {}", err);
                Ok(None)
            }
        }
    }

    pub fn items<'de, D>(deserializer: D) -> Result<Option<Vec<Item>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Array(entries) => Ok(Some(
                entries
                    .into_iter()
                    .filter_map(|entry| match Item::deserialize(entry) {
                        Ok(item) => Some(item),
                        Err(err) => {
                            tracing::debug!("Skipping malformed item: {}", err);
                            None
                        }
                    })
                    .collect(),
            )),
            other => {
                tracing::debug!("Dropping non-list items field: {}", other);
                Ok(None)
            }
        }
    }
}
