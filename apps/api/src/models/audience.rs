//! Wildcard-aware list elements for scholarship criteria.
//!
//! Catalog lists such as `["SC", "ST"]` or `["All"]` mix concrete values with
//! the `"All"` wildcard. `Audience<T>` keeps both cases visible in the type.

use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const WILDCARD: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Audience<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Audience::All => true,
            Audience::Only(v) => v == value,
        }
    }
}

/// True when any element of `list` admits `value`. An empty list admits nothing.
pub fn admits_any<T: PartialEq>(list: &[Audience<T>], value: &T) -> bool {
    list.iter().any(|a| a.admits(value))
}

impl<T: Serialize> Serialize for Audience<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Audience::All => serializer.serialize_str(WILDCARD),
            Audience::Only(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Audience<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == WILDCARD {
            return Ok(Audience::All);
        }
        let de: StrDeserializer<'_, D::Error> = raw.as_str().into_deserializer();
        T::deserialize(de).map(Audience::Only)
    }
}
