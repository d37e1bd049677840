use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Synthetic numeric identifier used by every stored record.
///
/// Stored values are written as JSON numbers, but older records and form
/// selections may carry the id as a numeric string, so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(EntityId)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(u64),
    Float(f64),
    Text(String),
}

impl RawId {
    fn into_id<E: de::Error>(self) -> Result<EntityId, E> {
        match self {
            RawId::Int(n) => Ok(EntityId(n)),
            RawId::Float(f) if f >= 0.0 && f.fract() == 0.0 => Ok(EntityId(f as u64)),
            RawId::Float(f) => Err(E::custom(format!("invalid id {}", f))),
            RawId::Text(s) => s.parse::<EntityId>().map_err(E::custom),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer)?.into_id()
    }
}

/// `Option<EntityId>` that also treats `""` as absent.
pub mod optional_id {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<EntityId>, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<EntityId>, D::Error> {
        match Option::<RawId>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(raw) => raw.into_id().map(Some),
        }
    }
}

/// Number-or-string field such as a duration typed into a form.
pub mod lenient_u32 {
    use super::*;
    use serde::Serializer;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Raw::Int(n)) => u32::try_from(n).map_err(de::Error::custom),
            Some(Raw::Float(f)) if f >= 0.0 => Ok(f.round() as u32),
            Some(Raw::Float(f)) => Err(de::Error::custom(format!("negative value {}", f))),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0),
            Some(Raw::Text(s)) => s.trim().parse::<u32>().map_err(de::Error::custom),
        }
    }
}

/// Issues ids from the wall clock in milliseconds, bumping past the last
/// issued value so two records created in the same millisecond differ.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above every id already present in a collection.
    pub fn observe<I: IntoIterator<Item = EntityId>>(&mut self, ids: I) {
        for id in ids {
            self.last = self.last.max(id.0);
        }
    }

    pub fn next_at(&mut self, now_millis: u64) -> EntityId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        EntityId(id)
    }

    pub fn next(&mut self) -> EntityId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        id: EntityId,
        #[serde(default, with = "optional_id")]
        parent: Option<EntityId>,
        #[serde(default, with = "lenient_u32")]
        duration: u32,
    }

    #[test]
    fn test_id_accepts_number_and_string() {
        let h: Holder = serde_json::from_str(r#"{"id": 42, "parent": "7", "duration": "30"}"#).unwrap();
        assert_eq!(h.id, EntityId(42));
        assert_eq!(h.parent, Some(EntityId(7)));
        assert_eq!(h.duration, 30);

        let h: Holder = serde_json::from_str(r#"{"id": "1754700000000", "parent": ""}"#).unwrap();
        assert_eq!(h.id, EntityId(1_754_700_000_000));
        assert_eq!(h.parent, None);
        assert_eq!(h.duration, 0);
    }

    #[test]
    fn test_id_rejects_garbage() {
        let res: Result<Holder, _> = serde_json::from_str(r#"{"id": "abc"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_generator_never_repeats_within_same_millisecond() {
        let mut gen = IdGenerator::new();
        let a = gen.next_at(1000);
        let b = gen.next_at(1000);
        let c = gen.next_at(999);
        assert_eq!(a, EntityId(1000));
        assert_eq!(b, EntityId(1001));
        assert_eq!(c, EntityId(1002));
    }

    #[test]
    fn test_generator_observes_existing_ids() {
        let mut gen = IdGenerator::new();
        gen.observe(vec![EntityId(5), EntityId(5000)]);
        assert_eq!(gen.next_at(10), EntityId(5001));
    }

    #[test]
    fn test_generator_saturates_at_max_id() {
        let mut gen = IdGenerator::new();
        gen.observe(vec![EntityId(u64::MAX)]);
        assert_eq!(gen.next_at(1000), EntityId(u64::MAX));
    }
}
