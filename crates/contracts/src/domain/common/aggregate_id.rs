use crate::shared::EntityId;
use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Id as the string used in form values and query strings
    fn as_string(&self) -> String;
}

impl AggregateId for EntityId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}
