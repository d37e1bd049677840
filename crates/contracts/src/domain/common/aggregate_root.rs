use super::AggregateId;
use crate::shared::StorageKey;
use serde::{de::DeserializeOwned, Serialize};

/// Root of a stored collection.
///
/// Every aggregate is one element of a JSON array kept under
/// [`AggregateRoot::storage_key`].
pub trait AggregateRoot: Clone + Serialize + DeserializeOwned {
    /// Identifier type
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Name shown in lists and pickers
    fn description(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the aggregate, e.g. "a001"
    fn aggregate_index() -> &'static str;

    /// Collection name, e.g. "task"
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Task"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Tasks"
    fn list_name() -> &'static str;

    /// Key of the blob holding the collection
    fn storage_key() -> StorageKey;

    /// Records written when the collection is missing or empty
    fn seed() -> Vec<Self> {
        Vec::new()
    }

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Full name, e.g. "a001_task"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
