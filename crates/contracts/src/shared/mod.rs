pub mod config;
pub mod csv;
pub mod datetime;
pub mod error;
pub mod ids;
pub mod pagination;
pub mod status;
pub mod storage;

pub use error::{StoreError, ValidationError};
pub use ids::{EntityId, IdGenerator};
pub use status::{RecordStatus, StatusTone};
pub use storage::{KeyValueStore, MemoryStore, StorageKey, StoreResult};
