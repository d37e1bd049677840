use thiserror::Error;

/// Failure while reading or writing the local key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("stored value under '{key}' is corrupted: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// User-facing validation failures. The display text is what the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    RequiredFields,

    #[error("End date must be after start date")]
    EndBeforeStart,

    #[error("Please select at most {max} POI locations")]
    TooManyLocations { max: usize },

    #[error("Category with this name already exists")]
    DuplicateCategory,

    #[error("Cannot delete category that has child categories. Please delete child categories first.")]
    CategoryHasChildren,

    #[error("Please select a task category")]
    MissingDocumentCategory,

    #[error("Please select a file to upload")]
    MissingFile,

    #[error("File size exceeds {limit_mb} MB")]
    FileTooLarge { limit_mb: u64 },

    #[error("Recurrence interval must be greater than zero")]
    InvalidRecurrence,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::Other(message)
    }
}
