pub mod aggregate;
pub mod filter;
pub mod form;
pub mod ordering;
pub mod samples;
pub mod stats;

pub use aggregate::{Task, TaskDocumentRef, TaskFeatures, TaskStatus};
pub use filter::TaskFilter;
pub use form::{LocationCatalog, TaskDraft};
