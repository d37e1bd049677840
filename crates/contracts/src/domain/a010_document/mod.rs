pub mod aggregate;

pub use aggregate::{Document, DocumentUpload};
