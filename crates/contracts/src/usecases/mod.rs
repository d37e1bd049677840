pub mod common;
pub mod u001_save_task;
pub mod u002_save_inline_template;
pub mod u003_delete_task_category;
pub mod u004_upload_document;

pub use common::{UseCaseError, UseCaseMetadata, UseCaseResult};
