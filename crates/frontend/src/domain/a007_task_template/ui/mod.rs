mod list;

pub use list::{LocationPicker, TaskTemplateList};
