pub mod aggregate;

pub use aggregate::{TaskCategory, TaskCategoryDto, TaskSubcategory};
