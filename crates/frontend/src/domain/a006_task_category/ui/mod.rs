mod list;

pub use list::TaskCategoryList;
