mod filters;
mod form;
mod list;
mod templates;

pub use list::TaskList;
