mod list;

pub use list::DocumentList;
