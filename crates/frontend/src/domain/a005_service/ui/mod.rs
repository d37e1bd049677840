mod list;

pub use list::ServiceList;
