mod list;

pub use list::ZoneList;
