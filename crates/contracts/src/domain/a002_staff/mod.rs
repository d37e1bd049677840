pub mod aggregate;
pub mod location_history;
pub mod selection;

pub use aggregate::{Staff, StaffDto};
