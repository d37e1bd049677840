pub mod aggregate;
pub mod week;

pub use aggregate::{ShiftEntry, ShiftMap, ShiftTemplate};
