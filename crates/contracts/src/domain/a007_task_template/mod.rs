pub mod aggregate;

pub use aggregate::{LocationMode, TaskTemplate};
