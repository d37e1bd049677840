pub mod aggregate;

pub use aggregate::{Checkpoint, CheckpointDto};
