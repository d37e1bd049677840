mod list;

pub use list::CheckpointList;
