pub mod aggregate;

pub use aggregate::{Message, MessageFilter, MessageType};
