pub mod aggregate;

pub use aggregate::LocationZone;
