//! Domain crate of the workforce portal: entities, the key-value storage
//! abstraction, access control and the page logic that does not need a
//! browser.

pub mod dashboards;
pub mod domain;
pub mod reports;
pub mod shared;
pub mod system;
pub mod usecases;
