//! Network layer - the countries download
//!
//! The Network actor receives fetch commands and sends back progress and results.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
