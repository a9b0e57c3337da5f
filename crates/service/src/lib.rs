//! Service layer for the registry.
//! - `registry`: storage seam and the in-memory implementation.
//! - `services`: list/get/create/delete as exposed over HTTP.

pub mod errors;
pub mod registry;
pub mod services;
