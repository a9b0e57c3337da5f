//! Wire data model of the service registry.
//!
//! Field names are wire-exact; empty strings and absent nested objects are
//! omitted from the JSON output.

pub mod errors;
pub mod person;
pub mod seed;
pub mod service;

pub use person::{Address, PersonRecord};
pub use service::{ServiceDetails, ServiceRecord};

/// Accepts `null` where a string is expected and reads it as "".
pub(crate) fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}
