#![deny(missing_docs)]
#![doc = "Shared error types, schema descriptors and canonical serialization helpers for the GSM toolkit."]

pub mod errors;
pub mod hash;
pub mod provenance;
pub mod serde;

pub use errors::{ErrorInfo, GsmError};
pub use hash::stable_hash_string;
pub use provenance::SchemaVersion;
pub use serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_pretty_json_string};
