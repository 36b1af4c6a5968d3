pub mod contributors;
pub mod export;
pub mod params;
pub mod predict;
pub mod series;
pub mod version;
pub mod versions;

use std::error::Error;

use gsm_core::to_canonical_json_bytes;
use serde::Serialize;

/// Prints `value` as one line of canonical JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
