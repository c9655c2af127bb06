//! Change-detection fingerprint
//!
//! The generated file starts with `//[STAMP] <hash>`. The hash covers the
//! generator version, every public method of every configured module, the
//! module configuration and the decorator list, so an unchanged stamp means
//! the file does not need to be rebuilt. It is order sensitive on purpose.

use crate::error::GenerateError;
use crate::settings::ModulesConfig;
use indexmap::IndexMap;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Version marker mixed into every fingerprint
pub const GENERATOR_VERSION: &str = concat!("mixin-weld/", env!("CARGO_PKG_VERSION"));

const STAMP_MARKER: &str = "[STAMP] ";

#[derive(Serialize)]
struct FingerprintInput<'a> {
    version: &'a str,
    actions: &'a IndexMap<String, Vec<String>>,
    modules: &'a ModulesConfig,
    step_decorators: String,
}

/// Compute the fingerprint of a module inventory and its configuration
pub fn fingerprint(
    inventory: &IndexMap<String, Vec<String>>,
    modules: &ModulesConfig,
    step_decorators: &[String],
) -> Result<String, GenerateError> {
    fingerprint_with_version(GENERATOR_VERSION, inventory, modules, step_decorators)
}

pub(crate) fn fingerprint_with_version(
    version: &str,
    inventory: &IndexMap<String, Vec<String>>,
    modules: &ModulesConfig,
    step_decorators: &[String],
) -> Result<String, GenerateError> {
    let input = FingerprintInput {
        version,
        actions: inventory,
        modules,
        step_decorators: step_decorators.join(","),
    };
    digest_json(&input)
}

/// SHA-256 hex digest of the JSON encoding of `value`
fn digest_json<T: Serialize>(value: &T) -> Result<String, GenerateError> {
    let payload =
        serde_json::to_vec(value).map_err(|e| GenerateError::Fingerprint(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(&payload);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Extract the stamp from the first line of a generated file
pub fn read_stamp(source: &str) -> Option<&str> {
    let first_line = source.lines().next()?;
    let start = first_line.find(STAMP_MARKER)? + STAMP_MARKER.len();
    let rest = &first_line[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(rest.len());

    Some(&rest[..end]).filter(|stamp| !stamp.is_empty())
}

/// Whether an existing generated file carries the expected stamp
pub fn is_up_to_date(existing: &str, expected: &str) -> bool {
    read_stamp(existing) == Some(expected)
}
