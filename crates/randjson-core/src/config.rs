//! Generation bounds configuration.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Shape and size bounds for one generated document.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `max-recursion`, `max-keys`)
/// so a config can be stored next to the fixtures it produced and fed back in
/// later. Missing fields fall back to the defaults.
///
/// A config is read-only for the duration of a generation call and may be
/// reused across any number of calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorConfig {
    /// Maximum nesting depth of containers. 0 permits only flat containers.
    pub max_recursion: u32,
    /// Exclusive upper bound on array element count. 0 yields empty arrays.
    pub max_array_len: u32,
    /// Exclusive upper bound on drawn string length. Generated strings are
    /// never empty, so the effective range is `[1, max(max_string_len, 1)]`.
    pub max_string_len: u32,
    /// Exclusive upper bound on per-object key slots. Must be nonzero.
    pub max_keys: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_recursion: 5,
            max_array_len: 9,
            max_string_len: 8,
            max_keys: 8,
        }
    }
}

impl GeneratorConfig {
    /// Check the bounds for internal consistency.
    ///
    /// `max_keys` participates as a modulus on every object, so zero is a
    /// fatal configuration error rather than a degenerate bound. All other
    /// fields tolerate zero.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.max_keys == 0 {
            return Err(GenerateError::InvalidConfiguration {
                message: "max-keys must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}
