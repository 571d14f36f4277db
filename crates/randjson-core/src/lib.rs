//! Deterministic pseudo-random JSON documents for parser fuzzing.
//!
//! Given a numeric seed and a set of size/shape bounds, [`generate`] produces
//! a syntactically valid JSON document whose structure (object nesting, array
//! lengths, key counts, value type mix) is randomized but bounded and fully
//! reproducible: the same `(seed, config)` pair always yields byte-identical
//! output, on every platform.
//!
//! The document model and serializer are `serde_json`; this crate only
//! decides what tree to build.
//!
//! ```rust
//! use randjson_core::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let doc = generate(42, &config).unwrap();
//! let reparsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
//! assert!(reparsed.is_object());
//! ```

pub mod config;
pub mod error;
pub mod stream;

mod builder;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use stream::SeededStream;

use serde_json::Value;

use builder::TreeBuilder;

/// Generate one JSON document as compact text.
///
/// The configuration is validated before the stream is seeded or anything is
/// allocated, so an invalid config never produces partial output.
///
/// # Errors
///
/// [`GenerateError::InvalidConfiguration`] if `config.max_keys == 0`.
pub fn generate(seed: u32, config: &GeneratorConfig) -> Result<String, GenerateError> {
    Ok(generate_value(seed, config)?.to_string())
}

/// Generate one JSON document as a [`serde_json::Value`] tree.
///
/// The root is always an object. Use this instead of [`generate`] when the
/// caller wants to pretty-print or post-process the document rather than
/// take the compact text.
///
/// # Errors
///
/// [`GenerateError::InvalidConfiguration`] if `config.max_keys == 0`.
pub fn generate_value(seed: u32, config: &GeneratorConfig) -> Result<Value, GenerateError> {
    config.validate()?;
    tracing::debug!(seed, "generating document");
    let mut builder = TreeBuilder::new(seed, config);
    Ok(builder.build_root())
}
