//! Property-based sweep of the generator.
//!
//! Properties under test:
//! 1. determinism: `generate(s, c) == generate(s, c)` for arbitrary inputs
//! 2. validity: output parses as JSON with an object root
//! 3. boundedness: emitted pair count stays under `max_keys`

use proptest::prelude::*;
use randjson_core::{generate, generate_value, GeneratorConfig};

/// Arbitrary configs over small bounds, including the degenerate zeros for
/// everything except `max_keys`.
fn arb_config() -> impl Strategy<Value = GeneratorConfig> {
    (0u32..4, 0u32..6, 0u32..6, 1u32..6).prop_map(
        |(max_recursion, max_array_len, max_string_len, max_keys)| GeneratorConfig {
            max_recursion,
            max_array_len,
            max_string_len,
            max_keys,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..Default::default() })]

    #[test]
    fn generation_is_deterministic(seed in any::<u32>(), config in arb_config()) {
        prop_assert_eq!(
            generate(seed, &config).unwrap(),
            generate(seed, &config).unwrap()
        );
    }

    #[test]
    fn output_parses_with_object_root(seed in any::<u32>(), config in arb_config()) {
        let text = generate(seed, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        prop_assert!(value.is_object());
    }

    #[test]
    fn emitted_pairs_stay_under_max_keys(seed in any::<u32>(), config in arb_config()) {
        let value = generate_value(seed, &config).unwrap();
        let root = value.as_object().unwrap();
        prop_assert!((root.len() as u32) < config.max_keys);
    }
}
