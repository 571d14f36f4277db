//! Recursive JSON value-tree construction.
//!
//! Two mutually recursive builders (`build_object` / `build_array`) draw from
//! the seeded stream to pick slot counts, value kinds, string contents, and
//! recursion decisions. All bounds come from a shared [`GeneratorConfig`]
//! borrow; the builder itself owns only the stream, so every generation call
//! is independent of every other.
//!
//! Nesting is tracked as a depth counter starting at 0 for the root object.
//! Arrays may be entered while `depth <= max_recursion` and objects only
//! while `depth < max_recursion`, so no container ever sits deeper than
//! `max_recursion + 1` levels below the root. A slot whose drawn kind is
//! blocked by the depth guard is spent with nothing emitted.

use serde_json::{Map, Number, Value};

use crate::config::GeneratorConfig;
use crate::stream::SeededStream;

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

/// Alphabet for generated keys and string values.
const STRING_TABLE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789+/ ,.:;-_!@#$^&*\
                              ()){}'`~\"";

/// Only the first 65 table entries are ever sampled; widening the span would
/// change the output of every seed.
const STRING_SAMPLE_SPAN: u32 = 65;

/// Dampening draws above this bound force the slot to be redrawn.
const OBJECT_KEEP_BOUND: u64 = 250;

/// Per-level growth of the dampening modulus.
const DAMPENING_STEP: u64 = 50;

/// The five value kinds a slot can dispatch to, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Number,
    String,
    Array,
    Object,
    Null,
}

const VALUE_KINDS: [ValueKind; 5] = [
    ValueKind::Number,
    ValueKind::String,
    ValueKind::Array,
    ValueKind::Object,
    ValueKind::Null,
];

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub(crate) struct TreeBuilder<'a> {
    stream: SeededStream,
    config: &'a GeneratorConfig,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(seed: u32, config: &'a GeneratorConfig) -> Self {
        Self {
            stream: SeededStream::seed(seed),
            config,
        }
    }

    /// Build the document root: an object at nesting level 0.
    pub(crate) fn build_root(&mut self) -> Value {
        Value::Object(self.build_object(0))
    }

    fn draw_kind(&mut self) -> ValueKind {
        VALUE_KINDS[(self.stream.next_u32() % VALUE_KINDS.len() as u32) as usize]
    }

    /// Draw a string of `draw % max_len + 1` characters from the alphabet.
    ///
    /// The +1 keeps keys and string values non-empty. `max_len == 0` is
    /// treated as a zero-length draw rather than a division fault; the length
    /// draw is consumed either way.
    fn build_string(&mut self, max_len: u32) -> String {
        let len = self.stream.next_u32().checked_rem(max_len).unwrap_or(0);
        let mut out = String::with_capacity(len as usize + 1);
        for _ in 0..=len {
            let idx = self.stream.next_u32() % STRING_SAMPLE_SPAN;
            out.push(STRING_TABLE[idx as usize] as char);
        }
        out
    }

    /// One draw, used as-is as an integer value.
    fn build_number(&mut self) -> Value {
        Value::Number(Number::from(self.stream.next_u32()))
    }

    /// Depth dampening for nested objects.
    ///
    /// The modulus grows with depth, so the chance of a draw landing above
    /// the keep bound (forcing the slot to be redrawn) rises the deeper the
    /// builder already is. Below depth 5 the modulus never exceeds the bound
    /// and nested objects are always kept.
    fn reject_object(&mut self, depth: u32) -> bool {
        let modulus = (u64::from(depth) + 1) * DAMPENING_STEP;
        u64::from(self.stream.next_u32()) % modulus > OBJECT_KEEP_BOUND
    }

    fn build_object(&mut self, depth: u32) -> Map<String, Value> {
        let mut out = Map::new();
        // max_keys is validated nonzero before any builder runs.
        let slots = self.stream.next_u32() % self.config.max_keys;
        let mut filled = 0;
        while filled < slots {
            let key = self.build_string(self.config.max_string_len);
            match self.draw_kind() {
                ValueKind::Number => {
                    let n = self.build_number();
                    out.insert(key, n);
                }
                ValueKind::String => {
                    let v = self.build_string(self.config.max_string_len);
                    // Duplicate keys overwrite; last write wins.
                    out.insert(key, Value::String(v));
                }
                ValueKind::Null => {
                    out.insert(key, Value::Null);
                }
                ValueKind::Array => {
                    if depth <= self.config.max_recursion {
                        let items = self.build_array(depth + 1);
                        out.insert(key, Value::Array(items));
                    }
                }
                ValueKind::Object => {
                    if self.reject_object(depth) {
                        // Redraw the slot: nothing emitted, counter untouched.
                        continue;
                    }
                    if depth < self.config.max_recursion {
                        let child = self.build_object(depth + 1);
                        out.insert(key, Value::Object(child));
                    }
                }
            }
            filled += 1;
        }
        out
    }

    fn build_array(&mut self, depth: u32) -> Vec<Value> {
        let mut out = Vec::new();
        let slots = self
            .stream
            .next_u32()
            .checked_rem(self.config.max_array_len)
            .unwrap_or(0);
        let mut filled = 0;
        while filled < slots {
            match self.draw_kind() {
                ValueKind::Number => {
                    let n = self.build_number();
                    out.push(n);
                }
                ValueKind::String => {
                    let v = self.build_string(self.config.max_string_len);
                    out.push(Value::String(v));
                }
                ValueKind::Null => {
                    out.push(Value::Null);
                }
                ValueKind::Array => {
                    if depth <= self.config.max_recursion {
                        let items = self.build_array(depth + 1);
                        out.push(Value::Array(items));
                    }
                }
                ValueKind::Object => {
                    if self.reject_object(depth) {
                        continue;
                    }
                    if depth < self.config.max_recursion {
                        let child = self.build_object(depth + 1);
                        out.push(Value::Object(child));
                    }
                }
            }
            filled += 1;
        }
        out
    }
}
