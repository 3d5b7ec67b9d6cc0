//! Value generators for the domains of the bundled instances.
//!
//! Numeric generators are bounded so that sums and products of three
//! sampled values stay inside `i64`; unbounded samples would trip
//! overflow checks rather than exercise the laws.
use std::collections::HashMap;
use std::hash::Hash;

use proptest::collection;
use proptest::option;
use proptest::prelude::*;

/// Any `bool`.
pub fn booleans() -> impl Strategy<Value = bool> {
    any::<bool>()
}

/// Short arbitrary (unicode) strings, empty included.
pub fn strings() -> impl Strategy<Value = String> {
    ".{0,12}"
}

/// Integers whose pairwise and triple sums fit in `i64`.
pub fn addends() -> impl Strategy<Value = i64> {
    -(1i64 << 40)..=(1i64 << 40)
}

/// Integers whose triple products fit in `i64`.
pub fn factors() -> impl Strategy<Value = i64> {
    -(1i64 << 20)..=(1i64 << 20)
}

/// Any `i64`; for instances that never do arithmetic (`min`, `max`).
pub fn integers() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// `None` or a value from `inner`.
pub fn optional<S>(inner: S) -> impl Strategy<Value = Option<S::Value>>
where
    S: Strategy,
{
    option::of(inner)
}

/// Maps with up to eight entries.
///
/// Keep the key space small so that generated maps share keys and
/// the value-combining path gets exercised.
pub fn mappings<K, V>(
    keys: K,
    values: V,
) -> impl Strategy<Value = HashMap<K::Value, V::Value>>
where
    K: Strategy,
    K::Value: Hash + Eq,
    V: Strategy,
{
    collection::hash_map(keys, values, 0..8)
}

/// String-keyed maps over a five-letter key space with string values.
pub fn string_maps() -> impl Strategy<Value = HashMap<String, String>> {
    mappings("[a-e]", strings())
}

/// Sequences of up to 32 values.
pub fn sequences<S>(elem: S) -> impl Strategy<Value = Vec<S::Value>>
where
    S: Strategy,
{
    collection::vec(elem, 0..32)
}
