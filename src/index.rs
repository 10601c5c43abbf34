use std::collections::HashMap;

use crate::types::*;

///The inverted index, mapping a canonical pair-key to all names containing
///that token pair. Keys stay strings rather than id pairs: they have to
///match byte-for-byte what the external index build emitted. Read-only
///during the match phase.
pub type PairIndex = HashMap<String, Vec<String>, FastHash>;

///Canonical pair-key for two token strings: the lexicographically smaller
///one first, joined with an underscore. Ordering is by string value, not by
///id, because that is how the index build ordered its keys.
pub fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{}_{}", a, b)
    } else {
        format!("{}_{}", b, a)
    }
}
