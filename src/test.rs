use std::collections::HashMap;

use crate::index::pair_key;
use crate::input::RawInput;
use crate::types::*;

///Equivalence groups for the test corpus: the classic nickname clusters
///plus a reflexive singleton entry for every other token that occurs.
pub const MATCH_GROUPS: &[&[&str]] = &[
    &["william", "bill"],
    &["robert", "bob", "bobby"],
    &["charles", "charlie"],
    &["john"],
    &["c"],
    &["w"],
    &["weymouth"],
    &["james"],
    &["jean"],
    &["jeanette"],
];

pub fn get_test_matches() -> HashMap<String, Vec<String>> {
    let mut table = HashMap::new();
    for group in MATCH_GROUPS {
        for word in group.iter() {
            table.insert(
                word.to_string(),
                group.iter().map(|w| w.to_string()).collect(),
            );
        }
    }
    table
}

pub fn get_test_names() -> Vec<String> {
    [
        "john c weymouth",
        "charles weymouth",
        "bobby weymouth",
        "robert w",
        "charlie weymouth",
        "charlie james c weymouth",
        "charlie james",
        "charlie c w",
        "weymouth jean",
        "weymouth jeanette",
    ]
    .iter()
    .map(|n| n.to_string())
    .collect()
}

///Replicates the external index-build stage over a small corpus: expand
///every token position through the equivalence table (initials excluded)
///and register the name under every canonical pair-key.
pub fn build_test_pair_index(
    names: &[String],
    word_to_matches: &HashMap<String, Vec<String>>,
) -> crate::index::PairIndex {
    let mut index: crate::index::PairIndex = HashMap::with_hasher(FastHash::new());
    for name in names {
        let tokens: Vec<&str> = name.split_ascii_whitespace().collect();
        let mut options: Vec<Vec<&str>> = Vec::new();
        for &token in tokens.iter() {
            let mut opts: Vec<&str> = vec![token];
            if token.len() > 1 {
                if let Some(matches) = word_to_matches.get(token) {
                    opts.extend(matches.iter().map(|m| m.as_str()));
                }
            }
            opts.sort_unstable();
            opts.dedup();
            options.push(opts);
        }
        for i in 0..options.len() {
            for j in (i + 1)..options.len() {
                for a in options[i].iter() {
                    for b in options[j].iter() {
                        let entry = index.entry(pair_key(a, b)).or_insert_with(Vec::new);
                        if !entry.iter().any(|n| n == name) {
                            entry.push(name.clone());
                        }
                    }
                }
            }
        }
    }
    index
}

///The full fixture document, as the driver would have parsed it from JSON
pub fn get_test_input() -> RawInput {
    let names = get_test_names();
    let word_to_matches = get_test_matches();
    let pair_to_names = build_test_pair_index(&names, &word_to_matches);
    RawInput {
        all_names: names,
        word_to_matches,
        pair_to_names,
    }
}

///Same document with extra names appended (still indexed)
pub fn get_test_input_with(extra: &[&str]) -> RawInput {
    let mut names = get_test_names();
    names.extend(extra.iter().map(|n| n.to_string()));
    let word_to_matches = get_test_matches();
    let pair_to_names = build_test_pair_index(&names, &word_to_matches);
    RawInput {
        all_names: names,
        word_to_matches,
        pair_to_names,
    }
}
