extern crate ahash;
extern crate crossbeam_channel;
extern crate serde;
extern crate serde_json;
extern crate tempfile;

use std::collections::HashMap;

use log::info;

pub mod expand;
pub mod index;
pub mod input;
pub mod interner;
pub mod progress;
pub mod search;
pub mod test;
pub mod types;
pub mod validate;

pub use crate::expand::*;
pub use crate::index::*;
pub use crate::input::*;
pub use crate::interner::*;
pub use crate::search::*;
pub use crate::types::*;
pub use crate::validate::*;

///Everything the match phase needs, interned into one shared id space.
///Built once, single-threaded, then shared read-only by the workers.
pub struct MatchModel {
    ///The name stream in input order, duplicates preserved
    pub names: Vec<String>,

    ///Every distinct name mapped to its token id vector
    pub name_words: HashMap<String, WordList, FastHash>,

    ///Equivalence closure table in id space
    pub word_matches: WordMatches,

    ///Probe-side expansion table in id space
    pub tradeouts: Tradeouts,

    ///The prebuilt inverted index, still keyed by strings: its keys must
    ///match byte-for-byte what the pair-key builder emits
    pub pair_index: PairIndex,

    ///The id space shared by the name vectors and both tables
    pub interner: Interner,
}

impl MatchModel {
    ///Intern the raw input into id space. Consumes the raw document so its
    ///string-heavy parts are freed before matching starts.
    pub fn build(raw: RawInput) -> MatchModel {
        //the equivalence table keys roughly cover the token vocabulary
        let mut interner = Interner::with_capacity(raw.word_to_matches.len());

        let mut word_matches: WordMatches =
            HashMap::with_capacity_and_hasher(raw.word_to_matches.len(), FastHash::new());
        let mut tradeouts: Tradeouts =
            HashMap::with_capacity_and_hasher(raw.word_to_matches.len(), FastHash::new());
        for (word, matches) in raw.word_to_matches.iter() {
            let word_id = interner.id(word);
            let match_ids: WordList = matches.iter().map(|m| interner.id(m)).collect();
            //initials never expand on the probe side, they are too
            //promiscuous and would flood the index with useless keys
            if word.len() == 1 {
                tradeouts.insert(word_id, vec![word_id]);
            } else {
                tradeouts.insert(word_id, match_ids.clone());
            }
            word_matches.insert(word_id, match_ids);
        }

        //pre-tokenize every distinct name once
        let mut name_words: HashMap<String, WordList, FastHash> =
            HashMap::with_capacity_and_hasher(raw.all_names.len(), FastHash::new());
        for name in raw.all_names.iter() {
            if name_words.contains_key(name) {
                continue;
            }
            let ids: WordList = name
                .split_ascii_whitespace()
                .map(|part| interner.id(part))
                .collect();
            name_words.insert(name.clone(), ids);
        }

        info!(
            "Interned {} distinct tokens over {} names",
            interner.len(),
            name_words.len()
        );

        MatchModel {
            names: raw.all_names,
            name_words,
            word_matches,
            tradeouts,
            pair_index: raw.pair_to_names,
            interner,
        }
    }

    ///The id vector of a name, if the corpus contains it
    pub fn name_ids(&self, name: &str) -> Option<&[WordId]> {
        self.name_words.get(name).map(|ids| ids.as_slice())
    }
}
