use std::collections::HashSet;

use crate::index::pair_key;
use crate::interner::Interner;
use crate::types::*;

///Separator between the two option lists in a position-pair dedup key.
///Never collides with a real id, a corpus overflowing u32 is out of scope.
const POSITION_SEPARATOR: WordId = WordId::MAX;

///Enumerates, for one name, the pair-keys under which the inverted index
///should be probed: every unordered position pair, expanded through the
///tradeout sets. Owns all its scratch so one instance can be reused across
///names by a single worker.
pub struct PairKeyBuilder {
    ///option set per token position, sorted and deduplicated by id
    options: Vec<WordList>,
    ///serialization scratch for the position-pair dedup key
    pos_key: WordList,
    ///position pairs already expanded for the current name
    seen_positions: HashSet<WordList, FastHash>,
    ///emitted keys, reused across names
    keys: Vec<String>,
}

impl PairKeyBuilder {
    pub fn new() -> PairKeyBuilder {
        PairKeyBuilder {
            options: Vec::new(),
            pos_key: Vec::new(),
            seen_positions: HashSet::with_hasher(FastHash::new()),
            keys: Vec::new(),
        }
    }

    ///Build the deduplicated pair-key sequence for one name given in id
    ///form. The returned slice is valid until the next call.
    pub fn build(
        &mut self,
        parts: &[WordId],
        tradeouts: &Tradeouts,
        interner: &Interner,
    ) -> &[String] {
        self.options.clear();
        self.seen_positions.clear();
        self.keys.clear();

        //option set per position: the token itself plus its tradeouts
        for word in parts {
            let mut opts: WordList = Vec::with_capacity(4);
            opts.push(*word);
            if let Some(replacements) = tradeouts.get(word) {
                opts.extend_from_slice(replacements);
            }
            opts.sort_unstable();
            opts.dedup();
            self.options.push(opts);
        }

        for i in 0..self.options.len() {
            for j in (i + 1)..self.options.len() {
                //two positions with identical expansion sets would generate
                //the exact same keys again (common with repeated initials),
                //so each unordered pair of option lists is expanded once
                let (first, second) = if self.options[i] <= self.options[j] {
                    (i, j)
                } else {
                    (j, i)
                };
                self.pos_key.clear();
                self.pos_key.extend_from_slice(&self.options[first]);
                self.pos_key.push(POSITION_SEPARATOR);
                self.pos_key.extend_from_slice(&self.options[second]);
                if self.seen_positions.contains(self.pos_key.as_slice()) {
                    continue;
                }
                self.seen_positions.insert(self.pos_key.clone());

                //the keys themselves are ordered by string value, not by id,
                //because that is how the index build ordered its keys
                for w_i in self.options[i].iter() {
                    for w_j in self.options[j].iter() {
                        self.keys
                            .push(pair_key(interner.str(*w_i), interner.str(*w_j)));
                    }
                }
            }
        }

        //overlapping option sets can still produce the same key from both
        //orientations of the product
        self.keys.sort_unstable();
        self.keys.dedup();
        &self.keys
    }
}

impl Default for PairKeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
