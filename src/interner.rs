use std::collections::HashMap;

use crate::types::*;

///Maps every distinct token string to a dense integer id, in first-seen
///order, with reverse lookup. Built single-threaded before the workers
///start; never mutated afterwards.
#[derive(Default)]
pub struct Interner {
    ///Maps strings to ids
    encoder: HashMap<String, WordId, FastHash>,
    ///Maps ids (vector index) back to strings
    decoder: Vec<String>,
}

impl Interner {
    pub fn new() -> Interner {
        Interner::default()
    }

    pub fn with_capacity(capacity: usize) -> Interner {
        Interner {
            encoder: HashMap::with_capacity_and_hasher(capacity, FastHash::new()),
            decoder: Vec::with_capacity(capacity),
        }
    }

    ///Get the id for a token, assigning the next free one if it is new.
    ///Once assigned an id never changes and is never reused.
    pub fn id(&mut self, s: &str) -> WordId {
        if let Some(id) = self.encoder.get(s) {
            return *id;
        }
        let id = self.decoder.len() as WordId;
        self.decoder.push(s.to_string());
        self.encoder.insert(s.to_string(), id);
        id
    }

    ///Look up the id of a token without assigning one
    pub fn get(&self, s: &str) -> Option<WordId> {
        self.encoder.get(s).copied()
    }

    ///Resolve an id back to its token string
    pub fn str(&self, id: WordId) -> &str {
        self.decoder[id as usize].as_str()
    }

    ///The number of distinct tokens seen so far. This is also the size the
    ///presence buffers must be allocated at.
    pub fn len(&self) -> usize {
        self.decoder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoder.is_empty()
    }
}
