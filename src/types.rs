use std::collections::HashMap;

///Each distinct token gets assigned an ID integer, carries no further meaning
pub type WordId = u32;

///Generation stamp used by the presence buffer
pub type Generation = u64;

///Hasher used for all maps and sets consulted on the hot path
pub type FastHash = ahash::RandomState;

///A name as an ordered sequence of token ids (duplicates preserved)
pub type WordList = Vec<WordId>;

///Equivalence closure per token: the exact set of ids to stamp when the
///token is present. An absent key means only the token itself is equivalent.
pub type WordMatches = HashMap<WordId, WordList, FastHash>;

///Probe-side expansion per token: identical to WordMatches for multi-byte
///tokens, the identity singleton for initials.
pub type Tradeouts = HashMap<WordId, WordList, FastHash>;
