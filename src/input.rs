use std::fs::File;
use std::io::{self, BufReader};

use serde::Deserialize;

use crate::index::PairIndex;

///The input document as produced by the external index-build stage.
///`pair_to_names` deserializes straight into the map the match phase
///consults, so the index is never copied.
#[derive(Deserialize)]
pub struct RawInput {
    ///Every name in the corpus, whitespace-tokenizable, duplicates allowed
    pub all_names: Vec<String>,

    ///Equivalence closure per token, as determined upstream. The engine
    ///does not assume the relation is symmetric or reflexive.
    pub word_to_matches: std::collections::HashMap<String, Vec<String>>,

    ///Inverted index from canonical pair-keys to the names containing that
    ///token pair after expansion
    pub pair_to_names: PairIndex,
}

///Read and parse the input JSON. Malformed JSON and missing fields are
///fatal; the parse error is surfaced as an InvalidData io error.
pub fn read_input(path: &str) -> Result<RawInput, io::Error> {
    let f = File::open(path)?;
    let reader = BufReader::new(f);
    serde_json::from_reader(reader)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
