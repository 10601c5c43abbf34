use crate::types::*;

///Per-worker scratch for the match predicate: one u64 stamp per token id.
///A cell counts as marked only if it holds the current phase's generation
///value, so the buffer never has to be cleared between candidates. Each
///call burns two generations, one per phase, which keeps phase 1 marks
///from being misread during phase 2 and keeps older calls from aliasing.
pub struct PresenceBuffer {
    stamps: Vec<Generation>,
    gen: Generation,
}

impl PresenceBuffer {
    ///`size` must cover every assigned token id, i.e. the interner length.
    ///The generation counter starts above zero so the freshly zeroed
    ///buffer can never read as marked.
    pub fn new(size: usize) -> PresenceBuffer {
        PresenceBuffer {
            stamps: vec![0; size],
            gen: 10,
        }
    }

    ///Stamp the equivalence closure of every token of `closure_of` with
    ///`gen`, then count the distinct tokens of `probe` left unstamped.
    fn mismatches(
        &mut self,
        probe: &[WordId],
        closure_of: &[WordId],
        word_matches: &WordMatches,
        gen: Generation,
    ) -> usize {
        for word in closure_of {
            match word_matches.get(word) {
                Some(matches) => {
                    for m in matches {
                        if let Some(cell) = self.stamps.get_mut(*m as usize) {
                            *cell = gen;
                        }
                    }
                }
                //an absent entry means only the token itself is equivalent
                None => {
                    if let Some(cell) = self.stamps.get_mut(*word as usize) {
                        *cell = gen;
                    }
                }
            }
        }

        let mut mismatches = 0;
        for (i, word) in probe.iter().enumerate() {
            //naive intra-name dedup, names are a handful of tokens
            if probe[..i].contains(word) {
                continue;
            }
            if self
                .stamps
                .get(*word as usize)
                .map_or(true, |stamp| *stamp != gen)
            {
                mismatches += 1;
            }
        }
        mismatches
    }

    ///The match predicate: do the two names agree on enough tokens under
    ///the equivalence relation? Runs in O(|a|+|b|) with zero allocations.
    pub fn validate(&mut self, a: &[WordId], b: &[WordId], word_matches: &WordMatches) -> bool {
        self.gen += 2;
        let mismatches_a = self.mismatches(a, b, word_matches, self.gen);
        let mismatches_b = self.mismatches(b, a, word_matches, self.gen + 1);

        let len_a = a.len();
        let len_b = b.len();

        //a three-token name paired against another name of three or more
        //tokens must have all three of its own tokens matched
        if len_b == 3 && mismatches_b > 0 && len_a >= 3 {
            return false;
        }
        if len_a == 3 && mismatches_a > 0 && len_b >= 3 {
            return false;
        }

        //both names must share at least two distinct tokens
        len_a - mismatches_a >= 2 && len_b - mismatches_b >= 2
    }
}
