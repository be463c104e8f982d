//! Bitap fuzzy matching: locate a pattern inside a text near an expected
//! position, tolerating errors in proportion to how close the match is.

use std::collections::HashMap;

use crate::{
    DiffMatch,
    error::DiffError,
    utils::find_subslice::{find_subslice, rfind_subslice},
};

impl DiffMatch {
    /// Locate the occurrence of `pattern` in `text` that best matches
    /// around `loc`, or `None` when nothing scores within
    /// [`match_threshold`](DiffMatch::match_threshold).
    ///
    /// Fails when the pattern is longer than
    /// [`match_max_bits`](DiffMatch::match_max_bits) and no exact
    /// occurrence sits at `loc` already.
    pub fn match_main(
        &self,
        text: &str,
        pattern: &str,
        loc: usize,
    ) -> Result<Option<usize>, DiffError> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        let loc = loc.min(text.len());
        if text == pattern {
            return Ok(Some(0));
        }
        if text.is_empty() {
            return Ok(None);
        }
        if text.get(loc..loc + pattern.len()) == Some(pattern.as_slice()) {
            // An exact match exactly where expected.
            return Ok(Some(loc));
        }
        self.bitap(&text, &pattern, loc)
    }

    /// Shift-or search allowing up to `pattern.len() - 1` errors, scored
    /// by error count and distance from `loc`.
    fn bitap(
        &self,
        text: &[char],
        pattern: &[char],
        loc: usize,
    ) -> Result<Option<usize>, DiffError> {
        if pattern.len() > self.match_max_bits {
            return Err(DiffError::PatternTooLong {
                length: pattern.len(),
                max_bits: self.match_max_bits,
            });
        }
        debug_assert!(!pattern.is_empty(), "empty patterns match trivially");

        let alphabet = alphabet(pattern);

        // Exact hits near `loc` tighten the acceptable score before any
        // error level runs.
        let mut score_threshold = self.match_threshold;
        if let Some(found) = find_subslice(&text[loc..], pattern).map(|offset| loc + offset) {
            score_threshold = self
                .bitap_score(0, found, loc, pattern.len())
                .min(score_threshold);
            if let Some(found) = rfind_subslice(text, pattern, loc + pattern.len()) {
                score_threshold = self
                    .bitap_score(0, found, loc, pattern.len())
                    .min(score_threshold);
            }
        }

        // A set top bit marks a full pattern match starting at that spot.
        let match_mask = 1_u64 << (pattern.len() - 1);
        let mut best_loc: Option<usize> = None;
        let mut bin_max = pattern.len() + text.len();
        let mut last_rd: Vec<u64> = Vec::new();
        for d in 0..pattern.len() {
            // Binary-search the widest window around `loc` that could
            // still beat the threshold at this error level. The upper
            // bound carries over: windows only shrink as errors grow.
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if self.bitap_score(d, loc + bin_mid, loc, pattern.len()) <= score_threshold {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            bin_max = bin_mid;

            let mut start = 1.max(loc.saturating_sub(bin_mid) + 1);
            let finish = (loc + bin_mid).min(text.len()) + pattern.len();
            let mut rd = vec![0_u64; finish + 2];
            rd[finish + 1] = (1 << d) - 1;
            let mut j = finish;
            while j >= start {
                let char_match = if j <= text.len() {
                    alphabet.get(&text[j - 1]).copied().unwrap_or(0)
                } else {
                    // Out of range: no character matches.
                    0
                };
                rd[j] = if d == 0 {
                    // Exact matches only.
                    ((rd[j + 1] << 1) | 1) & char_match
                } else {
                    // Also consider substitutions, insertions, deletions.
                    (((rd[j + 1] << 1) | 1) & char_match)
                        | (((last_rd_at(&last_rd, j + 1) | last_rd_at(&last_rd, j)) << 1) | 1)
                        | last_rd_at(&last_rd, j + 1)
                };
                if rd[j] & match_mask != 0 {
                    let score = self.bitap_score(d, j - 1, loc, pattern.len());
                    if score <= score_threshold {
                        score_threshold = score;
                        best_loc = Some(j - 1);
                        if j - 1 > loc {
                            // Sweep on towards `loc`: anything nearer
                            // scores better still.
                            start = 1.max((2 * loc).saturating_sub(j - 1));
                        } else {
                            // Already past `loc`; nothing ahead can beat
                            // this.
                            break;
                        }
                    }
                }
                j -= 1;
            }
            if self.bitap_score(d + 1, loc, loc, pattern.len()) > score_threshold {
                // Even a perfectly placed match cannot win at the next
                // error level.
                break;
            }
            last_rd = rd;
        }
        Ok(best_loc)
    }

    /// Score a match at `x` with `errors` errors: 0.0 is exact and in
    /// place, anything above the threshold is discarded. Lower is better.
    fn bitap_score(&self, errors: usize, x: usize, loc: usize, pattern_len: usize) -> f64 {
        let accuracy = errors as f64 / pattern_len as f64;
        let proximity = loc.abs_diff(x);
        if self.match_distance == 0 {
            // Any drift is fatal without a distance to weigh it against.
            if proximity > 0 { 1.0 } else { accuracy }
        } else {
            accuracy + proximity as f64 / self.match_distance as f64
        }
    }
}

/// Bitmask per pattern character: bit `len - 1 - i` marks an occurrence
/// at position `i`.
fn alphabet(pattern: &[char]) -> HashMap<char, u64> {
    let mut masks = HashMap::with_capacity(pattern.len());
    for (i, &character) in pattern.iter().enumerate() {
        *masks.entry(character).or_insert(0) |= 1 << (pattern.len() - i - 1);
    }
    masks
}

fn last_rd_at(last_rd: &[u64], index: usize) -> u64 {
    last_rd.get(index).copied().unwrap_or(0)
}
