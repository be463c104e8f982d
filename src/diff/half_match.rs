use crate::{
    DiffMatch,
    utils::{
        common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len,
        find_subslice::find_subslice,
    },
};

/// A common substring at least half as long as the longer text, with the
/// pieces it splits the two texts into.
pub(crate) struct HalfMatch<'a> {
    pub prefix1: &'a [char],
    pub suffix1: &'a [char],
    pub prefix2: &'a [char],
    pub suffix2: &'a [char],
    pub common: &'a [char],
}

impl DiffMatch {
    /// Look for a common substring at least half the length of the longer
    /// text, usable as a free split point.
    ///
    /// Skipped when no time limit is set: the split trades minimality for
    /// speed, and an unlimited run is expected to be minimal.
    pub(crate) fn half_match<'a>(
        &self,
        text1: &'a [char],
        text2: &'a [char],
    ) -> Option<HalfMatch<'a>> {
        if self.diff_timeout.is_none() {
            return None;
        }

        let (long, short) = if text1.len() > text2.len() {
            (text1, text2)
        } else {
            (text2, text1)
        };
        if long.len() < 4 || short.len() * 2 < long.len() {
            // No half-length match can exist.
            return None;
        }

        // Probe the quarter and the midpoint: a half-length common
        // substring must fully contain at least one of the two seeds.
        let quarter = seed_match(long, short, long.len().div_ceil(4));
        let half = seed_match(long, short, long.len().div_ceil(2));
        let best = match (quarter, half) {
            (None, None) => return None,
            (Some(quarter), None) => quarter,
            (None, Some(half)) => half,
            (Some(quarter), Some(half)) => {
                if quarter.common.len() > half.common.len() {
                    quarter
                } else {
                    half
                }
            }
        };

        // Reorient from (long, short) back to (text1, text2).
        Some(if text1.len() > text2.len() {
            best
        } else {
            HalfMatch {
                prefix1: best.prefix2,
                suffix1: best.suffix2,
                prefix2: best.prefix1,
                suffix2: best.suffix1,
                common: best.common,
            }
        })
    }
}

/// Extend every occurrence of the seed at `long[i..]` within `short` by
/// its common affixes and keep the longest, accepting only extensions
/// covering at least half of `long`.
fn seed_match<'a>(long: &'a [char], short: &'a [char], i: usize) -> Option<HalfMatch<'a>> {
    let seed = &long[i..i + long.len() / 4];
    let mut best: Option<HalfMatch<'a>> = None;
    let mut best_common_len = 0;
    let mut j = 0;
    while let Some(offset) = find_subslice(&short[j..], seed) {
        let position = j + offset;
        let prefix_len = common_prefix_len(&long[i..], &short[position..]);
        let suffix_len = common_suffix_len(&long[..i], &short[..position]);
        if best_common_len < suffix_len + prefix_len {
            best_common_len = suffix_len + prefix_len;
            best = Some(HalfMatch {
                prefix1: &long[..i - suffix_len],
                suffix1: &long[i + prefix_len..],
                prefix2: &short[..position - suffix_len],
                suffix2: &short[position + prefix_len..],
                common: &short[position - suffix_len..position + prefix_len],
            });
        }
        j = position + 1;
    }
    if best_common_len * 2 >= long.len() {
        best
    } else {
        None
    }
}
