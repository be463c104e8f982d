mod bisect;
mod cleanup;
mod half_match;
mod line_mode;
mod script;
mod segment;

use std::time::Instant;

pub use cleanup::{cleanup_merge, cleanup_semantic, cleanup_semantic_lossless};
pub use script::{levenshtein, source_text, target_text, x_index};
pub use segment::{Diff, Op};

use crate::{
    DiffMatch,
    utils::{
        common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len,
        find_subslice::find_subslice,
    },
};

impl DiffMatch {
    /// Find the differences between two texts, as a script of segments
    /// that turns `text1` into `text2`.
    ///
    /// With `check_lines` set, texts over 100 characters are first diffed
    /// line-by-line and only the changed regions re-diffed by character,
    /// trading a little accuracy for a lot of speed on large inputs.
    ///
    /// ```
    /// use diffmatch::{Diff, DiffMatch};
    ///
    /// let dm = DiffMatch::new();
    /// assert_eq!(
    ///     dm.diff_main("The cat", "The big cat", true),
    ///     vec![Diff::equal("The "), Diff::insert("big "), Diff::equal("cat")],
    /// );
    /// ```
    #[must_use]
    pub fn diff_main(&self, text1: &str, text2: &str, check_lines: bool) -> Vec<Diff> {
        let deadline = self.diff_timeout.map(|timeout| Instant::now() + timeout);
        let text1: Vec<char> = text1.chars().collect();
        let text2: Vec<char> = text2.chars().collect();
        self.diff_slices(&text1, &text2, check_lines, deadline)
    }

    /// Diff over character slices; every recursion funnels through here.
    pub(crate) fn diff_slices(
        &self,
        text1: &[char],
        text2: &[char],
        check_lines: bool,
        deadline: Option<Instant>,
    ) -> Vec<Diff> {
        if text1 == text2 {
            if text1.is_empty() {
                return Vec::new();
            }
            return vec![Diff::from_chars(Op::Equal, text1)];
        }

        // Peel the common prefix and suffix, diff the middle, reattach.
        let prefix = common_prefix_len(text1, text2);
        let suffix = common_suffix_len(&text1[prefix..], &text2[prefix..]);
        let middle1 = &text1[prefix..text1.len() - suffix];
        let middle2 = &text2[prefix..text2.len() - suffix];

        let mut diffs = self.diff_compute(middle1, middle2, check_lines, deadline);
        if prefix > 0 {
            diffs.insert(0, Diff::from_chars(Op::Equal, &text1[..prefix]));
        }
        if suffix > 0 {
            diffs.push(Diff::from_chars(Op::Equal, &text1[text1.len() - suffix..]));
        }
        cleanup_merge(&mut diffs);
        diffs
    }

    /// Diff a pair with no common prefix or suffix, applying the first
    /// shortcut that fits before falling back to the full bisection.
    fn diff_compute(
        &self,
        text1: &[char],
        text2: &[char],
        check_lines: bool,
        deadline: Option<Instant>,
    ) -> Vec<Diff> {
        if text1.is_empty() {
            return vec![Diff::from_chars(Op::Insert, text2)];
        }
        if text2.is_empty() {
            return vec![Diff::from_chars(Op::Delete, text1)];
        }

        let (long, short) = if text1.len() > text2.len() {
            (text1, text2)
        } else {
            (text2, text1)
        };
        if let Some(start) = find_subslice(long, short) {
            // The shorter text sits whole inside the longer one.
            let op = if text1.len() > text2.len() {
                Op::Delete
            } else {
                Op::Insert
            };
            let mut diffs = Vec::with_capacity(3);
            if start > 0 {
                diffs.push(Diff::from_chars(op, &long[..start]));
            }
            diffs.push(Diff::from_chars(Op::Equal, short));
            if start + short.len() < long.len() {
                diffs.push(Diff::from_chars(op, &long[start + short.len()..]));
            }
            return diffs;
        }
        if short.len() == 1 {
            // A single character that is not contained cannot be shared.
            return vec![
                Diff::from_chars(Op::Delete, text1),
                Diff::from_chars(Op::Insert, text2),
            ];
        }

        if let Some(half) = self.half_match(text1, text2) {
            // A common middle at least half the longer text splits the
            // problem for free.
            let mut diffs = self.diff_slices(half.prefix1, half.prefix2, check_lines, deadline);
            diffs.push(Diff::from_chars(Op::Equal, half.common));
            diffs.extend(self.diff_slices(half.suffix1, half.suffix2, check_lines, deadline));
            return diffs;
        }

        if check_lines && text1.len() > 100 && text2.len() > 100 {
            return self.diff_line_mode(text1, text2, deadline);
        }

        self.diff_bisect(text1, text2, deadline)
    }
}
