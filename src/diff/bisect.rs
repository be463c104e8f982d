use std::time::Instant;

use super::segment::{Diff, Op};
use crate::DiffMatch;

impl DiffMatch {
    /// Find the middle snake of an optimal edit path by running Myers'
    /// algorithm from both corners of the edit graph at once, then split
    /// there and diff the two halves.
    ///
    /// When the deadline passes mid-search the whole pair degenerates to
    /// one deletion plus one insertion, which is valid but not minimal.
    pub(crate) fn diff_bisect(
        &self,
        text1: &[char],
        text2: &[char],
        deadline: Option<Instant>,
    ) -> Vec<Diff> {
        let text1_len = text1.len() as isize;
        let text2_len = text2.len() as isize;
        let max_d = (text1_len + text2_len + 1) / 2;
        let v_offset = max_d;
        // For each diagonal k, the furthest x reached on it so far; -1
        // marks diagonals not walked yet.
        let v_len = (2 * max_d) as usize + 2;
        let mut v1 = vec![-1_isize; v_len];
        let mut v2 = vec![-1_isize; v_len];
        v1[(v_offset + 1) as usize] = 0;
        v2[(v_offset + 1) as usize] = 0;
        let delta = text1_len - text2_len;
        // With an odd delta the paths can only meet during a forward step,
        // with an even delta only during a reverse step.
        let front = delta % 2 != 0;
        // The k ranges shrink as walks fall off the edges of the graph.
        let mut k1_start = 0_isize;
        let mut k1_end = 0_isize;
        let mut k2_start = 0_isize;
        let mut k2_end = 0_isize;
        for d in 0..max_d {
            if deadline.is_some_and(|deadline| Instant::now() > deadline) {
                break;
            }

            let mut k1 = -d + k1_start;
            while k1 <= d - k1_end {
                let k1_offset = (v_offset + k1) as usize;
                let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                    v1[k1_offset + 1]
                } else {
                    v1[k1_offset - 1] + 1
                };
                let mut y1 = x1 - k1;
                while x1 < text1_len
                    && y1 < text2_len
                    && text1[x1 as usize] == text2[y1 as usize]
                {
                    x1 += 1;
                    y1 += 1;
                }
                v1[k1_offset] = x1;
                if x1 > text1_len {
                    // Ran off the right of the graph.
                    k1_end += 2;
                } else if y1 > text2_len {
                    // Ran off the bottom of the graph.
                    k1_start += 2;
                } else if front {
                    let k2_offset = v_offset + delta - k1;
                    if k2_offset >= 0 && (k2_offset as usize) < v_len && v2[k2_offset as usize] != -1
                    {
                        // Mirror x2 onto the forward coordinate system.
                        let x2 = text1_len - v2[k2_offset as usize];
                        if x1 >= x2 {
                            // The paths overlap; split at this point.
                            return self.bisect_split(
                                text1,
                                text2,
                                x1 as usize,
                                y1 as usize,
                                deadline,
                            );
                        }
                    }
                }
                k1 += 2;
            }

            let mut k2 = -d + k2_start;
            while k2 <= d - k2_end {
                let k2_offset = (v_offset + k2) as usize;
                let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                    v2[k2_offset + 1]
                } else {
                    v2[k2_offset - 1] + 1
                };
                let mut y2 = x2 - k2;
                while x2 < text1_len
                    && y2 < text2_len
                    && text1[(text1_len - x2 - 1) as usize] == text2[(text2_len - y2 - 1) as usize]
                {
                    x2 += 1;
                    y2 += 1;
                }
                v2[k2_offset] = x2;
                if x2 > text1_len {
                    k2_end += 2;
                } else if y2 > text2_len {
                    k2_start += 2;
                } else if !front {
                    let k1_offset = v_offset + delta - k2;
                    if k1_offset >= 0 && (k1_offset as usize) < v_len && v1[k1_offset as usize] != -1
                    {
                        let x1 = v1[k1_offset as usize];
                        let y1 = v_offset + x1 - k1_offset;
                        let x2 = text1_len - x2;
                        if x1 >= x2 {
                            return self.bisect_split(
                                text1,
                                text2,
                                x1 as usize,
                                y1 as usize,
                                deadline,
                            );
                        }
                    }
                }
                k2 += 2;
            }
        }
        // The number of diffs equals the number of characters: no shared
        // character anywhere, or the deadline passed.
        vec![
            Diff::from_chars(Op::Delete, text1),
            Diff::from_chars(Op::Insert, text2),
        ]
    }

    /// Split the pair at the middle snake and diff each half.
    fn bisect_split(
        &self,
        text1: &[char],
        text2: &[char],
        x: usize,
        y: usize,
        deadline: Option<Instant>,
    ) -> Vec<Diff> {
        let (text1a, text1b) = text1.split_at(x);
        let (text2a, text2b) = text2.split_at(y);
        let mut diffs = self.diff_slices(text1a, text2a, false, deadline);
        diffs.extend(self.diff_slices(text1b, text2b, false, deadline));
        diffs
    }
}
