//! Post-processing passes that rewrite a raw diff script: semantic
//! cleanup for human readability, efficiency cleanup for fewer
//! operations, and merge cleanup for canonical form.

use super::segment::{Diff, Op};
use crate::{
    DiffMatch,
    utils::{
        common_overlap_len::common_overlap_len, common_prefix_len::common_prefix_len,
        common_suffix_len::common_suffix_len,
    },
};

/// Reduce the number of edits by eliminating semantically trivial
/// equalities, then align the surviving edits to logical boundaries and
/// pull shared text out of adjacent delete/insert pairs.
pub fn cleanup_semantic(diffs: &mut Vec<Diff>) {
    let mut changes = false;
    // Indices of equalities seen so far; scanning rewinds to the top of
    // this stack after a split.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<Vec<char>> = None;
    // Edit sizes before and after the equality on top of the stack.
    let mut length_insertions1 = 0;
    let mut length_deletions1 = 0;
    let mut length_insertions2 = 0;
    let mut length_deletions2 = 0;
    let mut pointer: isize = 0;
    while pointer < diffs.len() as isize {
        let index = pointer as usize;
        if diffs[index].op == Op::Equal {
            equalities.push(index);
            length_insertions1 = length_insertions2;
            length_deletions1 = length_deletions2;
            length_insertions2 = 0;
            length_deletions2 = 0;
            last_equality = Some(diffs[index].text.clone());
        } else {
            if diffs[index].op == Op::Insert {
                length_insertions2 += diffs[index].len();
            } else {
                length_deletions2 += diffs[index].len();
            }
            // An equality is trivial when the edits on either side could
            // absorb it whole.
            let trivial = last_equality.as_ref().is_some_and(|equality| {
                equality.len() <= length_insertions1.max(length_deletions1)
                    && equality.len() <= length_insertions2.max(length_deletions2)
            });
            if trivial && !equalities.is_empty() {
                let split = equalities[equalities.len() - 1];
                // Replace the equality with its own delete + insert.
                diffs.insert(
                    split,
                    Diff {
                        op: Op::Delete,
                        text: last_equality.take().unwrap_or_default(),
                    },
                );
                diffs[split + 1].op = Op::Insert;
                // Throw away this equality and the one before it: the
                // previous one may now be trivial too.
                equalities.pop();
                equalities.pop();
                pointer = equalities.last().map_or(-1, |&top| top as isize);
                length_insertions1 = 0;
                length_deletions1 = 0;
                length_insertions2 = 0;
                length_deletions2 = 0;
                changes = true;
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge(diffs);
    }
    cleanup_semantic_lossless(diffs);

    // Extract overlaps between adjacent deletions and insertions:
    // <del>abcxxx</del><ins>xxxdef</ins> becomes
    // <del>abc</del><equal>xxx</equal><ins>def</ins>, and the reverse
    // orientation swaps the edits around the equality.
    let mut pointer = 1;
    while pointer < diffs.len() {
        if diffs[pointer - 1].op == Op::Delete && diffs[pointer].op == Op::Insert {
            let deletion = diffs[pointer - 1].text.clone();
            let insertion = diffs[pointer].text.clone();
            let overlap1 = common_overlap_len(&deletion, &insertion);
            let overlap2 = common_overlap_len(&insertion, &deletion);
            if overlap1 >= overlap2 {
                if overlap1 * 2 >= deletion.len() || overlap1 * 2 >= insertion.len() {
                    diffs.insert(
                        pointer,
                        Diff {
                            op: Op::Equal,
                            text: insertion[..overlap1].to_vec(),
                        },
                    );
                    diffs[pointer - 1].text = deletion[..deletion.len() - overlap1].to_vec();
                    diffs[pointer + 1].text = insertion[overlap1..].to_vec();
                    pointer += 1;
                }
            } else if overlap2 * 2 >= deletion.len() || overlap2 * 2 >= insertion.len() {
                diffs.insert(
                    pointer,
                    Diff {
                        op: Op::Equal,
                        text: deletion[..overlap2].to_vec(),
                    },
                );
                diffs[pointer - 1] = Diff {
                    op: Op::Insert,
                    text: insertion[..insertion.len() - overlap2].to_vec(),
                };
                diffs[pointer + 1] = Diff {
                    op: Op::Delete,
                    text: deletion[overlap2..].to_vec(),
                };
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Slide each edit that sits between two equalities sideways, looking for
/// the best-scoring logical boundary. The diff's content never changes,
/// only where the segment borders fall.
pub fn cleanup_semantic_lossless(diffs: &mut Vec<Diff>) {
    let mut pointer: isize = 1;
    while pointer < diffs.len() as isize - 1 {
        let index = pointer as usize;
        if diffs[index - 1].op == Op::Equal && diffs[index + 1].op == Op::Equal {
            let mut equality1 = diffs[index - 1].text.clone();
            let mut edit = diffs[index].text.clone();
            let mut equality2 = diffs[index + 1].text.clone();

            // First shift the edit as far left as it will go.
            let common_offset = common_suffix_len(&equality1, &edit);
            if common_offset > 0 {
                let common: Vec<char> = edit[edit.len() - common_offset..].to_vec();
                equality1.truncate(equality1.len() - common_offset);
                edit.truncate(edit.len() - common_offset);
                edit.splice(0..0, common.iter().copied());
                equality2.splice(0..0, common.iter().copied());
            }

            // Then step right one character at a time, keeping the best
            // boundary. Ties go right, so whitespace ends up trailing
            // rather than leading.
            let mut best_equality1 = equality1.clone();
            let mut best_edit = edit.clone();
            let mut best_equality2 = equality2.clone();
            let mut best_score =
                boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
            while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
                let character = edit[0];
                equality1.push(character);
                edit.remove(0);
                edit.push(character);
                equality2.remove(0);
                let score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
                if score >= best_score {
                    best_score = score;
                    best_equality1 = equality1.clone();
                    best_edit = edit.clone();
                    best_equality2 = equality2.clone();
                }
            }

            if diffs[index - 1].text != best_equality1 {
                // A better boundary exists; rewrite the three segments.
                if best_equality1.is_empty() {
                    diffs.remove(index - 1);
                    pointer -= 1;
                } else {
                    diffs[index - 1].text = best_equality1;
                }
                diffs[pointer as usize].text = best_edit;
                if best_equality2.is_empty() {
                    diffs.remove(pointer as usize + 1);
                    pointer -= 1;
                } else {
                    diffs[pointer as usize + 1].text = best_equality2;
                }
            }
        }
        pointer += 1;
    }
}

/// Score a boundary falling between `one` and `two` from 0 (inside a
/// word) to 6 (at a string edge), preferring blank lines over line ends
/// over sentence ends over whitespace over punctuation.
fn boundary_score(one: &[char], two: &[char]) -> u32 {
    let (Some(&char1), Some(&char2)) = (one.last(), two.first()) else {
        // Edges are the best boundaries of all.
        return 6;
    };
    let non_alphanumeric1 = !char1.is_ascii_alphanumeric();
    let non_alphanumeric2 = !char2.is_ascii_alphanumeric();
    let whitespace1 = non_alphanumeric1 && char1.is_whitespace();
    let whitespace2 = non_alphanumeric2 && char2.is_whitespace();
    let line_break1 = whitespace1 && matches!(char1, '\r' | '\n');
    let line_break2 = whitespace2 && matches!(char2, '\r' | '\n');
    let blank_line1 = line_break1 && ends_with_blank_line(one);
    let blank_line2 = line_break2 && starts_with_blank_line(two);

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alphanumeric1 && !whitespace1 && whitespace2 {
        // End of a sentence: punctuation followed by whitespace.
        3
    } else if whitespace1 || whitespace2 {
        2
    } else if non_alphanumeric1 || non_alphanumeric2 {
        1
    } else {
        0
    }
}

fn ends_with_blank_line(text: &[char]) -> bool {
    text.ends_with(&['\n', '\n']) || text.ends_with(&['\n', '\r', '\n'])
}

fn starts_with_blank_line(text: &[char]) -> bool {
    text.starts_with(&['\n', '\n'])
        || text.starts_with(&['\n', '\r', '\n'])
        || text.starts_with(&['\r', '\n', '\n'])
        || text.starts_with(&['\r', '\n', '\r', '\n'])
}

impl DiffMatch {
    /// Reduce the number of edits by folding equalities shorter than
    /// [`diff_edit_cost`](DiffMatch::diff_edit_cost) into the edits
    /// surrounding them, when keeping the equality would cost more
    /// operations than it saves.
    pub fn cleanup_efficiency(&self, diffs: &mut Vec<Diff>) {
        let mut changes = false;
        let mut equalities: Vec<usize> = Vec::new();
        let mut last_equality: Option<Vec<char>> = None;
        // Is there an insertion/deletion before and after the equality on
        // top of the stack?
        let mut pre_ins = false;
        let mut pre_del = false;
        let mut post_ins = false;
        let mut post_del = false;
        let mut pointer: isize = 0;
        while pointer < diffs.len() as isize {
            let index = pointer as usize;
            if diffs[index].op == Op::Equal {
                if diffs[index].len() < self.diff_edit_cost && (post_ins || post_del) {
                    // Candidate worth considering.
                    equalities.push(index);
                    pre_ins = post_ins;
                    pre_del = post_del;
                    last_equality = Some(diffs[index].text.clone());
                } else {
                    // Too long to fold; scanning never returns past here.
                    equalities.clear();
                    last_equality = None;
                }
                post_ins = false;
                post_del = false;
            } else {
                if diffs[index].op == Op::Delete {
                    post_del = true;
                } else {
                    post_ins = true;
                }
                // Splitting pays off when edits of both kinds flank the
                // equality, or when it is very short and three of the
                // four edit slots around it are taken.
                let fold = last_equality.as_ref().is_some_and(|equality| {
                    (pre_ins && pre_del && post_ins && post_del)
                        || (equality.len() * 2 < self.diff_edit_cost
                            && usize::from(pre_ins)
                                + usize::from(pre_del)
                                + usize::from(post_ins)
                                + usize::from(post_del)
                                == 3)
                });
                if fold && !equalities.is_empty() {
                    let split = equalities[equalities.len() - 1];
                    diffs.insert(
                        split,
                        Diff {
                            op: Op::Delete,
                            text: last_equality.take().unwrap_or_default(),
                        },
                    );
                    diffs[split + 1].op = Op::Insert;
                    equalities.pop();
                    if pre_ins && pre_del {
                        // Both sides already edited; keep scanning forward
                        // from here.
                        post_ins = true;
                        post_del = true;
                        equalities.clear();
                    } else {
                        // Rewind to the previous equality, which may have
                        // become foldable.
                        equalities.pop();
                        pointer = equalities.last().map_or(-1, |&top| top as isize);
                        post_ins = false;
                        post_del = false;
                    }
                    changes = true;
                }
            }
            pointer += 1;
        }

        if changes {
            cleanup_merge(diffs);
        }
    }
}

/// Normalize a script: merge runs of like operations, factor common
/// affixes out of mixed runs, join adjacent equalities and slide single
/// edits over neighbouring equalities. Guarantees the script invariants:
/// no empty segments and no two adjacent segments with the same
/// operation.
pub fn cleanup_merge(diffs: &mut Vec<Diff>) {
    loop {
        if diffs.is_empty() {
            return;
        }
        // Sentinel equality to flush the final run.
        diffs.push(Diff {
            op: Op::Equal,
            text: Vec::new(),
        });
        let mut pointer = 0;
        let mut count_delete = 0;
        let mut count_insert = 0;
        let mut text_delete: Vec<char> = Vec::new();
        let mut text_insert: Vec<char> = Vec::new();
        while pointer < diffs.len() {
            match diffs[pointer].op {
                Op::Insert => {
                    count_insert += 1;
                    text_insert.extend_from_slice(&diffs[pointer].text);
                    pointer += 1;
                }
                Op::Delete => {
                    count_delete += 1;
                    text_delete.extend_from_slice(&diffs[pointer].text);
                    pointer += 1;
                }
                Op::Equal => {
                    // Flush the run of edits gathered since the last
                    // equality.
                    if count_delete + count_insert > 1 {
                        if count_delete != 0 && count_insert != 0 {
                            // Factor out a common prefix.
                            let common = common_prefix_len(&text_insert, &text_delete);
                            if common > 0 {
                                let run_start = pointer - count_delete - count_insert;
                                if run_start > 0 && diffs[run_start - 1].op == Op::Equal {
                                    diffs[run_start - 1]
                                        .text
                                        .extend_from_slice(&text_insert[..common]);
                                } else {
                                    diffs.insert(
                                        0,
                                        Diff {
                                            op: Op::Equal,
                                            text: text_insert[..common].to_vec(),
                                        },
                                    );
                                    pointer += 1;
                                }
                                text_insert.drain(..common);
                                text_delete.drain(..common);
                            }
                            // Factor out a common suffix.
                            let common = common_suffix_len(&text_insert, &text_delete);
                            if common > 0 {
                                let mut text = text_insert[text_insert.len() - common..].to_vec();
                                text.append(&mut diffs[pointer].text);
                                diffs[pointer].text = text;
                                text_insert.truncate(text_insert.len() - common);
                                text_delete.truncate(text_delete.len() - common);
                            }
                        }
                        // Replace the run with its merged segments.
                        pointer -= count_delete + count_insert;
                        diffs.drain(pointer..pointer + count_delete + count_insert);
                        if !text_delete.is_empty() {
                            diffs.insert(
                                pointer,
                                Diff {
                                    op: Op::Delete,
                                    text: std::mem::take(&mut text_delete),
                                },
                            );
                            pointer += 1;
                        }
                        if !text_insert.is_empty() {
                            diffs.insert(
                                pointer,
                                Diff {
                                    op: Op::Insert,
                                    text: std::mem::take(&mut text_insert),
                                },
                            );
                            pointer += 1;
                        }
                        pointer += 1;
                    } else if pointer != 0 && diffs[pointer - 1].op == Op::Equal {
                        // Join this equality with the previous one.
                        let mut text = diffs.remove(pointer).text;
                        diffs[pointer - 1].text.append(&mut text);
                    } else {
                        pointer += 1;
                    }
                    count_insert = 0;
                    count_delete = 0;
                    text_delete.clear();
                    text_insert.clear();
                }
            }
        }
        if diffs.last().is_some_and(Diff::is_empty) {
            diffs.pop();
        }

        // Second pass: a single edit surrounded by equalities can
        // sometimes slide over one of them and free it for joining.
        let mut changes = false;
        let mut pointer = 1;
        while pointer + 1 < diffs.len() {
            if diffs[pointer - 1].op == Op::Equal && diffs[pointer + 1].op == Op::Equal {
                if diffs[pointer].text.ends_with(&diffs[pointer - 1].text) {
                    // Slide the edit left over the previous equality.
                    let previous = diffs[pointer - 1].text.clone();
                    let kept = diffs[pointer].text.len() - previous.len();
                    let mut shifted = previous.clone();
                    shifted.extend_from_slice(&diffs[pointer].text[..kept]);
                    diffs[pointer].text = shifted;
                    let mut next = previous;
                    next.append(&mut diffs[pointer + 1].text);
                    diffs[pointer + 1].text = next;
                    diffs.remove(pointer - 1);
                    changes = true;
                } else if diffs[pointer].text.starts_with(&diffs[pointer + 1].text) {
                    // Slide the edit right over the next equality.
                    let next = diffs[pointer + 1].text.clone();
                    diffs[pointer - 1].text.extend_from_slice(&next);
                    let mut shifted = diffs[pointer].text[next.len()..].to_vec();
                    shifted.extend_from_slice(&next);
                    diffs[pointer].text = shifted;
                    diffs.remove(pointer + 1);
                    changes = true;
                }
            }
            pointer += 1;
        }
        // A successful slide can expose further merges; run again until
        // the script settles.
        if !changes {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(segments: &[(Op, &str)]) -> Vec<Diff> {
        segments
            .iter()
            .map(|&(op, text)| Diff::new(op, text))
            .collect()
    }

    mod merge {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn test_null_case() {
            let mut diffs = vec![];
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, vec![]);
        }

        #[test]
        fn test_no_change() {
            let mut diffs = script(&[(Op::Equal, "a"), (Op::Delete, "b"), (Op::Insert, "c")]);
            cleanup_merge(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Equal, "a"), (Op::Delete, "b"), (Op::Insert, "c")]),
            );
        }

        #[test]
        fn test_merge_equalities() {
            let mut diffs = script(&[(Op::Equal, "a"), (Op::Equal, "b"), (Op::Equal, "c")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Equal, "abc")]));
        }

        #[test]
        fn test_merge_deletions() {
            let mut diffs = script(&[(Op::Delete, "a"), (Op::Delete, "b"), (Op::Delete, "c")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Delete, "abc")]));
        }

        #[test]
        fn test_merge_insertions() {
            let mut diffs = script(&[(Op::Insert, "a"), (Op::Insert, "b"), (Op::Insert, "c")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Insert, "abc")]));
        }

        #[test]
        fn test_merge_interweave() {
            let mut diffs = script(&[
                (Op::Delete, "a"),
                (Op::Insert, "b"),
                (Op::Delete, "c"),
                (Op::Insert, "d"),
                (Op::Equal, "e"),
                (Op::Equal, "f"),
            ]);
            cleanup_merge(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "ac"), (Op::Insert, "bd"), (Op::Equal, "ef")]),
            );
        }

        #[test]
        fn test_prefix_and_suffix_detection() {
            let mut diffs = script(&[
                (Op::Delete, "a"),
                (Op::Insert, "abc"),
                (Op::Delete, "dc"),
            ]);
            cleanup_merge(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "a"),
                    (Op::Delete, "d"),
                    (Op::Insert, "b"),
                    (Op::Equal, "c"),
                ]),
            );
        }

        #[test]
        fn test_prefix_and_suffix_detection_with_equalities() {
            let mut diffs = script(&[
                (Op::Equal, "x"),
                (Op::Delete, "a"),
                (Op::Insert, "abc"),
                (Op::Delete, "dc"),
                (Op::Equal, "y"),
            ]);
            cleanup_merge(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "xa"),
                    (Op::Delete, "d"),
                    (Op::Insert, "b"),
                    (Op::Equal, "cy"),
                ]),
            );
        }

        #[test]
        fn test_slide_edit_left() {
            let mut diffs = script(&[(Op::Equal, "a"), (Op::Insert, "ba"), (Op::Equal, "c")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Insert, "ab"), (Op::Equal, "ac")]));
        }

        #[test]
        fn test_slide_edit_right() {
            let mut diffs = script(&[(Op::Equal, "c"), (Op::Insert, "ab"), (Op::Equal, "a")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Equal, "ca"), (Op::Insert, "ba")]));
        }

        #[test]
        fn test_slide_edit_left_recursive() {
            let mut diffs = script(&[
                (Op::Equal, "a"),
                (Op::Delete, "b"),
                (Op::Equal, "c"),
                (Op::Delete, "ac"),
                (Op::Equal, "x"),
            ]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Delete, "abc"), (Op::Equal, "acx")]));
        }

        #[test]
        fn test_slide_edit_right_recursive() {
            let mut diffs = script(&[
                (Op::Equal, "x"),
                (Op::Delete, "ca"),
                (Op::Equal, "c"),
                (Op::Delete, "b"),
                (Op::Equal, "a"),
            ]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Equal, "xca"), (Op::Delete, "cba")]));
        }

        #[test]
        fn test_empty_merge() {
            let mut diffs = script(&[(Op::Delete, "b"), (Op::Insert, "ab"), (Op::Equal, "c")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Insert, "a"), (Op::Equal, "bc")]));
        }

        #[test]
        fn test_empty_equality() {
            let mut diffs = script(&[(Op::Equal, ""), (Op::Insert, "a"), (Op::Equal, "b")]);
            cleanup_merge(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Insert, "a"), (Op::Equal, "b")]));
        }
    }

    mod semantic {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn test_null_case() {
            let mut diffs = vec![];
            cleanup_semantic(&mut diffs);
            assert_eq!(diffs, vec![]);
        }

        #[test]
        fn test_no_elimination() {
            let mut diffs = script(&[
                (Op::Delete, "ab"),
                (Op::Insert, "cd"),
                (Op::Equal, "12"),
                (Op::Delete, "e"),
            ]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Delete, "ab"),
                    (Op::Insert, "cd"),
                    (Op::Equal, "12"),
                    (Op::Delete, "e"),
                ]),
            );

            let mut diffs = script(&[
                (Op::Delete, "abc"),
                (Op::Insert, "ABC"),
                (Op::Equal, "1234"),
                (Op::Delete, "wxyz"),
            ]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Delete, "abc"),
                    (Op::Insert, "ABC"),
                    (Op::Equal, "1234"),
                    (Op::Delete, "wxyz"),
                ]),
            );
        }

        #[test]
        fn test_simple_elimination() {
            let mut diffs = script(&[(Op::Delete, "a"), (Op::Equal, "b"), (Op::Delete, "c")]);
            cleanup_semantic(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Delete, "abc"), (Op::Insert, "b")]));
        }

        #[test]
        fn test_backpass_elimination() {
            let mut diffs = script(&[
                (Op::Delete, "ab"),
                (Op::Equal, "cd"),
                (Op::Delete, "e"),
                (Op::Equal, "f"),
                (Op::Insert, "g"),
            ]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "abcdef"), (Op::Insert, "cdfg")]),
            );
        }

        #[test]
        fn test_multiple_eliminations() {
            let mut diffs = script(&[
                (Op::Insert, "1"),
                (Op::Equal, "A"),
                (Op::Delete, "B"),
                (Op::Insert, "2"),
                (Op::Equal, "_"),
                (Op::Insert, "1"),
                (Op::Equal, "A"),
                (Op::Delete, "B"),
                (Op::Insert, "2"),
            ]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "AB_AB"), (Op::Insert, "1A2_1A2")]),
            );
        }

        #[test]
        fn test_word_boundaries() {
            let mut diffs = script(&[
                (Op::Equal, "The c"),
                (Op::Delete, "ow and the c"),
                (Op::Equal, "at."),
            ]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "The "),
                    (Op::Delete, "cow and the "),
                    (Op::Equal, "cat."),
                ]),
            );
        }

        #[test]
        fn test_no_overlap_elimination() {
            let mut diffs = script(&[(Op::Delete, "abcxx"), (Op::Insert, "xxdef")]);
            cleanup_semantic(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Delete, "abcxx"), (Op::Insert, "xxdef")]));
        }

        #[test]
        fn test_overlap_elimination() {
            let mut diffs = script(&[(Op::Delete, "abcxxx"), (Op::Insert, "xxxdef")]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "abc"), (Op::Equal, "xxx"), (Op::Insert, "def")]),
            );
        }

        #[test]
        fn test_reverse_overlap_elimination() {
            let mut diffs = script(&[(Op::Delete, "xxxabc"), (Op::Insert, "defxxx")]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Insert, "def"), (Op::Equal, "xxx"), (Op::Delete, "abc")]),
            );
        }

        #[test]
        fn test_two_overlap_eliminations() {
            let mut diffs = script(&[
                (Op::Delete, "abcd1212"),
                (Op::Insert, "1212efghi"),
                (Op::Equal, "----"),
                (Op::Delete, "A3"),
                (Op::Insert, "3BC"),
            ]);
            cleanup_semantic(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Delete, "abcd"),
                    (Op::Equal, "1212"),
                    (Op::Insert, "efghi"),
                    (Op::Equal, "----"),
                    (Op::Delete, "A"),
                    (Op::Equal, "3"),
                    (Op::Insert, "BC"),
                ]),
            );
        }
    }

    mod lossless {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn test_null_case() {
            let mut diffs = vec![];
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(diffs, vec![]);
        }

        #[test]
        fn test_blank_lines() {
            let mut diffs = script(&[
                (Op::Equal, "AAA\r\n\r\nBBB"),
                (Op::Insert, "\r\nDDD\r\n\r\nBBB"),
                (Op::Equal, "\r\nEEE"),
            ]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "AAA\r\n\r\n"),
                    (Op::Insert, "BBB\r\nDDD\r\n\r\n"),
                    (Op::Equal, "BBB\r\nEEE"),
                ]),
            );
        }

        #[test]
        fn test_line_boundaries() {
            let mut diffs = script(&[
                (Op::Equal, "AAA\r\nBBB"),
                (Op::Insert, " DDD\r\nBBB"),
                (Op::Equal, " EEE"),
            ]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "AAA\r\n"),
                    (Op::Insert, "BBB DDD\r\n"),
                    (Op::Equal, "BBB EEE"),
                ]),
            );
        }

        #[test]
        fn test_word_boundaries() {
            let mut diffs = script(&[
                (Op::Equal, "The c"),
                (Op::Insert, "ow and the c"),
                (Op::Equal, "at."),
            ]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "The "),
                    (Op::Insert, "cow and the "),
                    (Op::Equal, "cat."),
                ]),
            );
        }

        #[test]
        fn test_alphanumeric_boundaries() {
            let mut diffs = script(&[
                (Op::Equal, "The-c"),
                (Op::Insert, "ow-and-the-c"),
                (Op::Equal, "at."),
            ]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "The-"),
                    (Op::Insert, "cow-and-the-"),
                    (Op::Equal, "cat."),
                ]),
            );
        }

        #[test]
        fn test_hitting_the_start() {
            let mut diffs = script(&[(Op::Equal, "a"), (Op::Delete, "a"), (Op::Equal, "ax")]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Delete, "a"), (Op::Equal, "aax")]));
        }

        #[test]
        fn test_hitting_the_end() {
            let mut diffs = script(&[(Op::Equal, "xa"), (Op::Delete, "a"), (Op::Equal, "a")]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Equal, "xaa"), (Op::Delete, "a")]));
        }

        #[test]
        fn test_sentence_boundaries() {
            let mut diffs = script(&[
                (Op::Equal, "The xxx. The "),
                (Op::Insert, "zzz. The "),
                (Op::Equal, "yyy."),
            ]);
            cleanup_semantic_lossless(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Equal, "The xxx."),
                    (Op::Insert, " The zzz."),
                    (Op::Equal, " The yyy."),
                ]),
            );
        }
    }

    mod efficiency {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn test_null_case() {
            let dm = DiffMatch::new();
            let mut diffs = vec![];
            dm.cleanup_efficiency(&mut diffs);
            assert_eq!(diffs, vec![]);
        }

        #[test]
        fn test_no_elimination() {
            let dm = DiffMatch::new();
            let mut diffs = script(&[
                (Op::Delete, "ab"),
                (Op::Insert, "12"),
                (Op::Equal, "wxyz"),
                (Op::Delete, "cd"),
                (Op::Insert, "34"),
            ]);
            dm.cleanup_efficiency(&mut diffs);
            assert_eq!(
                diffs,
                script(&[
                    (Op::Delete, "ab"),
                    (Op::Insert, "12"),
                    (Op::Equal, "wxyz"),
                    (Op::Delete, "cd"),
                    (Op::Insert, "34"),
                ]),
            );
        }

        #[test]
        fn test_four_edit_elimination() {
            let dm = DiffMatch::new();
            let mut diffs = script(&[
                (Op::Delete, "ab"),
                (Op::Insert, "12"),
                (Op::Equal, "xyz"),
                (Op::Delete, "cd"),
                (Op::Insert, "34"),
            ]);
            dm.cleanup_efficiency(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "abxyzcd"), (Op::Insert, "12xyz34")]),
            );
        }

        #[test]
        fn test_three_edit_elimination() {
            let dm = DiffMatch::new();
            let mut diffs = script(&[
                (Op::Insert, "12"),
                (Op::Equal, "x"),
                (Op::Delete, "cd"),
                (Op::Insert, "34"),
            ]);
            dm.cleanup_efficiency(&mut diffs);
            assert_eq!(diffs, script(&[(Op::Delete, "xcd"), (Op::Insert, "12x34")]));
        }

        #[test]
        fn test_backpass_elimination() {
            let dm = DiffMatch::new();
            let mut diffs = script(&[
                (Op::Delete, "ab"),
                (Op::Insert, "12"),
                (Op::Equal, "xy"),
                (Op::Insert, "34"),
                (Op::Equal, "z"),
                (Op::Delete, "cd"),
                (Op::Insert, "56"),
            ]);
            dm.cleanup_efficiency(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "abxyzcd"), (Op::Insert, "12xy34z56")]),
            );
        }

        #[test]
        fn test_high_cost_elimination() {
            let dm = DiffMatch {
                diff_edit_cost: 5,
                ..DiffMatch::new()
            };
            let mut diffs = script(&[
                (Op::Delete, "ab"),
                (Op::Insert, "12"),
                (Op::Equal, "wxyz"),
                (Op::Delete, "cd"),
                (Op::Insert, "34"),
            ]);
            dm.cleanup_efficiency(&mut diffs);
            assert_eq!(
                diffs,
                script(&[(Op::Delete, "abwxyzcd"), (Op::Insert, "12wxyz34")]),
            );
        }
    }
}
