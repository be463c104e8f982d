use std::collections::HashMap;
use std::time::Instant;

use super::{
    cleanup::cleanup_semantic,
    segment::{Diff, Op},
};
use crate::DiffMatch;

/// Line ids the first text may claim; the rest of the id space belongs to
/// the second text.
const FIRST_TEXT_MAX_LINES: usize = 40_000;
/// Bound on the whole line table. Past either bound the remainder of the
/// current text coalesces into one synthetic line so the diff terminates.
const MAX_LINES: usize = 65_535;

impl DiffMatch {
    /// Diff at line granularity first, then re-diff only the changed
    /// regions character by character. Trades a little accuracy for a lot
    /// of speed on large texts.
    pub(crate) fn diff_line_mode(
        &self,
        text1: &[char],
        text2: &[char],
        deadline: Option<Instant>,
    ) -> Vec<Diff> {
        let mut lines = LineTable::new();
        let encoded1 = lines.encode(text1, FIRST_TEXT_MAX_LINES);
        let encoded2 = lines.encode(text2, MAX_LINES);

        let mut diffs = self.diff_slices(&encoded1, &encoded2, false, deadline);
        lines.rehydrate(&mut diffs);
        cleanup_semantic(&mut diffs);

        // Walk the script, gathering runs of deletions and insertions,
        // and replace each mixed run with a character-level diff.
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
                }
                Op::Delete => {
                    count_delete += 1;
                    text_delete.extend_from_slice(&diffs[pointer].text);
                }
                Op::Equal => {
                    if count_delete >= 1 && count_insert >= 1 {
                        let replacement =
                            self.diff_slices(&text_delete, &text_insert, false, deadline);
                        let start = pointer - count_delete - count_insert;
                        pointer = start + replacement.len();
                        diffs.splice(start..start + count_delete + count_insert, replacement);
                    }
                    count_insert = 0;
                    count_delete = 0;
                    text_delete.clear();
                    text_insert.clear();
                }
            }
            pointer += 1;
        }
        diffs.pop();
        diffs
    }
}

/// Interning table that maps whole lines to single characters, so large
/// texts can run through the character engine line-by-line.
struct LineTable {
    lines: Vec<Vec<char>>,
    ids: HashMap<Vec<char>, usize>,
}

impl LineTable {
    fn new() -> Self {
        Self {
            // Id 0 stays reserved so real lines start at 1.
            lines: vec![Vec::new()],
            ids: HashMap::new(),
        }
    }

    /// Encode each line of `text` as one character, interning unseen
    /// lines until the table holds `max_lines` entries; past that the
    /// rest of the text becomes a single synthetic line.
    fn encode(&mut self, text: &[char], max_lines: usize) -> Vec<char> {
        let mut encoded = Vec::new();
        let mut line_start = 0;
        while line_start < text.len() {
            let mut line_end = text[line_start..]
                .iter()
                .position(|&c| c == '\n')
                .map_or(text.len() - 1, |newline| line_start + newline);
            let mut line = &text[line_start..=line_end];
            if let Some(&id) = self.ids.get(line) {
                encoded.push(id_to_char(id));
            } else {
                if self.lines.len() == max_lines {
                    line = &text[line_start..];
                    line_end = text.len() - 1;
                }
                let id = self.lines.len();
                self.lines.push(line.to_vec());
                self.ids.insert(line.to_vec(), id);
                encoded.push(id_to_char(id));
            }
            line_start = line_end + 1;
        }
        encoded
    }

    /// Replace each encoded character with the line it stands for.
    fn rehydrate(&self, diffs: &mut [Diff]) {
        for diff in diffs {
            let mut text = Vec::new();
            for &encoded in &diff.text {
                text.extend_from_slice(&self.lines[char_to_id(encoded)]);
            }
            diff.text = text;
        }
    }
}

/// Line ids double as characters. Ids falling into the UTF-16 surrogate
/// gap shift past it, since those scalar values are not `char`s.
fn id_to_char(id: usize) -> char {
    let value = if id >= 0xD800 { id + 0x800 } else { id };
    char::from_u32(value as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn char_to_id(encoded: char) -> usize {
    let value = encoded as usize;
    if value >= 0xE000 { value - 0x800 } else { value }
}
