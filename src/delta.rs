//! Compact wire encoding of a diff script against a known source text:
//! `=n` copies n characters, `-n` deletes n characters and `+text` inserts
//! text, tab-separated, with inserted text percent-encoded.

use std::fmt::Write;

use crate::{
    diff::{Diff, Op},
    error::DiffError,
};

/// Characters the encoder leaves bare besides ASCII alphanumerics. Spaces
/// stay readable instead of turning into `%20`.
const SAFE_CHARS: &str = " !#$&'()*+,-./:;=?@_~";

/// Encode a script as a delta string. Because equalities and deletions are
/// stored as bare lengths, the delta only makes sense together with the
/// source text it was computed from.
#[must_use]
pub fn to_delta(diffs: &[Diff]) -> String {
    let mut tokens = Vec::with_capacity(diffs.len());
    for diff in diffs {
        match diff.op {
            Op::Insert => tokens.push(format!("+{}", percent_encode(&diff.text))),
            Op::Delete => tokens.push(format!("-{}", diff.len())),
            Op::Equal => tokens.push(format!("={}", diff.len())),
        }
    }
    tokens.join("\t")
}

/// Rebuild the full script from the source text and a delta produced by
/// [`to_delta`].
///
/// The delta must consume the source text exactly; anything else is
/// rejected rather than patched over.
pub fn from_delta(text1: &str, delta: &str) -> Result<Vec<Diff>, DiffError> {
    let text1: Vec<char> = text1.chars().collect();
    let mut diffs = Vec::new();
    // Cursor into text1, counting consumed characters.
    let mut pointer = 0;
    for token in delta.split('\t') {
        let Some(op) = token.chars().next() else {
            // Blank tokens are ok, e.g. from a trailing tab.
            continue;
        };
        let param = &token[op.len_utf8()..];
        match op {
            '+' => {
                let text = percent_decode(param).ok_or_else(|| DiffError::InvalidEscape {
                    token: param.to_owned(),
                })?;
                if !text.is_empty() {
                    diffs.push(Diff::new(Op::Insert, &text));
                }
            }
            '=' | '-' => {
                let length: usize = param.parse().map_err(|_| DiffError::InvalidLength {
                    token: param.to_owned(),
                })?;
                if pointer + length > text1.len() {
                    return Err(DiffError::DeltaLengthMismatch {
                        consumed: pointer + length,
                        expected: text1.len(),
                    });
                }
                let text = &text1[pointer..pointer + length];
                pointer += length;
                if length > 0 {
                    let op = if op == '=' { Op::Equal } else { Op::Delete };
                    diffs.push(Diff::from_chars(op, text));
                }
            }
            other => return Err(DiffError::InvalidOperation { op: other }),
        }
    }
    if pointer != text1.len() {
        return Err(DiffError::DeltaLengthMismatch {
            consumed: pointer,
            expected: text1.len(),
        });
    }
    Ok(diffs)
}

fn percent_encode(text: &[char]) -> String {
    let mut encoded = String::with_capacity(text.len());
    for &character in text {
        if character.is_ascii_alphanumeric() || SAFE_CHARS.contains(character) {
            encoded.push(character);
        } else {
            let mut buffer = [0_u8; 4];
            for byte in character.encode_utf8(&mut buffer).bytes() {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

fn percent_decode(text: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut characters = text.chars();
    while let Some(character) = characters.next() {
        if character == '%' {
            let high = characters.next()?.to_digit(16)?;
            let low = characters.next()?.to_digit(16)?;
            bytes.push((high * 16 + low) as u8);
        } else {
            let mut buffer = [0_u8; 4];
            bytes.extend_from_slice(character.encode_utf8(&mut buffer).as_bytes());
        }
    }
    String::from_utf8(bytes).ok()
}
