use std::time::Duration;

/// Tuning knobs for diffing and fuzzy matching, and the handle all
/// operations hang off. The defaults are good for diffing prose; callers
/// with unusual inputs can adjust individual fields.
///
/// A `DiffMatch` is a plain value: it holds no state between calls and can
/// be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffMatch {
    /// Wall-clock budget for computing a diff. When the budget runs out
    /// the engine settles for a valid but possibly non-minimal result.
    /// `None` removes the limit and also disables the half-match speedup,
    /// so unlimited runs stay minimal.
    pub diff_timeout: Option<Duration>,

    /// Cost of an empty edit operation in terms of edit characters,
    /// steering the efficiency cleanup: equalities shorter than this are
    /// candidates for folding into the edits around them.
    pub diff_edit_cost: usize,

    /// At what score a fuzzy match is no longer reported. 0.0 accepts
    /// exact matches only, 1.0 is very loose.
    pub match_threshold: f64,

    /// How far from the expected location a match may stray, in
    /// characters. Being `match_distance` characters away costs a full
    /// point of score; 0 demands matches at the expected location.
    pub match_distance: usize,

    /// Width of the matcher's bit vectors and therefore the longest
    /// pattern it accepts. Must not exceed 64.
    pub match_max_bits: usize,
}

impl Default for DiffMatch {
    fn default() -> Self {
        Self {
            diff_timeout: Some(Duration::from_secs(1)),
            diff_edit_cost: 4,
            match_threshold: 0.5,
            match_distance: 1000,
            match_max_bits: 32,
        }
    }
}

impl DiffMatch {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
