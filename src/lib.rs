//! Character-level text differencing, fuzzy matching and delta encoding.
//!
//! The diff engine finds a minimal or near-minimal script of segments
//! turning one text into another: Myers' O(ND) bisection at its core,
//! wrapped in prefix/suffix peeling, half-match and line-mode speedups,
//! and cleanup passes that align the result to word and line boundaries
//! for human eyes or collapse it for machine efficiency. The matcher
//! locates a pattern near an expected position even after the text has
//! drifted, using Bitap with a proximity-weighted score. Scripts round
//! trip through a compact delta encoding.
//!
//! ```
//! use diffmatch::{Diff, DiffMatch};
//!
//! let dm = DiffMatch::new();
//! let diffs = dm.diff_main("The cat", "The big cat", true);
//! assert_eq!(
//!     diffs,
//!     vec![Diff::equal("The "), Diff::insert("big "), Diff::equal("cat")],
//! );
//!
//! let position = dm.match_main("The big cat", "cat", 4).unwrap();
//! assert_eq!(position, Some(8));
//! ```

mod config;
mod delta;
mod diff;
mod error;
mod matcher;
mod utils;

pub use config::DiffMatch;
pub use delta::{from_delta, to_delta};
pub use diff::{
    Diff, Op, cleanup_merge, cleanup_semantic, cleanup_semantic_lossless, levenshtein, source_text,
    target_text, x_index,
};
pub use error::DiffError;
pub use utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len};

#[cfg(feature = "wasm")]
pub mod wasm;
