//! Expose the crate's diffing and matching to WebAssembly.

use wasm_bindgen::prelude::*;

use crate::DiffMatch;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

fn set_panic_hook() { console_error_panic_hook::set_once(); }

/// Wall clocks are unavailable on `wasm32-unknown-unknown`, so the diff
/// runs without a time budget.
fn diff_match() -> DiffMatch {
    DiffMatch {
        diff_timeout: None,
        ..DiffMatch::new()
    }
}

/// Compute a delta string describing how to turn `text1` into `text2`.
#[wasm_bindgen(js_name = diffDelta)]
#[must_use]
pub fn diff_delta(text1: &str, text2: &str) -> String {
    set_panic_hook();

    let mut diffs = diff_match().diff_main(text1, text2, true);
    crate::cleanup_semantic(&mut diffs);
    crate::to_delta(&diffs)
}

/// Apply a delta produced by [`diff_delta`] to the text it was computed
/// from.
#[wasm_bindgen(js_name = applyDelta)]
pub fn apply_delta(text1: &str, delta: &str) -> Result<String, JsError> {
    set_panic_hook();

    let diffs = crate::from_delta(text1, delta)?;
    Ok(crate::target_text(&diffs))
}

/// Locate `pattern` in `text` near `loc`; -1 when nothing matches well
/// enough.
#[wasm_bindgen(js_name = matchText)]
pub fn match_text(text: &str, pattern: &str, loc: usize) -> Result<i32, JsError> {
    set_panic_hook();

    let found = diff_match().match_main(text, pattern, loc)?;
    Ok(found.map_or(-1, |index| index as i32))
}
