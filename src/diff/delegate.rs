use crate::error::Result;

use super::{verify, DiffResult, DiffSpan};

/// An alternative alignment source, typically a model-backed differ,
/// whose output cannot be trusted to cover both inputs.
pub trait DiffDelegate {
    fn diff(&self, original: &str, optimized: &str) -> Result<Vec<DiffSpan>>;
}

/// Runs `delegate` and accepts its spans only if they satisfy the
/// reconstruction invariants. Adjacent same-kind spans and empty spans
/// are normalized away first; a sequence that does not rebuild both
/// inputs exactly is rejected with `ErrorCode::MalformedDiff`. Callers
/// that want a guaranteed result should fall back to
/// [`compute_diff`](super::compute_diff), which is total.
pub fn verified_diff<D: DiffDelegate>(
    delegate: &D,
    original: &str,
    optimized: &str,
) -> Result<DiffResult> {
    let spans = delegate.diff(original, optimized)?;
    let result = DiffResult::from_spans(spans);
    verify(original, optimized, &result)?;
    Ok(result)
}
