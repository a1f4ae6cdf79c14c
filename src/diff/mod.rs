use serde::{Deserialize, Serialize};

mod align;
mod delegate;
mod tokenize;
mod verify;

pub use delegate::{verified_diff, DiffDelegate};
pub use tokenize::tokenize;
pub use verify::verify;

/// Classification of one contiguous run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffKind {
    #[serde(rename = "unchanged")]
    Unchanged,
    #[serde(rename = "addition")]
    Added,
    #[serde(rename = "deletion")]
    Removed,
}

/// A maximal run of text sharing one classification. `text` is the exact
/// substring, internal whitespace and line breaks included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    pub kind: DiffKind,
    pub text: String,
}

/// Ordered span sequence covering both input texts completely:
/// Unchanged+Removed spans concatenate to the original, Unchanged+Added
/// spans concatenate to the optimized text, and no two adjacent spans
/// share a kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffResult {
    spans: Vec<DiffSpan>,
}

impl DiffResult {
    /// Builds a result from raw spans, dropping empty spans and merging
    /// adjacent same-kind runs. Used to normalize delegate output; spans
    /// produced by [`compute_diff`] are already in this form.
    #[must_use]
    pub fn from_spans(spans: Vec<DiffSpan>) -> Self {
        let mut merged: Vec<DiffSpan> = Vec::with_capacity(spans.len());
        for span in spans {
            if span.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.kind == span.kind => last.text.push_str(&span.text),
                _ => merged.push(span),
            }
        }
        DiffResult { spans: merged }
    }

    pub fn spans(&self) -> &[DiffSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffSpan> {
        self.spans.iter()
    }

    /// Concatenates Unchanged and Removed span text, in order.
    #[must_use]
    pub fn reconstruct_original(&self) -> String {
        self.concat_kinds(DiffKind::Unchanged, DiffKind::Removed)
    }

    /// Concatenates Unchanged and Added span text, in order.
    #[must_use]
    pub fn reconstruct_optimized(&self) -> String {
        self.concat_kinds(DiffKind::Unchanged, DiffKind::Added)
    }

    fn concat_kinds(&self, a: DiffKind, b: DiffKind) -> String {
        self.spans
            .iter()
            .filter(|s| s.kind == a || s.kind == b)
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffSpan;
    type IntoIter = std::slice::Iter<'a, DiffSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Computes a word-level diff between two texts.
///
/// Total, pure, and deterministic: both inputs are split into maximal
/// word / whitespace-run tokens, aligned with Myers edit distance, and
/// the alignment is walked into maximal classified spans. Whitespace is
/// carried as real token content, so a line break changed to a space
/// shows up as a Removed/Added pair rather than being normalized away.
#[must_use]
pub fn compute_diff(original: &str, optimized: &str) -> DiffResult {
    let old = tokenize::tokenize(original);
    let new = tokenize::tokenize(optimized);
    let result = DiffResult {
        spans: align::spans_from_tokens(&old, &new),
    };
    debug_assert!(
        verify::verify(original, optimized, &result).is_ok(),
        "alignment must reconstruct both inputs"
    );
    result
}
