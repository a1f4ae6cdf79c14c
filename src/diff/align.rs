use similar::{capture_diff_slices, Algorithm, DiffOp, DiffTag};

use super::{DiffKind, DiffSpan};

/// Walks a Myers alignment over the token slices and emits classified
/// spans. Replace ops contribute their removed run before their added
/// run, and adjacent same-kind runs are merged as they are pushed.
pub(super) fn spans_from_tokens(old: &[&str], new: &[&str]) -> Vec<DiffSpan> {
    let ops: Vec<DiffOp> = capture_diff_slices(Algorithm::Myers, old, new);

    let mut spans: Vec<DiffSpan> = Vec::new();
    for op in ops {
        match op.tag() {
            DiffTag::Equal => push_run(&mut spans, DiffKind::Unchanged, &old[op.old_range()]),
            DiffTag::Delete => push_run(&mut spans, DiffKind::Removed, &old[op.old_range()]),
            DiffTag::Insert => push_run(&mut spans, DiffKind::Added, &new[op.new_range()]),
            DiffTag::Replace => {
                push_run(&mut spans, DiffKind::Removed, &old[op.old_range()]);
                push_run(&mut spans, DiffKind::Added, &new[op.new_range()]);
            }
        }
    }
    spans
}

fn push_run(spans: &mut Vec<DiffSpan>, kind: DiffKind, tokens: &[&str]) {
    if tokens.is_empty() {
        return;
    }
    let text = tokens.concat();
    match spans.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(&text),
        _ => spans.push(DiffSpan { kind, text }),
    }
}
