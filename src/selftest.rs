use crate::diff::{compute_diff, verify, DiffKind, DiffResult};
use crate::logger::Logger;

/// Run a battery of end-to-end diff checks:
/// - identity and empty inputs
/// - full replacement with no shared tokens
/// - pure addition inside a sentence
/// - whitespace-only change (newline vs double space)
/// - multiline prompt rewrite
///
/// Returns a markdown-ish log string ending in PASSED or FAILED.
pub fn run() -> String {
    let logger = Logger::with_generated_rid();

    let mut log = String::new();
    let mut pass = 0usize;
    let mut fail = 0usize;
    logln(&mut log, "🧪 **Diff Self-Test** starting…");

    check(&mut log, &mut pass, &mut fail, "identity", "Hello world", "Hello world", |d| {
        d.len() == 1 && d.spans()[0].kind == DiffKind::Unchanged
    });
    check(&mut log, &mut pass, &mut fail, "empty-to-empty", "", "", DiffResult::is_empty);
    check(&mut log, &mut pass, &mut fail, "pure addition", "", "Fresh prompt", |d| {
        d.len() == 1 && d.spans()[0].kind == DiffKind::Added
    });
    check(&mut log, &mut pass, &mut fail, "pure removal", "Old prompt", "", |d| {
        d.len() == 1 && d.spans()[0].kind == DiffKind::Removed
    });
    check(&mut log, &mut pass, &mut fail, "full replacement", "abc", "xyz", |d| {
        d.len() == 2
            && d.spans()[0].kind == DiffKind::Removed
            && d.spans()[1].kind == DiffKind::Added
    });
    check(
        &mut log,
        &mut pass,
        &mut fail,
        "insertion mid-sentence",
        "Hello world",
        "Hello brave world",
        |d| d.iter().filter(|s| s.kind == DiffKind::Added).count() == 1,
    );
    check(&mut log, &mut pass, &mut fail, "whitespace change survives", "a\nb", "a  b", |d| {
        d.iter().any(|s| s.kind == DiffKind::Removed && s.text == "\n")
    });
    check(
        &mut log,
        &mut pass,
        &mut fail,
        "multiline rewrite",
        "Write a poem.\nMake it short.",
        "Act as a poet.\nWrite a vivid poem.\nMake it short.",
        |_| true,
    );

    logger.info("selftest", "done", &format!("{pass} passed, {fail} failed"));
    logln(&mut log, format!("\n🧾 **Verification**: {pass} passed, {fail} failed"));
    if fail == 0 {
        logln(&mut log, "\n✅ **Self-Test PASSED**");
    } else {
        logln(&mut log, "\n❌ **Self-Test FAILED** — see details above");
    }

    log
}

/// Diffs one pair, verifies the reconstruction invariants and the
/// no-adjacent-same-kind rule, then applies the case-specific shape check.
fn check(
    log: &mut String,
    pass: &mut usize,
    fail: &mut usize,
    label: &str,
    original: &str,
    optimized: &str,
    shape: impl Fn(&DiffResult) -> bool,
) {
    let diff = compute_diff(original, optimized);

    if let Err(e) = verify(original, optimized, &diff) {
        *fail += 1;
        logln(log, format!("  ❌ {label}: {e}"));
        return;
    }
    if diff.spans().windows(2).any(|p| p[0].kind == p[1].kind) {
        *fail += 1;
        logln(log, format!("  ❌ {label}: adjacent spans share a kind"));
        return;
    }
    if !shape(&diff) {
        *fail += 1;
        logln(log, format!("  ❌ {label}: unexpected span shape: {:?}", diff.spans()));
        return;
    }

    *pass += 1;
    logln(log, format!("  ✓ {label}: OK ({} span(s))", diff.len()));
}

fn logln<S: Into<String>>(buf: &mut String, s: S) {
    if !buf.is_empty() && !buf.ends_with('\n') {
        buf.push('\n');
    }
    buf.push_str(&s.into());
}
