use crate::error::{ErrorCode, ForgeError, Result};

use super::DiffResult;

/// Checks the reconstruction invariants: Unchanged+Removed span text must
/// concatenate to `original` and Unchanged+Added span text to `optimized`,
/// byte-for-byte. [`compute_diff`](super::compute_diff) guarantees both by
/// construction; delegate output must pass through here before use.
pub fn verify(original: &str, optimized: &str, diff: &DiffResult) -> Result<()> {
    let rebuilt = diff.reconstruct_original();
    if rebuilt != original {
        return Err(ForgeError::Diff {
            code: ErrorCode::MalformedDiff,
            message: format!(
                "Unchanged+Removed spans rebuild {} bytes, original has {}",
                rebuilt.len(),
                original.len()
            ),
            context: "original".to_string(),
        });
    }

    let rebuilt = diff.reconstruct_optimized();
    if rebuilt != optimized {
        return Err(ForgeError::Diff {
            code: ErrorCode::MalformedDiff,
            message: format!(
                "Unchanged+Added spans rebuild {} bytes, optimized has {}",
                rebuilt.len(),
                optimized.len()
            ),
            context: "optimized".to_string(),
        });
    }

    Ok(())
}
