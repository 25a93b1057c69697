//! Plain text rendering for decoded runs.

use crate::model::Run;

/// Concatenate the plain text of runs in order.
///
/// Runs are inline content, so no separator is inserted between them.
pub fn to_text(runs: &[Run]) -> String {
    runs.iter().map(Run::plain_text).collect()
}
