use crate::error::PatchError;
use crate::types::Edit;

/// Parse a diff list: a JSON array of `{"pos": ..., "bytes": [...]}` records.
///
/// Offsets are kept in their textual form here; resolution failures (and
/// bounds violations) surface from preflight or apply, so a structurally
/// valid list always parses.
pub fn parse_diff(content: &str) -> Result<Vec<Edit>, PatchError> {
    Ok(serde_json::from_str(content)?)
}
