/*
[INPUT]:  Required parameter names and their values
[OUTPUT]: RequiredParameter errors for absent or blank values
[POS]:    Validation layer - pre-flight checks before any request is built
[UPDATE]: When the notion of an absent value changes
*/

use crate::http::{BinanceError, Result};
use crate::types::ParamValue;

/// Fail with `RequiredParameter` when `value` is an empty string or list.
///
/// Whitespace-only strings are passed through for the server to judge.
/// Has no side effects; callers check parameters in declaration order so the
/// first missing one is the one reported.
pub fn require_param(name: &str, value: &ParamValue) -> Result<()> {
    if value.is_blank() {
        return Err(BinanceError::required(name));
    }
    Ok(())
}
