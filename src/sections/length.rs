//! Length section - checks the candidate's character count.

use secrecy::{ExposeSecret, SecretString};

use super::{SectionResult, ValidationError};
use crate::policy::Policy;

/// Checks that the candidate has between `min_length` and `max_length`
/// characters, both inclusive.
///
/// Characters are Unicode scalar values, not bytes.
///
/// # Returns
/// - `Err(ValidationError::Length)` if the count is out of range
/// - `Ok(())` otherwise
pub fn length_section(candidate: &SecretString, policy: &Policy) -> SectionResult {
    let count = candidate.expose_secret().chars().count();
    if !(policy.min_length..=policy.max_length).contains(&count) {
        return Err(ValidationError::Length {
            min: policy.min_length,
            max: policy.max_length,
        });
    }
    Ok(())
}
