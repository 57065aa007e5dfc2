//! Whitespace section - rejects candidates containing a space.

use secrecy::{ExposeSecret, SecretString};

use super::{SectionResult, ValidationError};
use crate::policy::Policy;

/// Checks that the candidate does not contain the space character.
///
/// Only U+0020 is rejected; tabs and other whitespace pass.
pub fn whitespace_section(candidate: &SecretString, _policy: &Policy) -> SectionResult {
    if candidate.expose_secret().contains(' ') {
        return Err(ValidationError::Whitespace);
    }
    Ok(())
}
