//! Password check sections
//!
//! Each section checks a single aspect of the candidate. The analyzer runs
//! the validation sections in order and stops at the first failure.

mod block;
mod length;
mod whitespace;

use thiserror::Error;

pub use block::longest_run;
pub use length::length_section;
pub use whitespace::whitespace_section;

/// Reason a candidate was rejected before analysis.
///
/// Both kinds are user-input errors: the caller is expected to re-prompt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Character count outside `[min, max]`.
    #[error("Password must be between {min} and {max} characters.")]
    Length { min: usize, max: usize },
    /// The candidate contains a space.
    #[error("Password cannot contain spaces.")]
    Whitespace,
}

/// Result type for validation sections.
///
/// Every section takes `(&SecretString, &Policy)` so the analyzer can run them
/// from one list, even when a check ignores the policy.
/// - `Ok(())` - Section passed
/// - `Err(reason)` - Candidate rejected
pub type SectionResult = Result<(), ValidationError>;
