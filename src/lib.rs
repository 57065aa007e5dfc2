//! Password block checker library
//!
//! Validates a candidate password (length and spaces) and reports the
//! longest run of identical adjacent characters, with feedback on how much
//! to shorten it.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `cli` (default): Builds the `pwd-blocks` binary
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Implements `Serialize` for reports and policies
//!
//! # Environment Variables
//!
//! Read by [`Policy::from_env`]:
//!
//! - `PWD_BLOCKS_MIN_LENGTH` (default: 8)
//! - `PWD_BLOCKS_MAX_LENGTH` (default: 12)
//! - `PWD_BLOCKS_MAX_BLOCK` (default: 2)
//!
//! # Example
//!
//! ```rust
//! use pwd_blocks::{Feedback, analyze};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("aabbbcde".to_string().into());
//! let report = analyze(&password).expect("valid candidate");
//!
//! assert_eq!(report.run_length, 3);
//! assert_eq!(report.feedback, Feedback::ReduceBlock { by: 1 });
//! println!("{report}");
//! ```

// Internal modules
mod analyzer;
mod policy;
mod sections;

// Public API
pub use analyzer::{
    Analysis, BlockReport, Feedback, ValidCandidate, analyze, classify, validate,
};
pub use policy::{
    DEFAULT_MAX_BLOCK, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_BLOCK_VAR, MAX_LENGTH_VAR,
    MIN_LENGTH_VAR, Policy, PolicyError,
};
pub use sections::{ValidationError, longest_run};

#[cfg(feature = "async")]
pub use analyzer::{DEBOUNCE, analyze_tx};
