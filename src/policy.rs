//! Policy configuration module
//!
//! Holds the product rules applied to every candidate and loads overrides
//! from the environment.

use thiserror::Error;

/// Default minimum number of characters.
pub const DEFAULT_MIN_LENGTH: usize = 8;
/// Default maximum number of characters.
pub const DEFAULT_MAX_LENGTH: usize = 12;
/// Longest block still considered decent.
pub const DEFAULT_MAX_BLOCK: usize = 2;

/// Environment variable overriding the minimum length.
pub const MIN_LENGTH_VAR: &str = "PWD_BLOCKS_MIN_LENGTH";
/// Environment variable overriding the maximum length.
pub const MAX_LENGTH_VAR: &str = "PWD_BLOCKS_MAX_LENGTH";
/// Environment variable overriding the longest decent block.
pub const MAX_BLOCK_VAR: &str = "PWD_BLOCKS_MAX_BLOCK";

/// Errors raised while building or loading a [`Policy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Minimum length must be at least 1")]
    ZeroMinLength,
    #[error("Minimum length {min} exceeds maximum length {max}")]
    InvertedRange { min: usize, max: usize },
}

/// Rules a candidate is validated and classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Policy {
    pub min_length: usize,
    pub max_length: usize,
    pub max_block: usize,
}

impl Policy {
    /// 8 to 12 characters, blocks of up to 2 are fine.
    pub const DEFAULT: Policy = Policy {
        min_length: DEFAULT_MIN_LENGTH,
        max_length: DEFAULT_MAX_LENGTH,
        max_block: DEFAULT_MAX_BLOCK,
    };

    /// Builds a policy, rejecting length ranges that no candidate could satisfy
    /// and a zero minimum (the block scan needs a non-empty candidate).
    pub fn new(min_length: usize, max_length: usize, max_block: usize) -> Result<Self, PolicyError> {
        if min_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        if min_length > max_length {
            return Err(PolicyError::InvertedRange {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
            max_block,
        })
    }

    /// Loads the policy from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_BLOCKS_MIN_LENGTH` (default: 8)
    /// - `PWD_BLOCKS_MAX_LENGTH` (default: 12)
    /// - `PWD_BLOCKS_MAX_BLOCK` (default: 2)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A variable is set but is not a non-negative integer
    /// - The resulting range is empty or starts at zero
    pub fn from_env() -> Result<Self, PolicyError> {
        let min_length = read_var(MIN_LENGTH_VAR, DEFAULT_MIN_LENGTH)?;
        let max_length = read_var(MAX_LENGTH_VAR, DEFAULT_MAX_LENGTH)?;
        let max_block = read_var(MAX_BLOCK_VAR, DEFAULT_MAX_BLOCK)?;

        let policy = Self::new(min_length, max_length, max_block)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min_length = policy.min_length,
            max_length = policy.max_length,
            max_block = policy.max_block,
            "Policy loaded from environment"
        );

        Ok(policy)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn read_var(var: &'static str, default: usize) -> Result<usize, PolicyError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy load FAILED: {} is not an integer", var);
            PolicyError::InvalidValue { var, value: raw }
        }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(std::env::VarError::NotUnicode(raw)) => Err(PolicyError::InvalidValue {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn clear_all() {
        remove_env(MIN_LENGTH_VAR);
        remove_env(MAX_LENGTH_VAR);
        remove_env(MAX_BLOCK_VAR);
    }

    #[test]
    fn test_default_policy() {
        let policy = Policy::default();
        assert_eq!(policy.min_length, 8);
        assert_eq!(policy.max_length, 12);
        assert_eq!(policy.max_block, 2);
    }

    #[test]
    fn test_new_rejects_zero_min() {
        assert_eq!(Policy::new(0, 12, 2), Err(PolicyError::ZeroMinLength));
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert_eq!(
            Policy::new(10, 9, 2),
            Err(PolicyError::InvertedRange { min: 10, max: 9 })
        );
    }

    #[test]
    fn test_new_accepts_single_length() {
        let policy = Policy::new(10, 10, 0).unwrap();
        assert_eq!(policy.min_length, policy.max_length);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_all();
        assert_eq!(Policy::from_env(), Ok(Policy::DEFAULT));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_all();
        set_env(MIN_LENGTH_VAR, "6");
        set_env(MAX_LENGTH_VAR, " 20 ");
        set_env(MAX_BLOCK_VAR, "3");

        let policy = Policy::from_env().unwrap();
        assert_eq!(policy, Policy::new(6, 20, 3).unwrap());

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_partial_override() {
        clear_all();
        set_env(MAX_BLOCK_VAR, "1");

        let policy = Policy::from_env().unwrap();
        assert_eq!(policy.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(policy.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(policy.max_block, 1);

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_value() {
        clear_all();
        set_env(MIN_LENGTH_VAR, "eight");

        match Policy::from_env() {
            Err(PolicyError::InvalidValue { var, value }) => {
                assert_eq!(var, MIN_LENGTH_VAR);
                assert_eq!(value, "eight");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_negative_rejected() {
        clear_all();
        set_env(MAX_BLOCK_VAR, "-1");

        assert!(matches!(
            Policy::from_env(),
            Err(PolicyError::InvalidValue { .. })
        ));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_inverted_range() {
        clear_all();
        set_env(MIN_LENGTH_VAR, "13");

        assert_eq!(
            Policy::from_env(),
            Err(PolicyError::InvertedRange { min: 13, max: 12 })
        );

        clear_all();
    }
}
