//! Password analyzer - validation, block scan and feedback.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::Policy;
use crate::sections::{
    SectionResult, ValidationError, length_section, longest_run, whitespace_section,
};

/// Outcome of one analysis.
pub type Analysis = Result<BlockReport, ValidationError>;

/// How long `analyze_tx` waits before analyzing.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A candidate that passed validation.
///
/// Only [`validate`] and [`Policy::validate`] construct it, so it is never empty.
#[derive(Debug, Clone, Copy)]
pub struct ValidCandidate<'a> {
    inner: &'a SecretString,
}

impl<'a> ValidCandidate<'a> {
    /// Length of the longest run of identical adjacent characters.
    pub fn longest_run(&self) -> usize {
        longest_run(self.inner.expose_secret())
    }

    /// Hands back the candidate as it was passed in.
    pub fn into_inner(self) -> &'a SecretString {
        self.inner
    }
}

impl ExposeSecret<str> for ValidCandidate<'_> {
    fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }
}

/// What to tell the user about the longest block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The longest block is too long by `by` characters.
    ReduceBlock { by: usize },
    Decent,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::ReduceBlock { by } => {
                write!(f, "Consider reducing the block by {by} characters.")
            }
            Feedback::Decent => f.write_str("This is a decent password."),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Feedback {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Successful analysis of a valid candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockReport {
    pub run_length: usize,
    pub feedback: Feedback,
}

impl fmt::Display for BlockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The largest block is {}.", self.run_length)?;
        write!(f, "{}", self.feedback)
    }
}

impl Policy {
    /// Validates the candidate without transforming it.
    ///
    /// Sections run in order (length, then whitespace) and the first failure
    /// is returned.
    pub fn validate<'a>(
        &self,
        candidate: &'a SecretString,
    ) -> Result<ValidCandidate<'a>, ValidationError> {
        let sections: [(&str, fn(&SecretString, &Policy) -> SectionResult); 2] = [
            ("length", length_section),
            ("whitespace", whitespace_section),
        ];

        for (_section_name, section_fn) in sections {
            if let Err(err) = section_fn(candidate, self) {
                #[cfg(feature = "tracing")]
                tracing::debug!(section = _section_name, %err, "Candidate rejected");
                return Err(err);
            }
        }

        Ok(ValidCandidate { inner: candidate })
    }

    /// Maps a run length to feedback.
    pub fn classify(&self, run_length: usize) -> Feedback {
        if run_length > self.max_block {
            Feedback::ReduceBlock {
                by: run_length - self.max_block,
            }
        } else {
            Feedback::Decent
        }
    }

    /// Runs validate, block scan and classify on a fresh candidate.
    pub fn analyze(&self, candidate: &SecretString) -> Analysis {
        let valid = self.validate(candidate)?;
        let run_length = valid.longest_run();
        let feedback = self.classify(run_length);

        #[cfg(feature = "tracing")]
        tracing::debug!(run_length, ?feedback, "Analysis complete");

        Ok(BlockReport {
            run_length,
            feedback,
        })
    }
}

/// Validates the candidate against the default policy.
pub fn validate(candidate: &SecretString) -> Result<ValidCandidate<'_>, ValidationError> {
    Policy::DEFAULT.validate(candidate)
}

/// Maps a run length to feedback under the default policy.
pub fn classify(run_length: usize) -> Feedback {
    Policy::DEFAULT.classify(run_length)
}

/// Analyzes the candidate under the default policy.
///
/// # Returns
/// The longest block and its feedback, or the first validation failure.
pub fn analyze(candidate: &SecretString) -> Analysis {
    Policy::DEFAULT.analyze(candidate)
}

/// Async version that waits [`DEBOUNCE`] and sends the analysis via channel.
///
/// If `token` is cancelled during the wait nothing is sent, which lets a
/// front end drop stale requests while the user is still typing.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    candidate: &SecretString,
    policy: Policy,
    token: CancellationToken,
    tx: mpsc::Sender<Analysis>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Analysis cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let analysis = policy.analyze(candidate);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}
