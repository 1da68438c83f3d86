//! Search error types.

use thiserror::Error;

use qpeak_oracle::OracleError;

/// Errors that abort a peak search run.
///
/// An oracle failure mid-pass is fatal to the run: treating a failed query
/// as "non-improving" would silently bias the climb, so the run aborts and
/// the caller decides whether to retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The amplitude oracle failed or timed out.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Result type alias for search operations.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
