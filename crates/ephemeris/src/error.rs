//! Error types for the ecliptic-ephemeris crate.

use chrono::{DateTime, Utc};

use crate::body::Body;

/// Error type for all fallible ephemeris operations.
///
/// Providers are deterministic for a given instant, so a failure is never
/// retried by the engine: the same inputs would fail the same way. Callers
/// surface this as a "temporarily unavailable" condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    /// Returned when the provider rejected the instant or raised an
    /// internal error while computing a body state.
    #[error("ephemeris computation failed for {body} at {instant}: {reason}")]
    ComputationFailed {
        /// The body being computed.
        body: Body,
        /// The instant that was requested.
        instant: DateTime<Utc>,
        /// Provider-supplied failure description.
        reason: String,
    },
}
