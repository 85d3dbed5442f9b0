// src/error.rs

use thiserror::Error;

/// Failures surfaced by the network clients.
///
/// Input normalization (a malformed ad unit id, a non-positive display
/// constraint) is logged as a warning instead of landing here, and the
/// session converts every fetch error into the Defaulted state, so none of
/// these variants ever reach the host as a crash.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdError {
    /// The request URL could not be constructed. A configuration error, not
    /// a runtime condition.
    #[error("invalid request URL")]
    InvalidUrl,
    /// Transport failure, non-2xx status, or a body that does not match the
    /// campaign schema.
    #[error("invalid response from ad server")]
    InvalidResponse,
}
