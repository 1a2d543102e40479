//! Failure taxonomy for the lookup and publish operations.
//!
//! Everything here is locally recovered by the status service; nothing
//! escapes the refresh cycle.

use thiserror::Error;

/// Failure modes of the carrier lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Phone-state permission is not granted; no telephony call was made.
    #[error("phone state permission denied")]
    PermissionDenied,
    /// A telephony backend call failed.
    #[error("carrier lookup failed: {0}")]
    Failed(String),
}

/// Failure mode of a notification publish or channel registration.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("notification sink error: {0}")]
    Sink(String),
}
