//! Error types for the flowkit core.
//!
//! This module defines the centralized error type [`FlowkitError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that a missing *required* capability with no fallback is deliberately not
//! representable here: that condition is a composition-root bug and terminates the
//! process (see [`crate::registry`]) rather than surfacing as a recoverable error.

use thiserror::Error;

/// The main error type for flowkit operations.
///
/// This enum consolidates the recoverable error conditions that can occur while
/// bootstrapping and driving the coordinator core, from configuration parsing to
/// capability calls made through the registry.
///
/// # Examples
///
/// ```
/// use flowkit::domain::FlowkitError;
///
/// fn validate_config() -> Result<(), FlowkitError> {
///     Err(FlowkitError::Config("missing start_flow".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FlowkitError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (e.g. reading a config
    /// file). Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A capability call made through the registry failed.
    ///
    /// Occurs when an external collaborator behind a capability interface
    /// reports a failure (e.g. the network capability cannot produce the item
    /// catalog). The string contains a description of what went wrong.
    #[error("Capability error: {0}")]
    Capability(String),

    /// A host event could not be applied to the coordinator tree.
    ///
    /// Occurs when the host delivers an event that is malformed beyond the
    /// logged-no-op cases (which are handled in place and never surface here).
    #[error("Host event error: {0}")]
    HostEvent(String),
}

impl From<toml::de::Error> for FlowkitError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A specialized `Result` type for flowkit operations.
///
/// This is a type alias for `std::result::Result<T, FlowkitError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use flowkit::domain::Result;
///
/// fn bootstrap() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, FlowkitError>;
