//! Error types exposed by the analysis client layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the analysis
/// backend.
///
/// Every variant renders to a plain, user-facing message. The search session
/// stores that message verbatim; it does not branch on the variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// No product query was supplied, or it was blank.
    #[error("product query is required")]
    MissingQuery,

    /// The configured API base could not be parsed as an HTTP(S) URL.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The request could not be delivered or the connection failed.
    #[error("network error talking to the analysis backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("analysis request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend `detail` string or a truncated response body.
        message: String,
    },

    /// The response body was not a valid analysis payload.
    #[error("analysis response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The health endpoint answered but did not report `ok`.
    #[error("analysis backend reported status '{status}'")]
    Unhealthy {
        /// Status string from the health response.
        status: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl AnalysisError {
    /// Wraps an I/O failure.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }

    /// Returns whether the failure carries no detail text of its own.
    ///
    /// Only variants that wrap an underlying message can be blank.
    #[must_use]
    pub fn has_blank_detail(&self) -> bool {
        match self {
            Self::Network { message }
            | Self::Api { message, .. }
            | Self::Decode { message }
            | Self::Io { message }
            | Self::Configuration { message } => message.trim().is_empty(),
            Self::InvalidUrl(detail) => detail.trim().is_empty(),
            Self::MissingQuery | Self::Unhealthy { .. } => false,
        }
    }
}
