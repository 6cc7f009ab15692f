//! Error taxonomy for the routing core.
//!
//! `RouteError` carries the HTTP-equivalent status via [`RouteError::status`]
//! (400 / 403 / 404; 500 for configuration faults). The embedding application
//! renders the error page. All errors are terminal for the request; hooks are
//! the only recovery mechanism.

use http::StatusCode;
use thiserror::Error;

/// Errors produced while routing or reconstructing URLs.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Invalid site URL, empty or non-word controller name, or an
    /// uncompilable registered pattern. Fatal at startup/construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The requested action was malformed. Terminal for the request (400).
    #[error("malformed action: {0}")]
    MalformedAction(String),

    /// The visitor is not permitted to view the site (403).
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// The try-list was exhausted with nothing displayed (404).
    #[error("not found: {0}")]
    NotFound(String),
}

impl RouteError {
    /// The HTTP-equivalent status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RouteError::MalformedAction(_) => StatusCode::BAD_REQUEST,
            RouteError::AccessDenied(_) => StatusCode::FORBIDDEN,
            RouteError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Convenience alias for results produced by the routing core.
pub type RouteResult<T> = Result<T, RouteError>;
