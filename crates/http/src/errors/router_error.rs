use thiserror::Error;

/// Registration-time routing errors.
///
/// All of these are raised while the route table is being built, never during
/// dispatch: route specs are validated eagerly against the handler registry
/// so that a bad registration fails the bootstrap instead of a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("Invalid route spec for '{pattern}': {message}")]
    InvalidRouteSpec { pattern: String, message: String },

    #[error("Unknown handler '{handler}' for route '{pattern}'")]
    UnknownHandler { pattern: String, handler: String },

    #[error("Handler '{handler}' has no method '{method}' (route '{pattern}')")]
    UnknownMethod {
        pattern: String,
        handler: String,
        method: String,
    },

    #[error("Duplicate handler registration: {handler}")]
    DuplicateHandler { handler: String },
}

impl RouterError {
    /// Create an invalid-route-spec error
    pub fn invalid_spec<P: Into<String>, M: Into<String>>(pattern: P, message: M) -> Self {
        RouterError::InvalidRouteSpec {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
