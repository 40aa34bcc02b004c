use thiserror::Error;

/// Failure kinds produced by the identity layer (session bootstrap and
/// silent token acquisition).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No account is active; the caller must sign in first.
    #[error("no active account; please sign in")]
    NoActiveAccount,
    /// Silent acquisition cannot succeed; an interactive sign-in is required.
    /// The identity layer never starts the interactive flow itself.
    #[error("interaction required to acquire an auth token")]
    InteractionRequired,
    /// Any other identity-provider failure, carrying the original message.
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Failure kinds surfaced by the request gateway and the domain services.
///
/// The gateway performs no local recovery: every variant propagates to the
/// caller, which owns user-visible messaging and any retry policy.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No active account; checked before any network I/O happens.
    #[error("not authenticated; please sign in")]
    NotAuthenticated,
    /// Silent token refresh was not sufficient; the UI should prompt an
    /// interactive login rather than show a generic error.
    #[error("interaction required to acquire an auth token")]
    InteractionRequired,
    /// Generic identity-provider failure.
    #[error("identity provider error: {0}")]
    AuthProvider(String),
    /// A tenant-scoped call was made while no client is selected.
    #[error("no client selected; a tenant context is required for this call")]
    NoClientSelected,
    /// The backend was reachable but answered outside the 2xx range.
    /// The body is not parsed for these responses.
    #[error("api error: {status} {status_text}")]
    Api { status: u16, status_text: String },
    /// Transport-level failure (connect, timeout, ...), passed through as-is.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The response body did not match the expected envelope shape.
    #[error("failed to parse response envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

impl From<AuthError> for GatewayError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NoActiveAccount => GatewayError::NotAuthenticated,
            AuthError::InteractionRequired => GatewayError::InteractionRequired,
            AuthError::Provider(message) => GatewayError::AuthProvider(message),
        }
    }
}
