pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API is overloaded (HTTP 429)")]
    Overloaded,

    #[error("generation API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation API returned no content")]
    EmptyResponse,
}

impl Error {
    /// Transport failures and server-side errors are worth retrying; quota
    /// exhaustion and client errors are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::Api { status, .. } => *status >= 500,
            Error::Overloaded | Error::EmptyResponse => false,
        }
    }
}
