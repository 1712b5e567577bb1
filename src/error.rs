/// Error type for the jd-union-rs crate.
///
/// Business errors reported by the vendor (`error_response`) are not represented here,
/// they are returned as [`UnionResponse::Error`](crate::responses::UnionResponse::Error).
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum JdUnionError {
    /// A required credential could not be found in the environment.
    #[error("Missing credentials: environment variable `{0}` is not set.")]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::MissingCredentials))]
    MissingCredentials(&'static str),

    /// The request did not complete within the configured timeout.
    #[error("The request to the JD Union API timed out.")]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::Timeout))]
    Timeout(#[source] reqwest::Error),

    /// The request to the server has failed.
    #[error(transparent)]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::Transport))]
    Transport(reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("The JD Union API answered with HTTP status {status}.")]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::HttpStatus))]
    HttpStatus {
        /// The returned status code.
        status: reqwest::StatusCode,
        /// The raw response body.
        body: String,
    },

    /// The response body or the business parameters could not be (de)serialized.
    #[error(transparent)]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::Json))]
    Json(#[from] serde_json::Error),

    /// Url parsing error.
    #[error(transparent)]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::UrlParseError))]
    UrlParseError(#[from] url::ParseError),

    /// Header value contained non-ASCII characters.
    #[error(transparent)]
    #[diagnostic(code(jd_union_rs::error::JdUnionError::HeaderToStr))]
    HeaderToStr(#[from] reqwest::header::ToStrError),
}

impl From<reqwest::Error> for JdUnionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JdUnionError::Timeout(err)
        } else {
            JdUnionError::Transport(err)
        }
    }
}

impl JdUnionError {
    /// Returns whether the error was caused by an elapsed timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, JdUnionError::Timeout(_))
    }
}
