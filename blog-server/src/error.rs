use axum::http::header;
use blog_api::{ArticleId, Error as ApiError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn article_not_found(id: ArticleId) -> Error {
        Error::Api(ApiError::ArticleNotFound(id))
    }

    pub fn invalid_body(reason: impl ToString) -> Error {
        Error::Api(ApiError::InvalidBody(reason.to_string()))
    }
}

impl Error {
    /// What the client gets to see of this error
    ///
    /// Internal failure details stay in the server logs, except in test builds
    /// where they help diagnose failing assertions.
    fn into_api_error(self) -> ApiError {
        match self {
            Error::Api(err) => {
                tracing::debug!(%err, "request rejected");
                err
            }
            Error::Anyhow(err) if cfg!(test) => {
                tracing::error!(?err, "request failed");
                ApiError::Unknown(format!("{err:#}"))
            }
            Error::Anyhow(err) => {
                tracing::error!(?err, "request failed");
                ApiError::Unknown(String::from("Internal error, details are in the server logs"))
            }
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let err = self.into_api_error();
        let headers = [(header::CONTENT_TYPE, "application/json")];
        (err.status_code(), headers, err.contents()).into_response()
    }
}
