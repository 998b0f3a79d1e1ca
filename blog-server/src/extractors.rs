use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::{FromRequest, FromRequestParts, Path},
    http::{request, Request},
    BoxError,
};
use blog_api::ArticleId;
use serde::de::DeserializeOwned;

use crate::{Error, Store};

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub store: Store,
}

/// JSON request body, whatever its announced content type
///
/// Unlike `axum::Json`, any failure to read or parse the body is reported as
/// an API `InvalidBody` error.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = Error;

    async fn from_request(req: Request<B>, state: &S) -> Result<JsonBody<T>, Error> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(Error::invalid_body)?;
        serde_json::from_slice(&body)
            .map(JsonBody)
            .map_err(Error::invalid_body)
    }
}

/// Article id as written in the request path, without percent-decoding
pub fn raw_article_id(path: &str) -> Option<ArticleId> {
    path.strip_prefix("/api/articles/").map(ArticleId::from)
}

/// Id of the article a request is about
///
/// Ids that cannot be decoded cannot match any article, so they are reported
/// as not found.
pub struct ArticlePath(pub ArticleId);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ArticlePath {
    type Rejection = Error;

    async fn from_request_parts(
        req: &mut request::Parts,
        state: &S,
    ) -> Result<ArticlePath, Error> {
        match Path::<String>::from_request_parts(req, state).await {
            Ok(Path(id)) => Ok(ArticlePath(ArticleId(id))),
            Err(rejection) => {
                tracing::debug!(%rejection, "undecodable article id");
                let id = raw_article_id(req.uri.path())
                    .unwrap_or_else(|| ArticleId::from(req.uri.path()));
                Err(Error::article_not_found(id))
            }
        }
    }
}
