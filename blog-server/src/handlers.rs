use axum::{extract::State, http::Uri, Json};
use blog_api::{Article, Comment, Error as ApiError, NewArticle, NewComment};

use crate::{extractors::*, Error, Store};

pub async fn list_articles(State(store): State<Store>) -> Json<Vec<Article>> {
    Json(store.list_articles().await)
}

pub async fn create_article(
    State(store): State<Store>,
    JsonBody(data): JsonBody<NewArticle>,
) -> Result<Json<Article>, Error> {
    Ok(Json(store.create_article(data).await?))
}

pub async fn get_article(
    State(store): State<Store>,
    ArticlePath(id): ArticlePath,
) -> Result<Json<Article>, Error> {
    Ok(Json(store.get_article(&id).await?))
}

pub async fn add_comment(
    State(store): State<Store>,
    ArticlePath(id): ArticlePath,
    JsonBody(data): JsonBody<NewComment>,
) -> Result<Json<Comment>, Error> {
    Ok(Json(store.add_comment(&id, data).await?))
}

pub async fn not_found(uri: Uri) -> Error {
    match raw_article_id(uri.path()) {
        Some(id) => Error::article_not_found(id),
        None => Error::Api(ApiError::NoRoute(String::from(uri.path()))),
    }
}
