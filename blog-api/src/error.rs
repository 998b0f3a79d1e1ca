use anyhow::{anyhow, Context};
use serde_json::json;

use crate::ArticleId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Article not found {0}")]
    ArticleNotFound(ArticleId),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("No such route {0}")]
    NoRoute(String),
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::NoRoute(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "error": msg,
                "type": "unknown",
            }),
            Error::ArticleNotFound(id) => json!({
                "error": "Article not found",
                "type": "not-found",
                "id": id,
            }),
            Error::InvalidBody(reason) => json!({
                "error": "Invalid JSON",
                "type": "invalid-body",
                "reason": reason,
            }),
            Error::NoRoute(path) => json!({
                "error": "Not found",
                "type": "no-route",
                "path": path,
            }),
        })
        .expect("serializing error")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("error").and_then(|msg| msg.as_str()).unwrap_or(""),
                )),
                "not-found" => Error::ArticleNotFound(ArticleId::from(
                    data.get("id")
                        .and_then(|id| id.as_str())
                        .ok_or_else(|| anyhow!("error is a not-found without an id"))?,
                )),
                "invalid-body" => Error::InvalidBody(String::from(
                    data.get("reason")
                        .and_then(|r| r.as_str())
                        .ok_or_else(|| anyhow!("error is an invalid-body without a reason"))?,
                )),
                "no-route" => Error::NoRoute(String::from(
                    data.get("path")
                        .and_then(|p| p.as_str())
                        .ok_or_else(|| anyhow!("error is a no-route without a path"))?,
                )),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_has_error_message() {
        let err = Error::ArticleNotFound(ArticleId::from("42"));
        assert_eq!(err.status_code(), http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(&err.contents()).unwrap();
        assert_eq!(body["error"], "Article not found");
        assert_eq!(Error::parse(&err.contents()).unwrap(), err);
    }

    #[test]
    fn invalid_body_is_a_client_error() {
        let err = Error::InvalidBody(String::from("expected value at line 1 column 1"));
        assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
        assert_eq!(Error::parse(&err.contents()).unwrap(), err);
    }

    #[test]
    fn no_route_is_not_found() {
        let err = Error::NoRoute(String::from("/elsewhere"));
        assert_eq!(err.status_code(), http::StatusCode::NOT_FOUND);
        assert_eq!(Error::parse(&err.contents()).unwrap(), err);
    }

    #[test]
    fn unknown_type_does_not_parse() {
        assert!(Error::parse(br#"{"type": "teapot"}"#).is_err());
        assert!(Error::parse(b"not json").is_err());
    }
}
