use std::{collections::BTreeMap, path::Path};

use anyhow::Context;
use chrono::Utc;

use crate::{
    api::{Article, ArticleId, Comment, NewComment},
    merged_comments,
};

/// Comments kept on the client only, per article
///
/// They are never sent to the server: they only show up when displaying the
/// article on the client that wrote them.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentCache {
    comments: BTreeMap<ArticleId, Vec<Comment>>,
}

impl CommentCache {
    pub fn new() -> CommentCache {
        CommentCache::default()
    }

    /// Cache to display comments from
    ///
    /// Missing or unreadable cache files give an empty cache, and entries that
    /// do not decode are skipped.
    pub fn load(path: &Path) -> CommentCache {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                tracing::debug!(?path, ?err, "no local comment cache, starting empty");
                return CommentCache::new();
            }
        };
        let raw: BTreeMap<ArticleId, serde_json::Value> = match serde_json::from_slice(&data) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(?path, ?err, "ignoring unparsable local comment cache");
                return CommentCache::new();
            }
        };
        let comments = raw
            .into_iter()
            .filter_map(|(id, value)| match serde_json::from_value(value) {
                Ok(comments) => Some((id, comments)),
                Err(err) => {
                    tracing::warn!(?path, %id, %err, "skipping undecodable local comments");
                    None
                }
            })
            .collect();
        CommentCache { comments }
    }

    /// Cache to add comments to and then [`save`](CommentCache::save)
    ///
    /// Only a missing file gives an empty cache: anything else that prevents
    /// reading back every stored comment is an error, so that saving never
    /// drops comments.
    pub fn load_for_update(path: &Path) -> anyhow::Result<CommentCache> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CommentCache::new())
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading local comment cache {:?}", path))
            }
        };
        serde_json::from_slice(&data)
            .with_context(|| format!("parsing local comment cache {:?}", path))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let data = serde_json::to_vec_pretty(self).context("serializing local comments")?;
        std::fs::write(path, data)
            .with_context(|| format!("writing local comment cache to {:?}", path))
    }

    pub fn comments_for(&self, article: &ArticleId) -> &[Comment] {
        self.comments
            .get(article)
            .map(|c| &c[..])
            .unwrap_or(&[])
    }

    pub fn push(&mut self, article: ArticleId, comment: Comment) {
        self.comments.entry(article).or_insert_with(Vec::new).push(comment);
    }

    pub fn add_comment(&mut self, article: ArticleId, comment: NewComment) -> Comment {
        let comment = comment.into_comment(Utc::now());
        self.push(article, comment.clone());
        comment
    }

    /// Comments to display for `article`, persisted and local ones together
    pub fn merged_for(&self, article: &Article) -> Vec<Comment> {
        merged_comments(article, self.comments_for(&article.id))
    }
}
