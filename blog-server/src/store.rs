use std::sync::Arc;

use anyhow::Context;
use blog_api::{Article, ArticleId, Comment, Document, NewArticle, NewComment};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{backend::Backend, Error};

/// Handle on the article document
///
/// Every mutation reads the whole document, changes it and writes it all back.
/// Mutations going through clones of the same `Store` are serialized, but
/// nothing protects against other processes writing the same backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
    writer: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(backend: Arc<dyn Backend>) -> Store {
        Store {
            backend,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Missing and unparsable documents both count as empty
    async fn load(&self) -> Document {
        let data = match self.backend.read().await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::debug!("no article document yet, starting empty");
                return Document::default();
            }
            Err(err) => {
                tracing::warn!(?err, "failed reading article document, treating as empty");
                return Document::default();
            }
        };
        match serde_json::from_slice(&data) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(?err, "article document is not valid, treating as empty");
                Document::default()
            }
        }
    }

    async fn persist(&self, doc: &Document) -> anyhow::Result<()> {
        let data = serde_json::to_vec_pretty(doc).context("serializing article document")?;
        self.backend
            .write(data)
            .await
            .context("writing article document")
    }

    pub async fn list_articles(&self) -> Vec<Article> {
        self.load().await.articles
    }

    pub async fn get_article(&self, id: &ArticleId) -> Result<Article, Error> {
        self.load()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| Error::article_not_found(id.clone()))
    }

    pub async fn create_article(&self, new: NewArticle) -> Result<Article, Error> {
        let _guard = self.writer.lock().await;
        let mut doc = self.load().await;
        let mut id = ArticleId::generate();
        while doc.contains(&id) {
            id = ArticleId::generate();
        }
        let article = new.into_article(id, Utc::now());
        doc.articles.insert(0, article.clone());
        self.persist(&doc).await?;
        tracing::info!(id = %article.id, "created article");
        Ok(article)
    }

    pub async fn add_comment(&self, id: &ArticleId, new: NewComment) -> Result<Comment, Error> {
        let _guard = self.writer.lock().await;
        let mut doc = self.load().await;
        let article = doc
            .find_mut(id)
            .ok_or_else(|| Error::article_not_found(id.clone()))?;
        let comment = new.into_comment(Utc::now());
        article.comments.push(comment.clone());
        self.persist(&doc).await?;
        tracing::info!(%id, "added comment");
        Ok(comment)
    }
}
