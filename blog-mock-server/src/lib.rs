use blog_api::{Article, ArticleId, Comment, Document, Error, NewArticle, NewComment};
use chrono::Utc;

/// In-memory model of the blog API, with none of the persistence
pub struct MockServer {
    doc: Document,
    next_id: usize,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            doc: Document::default(),
            next_id: 0,
        }
    }

    /// Return the id of article number `idx`, in listing order
    pub fn test_get_article_id(&self, idx: usize) -> &ArticleId {
        &self
            .doc
            .articles
            .get(idx)
            .unwrap_or_else(|| panic!("getting article {idx} among {}", self.doc.articles.len()))
            .id
    }

    /// Return the current number of articles
    pub fn test_num_articles(&self) -> usize {
        self.doc.articles.len()
    }

    pub fn list_articles(&self) -> Vec<Article> {
        self.doc.articles.clone()
    }

    pub fn get_article(&self, id: &ArticleId) -> Result<Article, Error> {
        self.doc
            .find(id)
            .cloned()
            .ok_or_else(|| Error::ArticleNotFound(id.clone()))
    }

    pub fn create_article(&mut self, a: NewArticle) -> Article {
        let id = ArticleId(format!("mock-{}", self.next_id));
        self.next_id += 1;
        let article = a.into_article(id, Utc::now());
        self.doc.articles.insert(0, article.clone());
        article
    }

    pub fn add_comment(&mut self, id: &ArticleId, c: NewComment) -> Result<Comment, Error> {
        let article = self
            .doc
            .find_mut(id)
            .ok_or_else(|| Error::ArticleNotFound(id.clone()))?;
        let comment = c.into_comment(Utc::now());
        article.comments.push(comment.clone());
        Ok(comment)
    }
}

impl Default for MockServer {
    fn default() -> MockServer {
        MockServer::new()
    }
}
