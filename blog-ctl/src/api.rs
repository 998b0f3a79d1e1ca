use anyhow::Context;
use blog_client::api::{self, Article, ArticleId, Comment, NewArticle, NewComment};

pub struct Client {
    host: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(host: String) -> Client {
        Client {
            host: String::from(host.trim_end_matches('/')),
            http: reqwest::Client::new(),
        }
    }

    async fn parse<R>(resp: reqwest::Response) -> anyhow::Result<R>
    where
        R: for<'de> serde::Deserialize<'de>,
    {
        if resp.status().is_success() {
            return resp.json().await.context("parsing server response");
        }
        let status = resp.status();
        let body = resp.bytes().await.context("reading error response")?;
        match api::Error::parse(&body) {
            Ok(err) => Err(err.into()),
            Err(_) => Err(anyhow::anyhow!("server answered {status}: {body:?}")),
        }
    }

    pub async fn list_articles(&self) -> anyhow::Result<Vec<Article>> {
        let resp = self
            .http
            .get(format!("{}/api/articles", self.host))
            .send()
            .await
            .context("fetching article list")?;
        Self::parse(resp).await
    }

    pub async fn get_article(&self, id: &ArticleId) -> anyhow::Result<Article> {
        let resp = self
            .http
            .get(format!("{}/api/articles/{}", self.host, id))
            .send()
            .await
            .with_context(|| format!("fetching article {id}"))?;
        Self::parse(resp).await
    }

    pub async fn create_article(&self, article: &NewArticle) -> anyhow::Result<Article> {
        let resp = self
            .http
            .post(format!("{}/api/articles", self.host))
            .json(article)
            .send()
            .await
            .context("submitting article")?;
        Self::parse(resp).await
    }

    pub async fn add_comment(
        &self,
        id: &ArticleId,
        comment: &NewComment,
    ) -> anyhow::Result<Comment> {
        let resp = self
            .http
            .post(format!("{}/api/articles/{}", self.host, id))
            .json(comment)
            .send()
            .await
            .with_context(|| format!("submitting comment on article {id}"))?;
        Self::parse(resp).await
    }
}
