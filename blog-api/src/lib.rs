use chrono::Utc;
use std::fmt;

mod error;
pub use error::Error;

pub use uuid::Uuid;
pub type Time = chrono::DateTime<Utc>;

/// Opaque article identifier
///
/// Freshly created articles get a random UUIDv4, but any string is accepted on
/// the wire so that documents written with other id schemes keep loading.
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl ArticleId {
    pub fn generate() -> ArticleId {
        ArticleId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> ArticleId {
        ArticleId(String::from(s))
    }
}

/// Fields missing on disk decode to their defaults, the API always fills them
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub date: Time,
}

impl Default for Comment {
    fn default() -> Comment {
        Comment {
            author: String::new(),
            text: String::new(),
            date: Time::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: Time,

    /// Comments in the order they were submitted
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId, date: Time) -> Article {
        Article {
            id,
            title: self.title,
            author: self.author,
            content: self.content,
            date,
            comments: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub author: String,
    pub text: String,
}

impl NewComment {
    pub fn into_comment(self, date: Time) -> Comment {
        Comment {
            author: self.author,
            text: self.text,
            date,
        }
    }
}

/// Top-level shape of the persisted store, newest article first
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    #[serde(default, deserialize_with = "articles_skipping_invalid")]
    pub articles: Vec<Article>,
}

/// One undecodable article must not hide all the others
fn articles_skipping_invalid<'de, D>(d: D) -> Result<Vec<Article>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Vec<serde_json::Value> as serde::Deserialize>::deserialize(d)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(idx, a)| match serde_json::from_value(a) {
            Ok(a) => Some(a),
            Err(err) => {
                tracing::warn!(idx, %err, "dropping undecodable article");
                None
            }
        })
        .collect())
}

impl Document {
    pub fn find(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == *id)
    }

    pub fn find_mut(&mut self, id: &ArticleId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|a| a.id == *id)
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.find(id).is_some()
    }
}
