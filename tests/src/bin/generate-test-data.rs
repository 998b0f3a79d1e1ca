use blog_api::{Article, ArticleId, Comment, Document};
use chrono::{Duration, Utc};
use rand::Rng;

const NUM_AUTHORS: usize = 5;

const NUM_ARTICLES: usize = 20;
const TITLE_WORDS: usize = 6;
const CONTENT_WORDS: usize = 150;

const MAX_COMMENTS_PER_ARTICLE: usize = 8;
const COMMENT_WORDS: usize = 25;

fn words(rng: &mut impl Rng, n: usize) -> String {
    lipsum::lipsum_words_from_seed(n, rng.gen())
}

fn pick(rng: &mut impl Rng, among: &[String]) -> String {
    among[rng.gen_range(0..among.len())].clone()
}

fn generate(rng: &mut impl Rng) -> Document {
    let authors = (0..NUM_AUTHORS).map(|_| words(rng, 2)).collect::<Vec<_>>();

    // newest first, like the server keeps them
    let mut date = Utc::now() - Duration::days(1);
    let mut articles = Vec::with_capacity(NUM_ARTICLES);
    for _ in 0..NUM_ARTICLES {
        date = date - Duration::minutes(rng.gen_range(30..3000));
        let mut comment_date = date;
        let num_comments = rng.gen_range(0..=MAX_COMMENTS_PER_ARTICLE);
        let mut comments = Vec::with_capacity(num_comments);
        for _ in 0..num_comments {
            comment_date = comment_date + Duration::minutes(rng.gen_range(1..600));
            comments.push(Comment {
                author: pick(rng, &authors),
                text: words(rng, COMMENT_WORDS),
                date: comment_date,
            });
        }
        articles.push(Article {
            id: ArticleId::generate(),
            title: words(rng, TITLE_WORDS),
            author: pick(rng, &authors),
            content: words(rng, CONTENT_WORDS),
            date,
            comments,
        });
    }
    Document { articles }
}

fn main() {
    let doc = generate(&mut rand::thread_rng());
    println!(
        "{}",
        serde_json::to_string_pretty(&doc).expect("serializing test data")
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_document_looks_like_a_store() {
        let doc = generate(&mut rand::thread_rng());
        assert_eq!(doc.articles.len(), NUM_ARTICLES);
        assert!(doc.articles.windows(2).all(|w| w[0].date > w[1].date));
        for a in &doc.articles {
            assert!(!a.title.is_empty());
            assert!(a.comments.len() <= MAX_COMMENTS_PER_ARTICLE);
            assert!(a.comments.windows(2).all(|w| w[0].date < w[1].date));
            assert!(a.comments.iter().all(|c| c.date > a.date));
        }
        let ids = doc.articles.iter().map(|a| &a.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), NUM_ARTICLES);
    }
}
