//! HTML fragments for the blog pages
//!
//! Every piece of user-provided text goes through [`escape_html`] before being
//! embedded, including article ids used in links.

use crate::{
    api::{Article, Comment, Time},
    escape_html,
};

const PREVIEW_CHARS: usize = 200;

pub fn format_date(t: &Time) -> String {
    t.format("%B %-d, %Y, %I:%M %p").to_string()
}

pub fn comments_word(count: usize) -> &'static str {
    match count {
        1 => "comment",
        _ => "comments",
    }
}

/// First characters of `content`, with an ellipsis if it was cut
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        None => String::from(content),
        Some((cut, _)) => format!("{}...", &content[..cut]),
    }
}

fn empty_state(inner: &str) -> String {
    format!("<div class=\"empty-state\">{inner}</div>\n")
}

pub fn article_list(articles: &[Article]) -> String {
    if articles.is_empty() {
        return empty_state("<h3>No articles yet</h3>");
    }
    let mut res = String::new();
    for a in articles {
        let id = escape_html(&a.id.0);
        let count = a.comments.len();
        res.push_str(&format!(
            concat!(
                "<div class=\"article-card\">\n",
                "  <a href=\"article.html?id={id}\" class=\"article-card-title\">{title}</a>\n",
                "  <div class=\"article-card-meta\">",
                "<span class=\"article-card-author\">{author}</span> ",
                "<span>{date}</span></div>\n",
                "  <div class=\"article-card-preview\">{preview}</div>\n",
                "  <div class=\"article-card-footer\">",
                "<span class=\"comments-count\">{count} {word}</span></div>\n",
                "</div>\n",
            ),
            id = id,
            title = escape_html(&a.title),
            author = escape_html(&a.author),
            date = format_date(&a.date),
            preview = escape_html(&preview(&a.content)),
            count = count,
            word = comments_word(count),
        ));
    }
    res
}

pub fn article(article: Option<&Article>) -> String {
    match article {
        None => empty_state(
            "<h3>Article not found</h3><a href=\"index.html\" class=\"btn\">Back to Home</a>",
        ),
        Some(a) => format!(
            concat!(
                "<h1 class=\"article-title\">{title}</h1>\n",
                "<div class=\"article-meta\">",
                "<span class=\"article-author\">Author: {author}</span> ",
                "<span>Published: {date}</span></div>\n",
                "<div class=\"article-content\">{content}</div>\n",
            ),
            title = escape_html(&a.title),
            author = escape_html(&a.author),
            date = format_date(&a.date),
            content = escape_html(&a.content),
        ),
    }
}

/// Renders an already-merged comment sequence
pub fn comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return empty_state("<p>No comments yet. Be the first!</p>");
    }
    let mut res = String::new();
    for c in comments {
        res.push_str(&format!(
            concat!(
                "<div class=\"comment\">\n",
                "  <div class=\"comment-header\">",
                "<span class=\"comment-author\">{author}</span> ",
                "<span class=\"comment-date\">{date}</span></div>\n",
                "  <div class=\"comment-text\">{text}</div>\n",
                "</div>\n",
            ),
            author = escape_html(&c.author),
            date = format_date(&c.date),
            text = escape_html(&c.text),
        ));
    }
    res
}
