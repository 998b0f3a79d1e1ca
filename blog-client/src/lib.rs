mod cache;
pub use cache::CommentCache;

mod escape;
pub use escape::escape_html;

mod merge;
pub use merge::merged_comments;

pub mod render;

pub mod api {
    pub use blog_api::*;
}
