use anyhow::Context;
use blog_client::{
    api::{Article, ArticleId, Comment, NewArticle, NewComment},
    render, CommentCache,
};
use std::path::PathBuf;

mod api;

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(short, long, env = "BLOG_HOST", default_value = "http://localhost:3000")]
    host: String,

    /// File holding the comments that only live on this machine
    #[structopt(
        long,
        env = "BLOG_COMMENT_CACHE",
        default_value = "comments.json",
        parse(from_os_str)
    )]
    cache: PathBuf,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// List all articles, newest first
    List {
        #[structopt(long)]
        html: bool,
    },

    /// Show an article with its comments, including local ones
    Show {
        id: String,

        #[structopt(long)]
        html: bool,
    },

    /// Publish an article
    PostArticle {
        title: String,
        author: String,
        content: String,
    },

    /// Comment on an article
    Comment {
        id: String,
        author: String,
        text: String,

        /// Keep the comment on this machine instead of sending it
        #[structopt(long)]
        local: bool,
    },
}

fn print_article(article: &Article, comments: &[Comment]) {
    println!("{}", article.title);
    println!(
        "by {}, {}",
        article.author,
        render::format_date(&article.date)
    );
    println!();
    println!("{}", article.content);
    println!();
    println!(
        "-- {} {}",
        comments.len(),
        render::comments_word(comments.len())
    );
    for c in comments {
        println!("[{}] {}: {}", render::format_date(&c.date), c.author, c.text);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let client = api::Client::new(opt.host);

    match opt.cmd {
        Command::List { html } => {
            let articles = client.list_articles().await?;
            if html {
                print!("{}", render::article_list(&articles));
            } else {
                for a in articles {
                    println!(
                        "{}  {}  {} by {} ({} {})",
                        a.id,
                        render::format_date(&a.date),
                        a.title,
                        a.author,
                        a.comments.len(),
                        render::comments_word(a.comments.len()),
                    );
                }
            }
        }
        Command::Show { id, html } => {
            let article = client.get_article(&ArticleId(id)).await?;
            let cache = CommentCache::load(&opt.cache);
            let comments = cache.merged_for(&article);
            if html {
                print!("{}", render::article(Some(&article)));
                print!("{}", render::comments(&comments));
            } else {
                print_article(&article, &comments);
            }
        }
        Command::PostArticle {
            title,
            author,
            content,
        } => {
            let article = client
                .create_article(&NewArticle {
                    title,
                    author,
                    content,
                })
                .await?;
            println!("{}", article.id);
        }
        Command::Comment {
            id,
            author,
            text,
            local,
        } => {
            let id = ArticleId(id);
            let comment = NewComment { author, text };
            if local {
                client.get_article(&id).await?;
                let mut cache = CommentCache::load_for_update(&opt.cache)?;
                let comment = cache.add_comment(id, comment);
                cache.save(&opt.cache).context("saving local comment")?;
                tracing::info!(date = %comment.date, "kept comment locally");
            } else {
                let comment = client.add_comment(&id, &comment).await?;
                tracing::info!(date = %comment.date, "comment published");
            }
        }
    }

    Ok(())
}
