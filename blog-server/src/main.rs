use anyhow::Context;
use axum::{routing::get, Router};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

mod backend;
mod error;
mod extractors;
mod handlers;
mod store;

use backend::FileBackend;
use error::Error;
use extractors::AppState;
use store::Store;

#[derive(structopt::StructOpt)]
struct Opt {
    /// JSON document holding all articles and their comments
    #[structopt(
        long,
        env = "BLOG_DATA_FILE",
        default_value = "data.json",
        parse(from_os_str)
    )]
    data_file: PathBuf,

    /// Address to listen on
    #[structopt(long, env = "BLOG_LISTEN", default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

pub fn app(store: Store) -> Router {
    Router::new()
        .route(
            "/api/articles",
            get(handlers::list_articles).post(handlers::create_article),
        )
        .route(
            "/api/articles/:id",
            get(handlers::get_article).post(handlers::add_comment),
        )
        .fallback(handlers::not_found)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(AppState { store })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let backend = FileBackend::new(opt.data_file);
    tracing::info!(data_file = ?backend.path(), "opening article store");
    let store = Store::new(Arc::new(backend));

    tracing::info!("listening on {}", opt.listen);
    axum::Server::bind(&opt.listen)
        .serve(app(store).into_make_service())
        .await
        .context("serving axum webserver")
}
