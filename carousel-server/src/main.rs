mod cli;
mod render;

use std::{env, io, process, sync::Arc};

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono_tz::Tz;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use carousel_core::{build_carousel, today_in, validate_catalog, Catalog};

struct App {
    catalog: Catalog,
    zone: Tz,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::builtin();
    if let Err(err) = validate_catalog(&catalog) {
        tracing::error!(%err, "catalog failed validation, refusing to serve");
        process::exit(1);
    }

    let router = Router::new()
        .route("/", get(handle_carousel))
        .fallback(|| async { Redirect::permanent("/") })
        .with_state(Arc::new(App {
            catalog,
            zone: args.zone,
        }));

    let listener = TcpListener::bind(args.address).await?;
    tracing::info!(address = %args.address, zone = %args.zone, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[derive(Deserialize)]
struct CarouselQuery {
    #[serde(default)]
    json: bool,
}

async fn handle_carousel(
    State(app): State<Arc<App>>,
    Query(query): Query<CarouselQuery>,
) -> Response {
    let carousel = build_carousel(&app.catalog, today_in(app.zone));

    if query.json {
        return Json(&carousel).into_response();
    }

    Html(render::page(&carousel)).into_response()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to install ctrl-c handler");
    }
}
