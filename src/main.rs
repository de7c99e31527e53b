extern crate actix_web;
extern crate chrono;
#[macro_use]
extern crate serde;

use std::time::Duration;

use actix_cors::Cors;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[macro_use]
mod macros;

mod api;
mod fetch;
mod models;
mod telemetry;
mod toc;

use actix_web::{App, HttpServer};
use models::{FetchConfig, WikiConfig};
use telemetry::TracingLogger;

/// Shows the table of contents of a Wikipedia page, with every link pointing back at the original article.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The port to listen for incoming requests on.
    #[arg(short, long, default_value_t = 6543, env = "PORT")]
    port: u16,

    /// The scheme used to fetch wiki pages, including the `://` separator.
    #[arg(long, default_value = "https://", env = "WIKI_SCHEME")]
    wiki_scheme: String,

    /// Only pages whose host ends with this domain may be viewed.
    ///
    /// Relative paths such as `/wiki/Satchel` are also resolved against this domain.
    #[arg(long, default_value = "wikipedia.org", env = "WIKI_DOMAIN")]
    wiki_domain: String,

    /// How long to wait for a wiki page, in seconds.
    #[arg(long, default_value_t = 30, env = "FETCH_TIMEOUT")]
    fetch_timeout: u64,

    /// The User-Agent header sent when fetching wiki pages.
    #[arg(long, env = "FETCH_USER_AGENT")]
    user_agent: Option<String>,
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wiki_toc=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_logging();

    let wiki = WikiConfig {
        scheme: args.wiki_scheme,
        domain_suffix: args.wiki_domain,
    };

    let mut fetch = FetchConfig {
        timeout: Duration::from_secs(args.fetch_timeout),
        ..Default::default()
    };
    if let Some(user_agent) = args.user_agent {
        fetch.user_agent = user_agent;
    }

    let state = models::GlobalState::new(wiki, fetch).map_err(|e| {
        error!("Failed to initialize the page fetcher: {e}");
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("Starting server on :{}", args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(TracingLogger)
            .wrap(Cors::default().allow_any_origin().send_wildcard())
            .configure(api::configure)
    })
    .bind(format!("0.0.0.0:{}", args.port))?
    .run()
    .await
    .map_err(|err| {
        error!("The server exited unexpectedly: {}", err);
        err
    })
}
