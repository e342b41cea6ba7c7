//! Backend entry-point: wires the dashboard REST endpoints and OpenAPI docs.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use bizview_backend::server::{self, ServerConfig};

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "bizview-backend", about = "Role-gated business dashboard API")]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "BIZVIEW_BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,

    /// Directory for persisted collections; in-memory when omitted.
    #[arg(long, env = "BIZVIEW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Remote forecast endpoint; a canned forecast when omitted.
    #[arg(long, env = "BIZVIEW_FORECAST_URL")]
    forecast_url: Option<Url>,

    /// Whether session cookies are marked `Secure`.
    #[arg(
        long,
        env = "BIZVIEW_COOKIE_SECURE",
        default_value_t = true,
        action = ArgAction::Set
    )]
    cookie_secure: bool,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let mut config = ServerConfig::new(cli.bind_addr, cli.cookie_secure);
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(forecast_url) = cli.forecast_url {
        config = config.with_forecast_url(forecast_url);
    }

    info!(addr = %config.bind_addr(), "starting server");
    server::run(config).await
}
