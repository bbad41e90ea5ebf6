use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use booking_web::config::Config;
use booking_web::infra::http_client::ReqwestHttp;
use booking_web::logging::init_logging;
use booking_web::router::app_router;
use booking_web::state::AppState;

#[derive(Parser)]
#[command(name = "booking-web")]
#[command(about = "Web front end for the booking site")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await?;
        }
    }
    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState {
        api: Arc::new(ReqwestHttp::with_timeout(config.upstream.timeout_seconds)),
        api_base_url: config.upstream.base_url.clone(),
    };
    let app = app_router(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(
        "Web server listening on {} (upstream API at {})",
        bind_addr, config.upstream.base_url
    );
    axum::serve(listener, app).await?;
    Ok(())
}
