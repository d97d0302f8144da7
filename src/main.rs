use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use tracing::info;

use bhasha_tts::{ServerConfig, config::TlsConfig, routes, state::AppState};

/// Multilingual text-to-speech web form (Bengali, English, Hindi)
#[derive(Parser, Debug)]
#[command(name = "bhasha-tts", version, about)]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let loaded = match path {
        Some(path) => {
            info!("Reading configuration file {}", path.display());
            ServerConfig::from_file(&path)
        }
        None => ServerConfig::from_env(),
    };
    loaded.map_err(|e| anyhow!("Invalid configuration: {e}"))
}

async fn serve(app: Router, addr: SocketAddr, tls: Option<TlsConfig>) -> anyhow::Result<()> {
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    match tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .with_context(|| {
                    format!(
                        "Loading certificate {} / key {}",
                        tls.cert_path.display(),
                        tls.key_path.display()
                    )
                })?;
            info!("Listening on https://{addr}");
            axum_server::bind_rustls(addr, rustls).serve(service).await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Binding {addr}"))?;
            info!("Listening on http://{addr}");
            axum::serve(listener, service).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env has to be in the environment before config is read
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Both reqwest and axum-server use rustls; pick the ring backend once
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Could not install the rustls ring provider"))?;

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let addr: SocketAddr = config
        .address()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.address()))?;
    let tls = config.tls.clone();
    let (rps, burst) = (
        config.rate_limit_requests_per_second,
        config.rate_limit_burst_size,
    );

    let state =
        AppState::new(config).map_err(|e| anyhow!("Speech synthesizer setup failed: {e}"))?;
    let app = routes::with_rate_limit(routes::create_router(state), rps, burst)
        .ok_or_else(|| anyhow!("Rate limit settings rejected by governor"))?;

    serve(app, addr, tls).await
}
