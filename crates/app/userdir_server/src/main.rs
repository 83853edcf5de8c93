//! Userdir GraphQL server binary.
//!
//! Serves the GraphQL endpoint at `/` over a freshly seeded, in-memory
//! directory. Nothing is persisted between runs.

use clap::Parser;
use tracing::info;
use userdir_api::config::{ApiConfig, DEFAULT_HOST, DEFAULT_PORT};
use userdir_core::auth::identity::RejectedTokenPolicy;
use userdir_core::auth::jwt::{MAX_TOKEN_TTL_SECS, TOKEN_EXPIRY_SECS, resolve_jwt_secret};
use userdir_core::directory::Directory;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "userdir_server", about = "Userdir GraphQL server", version)]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "USERDIR_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "USERDIR_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Lifetime of issued access tokens, in seconds (at most 30 days).
    #[arg(
        long,
        env = "TOKEN_TTL_SECS",
        default_value_t = TOKEN_EXPIRY_SECS,
        value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_SECS)
    )]
    token_ttl_secs: i64,

    /// How to treat requests whose token fails verification:
    /// `downgrade` (continue as anonymous) or `reject` (HTTP 401).
    #[arg(long, env = "REJECTED_TOKEN_POLICY", default_value_t = RejectedTokenPolicy::default())]
    rejected_token_policy: RejectedTokenPolicy,
}

impl Args {
    /// Build the API config. The JWT secret comes from `JWT_SECRET` or the
    /// persisted secret file, never from the command line.
    fn into_config(self, jwt_secret: String) -> ApiConfig {
        let mut config = ApiConfig::new(format!("{}:{}", self.host, self.port), jwt_secret);
        config.token_ttl_secs = self.token_ttl_secs;
        config.rejected_token_policy = self.rejected_token_policy;
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,userdir_api=debug,userdir_core=debug".into()),
        )
        .init();

    let args = Args::parse();
    info!(
        host = %args.host,
        port = args.port,
        token_ttl_secs = args.token_ttl_secs,
        rejected_token_policy = %args.rejected_token_policy,
        "starting userdir_server"
    );

    let config = args.into_config(resolve_jwt_secret());
    let bind_addr = config.bind_addr.clone();

    let directory = Directory::seeded();
    info!(users = directory.len(), "seeded user directory");

    let app = userdir_api::router(userdir_api::AppState::new(&config, directory)?);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "server ready at http://{local_addr}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
