//! bookshelf - HTTP CRUD service for book records
//!
//! Resolves PostgreSQL settings from `POSTGRES_*`, prepares the `books`
//! table and serves the REST API until Ctrl+C or SIGTERM. Any startup
//! failure is logged and exits with status 1.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::{db, DbConfig, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    author,
    version,
    about = "HTTP CRUD service for book records stored in PostgreSQL",
    long_about = "Serves create/list/get/update/delete under /books. Database connection \
                  settings come from POSTGRES_HOST, POSTGRES_PORT, POSTGRES_USER, \
                  POSTGRES_PASSWORD and POSTGRES_DB."
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, short = 'b', env = "BOOKSHELF_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Seconds a single request may spend on database work
    #[arg(
        long,
        env = "BOOKSHELF_REQUEST_TIMEOUT_SECS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    request_timeout_secs: u64,

    /// Include database error text in 500 responses - leaks internals, use with caution
    #[arg(long, env = "BOOKSHELF_EXPOSE_ERRORS")]
    expose_errors: bool,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            expose_error_detail: self.expose_errors,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the environment alone is enough.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }) {
        eprintln!("failed to initialize logging: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let db_config = DbConfig::from_env().context("Invalid database configuration")?;
    tracing::debug!(?db_config, "Resolved database configuration");

    let pool = db::init(&db_config)
        .await
        .context("Database startup failed")?;

    bookshelf_server::run_server(pool, cli.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
