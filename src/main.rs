use clap::Parser;

use in2http::cli::Cli;
use in2http::lifecycle;
use in2http::observability::logging;
use in2http::StartupError;

// A returned error is printed once to stderr by the runtime and exits 1.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Exits 0 on --help/--version and 2 on bad flags.
    let cli = Cli::parse();

    logging::init();

    tracing::info!("in2http v{} starting", env!("CARGO_PKG_VERSION"));

    let config = cli.into_config()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        header_specs = config.headers.len(),
        "Configuration loaded"
    );

    let ready = lifecycle::initialize(&config, tokio::io::stdin()).await?;

    // Serves until the process is killed.
    ready.serve(std::future::pending()).await
}
