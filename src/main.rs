//! Pokedex - An interactive PokeAPI client
//!
//! Runs the REPL on stdin/stdout with a shared TTL response cache.

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Cli, CommandRegistry, Config, PokeApiClient, ResponseCache, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables and CLI flags
/// 3. Create the response cache, which starts its reaper
/// 4. Build the command registry and session
/// 5. Run the REPL until `exit` or end of input
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_cli(&cli);
    config.validate()?;
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, page_size={}, timeout={}s",
        config.base_url, config.cache_interval, config.page_size, config.request_timeout
    );

    let cache = ResponseCache::new(config.cache_interval());
    let client = PokeApiClient::new(&config, cache.clone())?;
    let registry = CommandRegistry::standard();
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = pokedex::repl::run(&registry, &mut session, stdin, &mut stdout).await;

    let stats = cache.stats().await;
    info!(
        "Cache stats: hits={}, misses={}, reaped={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.total_entries,
        stats.hit_rate()
    );
    cache.shutdown().await;

    outcome?;
    Ok(())
}
