//! Populate the listing table with synthetic listings owned by existing users.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, Write};

use backend::domain::DEFAULT_LISTING_COUNT;
use backend::listing_seeding::{
    ListingSeedSettings, SeedCommandOptions, SeedRunError, run_listing_seed,
};
use backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `seed-listings` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-listings",
    about = "Create synthetic listings owned by randomly chosen existing users",
    version
)]
struct CliArgs {
    /// Number of listings to create.
    #[arg(long, value_name = "count", default_value_t = DEFAULT_LISTING_COUNT)]
    number: usize,
    /// Delete all existing listings before creating new ones.
    #[arg(long)]
    delete: bool,
    /// RNG seed for a reproducible run. A random seed is logged when omitted.
    #[arg(long, value_name = "u64")]
    seed: Option<u64>,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Apply pending schema migrations before seeding.
    #[arg(long)]
    migrate: bool,
}

impl CliArgs {
    fn options(&self) -> SeedCommandOptions {
        SeedCommandOptions {
            count: self.number,
            delete_existing: self.delete,
            rng_seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = CliArgs::parse();
    let database_url =
        resolve_database_url(args.database_url.clone(), env::var("DATABASE_URL").ok())?;
    let settings = ListingSeedSettings::load_from_environment()
        .map_err(|source| SeedRunError::Settings { source })?;

    if args.migrate {
        run_migrations(&database_url).map_err(SeedRunError::from)?;
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build seed-listings runtime")?;
    let options = args.options();
    let outcome = runtime.block_on(async {
        let pool = DbPool::new(PoolConfig::new(&database_url)).await?;
        Ok::<_, SeedRunError>(run_listing_seed(&pool, &settings, options).await?)
    })?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Successfully created {} listings.", outcome.created)
        .wrap_err("failed to write summary")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn resolve_database_url(explicit: Option<String>, from_env: Option<String>) -> Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(eyre!("--database-url must not be empty when provided"));
        }
        return Ok(value);
    }

    let from_env =
        from_env.ok_or_else(|| eyre!("database URL missing: set --database-url or DATABASE_URL"))?;
    if from_env.trim().is_empty() {
        return Err(eyre!("DATABASE_URL must not be empty"));
    }
    Ok(from_env)
}
