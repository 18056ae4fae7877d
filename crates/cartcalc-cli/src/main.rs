mod run;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cartcalc_core::DiscountSpec;
use cartcalc_fetcher::CartClient;

/// Reads a discount specification as JSON on stdin, fetches the cart it
/// names and prints `total_amount` and `total_after_discount` as JSON.
#[derive(Debug, Parser)]
#[command(name = "cartcalc", version)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    Cli::parse();

    let config = cartcalc_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let spec = DiscountSpec::from_reader(std::io::stdin().lock())
        .context("failed to read discount specification from stdin")?;
    let client = CartClient::from_config(&config).context("failed to build carts client")?;

    let totals = run::compute_totals(&client, &spec).await?;
    println!("{}", totals.to_pretty_json()?);

    Ok(())
}
