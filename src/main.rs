//! # Red Planet Report
//!
//! A small sequential scraper that visits three fixed Mars-themed sites and
//! assembles one record per run:
//!
//! - The latest headline and teaser from the Red Planet Science news listing
//! - The full-resolution featured image URL from the Space Images gallery
//! - The Mars/Earth comparison table from Galaxy Facts, re-rendered as HTML
//!
//! ## Usage
//!
//! ```sh
//! red_planet_report                  # text dump to stdout
//! red_planet_report --json           # machine-readable record
//! WEBDRIVER_URL=http://driver:4444 red_planet_report
//! ```
//!
//! A chromedriver-compatible WebDriver service must already be running; the
//! first two sources are rendered client side and need a real browser.
//!
//! ## Architecture
//!
//! One orchestrator ([`scrape::scrape_all`]) owns the browser session and
//! calls the three extractors in a fixed order. Structural misses degrade
//! the affected fields to `None`; the record's shape never changes.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod browser;
mod cli;
mod models;
mod scrape;
mod scrapers;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("red_planet_report starting up");

    let args = Cli::parse();
    debug!(?args.webdriver_url, ?args.json, "Parsed CLI arguments");

    let result = scrape::scrape_all(&args.webdriver_url).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{result}");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
