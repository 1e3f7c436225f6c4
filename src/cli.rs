//! Command-line interface definitions.
//!
//! Every option has a default, so a bare `red_planet_report` invocation
//! runs the full scrape against a local chromedriver and dumps the record
//! to standard output.

use clap::Parser;

/// Command-line arguments for the scraper.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// WebDriver endpoint backing the headless browser session
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Emit the result as JSON instead of the human-readable dump
    #[arg(long)]
    pub json: bool,
}
