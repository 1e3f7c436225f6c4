//! Orchestrator: one browser session, three extractors, one record.
//!
//! [`scrape_all`] owns the browser session for the whole run. The extractors
//! execute strictly in sequence — news, featured image, facts — and the
//! session is released exactly once on every exit path, including when an
//! extractor error is about to propagate.

use crate::browser::BrowserSession;
use crate::models::ScrapeResult;
use crate::scrapers::{facts, featured_image, news};
use chrono::Utc;
use std::error::Error;
use tracing::{error, info, instrument};

/// Run the full scrape and assemble the result record.
///
/// # Arguments
///
/// * `webdriver_url` - Endpoint of the WebDriver service backing the
///   headless browser session.
///
/// # Errors
///
/// Fails if the browser session cannot be acquired, or if an extractor hits
/// a failure its own boundary does not absorb (navigation, click). No
/// partial record is returned in either case, and the session — once
/// acquired — is always released.
#[instrument(level = "info", skip_all)]
pub async fn scrape_all(webdriver_url: &str) -> Result<ScrapeResult, Box<dyn Error>> {
    let session = BrowserSession::connect(webdriver_url).await?;
    info!(%webdriver_url, "Browser session acquired");

    let outcome = scrape_with_session(&session).await;

    // Release happens before the outcome is surfaced, so a propagating
    // extractor error cannot leak the browser process.
    if let Err(e) = session.close().await {
        error!(error = %e, "Failed to close browser session");
    }

    outcome
}

async fn scrape_with_session(session: &BrowserSession) -> Result<ScrapeResult, Box<dyn Error>> {
    let (news_title, news_paragraph) = news::latest_story(session).await?;
    let featured_image = featured_image::featured_image(session).await?;
    let facts = facts::mars_facts().await;

    let result = ScrapeResult {
        news_title,
        news_paragraph,
        featured_image,
        facts,
        last_modified: Utc::now(),
    };
    info!(
        has_news = result.news_title.is_some(),
        has_image = result.featured_image.is_some(),
        has_facts = result.facts.is_some(),
        "Assembled scrape result"
    );

    Ok(result)
}
