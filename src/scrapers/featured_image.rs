//! Featured-image scraper for the Space Images Mars gallery.
//!
//! The gallery only exposes the full-resolution image after a reveal click,
//! so extraction is two-phase: activate the reveal button, then read the
//! `img.fancybox-image` element that the click injects into the page. The
//! `fancybox-image` class is present only on the enlarged version.

use crate::browser::BrowserSession;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{info, instrument, warn};
use url::Url;

const GALLERY_URL: &str = "https://spaceimages-mars.com";

/// Position of the reveal button among all `button` elements on the page.
/// Index 0 opens the nav menu; index 1 enlarges the featured image.
const FULL_IMAGE_BUTTON_INDEX: usize = 1;

/// Extract the absolute URL of the gallery's full-resolution featured image.
///
/// # Returns
///
/// `Ok(None)` when the post-click markup carries no full-size image element.
///
/// # Errors
///
/// Navigation and click failures (including a page without a second button)
/// propagate to the orchestrator.
#[instrument(level = "info", skip_all)]
pub async fn featured_image(session: &BrowserSession) -> Result<Option<String>, Box<dyn Error>> {
    session.goto(GALLERY_URL).await?;
    session.click_nth("button", FULL_IMAGE_BUTTON_INDEX).await?;

    let html = session.source().await?;
    match parse_full_size_image(&html) {
        Some(relative) => {
            let absolute = absolute_image_url(&relative)?;
            info!(url = %absolute, "Extracted featured image");
            Ok(Some(absolute))
        }
        None => {
            warn!(url = GALLERY_URL, "No full-size image in post-click markup");
            Ok(None)
        }
    }
}

/// Relative `src` of the enlarged image, if the reveal succeeded.
fn parse_full_size_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let full_size_selector = Selector::parse("img.fancybox-image").unwrap();

    document
        .select(&full_size_selector)
        .next()?
        .value()
        .attr("src")
        .map(str::to_string)
}

/// Resolve a site-relative image path against the gallery origin.
fn absolute_image_url(relative: &str) -> Result<String, Box<dyn Error>> {
    let resolved = Url::parse(GALLERY_URL)?.join(relative)?;
    Ok(resolved.to_string())
}
