//! Headless browser session handle.
//!
//! Wraps a `fantoccini` WebDriver client behind the small set of operations
//! the extractors need: navigate, advisory element wait, page-source
//! snapshot, and positional click. The session is owned exclusively by the
//! orchestrator for the duration of one run and released exactly once via
//! [`BrowserSession::close`].
//!
//! The WebDriver service itself (chromedriver or compatible) is an external
//! collaborator; this module only connects to an already-running endpoint.

use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, instrument};
use webdriver::capabilities::Capabilities;

/// Exclusive handle on one headless browser session.
pub struct BrowserSession {
    client: Client,
}

impl BrowserSession {
    /// Connect to a running WebDriver service and start a headless session.
    ///
    /// # Arguments
    ///
    /// * `webdriver_url` - Endpoint of the WebDriver service, e.g.
    ///   `http://localhost:9515` for chromedriver.
    ///
    /// # Errors
    ///
    /// Fails if the service is unreachable or refuses the session. Callers
    /// treat this as fatal: there is no partial result without a browser.
    #[instrument(level = "info", skip_all, fields(%webdriver_url))]
    pub async fn connect(webdriver_url: &str) -> Result<Self, Box<dyn Error>> {
        let mut caps = Capabilities::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({
                "args": ["--headless", "--disable-gpu", "--window-size=1280,1024"]
            }),
        );

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;

        Ok(Self { client })
    }

    /// Navigate the session to `url`.
    pub async fn goto(&self, url: &str) -> Result<(), Box<dyn Error>> {
        self.client.goto(url).await?;
        Ok(())
    }

    /// Wait up to `wait` for an element matching `css` to become present.
    ///
    /// Advisory only: expiry is reported as `false`, never as an error, and
    /// callers are expected to attempt extraction regardless.
    pub async fn is_element_present(&self, css: &str, wait: Duration) -> bool {
        let present = self
            .client
            .wait()
            .at_most(wait)
            .for_element(Locator::Css(css))
            .await
            .is_ok();
        debug!(selector = css, present, "Element presence check");
        present
    }

    /// Snapshot the rendered page markup.
    pub async fn source(&self) -> Result<String, Box<dyn Error>> {
        let html = self.client.source().await?;
        Ok(html)
    }

    /// Click the `index`-th element matching `css` (0-based).
    ///
    /// # Errors
    ///
    /// A missing index is an error, not an empty result: the caller asked
    /// for a specific element and the page does not have it.
    pub async fn click_nth(&self, css: &str, index: usize) -> Result<(), Box<dyn Error>> {
        let elements = self.client.find_all(Locator::Css(css)).await?;
        let count = elements.len();
        let element = elements
            .into_iter()
            .nth(index)
            .ok_or_else(|| format!("no element at index {index} for selector `{css}` ({count} found)"))?;
        element.click().await?;
        Ok(())
    }

    /// Close the underlying browser session.
    ///
    /// Consumes the handle so the session cannot be used after release.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.client.close().await?;
        Ok(())
    }
}
