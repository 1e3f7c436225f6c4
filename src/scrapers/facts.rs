//! Facts scraper for the Galaxy Facts Mars comparison table.
//!
//! Unlike the other two extractors this one performs a plain document fetch:
//! the table is present in the static HTML, so no browser session is needed.
//! The first table on the page is a Mars/Earth comparison; its columns are
//! renamed to `Description`, `Mars`, `Earth` and the result is re-serialized
//! as a styled fragment ready to embed in a larger page.

use scraper::{Html, Selector};
use std::error::Error;
use tracing::{info, instrument, warn};

const FACTS_URL: &str = "https://galaxyfacts-mars.com";

const FACTS_HEADERS: [&str; 3] = ["Description", "Mars", "Earth"];

/// Fetch and re-render the Mars/Earth comparison table.
///
/// The entire fetch/parse/render pipeline sits behind a single catch-all
/// boundary: an unreachable host, a page without tables, or a table too
/// narrow to re-head all collapse to `None`. Nothing escapes to the caller.
#[instrument(level = "info")]
pub async fn mars_facts() -> Option<String> {
    match fetch_facts_table().await {
        Ok(fragment) => {
            info!(bytes = fragment.len(), "Rendered facts table");
            Some(fragment)
        }
        Err(e) => {
            warn!(error = %e, url = FACTS_URL, "Facts extraction failed; degrading to empty");
            None
        }
    }
}

async fn fetch_facts_table() -> Result<String, Box<dyn Error>> {
    let html = reqwest::get(FACTS_URL).await?.text().await?;
    let rows = parse_first_table(&html).ok_or("no table in facts page")?;
    render_facts_table(&rows).ok_or_else(|| "facts table has fewer than three columns".into())
}

/// Cell text of every row of the first table in the document.
fn parse_first_table(html: &str) -> Option<Vec<Vec<String>>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let table = document.select(&table_selector).next()?;
    let rows = table
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect::<Vec<String>>()
        })
        .collect::<Vec<_>>();

    if rows.is_empty() { None } else { Some(rows) }
}

/// Re-head the table with the fixed column names and serialize it.
///
/// The table's own first row is treated as its header and replaced by
/// `Description`/`Mars`/`Earth`; remaining rows become the body, keyed by
/// their first cell. Surplus columns are dropped. Returns `None` when any
/// row is narrower than three cells, since the rename would be meaningless.
fn render_facts_table(rows: &[Vec<String>]) -> Option<String> {
    let (header, body) = rows.split_first()?;
    if header.len() < FACTS_HEADERS.len() {
        return None;
    }

    let mut out = String::from("<table border=\"1\" class=\"table table-striped\">\n");
    out.push_str("  <thead>\n    <tr>");
    for name in FACTS_HEADERS {
        out.push_str(&format!("<th>{name}</th>"));
    }
    out.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for row in body {
        if row.len() < FACTS_HEADERS.len() {
            return None;
        }
        out.push_str(&format!(
            "    <tr><th>{}</th><td>{}</td><td>{}</td></tr>\n",
            escape(&row[0]),
            escape(&row[1]),
            escape(&row[2])
        ));
    }

    out.push_str("  </tbody>\n</table>");
    Some(out)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
