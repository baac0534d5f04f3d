use std::io::Write;

use anyhow::Result;
use chrono::Utc;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::models::{ListingSummary, OutputRow};
use crate::scrapers::detail::extract_details;
use crate::scrapers::fetch::PageFetcher;
use crate::storage::csv::ListingCsvWriter;

/// Href the site puts on the next-page link of the last results page.
const NEXT_PLACEHOLDER: &str = "javascript:void(0)";

/// One parsed search-results page.
#[derive(Debug)]
pub struct SearchPage {
    pub listings: Vec<ListingSummary>,
    pub next_url: Option<String>,
}

/// Crawls apartments.com search results and emits one CSV row per
/// listing, following pagination until the site stops offering a next
/// page.
pub struct ApartmentsScraper<F: PageFetcher> {
    fetcher: F,
}

impl<F: PageFetcher> ApartmentsScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Walks the pagination chain starting at `start_url`, writing rows in
    /// discovery order. Returns the number of rows written.
    ///
    /// Fetch failures and detail-extraction failures abort the crawl; a
    /// page without a placard container contributes no rows and ends the
    /// chain.
    pub async fn crawl<W: Write>(
        &self,
        start_url: &str,
        out: &mut ListingCsvWriter<W>,
    ) -> Result<usize> {
        let mut emitted = 0;
        let mut next = Some(start_url.to_string());

        while let Some(page_url) = next {
            debug!(url = %page_url, "fetching search results page");
            let html = self.fetcher.fetch(&page_url).await?;
            let page = parse_search_page(&html);
            info!(url = %page_url, listings = page.listings.len(), "parsed search results page");

            for summary in &page.listings {
                let detail_html = self.fetcher.fetch(&summary.url).await?;
                let record = extract_details(&detail_html)?;
                let ds = Utc::now().date_naive().to_string();
                out.write_row(&OutputRow::assemble(summary, &record, &ds))?;
                emitted += 1;
            }

            next = page.next_url;
        }

        Ok(emitted)
    }
}

/// Extracts the listing summaries and the next-page link from a
/// search-results page.
///
/// Everything is read inside the placard container; a page without one
/// has zero listings and no next page. A placard without a title link
/// (or without an href on it) is skipped outright.
pub fn parse_search_page(html: &str) -> SearchPage {
    let container_sel = Selector::parse("div.placardContainer").unwrap();
    let placard_sel = Selector::parse("article.placard").unwrap();
    let title_sel = Selector::parse("a.placardTitle").unwrap();
    let rent_sel = Selector::parse("span.altRentDisplay").unwrap();
    let phone_sel = Selector::parse("div.phone").unwrap();
    let next_sel = Selector::parse("a.next").unwrap();

    let document = Html::parse_document(html);
    let Some(container) = document.select(&container_sel).next() else {
        return SearchPage {
            listings: Vec::new(),
            next_url: None,
        };
    };

    let mut listings = Vec::new();
    for placard in container.select(&placard_sel) {
        let Some(href) = placard
            .select(&title_sel)
            .next()
            .and_then(|title| title.value().attr("href"))
        else {
            continue;
        };

        let rent = placard
            .select(&rent_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let contact = placard
            .select(&phone_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        listings.push(ListingSummary {
            url: href.to_string(),
            rent,
            contact,
        });
    }

    let next_url = container
        .select(&next_sel)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
        .filter(|href| !href.is_empty() && href != NEXT_PLACEHOLDER);

    SearchPage { listings, next_url }
}
