mod config;
mod models;
mod scrapers;
mod storage;

use anyhow::{Context, Result};
use config::Config;
use scrapers::{ApartmentsScraper, HttpFetcher};
use storage::csv::ListingCsvWriter;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env()?;
    info!(
        searches = config.search_urls.len(),
        output = %config.output_file,
        "starting apartment scrape"
    );

    let scraper = ApartmentsScraper::new(HttpFetcher::new()?);
    let total = write_listings(&config, &scraper).await?;
    info!(total, output = %config.output_file, "finished writing listings");

    if let Some(bucket) = &config.s3_bucket {
        storage::s3::upload_file(bucket, &config.output_file).await?;
    }

    Ok(())
}

/// Crawls every configured search in order, streaming rows into the
/// output file. The writer owns the file handle; both are released when
/// this returns, on success and on error alike.
async fn write_listings(
    config: &Config,
    scraper: &ApartmentsScraper<HttpFetcher>,
) -> Result<usize> {
    let file = std::fs::File::create(&config.output_file)
        .with_context(|| format!("Failed to create {}", config.output_file))?;
    let mut writer = ListingCsvWriter::new(file)?;

    let mut total = 0;
    for url in &config.search_urls {
        info!(%url, "crawling search results");
        total += scraper.crawl(url, &mut writer).await?;
    }

    writer.flush()?;
    Ok(total)
}
