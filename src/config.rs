use anyhow::{bail, Context, Result};

/// Run configuration, read from the environment. A `.env` file in the
/// working directory is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search-results URLs to crawl, in order.
    pub search_urls: Vec<String>,
    /// Path of the CSV file to write.
    pub output_file: String,
    /// Bucket to upload the finished file to. Unset skips the upload.
    pub s3_bucket: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let raw = std::env::var("SEARCH_URLS")
            .context("SEARCH_URLS is not set (comma-separated search result URLs)")?;
        let search_urls = parse_search_urls(&raw);
        if search_urls.is_empty() {
            bail!("SEARCH_URLS contains no URLs");
        }

        let output_file =
            std::env::var("OUTPUT_FILE").unwrap_or_else(|_| "apartments.csv".to_string());
        let s3_bucket = std::env::var("S3_BUCKET").ok();

        Ok(Self {
            search_urls,
            output_file,
            s3_bucket,
        })
    }
}

fn parse_search_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_urls() {
        let urls = parse_search_urls(
            " https://example.com/washington-dc/ , https://example.com/arlington-va/ ",
        );
        assert_eq!(
            urls,
            vec![
                "https://example.com/washington-dc/",
                "https://example.com/arlington-va/",
            ]
        );
    }

    #[test]
    fn drops_empty_entries() {
        assert_eq!(parse_search_urls("a,,b,"), vec!["a", "b"]);
        assert!(parse_search_urls("  ,").is_empty());
    }
}
