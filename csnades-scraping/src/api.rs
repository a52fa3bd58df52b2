use std::time::Duration;

use anyhow::bail;
use log::debug;

pub fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("csnades-scraping/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
}

/// Fetches a page and returns its body as text. Non-success responses turn
/// into an error naming the status code and the requested URL.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    debug!("GET {url}");
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        bail!("Server returned {} for {url}", response.status());
    }
    Ok(response.text().await?)
}
