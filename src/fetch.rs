//! HTTP transport: fetch a page, then hand its body to the extractor.

use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::extract::extract_links;

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Location after redirects; relative links resolve against this.
    pub url: Url,
    pub body: Vec<u8>,
}

/// Build an HTTP client from `config`.
pub fn client(config: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

/// GET `url`. Any non-success status is an error; nothing is retried.
pub async fn fetch_page(client: &Client, url: Url) -> Result<FetchedPage> {
    debug!("Fetching {url}");
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let final_url = response.url().clone();
    let body = response.bytes().await?.to_vec();
    debug!("Fetched {} bytes from {final_url}", body.len());

    Ok(FetchedPage {
        url: final_url,
        body,
    })
}

/// Fetch `url` and extract its anchor links as absolute URLs.
pub async fn fetch_links(url: &str, config: &FetchConfig) -> Result<Vec<String>> {
    let url = Url::parse(url)?;
    let client = client(config)?;
    let page = fetch_page(&client, url).await?;

    let links = extract_links(page.body.as_slice(), page.url.as_str());
    info!("Found {} links on {}", links.len(), page.url);
    Ok(links)
}
