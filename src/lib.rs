#[cfg(feature = "napi-export")]
use napi_derive::napi;

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod resolve;
pub mod scan;

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use extract::extract_links;
pub use fetch::fetch_links;
pub use resolve::{resolve, ResolveError};

#[cfg(feature = "napi-export")]
#[napi(js_name = "fetchLinks")]
pub async fn fetch_links_js(url: String) -> napi::Result<Vec<String>> {
    fetch_links(&url, &FetchConfig::default())
        .await
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[cfg(feature = "napi-export")]
#[napi(js_name = "extractLinks")]
pub fn extract_links_js(html: String, base: String) -> Vec<String> {
    extract_links(html.as_bytes(), &base)
}
