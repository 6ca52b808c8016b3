use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{blocking::Client, redirect::Policy};

/// Fetch a text document over HTTP(S).
pub(crate) fn download_text(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(concat!("edumap/", env!("CARGO_PKG_VERSION")))
        .redirect(Policy::limited(10))
        .timeout(Duration::from_secs(60))
        .build()?;

    client.get(url).send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned error status"))?
        .text()
        .with_context(|| format!("read body of {url}"))
}
