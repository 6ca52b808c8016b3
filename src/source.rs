//! Dataset retrieval.

use crate::error::{Error, Result};

/// Retrieves a dataset document by location.
///
/// `name` identifies the dataset in errors and logs; `location` is a URL or a
/// filesystem path.
pub trait DataSource {
    fn fetch(&self, name: &'static str, location: &str) -> Result<String>;
}

/// Reads `http(s)://` locations over the network and anything else from disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSource;

impl DataSource for DefaultSource {
    fn fetch(&self, name: &'static str, location: &str) -> Result<String> {
        tracing::info!(dataset = name, %location, "fetching");
        if is_remote(location) {
            fetch_remote(name, location)
        } else {
            std::fs::read_to_string(location)
                .map_err(|e| Error::Fetch { name, reason: format!("read {location}: {e}") })
        }
    }
}

#[inline]
fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(feature = "download")]
fn fetch_remote(name: &'static str, location: &str) -> Result<String> {
    crate::common::download_text(location)
        .map_err(|e| Error::Fetch { name, reason: format!("{e:#}") })
}

#[cfg(not(feature = "download"))]
fn fetch_remote(name: &'static str, location: &str) -> Result<String> {
    Err(Error::Fetch { name, reason: format!("{location}: built without the `download` feature") })
}
