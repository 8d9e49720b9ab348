/// Synchronous download of the country boundary dataset.
///
/// One plain GET per run: non-2xx responses are errors and nothing is
/// retried. The body is decoded into a [`FeatureCollection`].
///
/// Only connecting is time-limited by default. The body download (about 20 MB)
/// runs to completion however slow the link is, unless a request timeout is
/// configured.
///
/// Typical usage:
/// ```no_run
/// # use country_geojson::Client;
/// let client = Client::new()?;
/// let download = client.fetch(country_geojson::config::DEFAULT_URL)?;
/// println!("{} features", download.collection.len());
/// # Ok::<(), country_geojson::Error>(())
/// ```
use crate::error::{Error, Result};
use crate::models::FeatureCollection;
use reqwest::blocking::{Client as HttpClient, ClientBuilder};
use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

/// Decoded body plus its raw size in bytes.
#[derive(Debug, Clone)]
pub struct Download {
    pub collection: FeatureCollection,
    pub bytes: usize,
}

/// HTTP builder with the crate defaults: 10 s connect timeout, at most 5
/// redirects. `request_timeout` caps the whole request including the body;
/// `None` leaves it unbounded (reqwest's blocking default would be 30 s).
pub fn http_builder(request_timeout: Option<Duration>) -> ClientBuilder {
    HttpClient::builder()
        .timeout(request_timeout)
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(5))
        .user_agent(concat!("country_geojson/", env!("CARGO_PKG_VERSION")))
}

impl Client {
    /// Client without an overall request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(request_timeout: Option<Duration>) -> Result<Self> {
        let http = http_builder(request_timeout).build()?;
        Ok(Self { http })
    }

    /// Wrap a preconfigured HTTP client (custom proxy, TLS or timeout settings).
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET `url` and decode the body as a feature collection.
    pub fn fetch(&self, url: &str) -> Result<Download> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = resp.bytes()?;
        log::debug!("received {} bytes", body.len());
        let collection = FeatureCollection::from_slice(&body)?;
        Ok(Download {
            collection,
            bytes: body.len(),
        })
    }
}
