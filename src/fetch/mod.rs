//! The fetch pipeline (impure, background-thread only).
//!
//! One run produces one populated [`ComicRecord`] from the remote source,
//! in stages that each fail independently: document request, body read,
//! metadata extraction, image download, decode, two-tone transform. The
//! render thread never calls into this module directly; the refresh
//! controller spawns it through [`ContentFetcher`].

pub mod meta;
pub mod raster;

use crate::model::{AppError, ComicRecord, FetchError};
use reqwest::blocking::Client;
use tracing::debug;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("comicframe/", env!("CARGO_PKG_VERSION"));

/// The capability the refresh controller spawns onto a worker thread.
///
/// `Clone + Send` because the controller keeps its copy for the next
/// interval while the worker owns one for the duration of the attempt.
pub trait ContentFetcher: Clone + Send + 'static {
    /// Run the pipeline once, blocking until success or failure.
    fn fetch(&self) -> Result<ComicRecord, FetchError>;
}

/// The real fetcher: one fixed source URL, one HTTP client.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
    url: String,
    max_image: u32,
}

impl SourceFetcher {
    /// Build the fetcher and its HTTP client.
    ///
    /// The client carries no request timeout: an in-flight fetch always
    /// runs to completion, and a stalled call stalls refresh without ever
    /// blocking rendering (it lives on the worker thread).
    pub fn new(url: String, max_image: u32) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None)
            .build()
            .map_err(|err| AppError::HttpClient {
                reason: err.to_string(),
            })?;
        Ok(Self {
            client,
            url,
            max_image,
        })
    }
}

impl ContentFetcher for SourceFetcher {
    fn fetch(&self) -> Result<ComicRecord, FetchError> {
        fetch_card(&self.client, &self.url, self.max_image)
    }
}

/// Run the pipeline stages against `url`.
///
/// A record without an image URL is a valid text-only success; every
/// other stage failure maps to its own [`FetchError`] variant so the log
/// pinpoints where an attempt died.
pub fn fetch_card(client: &Client, url: &str, max_image: u32) -> Result<ComicRecord, FetchError> {
    debug!(url, "fetching source document");
    let response = client.get(url).send().map_err(|err| FetchError::Request {
        reason: err.to_string(),
    })?;
    let body = response.text().map_err(|err| FetchError::Read {
        reason: err.to_string(),
    })?;

    let meta = meta::page_meta(&body)?;
    if meta.image_url.is_empty() {
        debug!(id = meta.id, "document has no image; text-only record");
        return Ok(ComicRecord::fetched(meta.id, meta.title, String::new(), None));
    }

    let bytes = client
        .get(&meta.image_url)
        .send()
        .and_then(|resp| resp.bytes())
        .map_err(|err| FetchError::ImageDownload {
            url: meta.image_url.clone(),
            reason: err.to_string(),
        })?;
    let raster = raster::process_image(&bytes, max_image)?;

    debug!(
        id = meta.id,
        width = raster.width(),
        height = raster.height(),
        "record populated"
    );
    Ok(ComicRecord::fetched(
        meta.id,
        meta.title,
        meta.image_url,
        Some(raster),
    ))
}
