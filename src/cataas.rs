//! cataas.com API integration.
//!
//! This module builds query URLs for the cat image service, issues the
//! single GET request behind the /cat command, and classifies the response
//! into a [`CatLookup`].

use serde::Deserialize;
use tracing::{info, warn};

/// Default base URL of the cat image service.
pub const DEFAULT_BASE_URL: &str = "https://cataas.com/cat";

/// A cat image the service knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatImage {
    /// Identifier of the image, used to build the raw image URL
    pub id: String,
    /// Tags attached to the image (may be empty)
    pub tags: Vec<String>,
}

/// JSON metadata body the service returns for `?json=true` queries.
#[derive(Deserialize)]
struct CatMetadata {
    #[serde(rename = "_id")]
    id: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Outcome of a single cat image query.
///
/// Exactly one variant describes each query; there is no partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatLookup {
    /// The service returned usable image metadata.
    Found(CatImage),
    /// The service answered 200 but the body carried no `_id`. The /cat
    /// command sends no reply at all in this case.
    MissingId,
    /// The service answered 404, e.g. no image matches the requested tags.
    NotFound,
    /// The service answered with a status other than 200 or 404.
    UnexpectedStatus(u16),
    /// The request itself failed, or the body could not be decoded.
    TransportError(String),
}

/// Build the metadata query URL for an optional tag filter.
///
/// Tags are inserted as a single path segment with all spaces removed, so
/// `"orange cat"` queries the `orangecat` tag path. The `json=true` flag
/// asks the service for metadata instead of the raw image bytes.
pub fn build_query_url(base: &str, tags: Option<&str>) -> String {
    let mut url = base.to_string();
    if let Some(tags) = tags.filter(|t| !t.is_empty()) {
        url.push('/');
        url.push_str(&tags.replace(' ', ""));
    }
    url.push_str("?json=true");
    url
}

/// Build the raw image URL for a known image id.
pub fn image_url(base: &str, id: &str) -> String {
    format!("{}/{}", base, id)
}

/// Query the cat image service for a random image.
///
/// # Arguments
///
/// * `client` - HTTP client to use for the request
/// * `base_url` - Base URL of the service
/// * `tags` - Optional tag filter, inserted into the URL path
///
/// # Returns
///
/// Returns a [`CatLookup`] describing the outcome. Exactly one GET request
/// is issued per call; there are no retries.
///
/// # Examples
///
/// ```no_run
/// use purrfetch::cataas::{fetch_cat, CatLookup, DEFAULT_BASE_URL};
///
/// # async fn example() {
/// let client = reqwest::Client::new();
/// match fetch_cat(&client, DEFAULT_BASE_URL, Some("cute")).await {
///     CatLookup::Found(cat) => println!("Found cat {}", cat.id),
///     other => println!("No cat today: {:?}", other),
/// }
/// # }
/// ```
pub async fn fetch_cat(client: &reqwest::Client, base_url: &str, tags: Option<&str>) -> CatLookup {
    let url = build_query_url(base_url, tags);
    info!("Cat lookup: {}", url);

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => return CatLookup::TransportError(format!("Request failed: {}", e)),
    };

    match response.status().as_u16() {
        200 => match response.json::<CatMetadata>().await {
            Ok(CatMetadata { id: Some(id), tags }) => CatLookup::Found(CatImage { id, tags }),
            Ok(CatMetadata { id: None, .. }) => CatLookup::MissingId,
            Err(e) => CatLookup::TransportError(format!("Invalid response body: {}", e)),
        },
        404 => CatLookup::NotFound,
        status => {
            warn!("Cat service returned non-200 response: {}", status);
            CatLookup::UnexpectedStatus(status)
        }
    }
}
