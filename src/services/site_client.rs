use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONNECTION, COOKIE, REFERER, USER_AGENT,
};
use serde::Serialize;
use thiserror::Error;

use crate::configuration::ScraperSettings;

// Glassdoor serves a bot wall to anything that does not look like a desktop
// browser, and the tldp cookie keeps it on the desktop layout.
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER_URL: &str = "https://www.glassdoor.com/";
const LISTING_COOKIE: &str = "tldp=1";

#[derive(Debug, Error)]
#[error("request failed: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// A fetched HTTP response, reduced to what the pipeline inspects.
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// The two requests the pipeline makes against the listings site. The
/// orchestrator and drivers only ever talk to this trait, so tests can swap
/// in canned pages.
#[async_trait::async_trait]
pub trait ListingSite: Send + Sync {
    async fn typeahead(&self, input: &str) -> Result<FetchedPage, FetchError>;
    async fn listing_page(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

#[derive(Serialize)]
struct TypeaheadQuery<'a> {
    #[serde(rename = "numSuggestions")]
    num_suggestions: u8,
    source: &'a str,
    version: &'a str,
    rf: &'a str,
    fallback: &'a str,
    input: &'a str,
}

pub struct GlassdoorClient {
    client: reqwest::Client,
    suggest_url: String,
}

impl GlassdoorClient {
    pub fn new(settings: &ScraperSettings) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build the HTTP client");

        GlassdoorClient {
            client,
            suggest_url: settings.suggest_url.clone(),
        }
    }
}

#[async_trait::async_trait]
impl ListingSite for GlassdoorClient {
    async fn typeahead(&self, input: &str) -> Result<FetchedPage, FetchError> {
        let query = TypeaheadQuery {
            num_suggestions: 8,
            source: "GD_V2",
            version: "NEW",
            rf: "full",
            fallback: "token",
            input,
        };

        let response = self
            .client
            .get(&self.suggest_url)
            .query(&query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }

    async fn listing_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .header(COOKIE, LISTING_COOKIE)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}
