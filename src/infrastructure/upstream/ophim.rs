use super::{CatalogSource, Listing, ListingPage, UpstreamError, UPSTREAM_TIMEOUT};
use crate::domain::catalog::CatalogItem;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

const LATEST_PATH: &str = "/v1/api/danh-sach/phim-moi-cap-nhat";
const CATEGORY_PATH: &str = "/v1/api/the-loai";
const COUNTRY_PATH: &str = "/v1/api/quoc-gia";
const YEAR_PATH: &str = "/v1/api/nam-phat-hanh";
const SEARCH_PATH: &str = "/v1/api/tim-kiem";
const DETAIL_PATH: &str = "/phim";

const USER_AGENT: &str = "MotPhim/1.0";

/// HTTP client for the OPhim catalog API.
pub struct OphimClient {
    base_url: String,
    http_client: reqwest::Client,
}

/// Listing/search payloads arrive wrapped in a `data.items` +
/// `data.params.pagination` envelope. Only the fields the proxy needs are
/// decoded; items keep their unknown fields via `CatalogItem`'s flatten.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    items: Vec<CatalogItem>,
    params: Option<EnvelopeParams>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeParams {
    pagination: Option<EnvelopePagination>,
}

#[derive(Debug, Deserialize)]
struct EnvelopePagination {
    #[serde(rename = "totalItems", default)]
    total_items: u64,
}

impl Envelope {
    fn into_listing_page(self) -> ListingPage {
        let data = self.data.unwrap_or(EnvelopeData {
            items: Vec::new(),
            params: None,
        });
        let total_items = data
            .params
            .and_then(|p| p.pagination)
            .map(|p| p.total_items)
            .unwrap_or(0);
        ListingPage {
            items: data.items,
            total_items,
        }
    }
}

impl OphimClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn listing_url(&self, listing: &Listing, page: u32, limit: u32) -> String {
        let path = match listing {
            Listing::Latest => LATEST_PATH.to_string(),
            Listing::Category(slug) => format!("{}/{}", CATEGORY_PATH, urlencoding::encode(slug)),
            Listing::Country(slug) => format!("{}/{}", COUNTRY_PATH, urlencoding::encode(slug)),
            Listing::Year(year) => format!("{}/{}", YEAR_PATH, year),
        };
        format!(
            "{}{}?page={}&limit={}",
            self.base_url, path, page, limit
        )
    }

    async fn fetch_envelope(&self, url: String) -> Result<ListingPage, UpstreamError> {
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        let envelope = response
            .json::<Envelope>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        Ok(envelope.into_listing_page())
    }

    async fn fetch_value(&self, url: String) -> Result<Value, UpstreamError> {
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for OphimClient {
    async fn list(
        &self,
        listing: &Listing,
        page: u32,
        limit: u32,
    ) -> Result<ListingPage, UpstreamError> {
        self.fetch_envelope(self.listing_url(listing, page, limit))
            .await
    }

    async fn search(
        &self,
        keyword: &str,
        page: u32,
        limit: u32,
    ) -> Result<ListingPage, UpstreamError> {
        let url = format!(
            "{}{}?keyword={}&page={}&limit={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(keyword),
            page,
            limit
        );
        self.fetch_envelope(url).await
    }

    async fn detail(&self, slug: &str) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            DETAIL_PATH,
            urlencoding::encode(slug)
        );
        self.fetch_value(url).await
    }

    async fn categories(&self) -> Result<Value, UpstreamError> {
        self.fetch_value(format!("{}{}", self.base_url, CATEGORY_PATH))
            .await
    }

    async fn countries(&self) -> Result<Value, UpstreamError> {
        self.fetch_value(format!("{}{}", self.base_url, COUNTRY_PATH))
            .await
    }
}
