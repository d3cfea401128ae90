use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tokio::time::Duration;

use gamedex_catalog::{Game, GameDetail, Genre, Page};

use crate::credentials::ApiKey;
use crate::error::ApiError;

const BASE_URL: &str = "https://api.rawg.io/api";

/// Page size the games list is fetched with.
pub const GAMES_PAGE_SIZE: u32 = 40;

/// HTTP client for the catalog API. Every request carries the API key
/// as a query parameter; caller-supplied parameters are merged in and
/// never dropped.
pub struct CatalogClient {
    http: reqwest::Client,
    key: ApiKey,
    base_url: String,
}

impl CatalogClient {
    pub fn new(key: ApiKey) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different base URL. Used by tests against
    /// a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue a request against `path` and decode the JSON body as `T`.
    ///
    /// Non-2xx statuses and transport failures surface as one error per
    /// call; no retry is attempted.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        params: HashMap<&str, String>,
    ) -> Result<T, ApiError> {
        let mut all_params = self.base_params();
        for (k, v) in params {
            all_params.insert(k, v);
        }

        log::debug!("{} {}{}", method, self.base_url, path);
        let resp = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .query(&all_params)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::InvalidKey(
                "API key rejected by the catalog API".to_string(),
            ));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimit);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }

        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        let decoded: T = serde_json::from_str(&text)?;
        Ok(decoded)
    }

    /// GET `path` and decode the response body as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: HashMap<&str, String>,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::GET, path, params).await
    }

    /// Fetch one page of the games list.
    pub async fn list_games(&self, page: u32, page_size: u32) -> Result<Page<Game>, ApiError> {
        let mut params = HashMap::new();
        params.insert("page", page.to_string());
        params.insert("page_size", page_size.to_string());
        self.get("/games", params).await
    }

    /// Fetch the full record for a single game.
    pub async fn game(&self, id: u64) -> Result<GameDetail, ApiError> {
        self.get(&format!("/games/{id}"), HashMap::new()).await
    }

    /// Fetch the first page of the genre directory.
    pub async fn list_genres(&self) -> Result<Page<Genre>, ApiError> {
        self.get("/genres", HashMap::new()).await
    }

    fn base_params(&self) -> HashMap<&str, String> {
        let mut params = HashMap::new();
        params.insert("key", self.key.value().to_string());
        params
    }
}
