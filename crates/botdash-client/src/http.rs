//! `reqwest` implementation of the resource client

use botdash_core::{Account, AccountId, Bot, BotId, Stats};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::client::ResourceClient;
use crate::error::{ClientError, ClientResult};
use crate::payload::{ConnectionTest, CreateAccountRequest, CreateBotRequest, CreatedBot};

/// Default service location, matching the service's development server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Talks to the bot-management service over HTTP.
///
/// No timeouts beyond reqwest's defaults and no retries: each call either
/// returns the service's answer or a single [`ClientError`].
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    client: Client,
    base_url: Url,
}

impl HttpResourceClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// A path prefix on the base URL is preserved (`http://host/proxy` yields
    /// `http://host/proxy/api/bots`).
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client: Client::new(),
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments; each segment is
    /// percent-encoded, so ids can never escape their path position.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    reason: "URL cannot be used as a base".to_string(),
                })?;
            path.pop_if_empty();
            path.push("api");
            path.extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// Send and decode a JSON success body
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = Self::send(builder).await?;
        response.json::<T>().await.map_err(|e| {
            warn!("Malformed response body: {}", e);
            ClientError::transport(e)
        })
    }

    /// Send and discard the success body
    async fn execute(&self, builder: RequestBuilder) -> ClientResult<()> {
        Self::send(builder).await.map(|_| ())
    }

    async fn send(builder: RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = builder.send().await.map_err(|e| {
            warn!("Request failed before a response arrived: {}", e);
            ClientError::transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ClientError::from_response(status, &body);
        warn!("Service answered {}: {}", status, err);
        Err(err)
    }
}

impl ResourceClient for HttpResourceClient {
    async fn list_bots(&self) -> ClientResult<Vec<Bot>> {
        let builder = self.request(Method::GET, &["bots"])?;
        self.fetch(builder).await
    }

    async fn get_bot(&self, id: &BotId) -> ClientResult<Bot> {
        let builder = self.request(Method::GET, &["bots", id.as_str()])?;
        self.fetch(builder).await
    }

    async fn create_bot(&self, request: &CreateBotRequest) -> ClientResult<CreatedBot> {
        let builder = self.request(Method::POST, &["bots"])?.json(request);
        self.fetch(builder).await
    }

    async fn delete_bot(&self, id: &BotId) -> ClientResult<()> {
        let builder = self.request(Method::DELETE, &["bots", id.as_str()])?;
        self.execute(builder).await
    }

    async fn start_bot(&self, id: &BotId) -> ClientResult<()> {
        let builder = self.request(Method::POST, &["bots", id.as_str(), "start"])?;
        self.execute(builder).await
    }

    async fn stop_bot(&self, id: &BotId) -> ClientResult<()> {
        let builder = self.request(Method::POST, &["bots", id.as_str(), "stop"])?;
        self.execute(builder).await
    }

    async fn list_accounts(&self) -> ClientResult<Vec<Account>> {
        let builder = self.request(Method::GET, &["accounts"])?;
        self.fetch(builder).await
    }

    async fn create_account(&self, request: &CreateAccountRequest) -> ClientResult<()> {
        let builder = self.request(Method::POST, &["accounts"])?.json(request);
        self.execute(builder).await
    }

    async fn delete_account(&self, id: AccountId) -> ClientResult<()> {
        let id = id.to_string();
        let builder = self.request(Method::DELETE, &["accounts", &id])?;
        self.execute(builder).await
    }

    async fn test_account_connection(&self, id: AccountId) -> ClientResult<ConnectionTest> {
        let id = id.to_string();
        let builder = self.request(Method::GET, &["accounts", &id, "test-connection"])?;
        self.fetch(builder).await
    }

    async fn get_stats(&self) -> ClientResult<Stats> {
        let builder = self.request(Method::GET, &["stats"])?;
        self.fetch(builder).await
    }
}
