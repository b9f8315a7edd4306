use crate::error::DirectoryError;
use crate::error::Result;
use crate::model::DirectoryUser;
use crate::model::parse_directory_body;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderValue;
use std::time::Duration;
use tracing::debug;
use tracing::warn;
use url::Url;

pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can list the users of a remote directory.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>>;
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_DIRECTORY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Read-only client for a public user directory: a single unauthenticated
/// GET returning a JSON array.
#[derive(Clone, Debug)]
pub struct DirectoryClient {
    http: reqwest::Client,
    url: Url,
}

impl DirectoryClient {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        let url = Url::parse(&opts.url).map_err(|source| DirectoryError::InvalidUrl {
            url: opts.url.clone(),
            source,
        })?;
        let http = reqwest::Client::builder().timeout(opts.timeout).build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DirectorySource for DirectoryClient {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>> {
        debug!(url = %self.url, "fetching directory users");
        let resp = self
            .http
            .get(self.url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, "directory request rejected");
            return Err(DirectoryError::Status { status, body });
        }
        let body = resp.bytes().await?;
        let users = parse_directory_body(&body)?;
        debug!(count = users.len(), "directory users received");
        Ok(users)
    }
}
