//! GitHub REST adapter for the issue source port.

use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response, StatusCode};
use tracing::debug;

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::Issue;
use crate::domain::ports::IssueSource;

/// Configuration for the GitHub API client.
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Bearer token for authentication.
    pub token: String,

    /// Base URL for the API (overridable for tests).
    pub base_url: String,

    /// Page size for the issues listing.
    pub per_page: u32,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: "https://api.github.com".to_string(),
            per_page: 100,
        }
    }
}

/// HTTP client for the GitHub issues API.
///
/// Authenticates with a bearer token and follows `Link: rel="next"`
/// pagination until the listing is exhausted. No retry, no rate-limit
/// handling: any failure propagates to the caller as-is.
pub struct GithubClient {
    http_client: ReqwestClient,
    base_url: String,
    per_page: u32,
}

impl GithubClient {
    /// Build a client with the token installed as a default header.
    pub fn new(config: GithubClientConfig) -> SyncResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.token))
                .map_err(|e| SyncError::Config(format!("invalid GitHub token: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("sheetsync"),
        );

        let http_client = ReqwestClient::builder()
            .default_headers(headers)
            .build()
            .map_err(SyncError::Network)?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            per_page: config.per_page,
        })
    }

    async fn fetch_page(&self, url: &str) -> SyncResult<Response> {
        debug!("GET {url}");
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::classify_error(status, response).await);
        }
        Ok(response)
    }

    /// Map a non-success status to the error taxonomy.
    async fn classify_error(status: StatusCode, response: Response) -> SyncError {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_string());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SyncError::Auth(format!("GitHub rejected the token ({status}): {body}"))
            }
            _ => SyncError::Remote {
                status: status.as_u16(),
                body,
            },
        }
    }
}

/// Extract the `rel="next"` target from a `Link` response header, if any.
fn next_page_url(headers: &header::HeaderMap) -> Option<String> {
    let link = headers.get(header::LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        if params.contains("rel=\"next\"") {
            Some(
                target
                    .trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            )
        } else {
            None
        }
    })
}

#[async_trait]
impl IssueSource for GithubClient {
    async fn fetch_open_issues(&self, owner: &str, repo: &str) -> SyncResult<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut url = format!(
            "{}/repos/{owner}/{repo}/issues?state=open&per_page={}&page=1",
            self.base_url, self.per_page
        );

        loop {
            let response = self.fetch_page(&url).await?;
            let next = next_page_url(response.headers());
            let page: Vec<Issue> = response.json().await?;
            debug!("fetched page with {} issues", page.len());
            issues.extend(page);

            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(issues)
    }
}
