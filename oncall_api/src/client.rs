//! HTTP client for the Grafana OnCall public API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::errors::{ApiError, Error, Result};
use crate::query::Query;
use crate::rate_limiter::{RateLimit, RateLimiter};
use crate::retry::{self, RetryPolicy, Transient};
use crate::types::PaginatedResponse;

/// Path segment every base URL is normalized to end with.
pub const API_VERSION_PATH: &str = "api/v1/";

pub const DEFAULT_USER_AGENT: &str = concat!("oncall-api-rust/", env!("CARGO_PKG_VERSION"));

/// Forwarded so the OnCall backend can resolve the Grafana stack.
pub const GRAFANA_URL_HEADER: &str = "x-grafana-url";

pub const ENV_ONCALL_URL: &str = "GRAFANA_ONCALL_URL";
pub const ENV_ONCALL_TOKEN: &str = "GRAFANA_ONCALL_TOKEN";
pub const ENV_GRAFANA_URL: &str = "GRAFANA_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const JSON_CONTENT_TYPE: &str = "application/json";

/// Settings a [`Client`] is built from.
#[derive(Clone)]
pub struct ClientConfig {
    /// OnCall API root, with or without the `api/v1/` suffix.
    pub base_url: String,
    /// Sent verbatim as `Authorization`. May be empty.
    pub token: String,
    pub grafana_url: Option<String>,
    pub user_agent: String,
    pub retry: RetryPolicy,
    /// `None` disables client-side rate limiting.
    pub rate_limit: Option<RateLimit>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: token.to_string(),
            grafana_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
            rate_limit: Some(RateLimit::default()),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Reads `GRAFANA_ONCALL_URL` (required), `GRAFANA_ONCALL_TOKEN` and
    /// `GRAFANA_URL` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_ONCALL_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", ENV_ONCALL_URL)))?;
        let token = lookup(ENV_ONCALL_TOKEN).unwrap_or_default();
        let mut config = Self::new(&base_url, &token);
        config.grafana_url = lookup(ENV_GRAFANA_URL).filter(|v| !v.trim().is_empty());
        Ok(config)
    }

    pub fn with_grafana_url(mut self, grafana_url: &str) -> Self {
        self.grafana_url = Some(grafana_url.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    pub fn without_rate_limit(mut self) -> Self {
        self.rate_limit = None;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("grafana_url", &self.grafana_url)
            .field("user_agent", &self.user_agent)
            .field("retry", &self.retry)
            .field("rate_limit", &self.rate_limit)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A fully resolved request, inspectable before it is sent.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// What a request carries besides its path.
pub enum RequestOptions<'a> {
    None,
    /// Query-string filters, for GET and DELETE.
    Query(&'a dyn Query),
    /// Serialized JSON body, for POST and PUT.
    Json(Vec<u8>),
}

impl<'a> RequestOptions<'a> {
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self> {
        serde_json::to_vec(body)
            .map(RequestOptions::Json)
            .map_err(Error::Encode)
    }
}

struct Inner {
    http: reqwest::Client,
    base_url: Url,
    headers: HeaderMap,
    user_agent: String,
    grafana_url: Option<String>,
    retry: RetryPolicy,
    limiter: Option<RateLimiter>,
}

/// Async client for the OnCall API.
///
/// Cloning is cheap: clones share the connection pool and the rate limiter.
/// Resource services are reached through accessors such as
/// [`Client::alert_groups`].
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
    cancel: CancellationToken,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("grafana_url", &self.inner.grafana_url)
            .field("retry", &self.inner.retry)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client with default retry, rate limit and timeout settings.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, token))
    }

    /// Like [`Client::new`], additionally sending `X-Grafana-URL` on every request.
    pub fn new_with_grafana_url(base_url: &str, token: &str, grafana_url: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, token).with_grafana_url(grafana_url))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = resolve_base_url(&config.base_url)?;

        let grafana_url = match config.grafana_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                Url::parse(raw).map_err(|e| {
                    Error::Config(format!("invalid Grafana URL '{}': {}", raw, e))
                })?;
                Some(raw.to_string())
            }
            _ => None,
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        let mut authorization = HeaderValue::from_str(&config.token).map_err(|_| {
            Error::Config("token contains characters not allowed in a header".into())
        })?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| Error::Config(format!("invalid user agent '{}'", config.user_agent)))?,
        );
        if let Some(grafana_url) = &grafana_url {
            headers.insert(
                HeaderName::from_static(GRAFANA_URL_HEADER),
                HeaderValue::from_str(grafana_url)
                    .map_err(|_| Error::Config(format!("invalid Grafana URL '{}'", grafana_url)))?,
            );
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                headers,
                user_agent: config.user_agent,
                grafana_url,
                retry: config.retry,
                limiter: config.rate_limit.map(RateLimiter::new),
            }),
            cancel: CancellationToken::new(),
        })
    }

    /// Returns a client sharing this one's transport and limiter whose calls
    /// fail with [`Error::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: token,
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The normalized base URL, always ending in `api/v1/`.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn grafana_url(&self) -> Option<&str> {
        self.inner.grafana_url.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.inner.retry
    }

    pub fn rate_limiter(&self) -> Option<&RateLimiter> {
        self.inner.limiter.as_ref()
    }

    /// Builds a request against `path`, relative to the base URL, or an
    /// absolute `http(s)://` cursor URL used as is.
    ///
    /// POST and PUT accept [`RequestOptions::Json`]; other methods accept
    /// [`RequestOptions::Query`].
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions<'_>,
    ) -> Result<Request> {
        let mut url = self.resolve(path)?;
        let mut headers = self.inner.headers.clone();

        let carries_body = method == Method::POST || method == Method::PUT;
        if carries_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        let body = match options {
            RequestOptions::None => None,
            RequestOptions::Query(query) if !carries_body => {
                url = query.add_to_url(&url);
                None
            }
            RequestOptions::Json(body) if carries_body => Some(body),
            RequestOptions::Query(_) => {
                return Err(Error::InvalidRequest(format!(
                    "{} requests take a JSON body, not query options",
                    method
                )))
            }
            RequestOptions::Json(_) => {
                return Err(Error::InvalidRequest(format!(
                    "{} requests cannot carry a JSON body",
                    method
                )))
            }
        };

        Ok(Request {
            method,
            url,
            headers,
            body,
        })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path)
                .map_err(|e| Error::InvalidRequest(format!("invalid URL '{}': {}", path, e)));
        }
        let mut url = self.inner.base_url.clone();
        let joined = format!("{}{}", url.path(), path.trim_start_matches('/'));
        url.set_path(&joined);
        Ok(url)
    }

    /// Sends `request` and decodes the JSON response body.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.send(&request).await?;
        let body = self.read_body(response).await?;
        serde_json::from_slice(&body).map_err(|e| {
            let snippet: String = String::from_utf8_lossy(&body).chars().take(200).collect();
            tracing::debug!(
                "Failed to decode {} {}: {} | body: {}",
                request.method,
                request.url,
                e,
                snippet
            );
            Error::Decode(e)
        })
    }

    /// Sends `request`, draining and discarding the response body.
    pub async fn execute_discard(&self, request: Request) -> Result<()> {
        let response = self.send(&request).await?;
        self.read_body(response).await?;
        Ok(())
    }

    /// Fetches the page behind an absolute `next`/`previous` cursor.
    ///
    /// The cursor must share the base URL's origin (scheme, host and port),
    /// so the token is never sent to a host the client was not built for.
    pub async fn follow<T: DeserializeOwned>(&self, cursor: &str) -> Result<PaginatedResponse<T>> {
        if !(cursor.starts_with("http://") || cursor.starts_with("https://")) {
            return Err(Error::InvalidRequest(format!(
                "cursor '{}' is not an absolute URL",
                cursor
            )));
        }
        let target = Url::parse(cursor)
            .map_err(|e| Error::InvalidRequest(format!("invalid URL '{}': {}", cursor, e)))?;
        if target.origin() != self.inner.base_url.origin() {
            return Err(Error::InvalidRequest(format!(
                "cursor '{}' points outside {}",
                cursor,
                self.inner.base_url.origin().ascii_serialization()
            )));
        }
        let request = self.new_request(Method::GET, cursor, RequestOptions::None)?;
        self.execute(request).await
    }

    /// Fetches the page after `page`, or `None` on the last page.
    pub async fn next_page<T: DeserializeOwned>(
        &self,
        page: &PaginatedResponse<T>,
    ) -> Result<Option<PaginatedResponse<T>>> {
        match page.next.as_deref().filter(|n| !n.is_empty()) {
            Some(next) => self.follow(next).await.map(Some),
            None => Ok(None),
        }
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let request = self.new_request(Method::GET, path, RequestOptions::Query(query))?;
        self.execute(request).await
    }

    pub(crate) async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.new_request(Method::GET, path, RequestOptions::None)?;
        self.execute(request).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.new_request(Method::POST, path, RequestOptions::json(body)?)?;
        self.execute(request).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.new_request(Method::PUT, path, RequestOptions::json(body)?)?;
        self.execute(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self.new_request(Method::DELETE, path, RequestOptions::None)?;
        self.execute_discard(request).await
    }

    /// Runs the attempt loop: limiter, send, classify, back off.
    async fn send(&self, request: &Request) -> Result<reqwest::Response> {
        let policy = self.inner.retry;
        let mut attempt: u32 = 0;

        loop {
            if self.cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            if let Some(limiter) = &self.inner.limiter {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => return Err(Error::Cancelled),
                    _ = limiter.acquire() => {}
                }
            }

            tracing::debug!(
                method = %request.method,
                url = %request.url,
                attempt,
                "sending request"
            );

            let outcome = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(Error::Cancelled),
                outcome = self.to_reqwest(request).send() => outcome,
            };

            let failure = match outcome {
                Ok(response) => {
                    let status = response.status();
                    if is_success(status) {
                        return Ok(response);
                    }
                    match retry::classify(status, response.headers()) {
                        Some(failure) if policy.should_retry(attempt) => failure,
                        _ => return Err(self.api_error(&request.method, response).await),
                    }
                }
                Err(err) if retry::is_transient_error(&err) && policy.should_retry(attempt) => {
                    tracing::debug!(error = %err, attempt, "transport error");
                    Transient::Network
                }
                Err(err) => return Err(Error::Transport(err)),
            };

            let delay = {
                let mut rng = rand::thread_rng();
                policy.backoff(attempt, &failure, &mut rng)
            };
            tracing::debug!(
                attempt,
                failure = ?failure,
                delay_ms = delay.as_millis() as u64,
                "retrying request"
            );

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(Error::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
            attempt += 1;
        }
    }

    fn to_reqwest(&self, request: &Request) -> reqwest::RequestBuilder {
        let builder = self
            .inner
            .http
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        match &request.body {
            Some(body) => builder.body(body.clone()),
            None => builder,
        }
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Bytes> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            body = response.bytes() => body.map_err(Error::Transport),
        }
    }

    async fn api_error(&self, method: &Method, response: reqwest::Response) -> Error {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Error::Cancelled,
            err = ApiError::from_response(method.clone(), response) => match err {
                Ok(err) => {
                    tracing::debug!(
                        "Request failed with status {}: {}",
                        err.status(),
                        err.message()
                    );
                    Error::Api(err)
                }
                Err(err) => {
                    tracing::debug!("Failed to read error response body: {}", err);
                    Error::Transport(err)
                }
            },
        }
    }
}

fn is_success(status: StatusCode) -> bool {
    matches!(status.as_u16(), 200 | 201 | 202 | 204 | 304)
}

/// Appends `/` and then `api/v1/` to the base path when missing.
fn resolve_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::Config("base URL is empty".into()));
    }
    let mut url =
        Url::parse(raw).map_err(|e| Error::Config(format!("invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("invalid base URL '{}'", raw)));
    }

    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    if !path.ends_with(API_VERSION_PATH) {
        path.push_str(API_VERSION_PATH);
    }
    url.set_path(&path);
    Ok(url)
}
