//! HTTP client for the judge backend
//!
//! [`Backend`] issues credentialed GET/POST requests against a configured base
//! origin. Successful JSON bodies are transcoded to camelCase keys before being
//! deserialized; any non-200 response is surfaced as a [`ClientError`] carrying
//! the backend's failure envelope.

use std::sync::Arc;
use std::time::Instant;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::token::{self, Token};
use crate::utils::case::{camel_to_snake, snake_to_camel_deep};

/// Empty query for requests without parameters
pub const NO_QUERY: &[(&str, &str)] = &[];

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Build `?key=value&key=value` from ordered pairs.
///
/// Keys are converted from camelCase to snake_case. Values are inserted
/// verbatim without percent-encoding, so values containing `&` or `=` corrupt
/// the result. An empty query yields an empty string.
pub fn to_query_string<K, V>(query: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut search = String::from("?");
    for (key, value) in query {
        search.push_str(&camel_to_snake(key.as_ref()));
        search.push('=');
        search.push_str(value.as_ref());
        search.push('&');
    }
    search.pop();
    search
}

/// Flatten a serializable query struct into ordered key/value pairs.
///
/// Null fields are skipped, strings are taken as-is and other values use
/// their JSON text.
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> ClientResult<Vec<(String, String)>> {
    let value = serde_json::to_value(query).map_err(ClientError::Serialization)?;
    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    Ok(map
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect())
}

/// Client for the judge backend (cheap to clone)
#[derive(Clone)]
pub struct Backend {
    inner: Arc<BackendInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct BackendInner {
    config: ClientConfig,
    http: Client,
    /// Cookies received from the backend, sent back on every request
    jar: Arc<Jar>,
}

impl Backend {
    /// Create a client for the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .default_headers(default_headers())
            .build()?;

        info!(
            environment = %config.environment,
            api_base = %config.api_base,
            "Backend client initialized"
        );

        Ok(Self {
            inner: Arc::new(BackendInner { config, http, jar }),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Prefix a request path with the configured base origin
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.config.api_base, path)
    }

    /// GET `path` with a query string and decode the transcoded JSON body
    pub async fn get<T, K, V>(&self, path: &str, query: &[(K, V)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.url(path) + &to_query_string(query);
        let body = self.dispatch(Method::GET, url, None, true).await?;
        decode(body)
    }

    /// GET `path` with a query string, ignoring the response body
    pub async fn get_ok<K, V>(&self, path: &str, query: &[(K, V)]) -> ClientResult<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.url(path) + &to_query_string(query);
        self.dispatch(Method::GET, url, None, false).await?;
        Ok(())
    }

    /// POST a JSON body to `path` and decode the transcoded JSON response.
    ///
    /// The request body is serialized as-is; its keys are not transcoded.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(ClientError::Serialization)?;
        let body = self
            .dispatch(Method::POST, self.url(path), Some(payload), true)
            .await?;
        decode(body)
    }

    /// POST a JSON body to `path`, ignoring the response body
    pub async fn post_ok<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(ClientError::Serialization)?;
        self.dispatch(Method::POST, self.url(path), Some(payload), false)
            .await?;
        Ok(())
    }

    /// Store a `Set-Cookie`-style string for the base origin
    pub fn set_cookie(&self, cookie: &str) {
        match Url::parse(&self.inner.config.api_base) {
            Ok(url) => self.inner.jar.add_cookie_str(cookie, &url),
            Err(e) => warn!(error = %e, "Cannot store cookie without an absolute base origin"),
        }
    }

    /// Cookie header the client would send to the base origin
    pub fn cookies(&self) -> Option<String> {
        let url = Url::parse(&self.inner.config.api_base).ok()?;
        let header = self.inner.jar.cookies(&url)?;
        header.to_str().ok().map(str::to_string)
    }

    /// Read the identity token from the client's cookies
    pub fn token(&self) -> ClientResult<Option<Token>> {
        match self.cookies() {
            Some(cookies) => token::get_token(&cookies),
            None => Ok(None),
        }
    }

    /// Send a request and classify the response.
    ///
    /// On 200 the body is parsed and transcoded when `json` is set and ignored
    /// otherwise. Any other status parses the body as the error value.
    async fn dispatch(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
        json: bool,
    ) -> ClientResult<Option<Value>> {
        let start = Instant::now();
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.inner.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Request could not be sent");
            ClientError::Transport(e)
        })?;
        let status = response.status();
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        if status == StatusCode::OK {
            debug!(
                method = %method,
                url = %url,
                status = %status.as_u16(),
                duration_ms = %format!("{:.2}", duration_ms),
                "Request completed"
            );
            if !json {
                return Ok(None);
            }
            let bytes = response.bytes().await?;
            let value: Value =
                serde_json::from_slice(&bytes).map_err(ClientError::MalformedResponse)?;
            return Ok(Some(snake_to_camel_deep(value)));
        }

        let bytes = response.bytes().await?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(ClientError::MalformedResponse)?;
        let error = ClientError::from_error_body(status.as_u16(), value);
        warn!(
            method = %method,
            url = %url,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            error = %error,
            "Request failed"
        );
        Err(error)
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(body: Option<Value>) -> ClientResult<T> {
    serde_json::from_value(body.unwrap_or(Value::Null)).map_err(ClientError::MalformedResponse)
}
