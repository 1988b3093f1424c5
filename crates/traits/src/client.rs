//! ArticleClient trait for abstracting the outbound HTTP call.
//!
//! This trait allows the fetch orchestrator to query the wiki API without
//! being tied to a particular transport (browser `fetch`, a native HTTP
//! client, or canned responses in tests).

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for transport-level failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Failed to build request for '{url}': {message}")]
    InvalidRequest { url: String, message: String },

    #[error("Request to '{url}' failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// A GET request against the wiki API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    /// Identifying contact appended to the client's user agent in the
    /// `Api-User-Agent` header.
    pub api_user_agent: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_user_agent: None,
        }
    }

    pub fn with_api_user_agent(mut self, contact: impl Into<String>) -> Self {
        self.api_user_agent = Some(contact.into());
        self
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A transport able to issue a single GET request.
///
/// Implementations are driven from one logical thread; the returned future
/// does not need to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ArticleClient: Debug {
    /// Issue the request once. No retries.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Returns a human-readable name for this client (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A client answering from canned responses.
///
/// Responses are matched by exact URL first, then the fallback response.
/// Every request is recorded.
#[derive(Debug, Default)]
pub struct InMemoryArticleClient {
    responses: RwLock<HashMap<String, HttpResponse>>,
    fallback: RwLock<Option<HttpResponse>>,
    requests: RwLock<Vec<HttpRequest>>,
}

impl InMemoryArticleClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that answers every request with `response`.
    pub fn answering(response: HttpResponse) -> Self {
        let client = Self::new();
        client.set_fallback(response);
        client
    }

    /// Register a response for an exact URL.
    pub fn respond(&self, url: impl Into<String>, response: HttpResponse) {
        if let Ok(mut responses) = self.responses.write() {
            responses.insert(url.into(), response);
        }
    }

    /// Set the response used when no URL matches.
    pub fn set_fallback(&self, response: HttpResponse) {
        if let Ok(mut fallback) = self.fallback.write() {
            *fallback = Some(response);
        }
    }

    /// All requests issued so far, oldest first.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.read().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().map(|r| r.len()).unwrap_or(0)
    }
}

impl ArticleClient for InMemoryArticleClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let poisoned = || TransportError::RequestFailed {
            url: request.url.clone(),
            message: "client lock poisoned".to_string(),
        };

        self.requests
            .write()
            .map_err(|_| poisoned())?
            .push(request.clone());

        let canned = self
            .responses
            .read()
            .map_err(|_| poisoned())?
            .get(&request.url)
            .cloned();
        let response = match canned {
            Some(response) => Some(response),
            None => self.fallback.read().map_err(|_| poisoned())?.clone(),
        };

        response.ok_or_else(|| TransportError::RequestFailed {
            url: request.url.clone(),
            message: "no response registered".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "InMemoryArticleClient"
    }
}
