//! `ArticleClient` backed by the browser's fetch API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wikitoc_core::{ArticleClient, HttpRequest, HttpResponse, TransportError};

/// Header MediaWiki reads in place of `User-Agent`, which browsers do not
/// let scripts set.
const API_USER_AGENT_HEADER: &str = "Api-User-Agent";

/// Issues requests with `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl FetchClient {
    pub fn new() -> Self {
        Self
    }
}

impl ArticleClient for FetchClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let failed = |message: String| TransportError::RequestFailed {
            url: url.to_string(),
            message,
        };
        let invalid = |message: String| TransportError::InvalidRequest {
            url: url.to_string(),
            message,
        };

        let window = web_sys::window().ok_or_else(|| invalid("No window object available".into()))?;

        let opts = web_sys::RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(web_sys::RequestMode::Cors);

        if let Some(contact) = &request.api_user_agent {
            let user_agent = window.navigator().user_agent().unwrap_or_default();
            let headers = web_sys::Headers::new()
                .map_err(|e| invalid(format!("Failed to create headers: {:?}", e)))?;
            headers
                .set(API_USER_AGENT_HEADER, format!("{user_agent} {contact}").trim())
                .map_err(|e| invalid(format!("Failed to set header: {:?}", e)))?;
            opts.set_headers(&headers);
        }

        let js_request = web_sys::Request::new_with_str_and_init(url, &opts)
            .map_err(|e| invalid(format!("Failed to create request: {:?}", e)))?;

        let response_value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| failed(format!("Fetch failed: {:?}", e)))?;

        let response: web_sys::Response = response_value
            .dyn_into()
            .map_err(|_| failed("Failed to convert response".into()))?;

        let status = response.status();
        if !response.ok() {
            log::warn!("{} answered {} {}", url, status, response.status_text());
            return Ok(HttpResponse::new(status, String::new()));
        }

        let text = JsFuture::from(
            response
                .text()
                .map_err(|e| TransportError::Body(format!("{:?}", e)))?,
        )
        .await
        .map_err(|e| TransportError::Body(format!("{:?}", e)))?;

        Ok(HttpResponse::new(status, text.as_string().unwrap_or_default()))
    }

    fn name(&self) -> &'static str {
        "FetchClient"
    }
}
