use async_trait::async_trait;
use machine_client::{ClientError, HttpMethod, RawResponse, Transport};
use reqwasm::http::Request;
use web_sys::window;

const FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// Browser `fetch` transport rooted at `base_url`.
pub struct WebTransport {
    base_url: String,
}

impl WebTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        WebTransport { base_url: base_url.into() }
    }
    /// The page is served by the machine service itself, so talk to wherever it came from.
    pub fn from_page() -> Self {
        let origin = window()
            .and_then(|window| window.location().origin().ok())
            .filter(|origin| origin.starts_with("http"));
        match origin {
            Some(origin) => Self::new(origin),
            None => {
                log::warn!("Page origin unavailable; using {}", FALLBACK_BASE_URL);
                Self::new(FALLBACK_BASE_URL)
            }
        }
    }
    fn request_url(&self, method: HttpMethod, path: &str) -> Request {
        let true_path = format!("{}{}", self.base_url, path);
        match method {
            HttpMethod::Get => Request::get(&true_path),
            HttpMethod::Post => Request::post(&true_path),
        }
    }
}

#[async_trait(?Send)]
impl Transport for WebTransport {
    async fn request(&self, method: HttpMethod, path: &str, json_body: Option<String>) -> Result<RawResponse, ClientError> {
        let mut request = self.request_url(method, path);
        if let Some(body) = json_body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }
        let response = request.send().await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
