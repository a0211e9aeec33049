use std::time::Duration;

use async_trait::async_trait;
use machine_client::{ClientError, HttpMethod, RawResponse, Transport};
use reqwest::header::CONTENT_TYPE;

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(ReqwestTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn network_failure(error: reqwest::Error) -> ClientError {
    ClientError::Network(error.to_string())
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn request(&self, method: HttpMethod, path: &str, json_body: Option<String>) -> Result<RawResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        if let Some(body) = json_body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }
        let response = request.send().await.map_err(network_failure)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_failure)?;
        tracing::trace!("{:?} {} -> {}", method, path, status);
        Ok(RawResponse { status, body })
    }
}
