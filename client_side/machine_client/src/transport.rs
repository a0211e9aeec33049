use async_trait::async_trait;

use crate::error::ClientResult;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Status and body of a completed request, before any decoding.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}
impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A way of reaching the machine's HTTP service.
///
/// Implementations only fail with [`ClientError::Network`](crate::ClientError::Network);
/// any response that arrives, whatever its status, is handed back as a [`RawResponse`].
/// Not `Send`, so it can run on the browser's single-threaded executor.
#[async_trait(?Send)]
pub trait Transport {
    async fn request(&self, method: HttpMethod, path: &str, json_body: Option<String>) -> ClientResult<RawResponse>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn request(&self, method: HttpMethod, path: &str, json_body: Option<String>) -> ClientResult<RawResponse> {
        (**self).request(method, path, json_body).await
    }
}
