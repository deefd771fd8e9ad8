mod headers;
mod http_transport;
mod request;
mod response;

use async_trait::async_trait;

pub use headers::HeaderMapExt;
pub use http_transport::HttpTransport;
pub use request::Request;
pub use response::Response;

use crate::Result;

/// Sends one [`Request`] and hands back the [`Response`].
///
/// [`HttpTransport`] talks to a real server; tests swap in implementations
/// that record requests instead.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}
