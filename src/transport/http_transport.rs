use async_trait::async_trait;
use essentials::debug;
use http::header;

use super::{HeaderMapExt, Request, Response, Transport};
use crate::Result;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(reqwest::Client::builder().build()?))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str())
            .header(
                header::AUTHORIZATION,
                request.credentials.basic_authorization(),
            )
            .headers(request.headers().clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "received response");
        Ok(Response::new(status).with_body(body))
    }
}
