//! Production transport backed by reqwest

use std::time::Duration;

use acctui_core::prelude::*;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::invalid_url(base_url, e.to_string()))?;
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_url(path, e.to_string()))
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.url_for(&request.path)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Patch => reqwest::Method::PATCH,
            Method::Post => reqwest::Method::POST,
        };

        debug!("{} {}", request.method, url);

        let mut builder = self.http.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((content_type, body)) = request.body.encode() {
            builder = builder.header(CONTENT_TYPE, content_type).body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read response body: {e}")))?;

        debug!("{} {} -> {}", request.method, request.path, status);
        Ok(HttpResponse { status, body })
    }
}
