//! 基于 reqwest 的 GreenSys REST 后端

mod form;
mod status;

pub use status::{map_status, payload_message};

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{Backend, Download, MutationBody};
use crate::config::UpstreamConfig;
use crate::errors::{GreenSysError, Result};
use crate::session::Session;

const REQUEST_ID_HEADER: &str = "X-Request-Id";
const GATEWAY_USER_AGENT: &str = concat!("greensys-gateway/", env!("CARGO_PKG_VERSION"));

pub struct RestBackend {
    client: Client,
    base_url: String,
    pdf_proxy_path: String,
}

impl RestBackend {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GreenSysError::configuration(format!(
                "upstream.base_url must be an http(s) URL, got '{}'",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(|e| GreenSysError::configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            pdf_proxy_path: config.pdf_proxy_path.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // 每个请求都带上令牌与请求 ID
    fn request(&self, session: &Session, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .bearer_auth(session.token())
            .header(USER_AGENT, GATEWAY_USER_AGENT)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
    }

    fn with_body(builder: RequestBuilder, body: MutationBody) -> Result<RequestBuilder> {
        Ok(match body {
            MutationBody::Json(value) => builder.json(&value),
            MutationBody::Multipart(parts) => builder.multipart(form::build_form(parts)?),
        })
    }

    /// 发送请求，非 2xx 映射为网关错误
    async fn send(builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            warn!("Upstream request failed: {}", e);
            GreenSysError::network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = map_status(status.as_u16(), &body);
        warn!("Upstream responded {}: {}", status, err);
        Err(err)
    }

    async fn json_body(response: Response) -> Result<Value> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl Backend for RestBackend {
    fn kind(&self) -> &'static str {
        "rest"
    }

    #[instrument(level = "debug", skip(self, session))]
    async fn get(&self, session: &Session, path: &str) -> Result<Value> {
        let response = Self::send(self.request(session, Method::GET, path)).await?;
        Self::json_body(response).await
    }

    #[instrument(level = "debug", skip(self, session, body))]
    async fn create(&self, session: &Session, path: &str, body: MutationBody) -> Result<Value> {
        let builder = Self::with_body(self.request(session, Method::POST, path), body)?;
        Self::json_body(Self::send(builder).await?).await
    }

    #[instrument(level = "debug", skip(self, session, body))]
    async fn update(&self, session: &Session, path: &str, body: MutationBody) -> Result<Value> {
        let builder = Self::with_body(self.request(session, Method::PATCH, path), body)?;
        Self::json_body(Self::send(builder).await?).await
    }

    #[instrument(level = "debug", skip(self, session))]
    async fn delete(&self, session: &Session, path: &str) -> Result<()> {
        Self::send(self.request(session, Method::DELETE, path)).await?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self, session))]
    async fn download_pdf(&self, session: &Session, pdf_url: &str) -> Result<Download> {
        let builder = self
            .request(session, Method::POST, &self.pdf_proxy_path)
            .json(&json!({ "pdfUrl": pdf_url }));
        let response = Self::send(builder).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        debug!("Downloaded {} bytes through the PDF proxy", bytes.len());

        Ok(Download {
            bytes,
            content_type,
        })
    }
}
