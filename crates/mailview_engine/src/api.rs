use std::time::Duration;

use futures_util::StreamExt;
use mailview_logging::{mail_debug, mail_warn};
use serde_json::Value;
use url::Url;

use crate::{decode_message_list, ApiError, FailureKind};

pub const MESSAGES_PATH: &str = "/api/v1/messages";
pub const DELETE_ALL_PATH: &str = "/api/v1/messages/delete";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Root of the mail store, e.g. `http://localhost:8025`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8025".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

/// The two mail store endpoints the viewer talks to.
#[async_trait::async_trait]
pub trait MailApi: Send + Sync {
    /// Lists all stored messages, verbatim and in server order.
    async fn list_messages(&self) -> Result<Vec<Value>, ApiError>;

    /// Deletes every stored message. The response body is ignored.
    async fn delete_all(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestMailApi {
    settings: ApiSettings,
    client: reqwest::Client,
    messages_url: Url,
    delete_all_url: Url,
}

impl ReqwestMailApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }
        let messages_url = endpoint(&base, MESSAGES_PATH);
        let delete_all_url = endpoint(&base, DELETE_ALL_PATH);

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            client,
            messages_url,
            delete_all_url,
        })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl MailApi for ReqwestMailApi {
    async fn list_messages(&self) -> Result<Vec<Value>, ApiError> {
        mail_debug!("GET {}", self.messages_url);
        let response = self
            .client
            .get(self.messages_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        let bytes = self.read_body(response).await?;
        let records = decode_message_list(&bytes)?;
        mail_debug!("GET {} -> {} messages", self.messages_url, records.len());
        Ok(records)
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        mail_debug!("POST {}", self.delete_all_url);
        let response = self
            .client
            .post(self.delete_all_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(response)?;
        Ok(())
    }
}

fn endpoint(base: &Url, path: &str) -> Url {
    // Keep any path prefix the store is mounted under.
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{prefix}{path}"));
    url.set_query(None);
    url.set_fragment(None);
    url
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    mail_warn!("{} answered {}", response.url(), status);
    Err(ApiError::new(
        FailureKind::HttpStatus(status.as_u16()),
        status.to_string(),
    ))
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ApiError {
    ApiError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
