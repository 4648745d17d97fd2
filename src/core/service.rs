use crate::domain::model::PreparedRequest;
use crate::utils::error::{Result, UsaGovError};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::collections::HashMap;

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const DEFAULT_FORMAT: &str = "json";

/// 所有端點服務共用的狀態與 GET 流程
#[derive(Debug, Clone)]
pub struct BaseService {
    api_key: String,
    base_url: String,
    format: String,
    base_endpoint: String,
    http: HttpClient,
}

impl BaseService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str, collection: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base_endpoint = format!("{}/{}", base_url, collection);
        Self {
            api_key: api_key.to_string(),
            base_url,
            format: DEFAULT_FORMAT.to_string(),
            base_endpoint,
            http,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    pub fn headers(&self) -> HashMap<String, String> {
        HashMap::from([(API_KEY_HEADER.to_string(), self.api_key.clone())])
    }

    /// 組出實際送出的請求；查詢字串只包含已過濾的參數
    pub fn build_request(&self, request: &PreparedRequest) -> Result<reqwest::Request> {
        Ok(self
            .http
            .get(&request.url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&request.params)
            .build()?)
    }

    /// 送出 GET 請求；非 2xx 一律回傳 `ApiStatusError`
    pub async fn get(&self, request: &PreparedRequest) -> Result<Value> {
        tracing::debug!("📡 GET {} params={:?}", request.url, request.params);

        let response = self.http.execute(self.build_request(request)?).await?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            tracing::warn!("❌ {} returned {}: {}", request.url, status, message);
            return Err(UsaGovError::ApiStatusError {
                status: status.as_u16(),
                url: request.url.clone(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// 所有端點服務共用的存取方法
pub trait Service {
    fn base(&self) -> &BaseService;

    fn api_key(&self) -> &str {
        self.base().api_key()
    }

    fn base_url(&self) -> &str {
        self.base().base_url()
    }

    fn format(&self) -> &str {
        self.base().format()
    }

    fn base_endpoint(&self) -> &str {
        self.base().base_endpoint()
    }

    fn headers(&self) -> HashMap<String, String> {
        self.base().headers()
    }
}

// Congress.gov 錯誤格式：{"error": "..."} 或 {"error": {"code": ..., "message": ...}}
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    match error {
        Value::String(message) => Some(message.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    }
}
