use crate::app::services::{
    AmendmentService, BillService, CongressService, HearingService, LawService, MemberService,
    SummaryService, TreatyService,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client as HttpClient;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Congress.gov API 入口，負責產生各端點服務
///
/// 所有服務共用同一個 HTTP 連線池，clone 成本很低。
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_http_client(api_key, base_url, HttpClient::new())
    }

    pub fn with_http_client(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        http: HttpClient,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// 依設定建立，會套用逾時與 User-Agent
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http = builder.build()?;

        tracing::debug!(
            "Client configured for {} (timeout: {:?}s)",
            config.base_url(),
            config.timeout_seconds()
        );

        Ok(Self::with_http_client(
            config.api_key(),
            config.base_url(),
            http,
        ))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn amendment(&self) -> AmendmentService {
        AmendmentService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn bill(&self) -> BillService {
        BillService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn congress(&self) -> CongressService {
        CongressService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn hearing(&self) -> HearingService {
        HearingService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn law(&self) -> LawService {
        LawService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn member(&self) -> MemberService {
        MemberService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn summary(&self) -> SummaryService {
        SummaryService::new(self.http.clone(), &self.api_key, &self.base_url)
    }

    pub fn treaty(&self) -> TreatyService {
        TreatyService::new(self.http.clone(), &self.api_key, &self.base_url)
    }
}
