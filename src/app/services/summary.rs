use crate::core::service::{BaseService, Service};
use crate::domain::model::{PreparedRequest, SummaryQuery};
use crate::utils::error::Result;
use crate::utils::params::PathBuilder;
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/summaries` 端點
#[derive(Debug, Clone)]
pub struct SummaryService {
    base: BaseService,
}

impl Service for SummaryService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl SummaryService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "summaries"),
        }
    }

    pub fn prepare(&self, query: &SummaryQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        let url = PathBuilder::new(self.base.base_endpoint())
            .segment("congress", query.congress)
            .segment("bill_type", query.bill_type)
            .build()?;

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn summary(&self, query: &SummaryQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}
