use crate::core::service::{BaseService, Service};
use crate::domain::model::{LawQuery, PreparedRequest};
use crate::utils::error::{Result, UsaGovError};
use crate::utils::params::{parse_part, split_composite_id, PathBuilder};
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/law` 端點，至少需要屆次
#[derive(Debug, Clone)]
pub struct LawService {
    base: BaseService,
}

impl Service for LawService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl LawService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "law"),
        }
    }

    pub fn prepare(&self, query: &LawQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        // 複合 ID 只帶屆次與編號，法律類型仍由 law_type 提供
        let (congress, law) = match query.composite_id.as_deref() {
            Some(id) => {
                let parts = split_composite_id(id, 2, 2, "congress-number")?;
                (
                    Some(parse_part::<u32>("congress", parts[0])?),
                    Some(parts[1].to_string()),
                )
            }
            None => (query.congress, query.law.clone()),
        };

        if congress.is_none() {
            return Err(UsaGovError::MissingParameterError {
                field: "composite_id or congress".to_string(),
            });
        }

        let url = PathBuilder::new(self.base.base_endpoint())
            .segment("congress", congress)
            .segment("law_type", query.law_type)
            .segment("law", law)
            .build()?;

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn law(&self, query: &LawQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}
