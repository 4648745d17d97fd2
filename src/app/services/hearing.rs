use crate::core::service::{BaseService, Service};
use crate::domain::model::{Chamber, HearingQuery, PreparedRequest};
use crate::utils::error::Result;
use crate::utils::params::{parse_part, split_composite_id, PathBuilder};
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/hearing` 端點
#[derive(Debug, Clone)]
pub struct HearingService {
    base: BaseService,
}

impl Service for HearingService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl HearingService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "hearing"),
        }
    }

    pub fn prepare(&self, query: &HearingQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        let (congress, chamber, jacket_number) = match query.composite_id.as_deref() {
            Some(id) => {
                let parts = split_composite_id(id, 3, 3, "congress-chamber-jacket")?;
                (
                    Some(parse_part::<u32>("congress", parts[0])?),
                    Some(parts[1].parse::<Chamber>()?),
                    Some(parse_part::<u32>("jacket_number", parts[2])?),
                )
            }
            None => (query.congress, query.chamber, query.jacket_number),
        };

        let url = PathBuilder::new(self.base.base_endpoint())
            .segment("congress", congress)
            .segment("chamber", chamber)
            .segment("jacket_number", jacket_number)
            .build()?;

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn hearing(&self, query: &HearingQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}
