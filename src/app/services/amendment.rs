use crate::core::service::{BaseService, Service};
use crate::domain::model::{AmendmentQuery, AmendmentType, PreparedRequest};
use crate::utils::error::Result;
use crate::utils::params::{parse_part, split_composite_id, PathBuilder};
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/amendment` 端點
#[derive(Debug, Clone)]
pub struct AmendmentService {
    base: BaseService,
}

impl Service for AmendmentService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl AmendmentService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "amendment"),
        }
    }

    pub fn prepare(&self, query: &AmendmentQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        let (congress, amendment_type, number) = match query.composite_id.as_deref() {
            Some(id) => {
                let parts = split_composite_id(id, 3, 3, "congress-type-number")?;
                (
                    Some(parse_part::<u32>("congress", parts[0])?),
                    Some(parts[1].parse::<AmendmentType>()?),
                    Some(parts[2].to_string()),
                )
            }
            None => (
                query.congress,
                query.amendment_type,
                query.amendment_number.clone(),
            ),
        };

        let url = PathBuilder::new(self.base.base_endpoint())
            .segment("congress", congress)
            .segment("amendment_type", amendment_type)
            .segment("amendment_number", number)
            .segment("details", query.details)
            .build()?;

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn amendment(&self, query: &AmendmentQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}
