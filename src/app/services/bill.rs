use crate::core::service::{BaseService, Service};
use crate::domain::model::{BillQuery, BillType, PreparedRequest};
use crate::utils::error::Result;
use crate::utils::params::{parse_part, split_composite_id, PathBuilder};
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/bill` 端點
#[derive(Debug, Clone)]
pub struct BillService {
    base: BaseService,
}

impl Service for BillService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl BillService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "bill"),
        }
    }

    pub fn prepare(&self, query: &BillQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        let (congress, bill_type, bill) = match query.composite_id.as_deref() {
            Some(id) => {
                let parts = split_composite_id(id, 3, 3, "congress-type-number")?;
                (
                    Some(parse_part::<u32>("congress", parts[0])?),
                    Some(parts[1].parse::<BillType>()?),
                    Some(parts[2].to_string()),
                )
            }
            None => (query.congress, query.bill_type, query.bill.clone()),
        };

        let url = PathBuilder::new(self.base.base_endpoint())
            .segment("congress", congress)
            .segment("bill_type", bill_type)
            .segment("bill", bill)
            .segment("details", query.details)
            .build()?;

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn bill(&self, query: &BillQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}
