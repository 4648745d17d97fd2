use crate::core::service::{BaseService, Service};
use crate::domain::model::{PreparedRequest, TreatyQuery};
use crate::utils::error::Result;
use crate::utils::params::{parse_part, split_composite_id, PathBuilder};
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/treaty` 端點
#[derive(Debug, Clone)]
pub struct TreatyService {
    base: BaseService,
}

impl Service for TreatyService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl TreatyService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "treaty"),
        }
    }

    pub fn prepare(&self, query: &TreatyQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        let (congress, treaty, part) = match query.composite_id.as_deref() {
            Some(id) => {
                let parts = split_composite_id(id, 2, 3, "congress-number[-part]")?;
                (
                    Some(parse_part::<u32>("congress", parts[0])?),
                    Some(parse_part::<u32>("treaty", parts[1])?),
                    parts.get(2).map(|p| p.to_string()),
                )
            }
            None => (query.congress, query.treaty, query.treaty_part.clone()),
        };

        let mut path = PathBuilder::new(self.base.base_endpoint())
            .segment("congress", congress)
            .segment("treaty", treaty);

        // 分部後綴可省略，不算階層缺口
        if part.is_some() {
            path = path.segment("treaty_part", part);
        }

        let url = path.segment("details", query.details).build()?;

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn treaty(&self, query: &TreatyQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Paginated, TreatyDetail};

    fn treaty_service() -> TreatyService {
        TreatyService::new(HttpClient::new(), "test_api_key", "https://api.congress.gov/v3")
    }

    #[test]
    fn test_treaty_with_congress_and_number() {
        let query = TreatyQuery::new().congress(117).treaty(456);
        let request = treaty_service().prepare(&query).unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/treaty/117/456");
    }

    #[test]
    fn test_treaty_with_details() {
        let query = TreatyQuery::new()
            .congress(117)
            .treaty(456)
            .details(TreatyDetail::Actions);
        let request = treaty_service().prepare(&query).unwrap();
        assert_eq!(
            request.url,
            "https://api.congress.gov/v3/treaty/117/456/actions"
        );
    }

    #[test]
    fn test_treaty_with_part() {
        let query = TreatyQuery::new().congress(117).treaty(456).treaty_part("A");
        let request = treaty_service().prepare(&query).unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/treaty/117/456/A");
    }

    #[test]
    fn test_treaty_composite_id_with_part_and_details() {
        let query = TreatyQuery::new()
            .composite_id("114-13-B")
            .details(TreatyDetail::Actions);
        let request = treaty_service().prepare(&query).unwrap();
        assert_eq!(
            request.url,
            "https://api.congress.gov/v3/treaty/114/13/B/actions"
        );
    }

    #[test]
    fn test_treaty_pagination() {
        let query = TreatyQuery::new().congress(117).limit(5).offset(10);
        let request = treaty_service().prepare(&query).unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/treaty/117");
        assert_eq!(
            request.params,
            vec![("offset", "10".to_string()), ("limit", "5".to_string())]
        );
    }

    #[test]
    fn test_treaty_without_arguments() {
        let request = treaty_service().prepare(&TreatyQuery::new()).unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/treaty");
    }
}
