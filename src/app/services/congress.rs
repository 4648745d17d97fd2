use crate::core::service::{BaseService, Service};
use crate::domain::model::{CongressQuery, PreparedRequest};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/congress` 端點
#[derive(Debug, Clone)]
pub struct CongressService {
    base: BaseService,
}

impl Service for CongressService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl CongressService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "congress"),
        }
    }

    pub fn prepare(&self, query: &CongressQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        // 指定屆次優先於 current
        let url = match (query.congress, query.current_congress) {
            (Some(congress), _) => format!("{}/{}", self.base.base_endpoint(), congress),
            (None, true) => format!("{}/current", self.base.base_endpoint()),
            (None, false) => self.base.base_endpoint().to_string(),
        };

        Ok(PreparedRequest {
            url,
            params: query.params.to_query(),
        })
    }

    pub async fn congress(&self, query: &CongressQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Paginated;

    fn congress_service() -> CongressService {
        CongressService::new(HttpClient::new(), "test_api_key", "https://api.congress.gov/v3")
    }

    #[test]
    fn test_congress_service_initialization() {
        let service = congress_service();
        assert_eq!(service.base_endpoint(), "https://api.congress.gov/v3/congress");
        assert_eq!(service.format(), "json");
    }

    #[test]
    fn test_congress_with_number() {
        let request = congress_service()
            .prepare(&CongressQuery::new().congress(117))
            .unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/congress/117");
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_current_congress() {
        let request = congress_service()
            .prepare(&CongressQuery::new().current())
            .unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/congress/current");
    }

    #[test]
    fn test_congress_pagination() {
        let request = congress_service()
            .prepare(&CongressQuery::new().limit(10).offset(20))
            .unwrap();
        assert_eq!(request.url, "https://api.congress.gov/v3/congress");
        assert_eq!(
            request.params,
            vec![("offset", "20".to_string()), ("limit", "10".to_string())]
        );
    }
}
