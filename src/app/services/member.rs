use crate::core::service::{BaseService, Service};
use crate::domain::model::{MemberQuery, PreparedRequest};
use crate::utils::error::{Result, UsaGovError};
use crate::utils::params::PathBuilder;
use crate::utils::validation::Validate;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// `/member` 端點
///
/// 依提供的欄位決定路徑：
/// - `member_id`：`/member/{id}[/sponsored-legislation|/cosponsored-legislation]`
/// - `congress`：`/member/congress/{congress}[/{state}[/{district}]]`
/// - 只有 `state`：`/member/{state}[/{district}]`
#[derive(Debug, Clone)]
pub struct MemberService {
    base: BaseService,
}

impl Service for MemberService {
    fn base(&self) -> &BaseService {
        &self.base
    }
}

impl MemberService {
    pub fn new(http: HttpClient, api_key: &str, base_url: &str) -> Self {
        Self {
            base: BaseService::new(http, api_key, base_url, "member"),
        }
    }

    pub fn prepare(&self, query: &MemberQuery) -> Result<PreparedRequest> {
        query.params.validate()?;

        if query.details.is_some() && query.member_id.is_none() {
            return Err(UsaGovError::MissingParameterError {
                field: "member_id (required when details is given)".to_string(),
            });
        }

        let state = query.state.as_deref().map(str::to_ascii_uppercase);
        let path = PathBuilder::new(self.base.base_endpoint());

        let url = match (&query.member_id, query.congress) {
            (Some(member_id), _) => path
                .segment("member_id", Some(member_id))
                .segment("details", query.details)
                .build()?,
            (None, Some(congress)) => path
                .literal("congress")
                .segment("congress", Some(congress))
                .segment("state", state)
                .segment("district", query.district)
                .build()?,
            (None, None) => path
                .segment("state", state)
                .segment("district", query.district)
                .build()?,
        };

        let mut params = query.params.to_query();
        if let Some(current) = query.current_member {
            params.push(("currentMember", current.to_string()));
        }

        Ok(PreparedRequest { url, params })
    }

    pub async fn member(&self, query: &MemberQuery) -> Result<Value> {
        let request = self.prepare(query)?;
        self.base.get(&request).await
    }
}
