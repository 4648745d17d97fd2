use crate::config::{ApiSettings, TomlConfig};
use crate::core::{Client, ListParams, DEFAULT_BASE_URL};
use crate::domain::model::{
    AmendmentDetail, AmendmentQuery, AmendmentType, BillDetail, BillQuery, BillType, Chamber,
    CongressQuery, HearingQuery, LawQuery, LawType, MemberDetail, MemberQuery, SummaryQuery,
    TreatyDetail, TreatyQuery,
};
use crate::utils::error::{Result, UsaGovError};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "usagov")]
#[command(about = "Query United States government data APIs (Congress.gov v3)")]
#[command(version)]
pub struct CliConfig {
    /// Congress.gov API key
    #[arg(long, env = "CONGRESS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "API base URL [default: https://api.congress.gov/v3]")]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// TOML config file; CLI flags take precedence over its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// 載入並驗證 `--config` 指定的設定檔，只讀取一次供 logging/settings 共用
    pub fn load_config_file(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// 日誌設定：(verbose, json)。CLI 旗標或設定檔任一開啟即生效
    pub fn logging(&self, file: Option<&TomlConfig>) -> (bool, bool) {
        let verbose = self.verbose || file.is_some_and(|f| f.verbose());
        let json = self.json_logs || file.is_some_and(|f| f.json_logs());
        (verbose, json)
    }

    /// 合併 CLI 參數、設定檔與預設值
    pub fn settings(&self, file: Option<&TomlConfig>) -> Result<ApiSettings> {
        let api_key = self
            .api_key
            .clone()
            .or_else(|| file.map(|f| f.api.key.clone()))
            .ok_or_else(|| UsaGovError::MissingConfigError {
                field: "api_key".to_string(),
            })?;

        let base_url = self
            .base_url
            .clone()
            .or_else(|| file.and_then(|f| f.api.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = self
            .timeout_seconds
            .or_else(|| file.and_then(|f| f.api.timeout_seconds));

        let settings = ApiSettings {
            api_key,
            base_url,
            timeout_seconds,
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub offset: Option<u32>,

    #[arg(long)]
    pub limit: Option<u32>,

    /// e.g. 2022-04-01T00:00:00Z
    #[arg(long)]
    pub from_datetime: Option<DateTime<Utc>>,

    #[arg(long)]
    pub to_datetime: Option<DateTime<Utc>>,

    /// e.g. updateDate+desc
    #[arg(long)]
    pub sort: Option<String>,
}

impl From<PageArgs> for ListParams {
    fn from(args: PageArgs) -> Self {
        ListParams {
            offset: args.offset,
            limit: args.limit,
            from_datetime: args.from_datetime,
            to_datetime: args.to_datetime,
            sort: args.sort,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Amendments: /amendment[/congress[/type[/number[/details]]]]
    Amendment {
        #[arg(long, help = "e.g. 117-hamdt-123")]
        composite_id: Option<String>,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        amendment_type: Option<AmendmentType>,
        #[arg(long)]
        amendment_number: Option<String>,
        #[arg(long)]
        details: Option<AmendmentDetail>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Bills: /bill[/congress[/type[/number[/details]]]]
    Bill {
        #[arg(long, help = "e.g. 117-hr-123")]
        composite_id: Option<String>,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        bill_type: Option<BillType>,
        #[arg(long)]
        bill: Option<String>,
        #[arg(long)]
        details: Option<BillDetail>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Congresses and sessions
    Congress {
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long, conflicts_with = "congress")]
        current: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Committee hearings
    Hearing {
        #[arg(long, help = "e.g. 118-house-48636")]
        composite_id: Option<String>,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        chamber: Option<Chamber>,
        #[arg(long)]
        jacket_number: Option<u32>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Public and private laws
    Law {
        #[arg(long, help = "e.g. 117-123")]
        composite_id: Option<String>,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long, help = "public or private")]
        law_type: Option<LawType>,
        #[arg(long)]
        law: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Members of Congress
    Member {
        #[arg(long, help = "bioguide ID, e.g. A000360")]
        member_id: Option<String>,
        #[arg(long, help = "sponsor or cosponsor")]
        details: Option<MemberDetail>,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        district: Option<u32>,
        #[arg(long)]
        current_member: Option<bool>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Bill summaries
    Summary {
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        bill_type: Option<BillType>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Treaties
    Treaty {
        #[arg(long, help = "e.g. 117-456 or 114-13-B")]
        composite_id: Option<String>,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        treaty: Option<u32>,
        #[arg(long)]
        treaty_part: Option<String>,
        #[arg(long)]
        details: Option<TreatyDetail>,
        #[command(flatten)]
        page: PageArgs,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Amendment { .. } => "amendment",
            Command::Bill { .. } => "bill",
            Command::Congress { .. } => "congress",
            Command::Hearing { .. } => "hearing",
            Command::Law { .. } => "law",
            Command::Member { .. } => "member",
            Command::Summary { .. } => "summary",
            Command::Treaty { .. } => "treaty",
        }
    }

    /// 把子命令轉成對應服務的查詢並送出
    pub async fn execute(self, client: &Client) -> Result<Value> {
        match self {
            Command::Amendment {
                composite_id,
                congress,
                amendment_type,
                amendment_number,
                details,
                page,
            } => {
                let query = AmendmentQuery {
                    composite_id,
                    congress,
                    amendment_type,
                    amendment_number,
                    details,
                    params: page.into(),
                };
                client.amendment().amendment(&query).await
            }
            Command::Bill {
                composite_id,
                congress,
                bill_type,
                bill,
                details,
                page,
            } => {
                let query = BillQuery {
                    composite_id,
                    congress,
                    bill_type,
                    bill,
                    details,
                    params: page.into(),
                };
                client.bill().bill(&query).await
            }
            Command::Congress {
                congress,
                current,
                page,
            } => {
                let query = CongressQuery {
                    congress,
                    current_congress: current,
                    params: page.into(),
                };
                client.congress().congress(&query).await
            }
            Command::Hearing {
                composite_id,
                congress,
                chamber,
                jacket_number,
                page,
            } => {
                let query = HearingQuery {
                    composite_id,
                    congress,
                    chamber,
                    jacket_number,
                    params: page.into(),
                };
                client.hearing().hearing(&query).await
            }
            Command::Law {
                composite_id,
                congress,
                law_type,
                law,
                page,
            } => {
                let query = LawQuery {
                    composite_id,
                    congress,
                    law_type,
                    law,
                    params: page.into(),
                };
                client.law().law(&query).await
            }
            Command::Member {
                member_id,
                details,
                congress,
                state,
                district,
                current_member,
                page,
            } => {
                let query = MemberQuery {
                    member_id,
                    details,
                    congress,
                    state,
                    district,
                    current_member,
                    params: page.into(),
                };
                client.member().member(&query).await
            }
            Command::Summary {
                congress,
                bill_type,
                page,
            } => {
                let query = SummaryQuery {
                    congress,
                    bill_type,
                    params: page.into(),
                };
                client.summary().summary(&query).await
            }
            Command::Treaty {
                composite_id,
                congress,
                treaty,
                treaty_part,
                details,
                page,
            } => {
                let query = TreatyQuery {
                    composite_id,
                    congress,
                    treaty,
                    treaty_part,
                    details,
                    params: page.into(),
                };
                client.treaty().treaty(&query).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bill_command() {
        let cli = CliConfig::try_parse_from([
            "usagov",
            "--api-key",
            "test_api_key",
            "bill",
            "--congress",
            "117",
            "--bill-type",
            "hr",
            "--bill",
            "123",
            "--details",
            "actions",
            "--limit",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("test_api_key"));
        match cli.command {
            Command::Bill {
                congress,
                bill_type,
                bill,
                details,
                page,
                ..
            } => {
                assert_eq!(congress, Some(117));
                assert_eq!(bill_type, Some(BillType::Hr));
                assert_eq!(bill.as_deref(), Some("123"));
                assert_eq!(details, Some(BillDetail::Actions));
                assert_eq!(page.limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_bill_type() {
        let result = CliConfig::try_parse_from([
            "usagov", "--api-key", "k", "bill", "--bill-type", "xyz",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_congress_current_conflicts_with_number() {
        let result = CliConfig::try_parse_from([
            "usagov", "--api-key", "k", "congress", "--congress", "117", "--current",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_defaults_and_overrides() {
        let cli = CliConfig::try_parse_from([
            "usagov",
            "--api-key",
            "k",
            "--timeout-seconds",
            "10",
            "law",
            "--congress",
            "117",
        ])
        .unwrap();

        let settings = cli.settings(None).unwrap();
        assert_eq!(settings.api_key, "k");
        assert_eq!(settings.base_url, "https://api.congress.gov/v3");
        assert_eq!(settings.timeout_seconds, Some(10));
    }

    #[test]
    fn test_settings_reject_bad_base_url() {
        let cli = CliConfig::try_parse_from([
            "usagov",
            "--api-key",
            "k",
            "--base-url",
            "not a url",
            "member",
        ])
        .unwrap();

        assert!(cli.settings(None).is_err());
    }

    #[test]
    fn test_logging_and_settings_share_loaded_file() {
        // 路徑不存在：logging/settings 只使用傳入的設定，不會再讀檔
        let cli = CliConfig::try_parse_from([
            "usagov",
            "--config",
            "/nonexistent/usagov.toml",
            "--timeout-seconds",
            "30",
            "congress",
        ])
        .unwrap();
        assert!(cli.load_config_file().is_err());

        let file = TomlConfig::from_toml_str(
            r#"
[api]
key = "file_key"
timeout_seconds = 5

[logging]
json = true
"#,
        )
        .unwrap();

        assert_eq!(cli.logging(Some(&file)), (false, true));
        assert_eq!(cli.logging(None), (false, false));

        let settings = cli.settings(Some(&file)).unwrap();
        if cli.api_key.is_none() {
            assert_eq!(settings.api_key, "file_key");
        }
        assert_eq!(settings.timeout_seconds, Some(30));
    }
}
