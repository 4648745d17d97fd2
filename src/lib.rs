//! Client library for United States government data APIs.
//!
//! Currently covers the Congress.gov v3 API. A [`Client`] hands out one
//! service per collection; each service turns a typed query into a single
//! authenticated `GET` and returns the decoded JSON body.
//!
//! ```no_run
//! use usagov::{BillQuery, BillType, Client, Paginated};
//!
//! # async fn run() -> usagov::Result<()> {
//! let client = Client::new("my-api-key", usagov::DEFAULT_BASE_URL);
//! let bill = client
//!     .bill()
//!     .bill(&BillQuery::new().congress(117).bill_type(BillType::Hr).bill("3076").limit(5))
//!     .await?;
//! println!("{}", bill["bill"]["title"]);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::{ApiSettings, TomlConfig};

pub use crate::app::services::{
    AmendmentService, BillService, CongressService, HearingService, LawService, MemberService,
    SummaryService, TreatyService,
};
pub use crate::core::{Client, ConfigProvider, Service, DEFAULT_BASE_URL};
pub use crate::domain::model::{
    AmendmentDetail, AmendmentQuery, AmendmentType, BillDetail, BillQuery, BillType, Chamber,
    CongressQuery, HearingQuery, LawQuery, LawType, ListParams, MemberDetail, MemberQuery,
    Paginated, PreparedRequest, SummaryQuery, TreatyDetail, TreatyQuery,
};
pub use crate::utils::error::{Result, UsaGovError};
