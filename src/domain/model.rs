use crate::utils::error::{Result, UsaGovError};
use crate::utils::validation::{validate_range, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Congress.gov 單頁最大筆數
pub const MAX_LIMIT: u32 = 250;

/// 查詢參數（已過濾掉空值）
pub type QueryPairs = Vec<(&'static str, String)>;

/// 一個已組好、尚未送出的 GET 請求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: String,
    pub params: QueryPairs,
}

/// 定義一個以固定字串表示的路徑片段列舉，並實作 `FromStr`/`Display`。
/// 每個變體可帶多個可接受的別名，第一個字串為送出時使用的值。
macro_rules! path_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => $wire:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UsaGovError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $wire $(| $alias)* => Ok($name::$variant), )+
                    _ => Err(UsaGovError::InvalidParameterError {
                        field: $field.to_string(),
                        value: s.to_string(),
                        reason: format!(
                            "expected one of: {}",
                            $name::ALL.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ")
                        ),
                    }),
                }
            }
        }
    };
}

path_enum! {
    /// 法案類型
    BillType, "bill_type" {
        Hr => "hr",
        S => "s",
        HJRes => "hjres",
        SJRes => "sjres",
        HConRes => "hconres",
        SConRes => "sconres",
        HRes => "hres",
        SRes => "sres",
    }
}

path_enum! {
    AmendmentType, "amendment_type" {
        HAmdt => "hamdt",
        SAmdt => "samdt",
        SuAmdt => "suamdt",
    }
}

path_enum! {
    /// 公法 / 私法，路徑上使用縮寫
    LawType, "law_type" {
        Public => "pub" | "public",
        Private => "priv" | "private",
    }
}

path_enum! {
    Chamber, "chamber" {
        House => "house",
        Senate => "senate",
        NoChamber => "nochamber",
    }
}

path_enum! {
    BillDetail, "details" {
        Actions => "actions",
        Amendments => "amendments",
        Committees => "committees",
        Cosponsors => "cosponsors",
        RelatedBills => "relatedbills",
        Subjects => "subjects",
        Summaries => "summaries",
        Text => "text",
        Titles => "titles",
    }
}

path_enum! {
    AmendmentDetail, "details" {
        Actions => "actions",
        Amendments => "amendments",
        Cosponsors => "cosponsors",
        Text => "text",
    }
}

path_enum! {
    MemberDetail, "details" {
        Sponsor => "sponsored-legislation" | "sponsor" | "sponsored",
        Cosponsor => "cosponsored-legislation" | "cosponsor" | "cosponsored",
    }
}

path_enum! {
    TreatyDetail, "details" {
        Actions => "actions",
        Committees => "committees",
    }
}

/// 所有清單端點共用的分頁與篩選參數
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub from_datetime: Option<DateTime<Utc>>,
    pub to_datetime: Option<DateTime<Utc>>,
    pub sort: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> QueryPairs {
        crate::utils::params::filter_parameters([
            ("offset", self.offset.map(|v| v.to_string())),
            ("limit", self.limit.map(|v| v.to_string())),
            ("fromDateTime", self.from_datetime.map(format_datetime)),
            ("toDateTime", self.to_datetime.map(format_datetime)),
            ("sort", self.sort.clone()),
        ])
    }
}

impl Validate for ListParams {
    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            validate_range("limit", limit, 1, MAX_LIMIT)?;
        }
        if let (Some(from), Some(to)) = (self.from_datetime, self.to_datetime) {
            if from > to {
                return Err(UsaGovError::InvalidParameterError {
                    field: "from_datetime".to_string(),
                    value: format_datetime(from),
                    reason: "must not be later than to_datetime".to_string(),
                });
            }
        }
        Ok(())
    }
}

pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// 為各種查詢結構提供共用的分頁 builder 方法
pub trait Paginated: Sized {
    fn list_params_mut(&mut self) -> &mut ListParams;

    fn offset(mut self, offset: u32) -> Self {
        self.list_params_mut().offset = Some(offset);
        self
    }

    fn limit(mut self, limit: u32) -> Self {
        self.list_params_mut().limit = Some(limit);
        self
    }

    fn from_datetime(mut self, from: DateTime<Utc>) -> Self {
        self.list_params_mut().from_datetime = Some(from);
        self
    }

    fn to_datetime(mut self, to: DateTime<Utc>) -> Self {
        self.list_params_mut().to_datetime = Some(to);
        self
    }

    fn sort(mut self, sort: impl Into<String>) -> Self {
        self.list_params_mut().sort = Some(sort.into());
        self
    }
}

macro_rules! impl_paginated {
    ($($query:ty),+ $(,)?) => {
        $(
            impl Paginated for $query {
                fn list_params_mut(&mut self) -> &mut ListParams {
                    &mut self.params
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmendmentQuery {
    pub composite_id: Option<String>,
    pub congress: Option<u32>,
    pub amendment_type: Option<AmendmentType>,
    pub amendment_number: Option<String>,
    pub details: Option<AmendmentDetail>,
    pub params: ListParams,
}

impl AmendmentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 例如 `117-hamdt-123`
    pub fn composite_id(mut self, id: impl Into<String>) -> Self {
        self.composite_id = Some(id.into());
        self
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn amendment_type(mut self, amendment_type: AmendmentType) -> Self {
        self.amendment_type = Some(amendment_type);
        self
    }

    pub fn amendment_number(mut self, number: impl Into<String>) -> Self {
        self.amendment_number = Some(number.into());
        self
    }

    pub fn details(mut self, details: AmendmentDetail) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillQuery {
    pub composite_id: Option<String>,
    pub congress: Option<u32>,
    pub bill_type: Option<BillType>,
    pub bill: Option<String>,
    pub details: Option<BillDetail>,
    pub params: ListParams,
}

impl BillQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 例如 `117-hr-123`
    pub fn composite_id(mut self, id: impl Into<String>) -> Self {
        self.composite_id = Some(id.into());
        self
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn bill_type(mut self, bill_type: BillType) -> Self {
        self.bill_type = Some(bill_type);
        self
    }

    pub fn bill(mut self, number: impl Into<String>) -> Self {
        self.bill = Some(number.into());
        self
    }

    pub fn details(mut self, details: BillDetail) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CongressQuery {
    pub congress: Option<u32>,
    pub current_congress: bool,
    pub params: ListParams,
}

impl CongressQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn current(mut self) -> Self {
        self.current_congress = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HearingQuery {
    pub composite_id: Option<String>,
    pub congress: Option<u32>,
    pub chamber: Option<Chamber>,
    pub jacket_number: Option<u32>,
    pub params: ListParams,
}

impl HearingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 例如 `118-house-48636`
    pub fn composite_id(mut self, id: impl Into<String>) -> Self {
        self.composite_id = Some(id.into());
        self
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn chamber(mut self, chamber: Chamber) -> Self {
        self.chamber = Some(chamber);
        self
    }

    pub fn jacket_number(mut self, jacket_number: u32) -> Self {
        self.jacket_number = Some(jacket_number);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LawQuery {
    pub composite_id: Option<String>,
    pub congress: Option<u32>,
    pub law_type: Option<LawType>,
    pub law: Option<String>,
    pub params: ListParams,
}

impl LawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 例如 `117-123`（屆次-法律編號）
    pub fn composite_id(mut self, id: impl Into<String>) -> Self {
        self.composite_id = Some(id.into());
        self
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn law_type(mut self, law_type: LawType) -> Self {
        self.law_type = Some(law_type);
        self
    }

    pub fn law(mut self, number: impl Into<String>) -> Self {
        self.law = Some(number.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberQuery {
    pub member_id: Option<String>,
    pub details: Option<MemberDetail>,
    pub congress: Option<u32>,
    pub state: Option<String>,
    pub district: Option<u32>,
    pub current_member: Option<bool>,
    pub params: ListParams,
}

impl MemberQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// bioguide ID，例如 `A000360`
    pub fn member_id(mut self, id: impl Into<String>) -> Self {
        self.member_id = Some(id.into());
        self
    }

    pub fn details(mut self, details: MemberDetail) -> Self {
        self.details = Some(details);
        self
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn district(mut self, district: u32) -> Self {
        self.district = Some(district);
        self
    }

    pub fn current_member(mut self, current: bool) -> Self {
        self.current_member = Some(current);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryQuery {
    pub congress: Option<u32>,
    pub bill_type: Option<BillType>,
    pub params: ListParams,
}

impl SummaryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn bill_type(mut self, bill_type: BillType) -> Self {
        self.bill_type = Some(bill_type);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatyQuery {
    pub composite_id: Option<String>,
    pub congress: Option<u32>,
    pub treaty: Option<u32>,
    pub treaty_part: Option<String>,
    pub details: Option<TreatyDetail>,
    pub params: ListParams,
}

impl TreatyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 例如 `117-456` 或 `114-13-B`
    pub fn composite_id(mut self, id: impl Into<String>) -> Self {
        self.composite_id = Some(id.into());
        self
    }

    pub fn congress(mut self, congress: u32) -> Self {
        self.congress = Some(congress);
        self
    }

    pub fn treaty(mut self, number: u32) -> Self {
        self.treaty = Some(number);
        self
    }

    /// 條約分部後綴，例如 `A`
    pub fn treaty_part(mut self, part: impl Into<String>) -> Self {
        self.treaty_part = Some(part.into());
        self
    }

    pub fn details(mut self, details: TreatyDetail) -> Self {
        self.details = Some(details);
        self
    }
}

impl_paginated!(
    AmendmentQuery,
    BillQuery,
    CongressQuery,
    HearingQuery,
    LawQuery,
    MemberQuery,
    SummaryQuery,
    TreatyQuery,
);
