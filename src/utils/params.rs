use crate::domain::model::QueryPairs;
use crate::utils::error::{Result, UsaGovError};
use std::fmt::Display;
use std::str::FromStr;
use url::Url;

/// 移除值為 `None` 的參數，保留原本順序
pub fn filter_parameters<I>(params: I) -> QueryPairs
where
    I: IntoIterator<Item = (&'static str, Option<String>)>,
{
    params
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
}

/// 把 `117-hr-123` 之類的複合 ID 拆成固定數量的片段
pub fn split_composite_id<'a>(
    id: &'a str,
    min_parts: usize,
    max_parts: usize,
    shape: &str,
) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = id.trim().split('-').map(str::trim).collect();

    if parts.len() < min_parts || parts.len() > max_parts || parts.iter().any(|p| p.is_empty()) {
        return Err(UsaGovError::InvalidParameterError {
            field: "composite_id".to_string(),
            value: id.to_string(),
            reason: format!("expected the form {}", shape),
        });
    }

    Ok(parts)
}

/// 解析複合 ID 中的單一片段
pub fn parse_part<T>(field: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| UsaGovError::InvalidParameterError {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// 依序組出階層式路徑；缺少前一層卻給了下一層時回報錯誤
///
/// 片段以 `url` 的 path segment 方式編碼，`/`、`?`、`#` 不會改變路徑結構。
#[derive(Debug)]
pub struct PathBuilder {
    base_endpoint: String,
    segments: Vec<String>,
    gap: Option<&'static str>,
    error: Option<UsaGovError>,
}

impl PathBuilder {
    pub fn new(base_endpoint: &str) -> Self {
        Self {
            base_endpoint: base_endpoint.to_string(),
            segments: Vec::new(),
            gap: None,
            error: None,
        }
    }

    pub fn segment<T: Display>(mut self, name: &'static str, value: Option<T>) -> Self {
        match (value, self.gap) {
            (Some(value), None) => {
                let value = value.to_string();
                if value.trim().is_empty() {
                    self.fail(UsaGovError::InvalidParameterError {
                        field: name.to_string(),
                        value,
                        reason: "must not be empty".to_string(),
                    });
                } else {
                    self.segments.push(value);
                }
            }
            (Some(_), Some(missing)) => self.fail(UsaGovError::MissingParameterError {
                field: format!("{} (required when {} is given)", missing, name),
            }),
            (None, None) => self.gap = Some(name),
            (None, Some(_)) => {}
        }
        self
    }

    /// 固定片段，不參與階層檢查
    pub fn literal(mut self, value: &str) -> Self {
        if self.gap.is_none() {
            self.segments.push(value.to_string());
        }
        self
    }

    fn fail(&mut self, err: UsaGovError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    pub fn build(self) -> Result<String> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let invalid_base = |reason: String| UsaGovError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: self.base_endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_endpoint).map_err(|e| invalid_base(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| invalid_base("URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
        }

        Ok(url.to_string())
    }
}
