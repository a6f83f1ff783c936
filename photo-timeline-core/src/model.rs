use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;

/// Một tuần trên timeline cùng ảnh và ghi chú.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WeekRecord {
    #[serde(default, deserialize_with = "whole_number")]
    pub week: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photos: Vec<String>,
}

/// Hai nhóm tuần hiển thị: trước và sau.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Pre,
    Post,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Pre, Section::Post];

    pub fn label(self) -> &'static str {
        match self {
            Section::Pre => "Pre",
            Section::Post => "Post",
        }
    }

    /// Khóa trong `timeline.json`.
    pub fn key(self) -> &'static str {
        match self {
            Section::Pre => "pre",
            Section::Post => "post",
        }
    }

    /// Id container mặc định trên trang tổng.
    pub fn container_id(self) -> &'static str {
        match self {
            Section::Pre => "pre-list",
            Section::Post => "post-list",
        }
    }

    /// Id phần tử đếm số tuần trên trang landing.
    pub fn count_id(self) -> &'static str {
        match self {
            Section::Pre => "pre-count",
            Section::Post => "post-count",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pre" => Ok(Section::Pre),
            "post" => Ok(Section::Post),
            other => Err(format!("Section không hợp lệ: {other}")),
        }
    }
}

/// Gốc của tài liệu `timeline.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineDocument {
    #[serde(
        rename = "generatedAt",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_at: Option<DateTime<Utc>>,
    pub pre: Vec<WeekRecord>,
    pub post: Vec<WeekRecord>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "generatedAt", default, deserialize_with = "lenient_timestamp")]
    generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pre: Option<Vec<WeekRecord>>,
    #[serde(default)]
    post: Option<Vec<WeekRecord>>,
}

impl TimelineDocument {
    /// Đọc tài liệu từ chuỗi JSON.
    pub fn parse(body: &str) -> Result<Self, LoadError> {
        let value: Value =
            serde_json::from_str(body).map_err(|err| LoadError::MalformedBody(err.to_string()))?;
        Self::from_value(value)
    }

    /// Đọc tài liệu từ `serde_json::Value`; thiếu cả `pre` lẫn `post` là lỗi.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        if !value.is_object() {
            return Err(LoadError::MalformedBody(
                "tài liệu gốc không phải object".to_string(),
            ));
        }

        let raw: RawDocument = serde_json::from_value(value)
            .map_err(|err| LoadError::MalformedBody(err.to_string()))?;

        if raw.pre.is_none() && raw.post.is_none() {
            return Err(LoadError::MalformedBody(
                "thiếu cả `pre` và `post`".to_string(),
            ));
        }

        Ok(Self {
            generated_at: raw.generated_at,
            pre: raw.pre.unwrap_or_default(),
            post: raw.post.unwrap_or_default(),
        })
    }

    pub fn section(&self, section: Section) -> &[WeekRecord] {
        match section {
            Section::Pre => &self.pre,
            Section::Post => &self.post,
        }
    }
}

/// `generatedAt` chỉ là metadata: chuỗi không phải RFC 3339 hay kiểu khác đều thành `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text.trim()).ok())
        .map(|ts| ts.with_timezone(&Utc)))
}

/// Số tuần: nhận số nguyên hoặc số thực không có phần lẻ (`2.0`); `null` là 0.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(week) = number.as_i64() {
        return Ok(week);
    }
    match number.as_f64() {
        Some(week) if week.fract() == 0.0 && week.abs() < i64::MAX as f64 => Ok(week as i64),
        _ => Err(D::Error::custom(format!("week không phải số nguyên: {number}"))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
