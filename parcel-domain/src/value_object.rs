//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装包裹领域的标识、状态与时间戳。
//!
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, SecondsFormat, Utc};
use parcel_macros::{entity_id, value_object};
use std::fmt;
use std::str::FromStr;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 包裹编号（由存储引擎在创建时分配的自增主键）
///
/// `0` 表示尚未分配，永远不会被持久化。
///
/// # 示例
///
/// ```
/// use parcel_domain::value_object::ParcelNumber;
///
/// assert!(!ParcelNumber::UNASSIGNED.is_assigned());
/// assert!(ParcelNumber::new(1).is_assigned());
/// ```
#[entity_id]
pub struct ParcelNumber(i64);

impl ParcelNumber {
    /// 分配前的占位值
    pub const UNASSIGNED: Self = Self::new(0);

    pub const fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl Default for ParcelNumber {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

/// 客户标识
#[entity_id]
pub struct ClientId(i64);

/// 包裹状态
///
/// 仅是一个标签：任意状态之间都可以直接切换，不校验流转顺序。
#[value_object(default = true)]
#[derive(Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    #[default]
    Registered,
    Sent,
    Delivered,
}

impl ParcelStatus {
    pub const ALL: [ParcelStatus; 3] = [
        ParcelStatus::Registered,
        ParcelStatus::Sent,
        ParcelStatus::Delivered,
    ];

    /// 持久化使用的文本形式
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::Registered => "registered",
            ParcelStatus::Sent => "sent",
            ParcelStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParcelStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidValue {
                reason: format!("unknown parcel status: {s:?}"),
            })
    }
}

/// 创建时间（RFC3339 文本）
///
/// 原样保存校验过的文本，读回时与写入时逐字节一致。
///
/// # 示例
///
/// ```
/// use parcel_domain::value_object::CreatedAt;
///
/// let at = CreatedAt::parse("2024-03-01T10:00:00Z").unwrap();
/// assert_eq!(at.as_str(), "2024-03-01T10:00:00Z");
/// assert!(CreatedAt::parse("yesterday").is_err());
/// ```
#[value_object]
#[derive(Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CreatedAt(String);

impl CreatedAt {
    /// 解析并校验 RFC3339 文本
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let created_at = Self(value.into());
        created_at.validate()?;
        Ok(created_at)
    }

    /// 当前 UTC 时间，精确到秒，形如 `2024-03-01T10:00:00Z`
    pub fn now() -> Self {
        Self(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_datetime(&self) -> DomainResult<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(&self.0)?.with_timezone(&Utc))
    }
}

impl ValueObject for CreatedAt {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        DateTime::parse_from_rfc3339(&self.0)
            .map(|_| ())
            .map_err(|err| DomainError::Parse {
                reason: format!("created_at {:?} is not RFC3339: {err}", self.0),
            })
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CreatedAt {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CreatedAt> for String {
    fn from(value: CreatedAt) -> Self {
        value.0
    }
}
