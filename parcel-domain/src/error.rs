//! 领域层统一错误定义
//!
//! 区分“记录不存在”（`NotFound`）与存储故障（`Database`），
//! 调用方可按变体分支处理，而不必匹配错误消息。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值校验/解析 ---
    #[error("parse error: {reason}")]
    Parse { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 仓储/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("database error: {context}: {source}")]
    Database {
        context: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("migration error: {source}")]
    Migration {
        #[from]
        source: sqlx::migrate::MigrateError,
    },
}

impl DomainError {
    /// 包装存储层错误并附带操作上下文（操作名、目标标识）
    pub fn database(context: impl Into<String>, source: sqlx::Error) -> Self {
        DomainError::Database {
            context: context.into(),
            source,
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        DomainError::NotFound {
            reason: reason.into(),
        }
    }

    /// 是否为“记录不存在”
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 允许在基础设施层直接使用 `?` 将 sqlx/chrono 等错误转换为 DomainError

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::not_found("row not found"),
            other => DomainError::database("query", other),
        }
    }
}

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
