//! 连接与迁移（bootstrap）
//!
//! 仓储本身只接收已打开的连接池；本模块供应用入口与测试按配置打开
//! SQLite 连接池并执行内置迁移。
//!
use crate::error::{DomainError, DomainResult as Result};
use bon::Builder;
use serde::Deserialize;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_URL: &str = "sqlite::memory:";

/// 存储配置
///
/// 可由配置文件反序列化（缺省字段取默认值），也可通过 builder 构造：
///
/// ```
/// use parcel_domain::bootstrap::StoreConfig;
///
/// let cfg = StoreConfig::builder().url("sqlite://parcels.db").max_connections(4).build();
/// assert!(cfg.create_if_missing);
/// assert!(cfg.migrate);
/// ```
#[derive(Debug, Clone, Builder, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 连接串，例如 `sqlite://parcels.db` 或 `sqlite::memory:`
    #[builder(into, default = DEFAULT_URL.to_string())]
    pub url: String,
    #[builder(default = 1)]
    pub max_connections: u32,
    #[builder(default = true)]
    pub create_if_missing: bool,
    /// 打开后是否执行内置迁移
    #[builder(default = true)]
    pub migrate: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StoreConfig {
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// 按配置打开连接池，并在需要时执行迁移
pub async fn connect(config: &StoreConfig) -> Result<SqlitePool> {
    if config.max_connections == 0 {
        return Err(DomainError::InvalidValue {
            reason: "max_connections must be at least 1".to_string(),
        });
    }

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DomainError::database(format!("parse url {}", config.url), e))?
        .create_if_missing(config.create_if_missing);

    // 内存库随连接存在，只能使用单个常驻连接
    let max_connections = if config.is_in_memory() {
        if config.max_connections > 1 {
            warn!(
                requested = config.max_connections,
                "in-memory database is limited to a single connection"
            );
        }
        1
    } else {
        config.max_connections
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database(format!("connect {}", config.url), e))?;

    info!(url = %config.url, max_connections, "sqlite pool opened");

    if config.migrate {
        migrate(&pool).await?;
    }

    Ok(pool)
}

/// 执行内置迁移（创建 `parcel` 表）
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_document() {
        let cfg: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.url, DEFAULT_URL);
        assert_eq!(cfg.max_connections, 1);
        assert!(cfg.create_if_missing);
        assert!(cfg.migrate);
        assert!(cfg.is_in_memory());
    }

    #[test]
    fn partial_document_overrides() {
        let cfg: StoreConfig =
            serde_json::from_str(r#"{"url":"sqlite://parcels.db","migrate":false}"#).unwrap();
        assert_eq!(cfg.url, "sqlite://parcels.db");
        assert!(!cfg.migrate);
        assert!(!cfg.is_in_memory());
    }

    #[tokio::test]
    async fn rejects_zero_connections() {
        let cfg = StoreConfig::builder().max_connections(0).build();
        match connect(&cfg).await {
            Err(DomainError::InvalidValue { .. }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn connect_runs_migrations() {
        let pool = connect(&StoreConfig::default()).await.unwrap();
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'parcel'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);

        // 重复迁移无副作用
        migrate(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn connect_without_migrations_leaves_schema_to_caller() {
        let cfg = StoreConfig::builder().migrate(false).build();
        let pool = connect(&cfg).await.unwrap();
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'parcel'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 0);
    }
}
