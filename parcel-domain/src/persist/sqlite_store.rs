//! 基于 SQLite（sqlx）的包裹仓储实现
//!
//! 连接池由调用方创建并注入，本实现不负责建表、连接管理与重试。
//! 所需表结构见 `migrations/0001_create_parcel.sql`。
//!
use crate::{
    entity::Entity,
    error::{DomainError, DomainResult as Result},
    parcel::Parcel,
    persist::ParcelRepository,
    value_object::{ClientId, CreatedAt, ParcelNumber, ParcelStatus},
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, instrument, warn};

const SELECT_COLUMNS: &str = "SELECT number, client, status, address, created_at FROM parcel";

/// 更新操作命中 0 行时的处理策略
///
/// 删除始终是幂等的，不受该策略影响。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRowPolicy {
    /// 视为成功（默认）
    #[default]
    Ignore,
    /// 返回 `DomainError::NotFound`
    Reject,
}

#[derive(Debug, Clone)]
pub struct SqliteParcelStore {
    pool: SqlitePool,
    missing_row: MissingRowPolicy,
}

impl SqliteParcelStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            missing_row: MissingRowPolicy::default(),
        }
    }

    pub fn with_missing_row_policy(mut self, policy: MissingRowPolicy) -> Self {
        self.missing_row = policy;
        self
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn missing_row_policy(&self) -> MissingRowPolicy {
        self.missing_row
    }

    #[instrument(level = "debug", skip(self, parcel), fields(client = %parcel.client()), err)]
    pub async fn add(&self, parcel: &Parcel) -> Result<ParcelNumber> {
        if parcel.id().is_assigned() {
            warn!(number = %parcel.id(), "ignoring preassigned parcel number on add");
        }

        let result = sqlx::query(
            "INSERT INTO parcel (client, status, address, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(parcel.client().value())
        .bind(parcel.status().as_str())
        .bind(parcel.address())
        .bind(parcel.created_at().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("add parcel", e))?;

        let number = ParcelNumber::new(result.last_insert_rowid());
        if !number.is_assigned() {
            return Err(DomainError::InvalidValue {
                reason: format!("storage assigned non-positive parcel number {number}"),
            });
        }

        debug!(%number, "parcel added");
        Ok(number)
    }

    // 不记录 err：NotFound 是预期结果
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        let row = sqlx::query_as::<_, ParcelRow>(&format!("{SELECT_COLUMNS} WHERE number = ?"))
            .bind(number.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("get parcel {number}"), e))?;

        match row {
            Some(row) => row.into_parcel(),
            None => Err(DomainError::not_found(format!("parcel {number}"))),
        }
    }

    #[instrument(level = "debug", skip(self), err)]
    pub async fn delete(&self, number: ParcelNumber) -> Result<()> {
        let result = sqlx::query("DELETE FROM parcel WHERE number = ?")
            .bind(number.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("delete parcel {number}"), e))?;

        if result.rows_affected() == 0 {
            debug!(%number, "delete matched no parcel");
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self), err)]
    pub async fn set_address(&self, number: ParcelNumber, address: &str) -> Result<()> {
        let result = sqlx::query("UPDATE parcel SET address = ? WHERE number = ?")
            .bind(address)
            .bind(number.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("set address of parcel {number}"), e))?;

        self.check_updated(number, result.rows_affected())
    }

    #[instrument(level = "debug", skip(self), err)]
    pub async fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> Result<()> {
        let result = sqlx::query("UPDATE parcel SET status = ? WHERE number = ?")
            .bind(status.as_str())
            .bind(number.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("set status of parcel {number}"), e))?;

        self.check_updated(number, result.rows_affected())
    }

    #[instrument(level = "debug", skip(self), err)]
    pub async fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        let rows = sqlx::query_as::<_, ParcelRow>(&format!("{SELECT_COLUMNS} WHERE client = ?"))
            .bind(client.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("get parcels of client {client}"), e))?;

        debug!(count = rows.len(), "parcels loaded");
        rows.into_iter().map(ParcelRow::into_parcel).collect()
    }

    fn check_updated(&self, number: ParcelNumber, rows_affected: u64) -> Result<()> {
        if rows_affected > 0 {
            return Ok(());
        }
        match self.missing_row {
            MissingRowPolicy::Ignore => {
                debug!(%number, "update matched no parcel");
                Ok(())
            }
            MissingRowPolicy::Reject => Err(DomainError::not_found(format!("parcel {number}"))),
        }
    }
}

#[async_trait]
impl ParcelRepository for SqliteParcelStore {
    async fn add(&self, parcel: &Parcel) -> Result<ParcelNumber> {
        SqliteParcelStore::add(self, parcel).await
    }

    async fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        SqliteParcelStore::get(self, number).await
    }

    async fn delete(&self, number: ParcelNumber) -> Result<()> {
        SqliteParcelStore::delete(self, number).await
    }

    async fn set_address(&self, number: ParcelNumber, address: &str) -> Result<()> {
        SqliteParcelStore::set_address(self, number, address).await
    }

    async fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> Result<()> {
        SqliteParcelStore::set_status(self, number, status).await
    }

    async fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        SqliteParcelStore::get_by_client(self, client).await
    }
}

#[derive(Debug, FromRow)]
struct ParcelRow {
    number: i64,
    client: i64,
    status: String,
    address: String,
    created_at: String,
}

impl ParcelRow {
    fn into_parcel(self) -> Result<Parcel> {
        Ok(Parcel::builder()
            .number(ParcelNumber::new(self.number))
            .client(ClientId::new(self.client))
            .status(self.status.parse::<ParcelStatus>()?)
            .address(self.address)
            .created_at(CreatedAt::parse(self.created_at)?)
            .build())
    }
}
