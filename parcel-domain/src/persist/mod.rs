//! 持久化（persist）
//!
//! 定义包裹仓储协议（`ParcelRepository`）及其 SQLite 实现（`SqliteParcelStore`）。
//! 连接的创建与表结构迁移由调用方负责，参见 [`crate::bootstrap`]。
//!
mod parcel_repository;
mod sqlite_store;

pub use parcel_repository::ParcelRepository;
pub use sqlite_store::{MissingRowPolicy, SqliteParcelStore};
