//! 包裹应用层（parcel-application）
//!
//! 以命令/查询的形式编排 `ParcelRepository`，向表现层（HTTP、CLI 等）
//! 输出序列化友好的 DTO。
//!
pub mod command;
pub mod command_handler;
pub mod commands;
pub mod context;
pub mod dto;
pub mod error;
pub mod parcel_service;
pub mod queries;
pub mod query;
pub mod query_handler;

pub use parcel_service::ParcelService;
