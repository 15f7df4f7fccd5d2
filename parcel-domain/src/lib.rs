//! 包裹领域层（parcel-domain）
//!
//! 提供包裹（`Parcel`）的领域模型与持久化：
//! - 实体（`entity`）与值对象（`value_object`）：编号、客户、状态、创建时间
//! - 包裹实体（`parcel`）
//! - 仓储协议与 SQLite 实现（`persist`）：新增、读取、删除、改地址、改状态、按客户查询
//! - 连接与迁移（`bootstrap`）：按配置打开连接池并建表
//! - 统一错误（`error`）：区分“记录不存在”与存储故障
//!
//! 典型用法：
//! 1. 通过 `bootstrap::connect` 打开连接池（或由上层自行创建并迁移）；
//! 2. 以连接池构造 `SqliteParcelStore`；
//! 3. 通过 `ParcelRepository` 接口读写包裹。
//!
pub mod bootstrap;
pub mod entity;
pub mod error;
pub mod parcel;
pub mod persist;
pub mod value_object;
