//! 包裹仓储协议
//!
use crate::{
    error::DomainResult as Result,
    parcel::Parcel,
    value_object::{ClientId, ParcelNumber, ParcelStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

/// 包裹仓储：每个操作对应一条 SQL 语句，不做重试与事务编排
#[async_trait]
pub trait ParcelRepository: Send + Sync {
    /// 新增包裹，返回存储分配的编号；入参中的编号会被忽略
    async fn add(&self, parcel: &Parcel) -> Result<ParcelNumber>;

    /// 按编号读取；不存在时返回 `DomainError::NotFound`
    async fn get(&self, number: ParcelNumber) -> Result<Parcel>;

    /// 按编号删除；目标不存在也视为成功
    async fn delete(&self, number: ParcelNumber) -> Result<()>;

    /// 仅修改地址
    async fn set_address(&self, number: ParcelNumber, address: &str) -> Result<()>;

    /// 仅修改状态，不校验状态流转顺序
    async fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> Result<()>;

    /// 按客户查询；顺序由存储引擎决定，无记录时返回空列表
    async fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>>;
}

#[async_trait]
impl<T> ParcelRepository for Arc<T>
where
    T: ParcelRepository + ?Sized,
{
    async fn add(&self, parcel: &Parcel) -> Result<ParcelNumber> {
        (**self).add(parcel).await
    }

    async fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        (**self).get(number).await
    }

    async fn delete(&self, number: ParcelNumber) -> Result<()> {
        (**self).delete(number).await
    }

    async fn set_address(&self, number: ParcelNumber, address: &str) -> Result<()> {
        (**self).set_address(number, address).await
    }

    async fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> Result<()> {
        (**self).set_status(number, status).await
    }

    async fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        (**self).get_by_client(client).await
    }
}
