use parcel_domain::parcel::Parcel;
use parcel_domain::value_object::ParcelStatus;
use serde::{Deserialize, Serialize};

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelDto {
    pub number: i64,
    pub client: i64,
    pub status: ParcelStatus,
    pub address: String,
    pub created_at: String,
}

impl Dto for ParcelDto {}

impl From<&Parcel> for ParcelDto {
    fn from(parcel: &Parcel) -> Self {
        Self {
            number: parcel.number().value(),
            client: parcel.client().value(),
            status: parcel.status(),
            address: parcel.address().to_string(),
            created_at: parcel.created_at().to_string(),
        }
    }
}

impl From<Parcel> for ParcelDto {
    fn from(parcel: Parcel) -> Self {
        Self::from(&parcel)
    }
}

/// 某客户名下的包裹，按编号升序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelListDto {
    pub client: i64,
    pub parcels: Vec<ParcelDto>,
}

impl Dto for ParcelListDto {}
