//! 包裹（Parcel）实体
//!
use crate::entity::Entity;
use crate::value_object::{ClientId, CreatedAt, ParcelNumber, ParcelStatus};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 被跟踪的包裹记录
///
/// - `number` 由存储在创建时分配，之后不可变；
/// - `client`、`created_at` 创建后不可变；
/// - `status`、`address` 只能通过仓储的对应更新操作修改。
///
/// # 示例
///
/// ```
/// use parcel_domain::parcel::Parcel;
/// use parcel_domain::value_object::{ClientId, CreatedAt, ParcelStatus};
///
/// let parcel = Parcel::builder()
///     .client(ClientId::new(1000))
///     .address("test")
///     .created_at(CreatedAt::parse("2024-03-01T10:00:00Z").unwrap())
///     .build();
///
/// assert!(!parcel.number().is_assigned());
/// assert_eq!(parcel.status(), ParcelStatus::Registered);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct Parcel {
    #[builder(default)]
    number: ParcelNumber,
    client: ClientId,
    #[builder(default)]
    status: ParcelStatus,
    #[builder(into)]
    address: String,
    created_at: CreatedAt,
}

impl Parcel {
    /// 以“已登记”状态新建包裹，创建时间取当前时刻
    pub fn register(client: ClientId, address: impl Into<String>) -> Self {
        Self::builder()
            .client(client)
            .address(address)
            .status(ParcelStatus::Registered)
            .created_at(CreatedAt::now())
            .build()
    }

    pub fn number(&self) -> ParcelNumber {
        self.number
    }

    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn status(&self) -> ParcelStatus {
        self.status
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn created_at(&self) -> &CreatedAt {
        &self.created_at
    }

    /// 绑定存储分配的编号
    pub fn with_number(mut self, number: ParcelNumber) -> Self {
        self.number = number;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_status(mut self, status: ParcelStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity for Parcel {
    type Id = ParcelNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
