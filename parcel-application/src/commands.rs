//! 包裹相关命令
//!
use crate::command::Command;
use parcel_domain::value_object::{ClientId, ParcelNumber, ParcelStatus};

/// 登记新包裹：状态为已登记，创建时间取当前时刻
#[derive(Debug, Clone)]
pub struct RegisterParcel {
    pub client: ClientId,
    pub address: String,
}

impl Command for RegisterParcel {
    const NAME: &'static str = "parcel.register";
    type Output = ParcelNumber;
}

#[derive(Debug, Clone)]
pub struct ChangeAddress {
    pub number: ParcelNumber,
    pub address: String,
}

impl Command for ChangeAddress {
    const NAME: &'static str = "parcel.change_address";
    type Output = ();
}

/// 修改状态，任意状态之间均可切换
#[derive(Debug, Clone)]
pub struct ChangeStatus {
    pub number: ParcelNumber,
    pub status: ParcelStatus,
}

impl Command for ChangeStatus {
    const NAME: &'static str = "parcel.change_status";
    type Output = ();
}

#[derive(Debug, Clone)]
pub struct RemoveParcel {
    pub number: ParcelNumber,
}

impl Command for RemoveParcel {
    const NAME: &'static str = "parcel.remove";
    type Output = ();
}
