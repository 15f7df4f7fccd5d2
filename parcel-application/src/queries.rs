//! 包裹相关查询
//!
use crate::dto::{ParcelDto, ParcelListDto};
use crate::query::Query;
use parcel_domain::value_object::{ClientId, ParcelNumber};

#[derive(Debug, Clone)]
pub struct GetParcel {
    pub number: ParcelNumber,
}

impl Query for GetParcel {
    const NAME: &'static str = "parcel.get";
    type Dto = ParcelDto;
}

#[derive(Debug, Clone)]
pub struct ListClientParcels {
    pub client: ClientId,
}

impl Query for ListClientParcels {
    const NAME: &'static str = "parcel.list_by_client";
    type Dto = ParcelListDto;
}
