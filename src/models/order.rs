//! The order document served by `GET /orders/{order_uid}`.
//!
//! Every field is optional on the wire. Missing scalars become empty
//! [`DisplayValue`]s, and a missing or `null` delivery, payment or item list
//! becomes its empty default, so a sparse document still renders.

use serde::{Deserialize, Serialize};

use super::{DisplayValue, null_as_default};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_uid: DisplayValue,
    pub track_number: DisplayValue,
    pub entry: DisplayValue,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery: Delivery,
    #[serde(deserialize_with = "null_as_default")]
    pub payment: Payment,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    pub locale: DisplayValue,
    pub internal_signature: DisplayValue,
    pub customer_id: DisplayValue,
    pub delivery_service: DisplayValue,
    pub shardkey: DisplayValue,
    pub sm_id: DisplayValue,
    /// RFC 3339 creation time, e.g. `2024-11-03T14:05:09.123456Z`.
    pub date_created: DisplayValue,
    pub oof_shard: DisplayValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delivery {
    pub name: DisplayValue,
    pub phone: DisplayValue,
    pub zip: DisplayValue,
    pub city: DisplayValue,
    pub address: DisplayValue,
    pub region: DisplayValue,
    pub email: DisplayValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub transaction: DisplayValue,
    pub request_id: DisplayValue,
    pub currency: DisplayValue,
    pub provider: DisplayValue,
    pub amount: DisplayValue,
    pub payment_dt: DisplayValue,
    pub bank: DisplayValue,
    pub delivery_cost: DisplayValue,
    pub goods_total: DisplayValue,
    pub custom_fee: DisplayValue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub chrt_id: DisplayValue,
    pub track_number: DisplayValue,
    pub price: DisplayValue,
    pub rid: DisplayValue,
    pub name: DisplayValue,
    pub sale: DisplayValue,
    pub size: DisplayValue,
    pub total_price: DisplayValue,
    pub nm_id: DisplayValue,
    pub brand: DisplayValue,
    pub status: DisplayValue,
}
