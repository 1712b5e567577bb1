use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Optional fields of [`OrderRowQueryRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct OrderRowOptions {
    /// Union id of a sub promoter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_union_id: Option<u64>,
    /// Authorization key of a tool vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Comma separated extra fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Promotion orders and commissions (`jd.union.open.order.row.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.order.row.query", wrap = "orderReq")]
#[serde(rename_all = "camelCase")]
pub struct OrderRowQueryRequest {
    /// Page number.
    pub page_index: u32,
    /// Time the range applies to: 1 order time, 2 completion time, 3 update time.
    #[serde(rename = "type")]
    pub kind: u32,
    /// Range start, `yyyy-MM-dd HH:mm:ss`, at most one hour before `end_time`.
    pub start_time: String,
    /// Range end, `yyyy-MM-dd HH:mm:ss`.
    pub end_time: String,
    /// Optional fields.
    #[serde(flatten)]
    pub options: OrderRowOptions,
}

/// Bonus orders (`jd.union.open.order.bonus.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.order.bonus.query", wrap = "orderReq")]
#[serde(rename_all = "camelCase")]
pub struct OrderBonusQueryRequest {
    /// Time the range applies to: 1 order time, 2 update time.
    pub opt_type: u32,
    /// Range start, milliseconds since the epoch, at most ten minutes before `end_time`.
    pub start_time: i64,
    /// Range end, milliseconds since the epoch.
    pub end_time: i64,
    /// Page number, 1 by default.
    pub page_no: u32,
    /// Page size, at most 100.
    pub page_size: u32,
    /// `sortValue` of the last row of the previous page.
    pub sort_value: String,
    /// Bonus activity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u64>,
}

/// Orders a tool vendor brought in for other promoters (`jd.union.open.order.agent.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.order.agent.query", wrap = "orderReq")]
#[serde(rename_all = "camelCase")]
pub struct OrderAgentQueryRequest {
    /// Page number.
    pub page_index: u32,
    /// Page size, at most 500.
    pub page_size: u32,
    /// Time the range applies to: 1 order time, 2 completion time, 3 update time.
    #[serde(rename = "type")]
    pub kind: u32,
    /// Range start, `yyyy-MM-dd HH:mm:ss`, at most 20 minutes before `end_time`.
    pub start_time: String,
    /// Range end, `yyyy-MM-dd HH:mm:ss`.
    pub end_time: String,
    /// Comma separated extra fields, `categoryInfo` and `goodsInfo` are supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}
