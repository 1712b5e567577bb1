use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Optional fields of [`RedpacketQueryRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct RedpacketQueryOptions {
    /// Red packet activity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act_id: Option<u64>,
    /// Promotion position id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u64>,
    /// Authorization key of a tool vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Statistics type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
    /// Channel relation ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_ids: Option<Vec<u64>>,
}

/// Red packet (京享红包) effect data (`jd.union.open.statistics.redpacket.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.statistics.redpacket.query", wrap = "effectDataReq")]
#[serde(rename_all = "camelCase")]
pub struct RedpacketQueryRequest {
    /// First day, `yyyy-MM-dd`, within the last 90 days.
    pub start_date: String,
    /// Last day, `yyyy-MM-dd`, within the last 90 days.
    pub end_date: String,
    /// Page number, starting at 1.
    pub page_index: u32,
    /// Page size, between 10 and 100.
    pub page_size: u32,
    /// Optional fields.
    #[serde(flatten)]
    pub options: RedpacketQueryOptions,
}

/// Optional fields of [`RedpacketAgentQueryRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct RedpacketAgentOptions {
    /// Statistics type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
    /// Red packet activity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act_id: Option<u64>,
}

/// Red packet effect data of links a tool vendor converted for other promoters
/// (`jd.union.open.statistics.redpacket.agent.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(
    method = "jd.union.open.statistics.redpacket.agent.query",
    wrap = "effectDataAgentReq"
)]
#[serde(rename_all = "camelCase")]
pub struct RedpacketAgentQueryRequest {
    /// First day, `yyyy-MM-dd`, within the last 90 days.
    pub start_date: String,
    /// Last day, `yyyy-MM-dd`, within the last 90 days.
    pub end_date: String,
    /// Page number, starting at 1.
    pub page_index: u32,
    /// Page size, between 10 and 100.
    pub page_size: u32,
    /// Optional fields.
    #[serde(flatten)]
    pub options: RedpacketAgentOptions,
}

/// Bonus amounts of the last twelve months
/// (`jd.union.open.statistics.activity.bonus.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.statistics.activity.bonus.query", wrap = "req")]
#[serde(rename_all = "camelCase")]
pub struct ActivityBonusStatisticsRequest {
    /// Bonus activity id.
    pub activity_id: u64,
}

/// Optional fields of [`GiftCouponStatisticsRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct GiftCouponStatisticsOptions {
    /// Creation time filter, not to be combined with a gift coupon key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Start time filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Authorization key of a tool vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Target type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<u32>,
}

/// Real time promotion data of gift coupons (`jd.union.open.statistics.giftcoupon.query`).
///
/// The vendor accepts either `sku_id` or `gift_coupon_key`, not both.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.statistics.giftcoupon.query", wrap = "effectDataReq")]
#[serde(rename_all = "camelCase")]
pub struct GiftCouponStatisticsRequest {
    /// Sku the gift coupons were created for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<u64>,
    /// Gift coupon batch key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_coupon_key: Option<String>,
    /// Optional fields.
    #[serde(flatten)]
    pub options: GiftCouponStatisticsOptions,
}
