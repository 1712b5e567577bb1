use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Optional fields of [`PromotionCommonGetRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct PromotionCommonOptions {
    /// Promotion position id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u64>,
    /// Sub channel marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_union_id: Option<String>,
    /// System extension parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext1: Option<String>,
    /// Sub promoter id (联盟子推客身份标识).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Coupon claim link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_url: Option<String>,
    /// Gift coupon batch key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_coupon_key: Option<String>,
    /// Channel relation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<u64>,
}

/// Promotion link for websites and apps (`jd.union.open.promotion.common.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.promotion.common.get", wrap = "promotionCodeReq")]
#[serde(rename_all = "camelCase")]
pub struct PromotionCommonGetRequest {
    /// Promoted material url, e.g. an activity or item link. A bare sku id is not accepted.
    pub material_id: String,
    /// Website id or app id.
    pub site_id: u64,
    /// Optional fields.
    #[serde(flatten)]
    pub options: PromotionCommonOptions,
}

/// Optional fields shared by the promotion link requests of social media and tool vendors.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct PromotionLinkOptions {
    /// Sub channel marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_union_id: Option<String>,
    /// Promotion position id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u64>,
    /// Sub promoter id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Coupon claim link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_url: Option<String>,
    /// Link type, 1 long link, 2 short link, 3 both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_type: Option<u32>,
    /// Gift coupon batch key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_coupon_key: Option<String>,
    /// Channel relation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<u64>,
}

/// Promotion link for social media (`jd.union.open.promotion.bysubunionid.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.promotion.bysubunionid.get", wrap = "promotionCodeReq")]
#[serde(rename_all = "camelCase")]
pub struct PromotionBySubUnionIdGetRequest {
    /// Promoted material url.
    pub material_id: String,
    /// Optional fields.
    #[serde(flatten)]
    pub options: PromotionLinkOptions,
}

/// Promotion link created by a tool vendor for another promoter
/// (`jd.union.open.promotion.byunionid.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.promotion.byunionid.get", wrap = "promotionCodeReq")]
#[serde(rename_all = "camelCase")]
pub struct PromotionByUnionIdGetRequest {
    /// Promoted material url.
    pub material_id: String,
    /// Union id of the target promoter.
    pub union_id: u64,
    /// Optional fields.
    #[serde(flatten)]
    pub options: PromotionLinkOptions,
}

/// Activity intelligence (活动爆料) query (`jd.union.open.promotion.intelligence.query`).
///
/// All fields are optional, the struct doubles as the options of
/// [`ToolsIntelligenceQueryRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder, UnionRequest)]
#[jd(method = "jd.union.open.promotion.intelligence.query", wrap = "req")]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceQuery {
    /// Title keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Intelligence type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
    /// First level category ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid1_list: Option<Vec<u64>>,
    /// Activity status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    /// Essence filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essence: Option<String>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Sub promoter id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Sub channel marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_union_id: Option<String>,
    /// Website id or app id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<u64>,
    /// Promotion position id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<u64>,
    /// System extension parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext1: Option<String>,
}

/// Activity intelligence query on behalf of another promoter
/// (`jd.union.open.promotion.tools.intelligence.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.promotion.tools.intelligence.query", wrap = "req")]
#[serde(rename_all = "camelCase")]
pub struct ToolsIntelligenceQueryRequest {
    /// Union id of the target promoter.
    pub union_id: u64,
    /// Optional fields.
    #[serde(flatten)]
    pub query: IntelligenceQuery,
}
