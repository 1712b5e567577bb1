use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Optional fields of [`JingfenQueryRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct JingfenQueryOptions {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Sort field, e.g. `price` or `commissionShare`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sub promoter id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Comma separated extra fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Comma separated goods types to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbid_types: Option<String>,
    /// Goods group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    /// Union id of the group owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_union_id: Option<u64>,
}

/// Curated goods of a channel (`jd.union.open.goods.jingfen.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.goods.jingfen.query", wrap = "goodsReq")]
#[serde(rename_all = "camelCase")]
pub struct JingfenQueryRequest {
    /// Channel id.
    pub elite_id: u32,
    /// Optional fields.
    #[serde(flatten)]
    pub options: JingfenQueryOptions,
}

/// Goods and coupon search (`jd.union.open.goods.query`). All fields are optional.
#[derive(Serialize, Debug, Clone, Default, PartialEq, TypedBuilder, UnionRequest)]
#[jd(method = "jd.union.open.goods.query", wrap = "goodsReqDTO")]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct GoodsQuery {
    /// First level category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid1: Option<u64>,
    /// Second level category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid2: Option<u64>,
    /// Third level category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid3: Option<u64>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Sku ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_ids: Option<Vec<u64>>,
    /// Search keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Lower price bound.
    #[serde(rename = "pricefrom", skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,
    /// Upper price bound.
    #[serde(rename = "priceto", skip_serializing_if = "Option::is_none")]
    pub price_to: Option<f64>,
    /// Lower commission share bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_share_start: Option<u32>,
    /// Upper commission share bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_share_end: Option<u32>,
    /// `g` for self operated, `p` for pop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// 1 to only return goods with coupons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_coupon: Option<u32>,
    /// 1 to only return group buying goods.
    #[serde(rename = "isPG", skip_serializing_if = "Option::is_none")]
    pub is_pg: Option<u32>,
    /// Lower group buying price bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pingou_price_start: Option<f64>,
    /// Upper group buying price bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pingou_price_end: Option<f64>,
    /// Brand code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_code: Option<String>,
    /// Shop id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,
    /// 1 to only return goods with content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_content: Option<u32>,
    /// 1 to only return goods with a best coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_best_coupon: Option<u32>,
    /// Sub promoter id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Comma separated extra fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Comma separated goods types to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbid_types: Option<String>,
    /// Jingxi flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jx_flags: Option<Vec<u32>>,
    /// Minimal shop level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_level_from: Option<f64>,
    /// Book isbn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Spu id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spu_id: Option<u64>,
    /// Coupon link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_url: Option<String>,
    /// Delivery type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<u32>,
    /// Elite types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elite_type: Option<Vec<u32>>,
    /// 1 to only return seckill goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_seckill: Option<u32>,
    /// 1 to only return presale goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_presale: Option<u32>,
    /// 1 to only return reservation goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reserve: Option<u32>,
    /// Bonus activity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_id: Option<u64>,
}

/// Optional fields of [`MaterialQueryRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct MaterialQueryOptions {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sub promoter id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Sub channel marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_union_id: Option<String>,
    /// Website id or app id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Promotion position id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,
    /// System extension parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext1: Option<String>,
    /// Sku id to recommend similar goods for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<u64>,
    /// 1 to only return goods with coupons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_coupon: Option<u32>,
    /// Type of `user_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_type: Option<u32>,
    /// Device id of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Comma separated extra fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Comma separated goods types to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbid_types: Option<String>,
    /// Goods group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    /// Union id of the group owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_union_id: Option<u64>,
    /// Benefit type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_type: Option<u32>,
}

/// Personalized goods recommendation (`jd.union.open.goods.material.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.goods.material.query", wrap = "goodsReq")]
#[serde(rename_all = "camelCase")]
pub struct MaterialQueryRequest {
    /// Channel id.
    pub elite_id: u32,
    /// Optional fields.
    #[serde(flatten)]
    pub options: MaterialQueryOptions,
}

/// Promoted goods by sku id (`jd.union.open.goods.promotiongoodsinfo.query`).
///
/// The vendor expects the sku ids as one comma separated string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.goods.promotiongoodsinfo.query")]
#[serde(rename_all = "camelCase")]
pub struct PromotionGoodsInfoQueryRequest {
    /// Comma separated sku ids.
    pub sku_ids: String,
}

impl PromotionGoodsInfoQueryRequest {
    /// Joins the given sku ids into a request.
    pub fn new<I>(skus: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let sku_ids = skus
            .into_iter()
            .map(|sku| sku.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self { sku_ids }
    }
}

/// Child categories of a category (`jd.union.open.category.goods.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.category.goods.get", wrap = "req")]
#[serde(rename_all = "camelCase")]
pub struct CategoryGoodsGetRequest {
    /// Parent category id, 0 for the top level.
    pub parent_id: u64,
    /// Category level.
    pub grade: u32,
}

/// Goods details (`jd.union.open.goods.bigfield.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.goods.bigfield.query", wrap = "goodsReq")]
#[serde(rename_all = "camelCase")]
pub struct BigFieldQueryRequest {
    /// Up to 10 sku ids.
    pub sku_ids: Vec<u64>,
    /// Fields to query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}
