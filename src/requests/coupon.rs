use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Coupon platform, value, validity and stock (`jd.union.open.coupon.query`).
///
/// The urls are sent as a JSON array.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.coupon.query")]
#[serde(rename_all = "camelCase")]
pub struct CouponQueryRequest {
    /// Coupon links.
    pub coupon_urls: Vec<String>,
}

impl CouponQueryRequest {
    /// Creates a request for the given coupon links, keeping their order.
    pub fn new<I, S>(coupon_urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coupon_urls: coupon_urls.into_iter().map(Into::into).collect(),
        }
    }
}

/// Optional fields of [`GiftCouponGetRequest`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct GiftCouponOptions {
    /// Days the coupon stays valid, for `expire_type` 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_days: Option<u32>,
    /// First usable day, for `expire_type` 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_start_time: Option<String>,
    /// Last usable day, for `expire_type` 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_end_time: Option<String>,
    /// Whether the coupon is restricted to content media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_match: Option<u32>,
    /// Coupon title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_title: Option<String>,
    /// Content media the coupon may be used in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_match_medias: Option<Vec<u32>>,
    /// Whether the coupon is shown in media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_medias: Option<u32>,
    /// Target type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<u32>,
    /// Comma separated sub promoters allowed to promote the coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_promoters: Option<String>,
}

/// Creates a gift coupon (`jd.union.open.coupon.gift.get`).
#[derive(Serialize, Debug, Clone, PartialEq, UnionRequest)]
#[jd(method = "jd.union.open.coupon.gift.get", wrap = "couponReq")]
#[serde(rename_all = "camelCase")]
pub struct GiftCouponGetRequest {
    /// Sku id or landing page url.
    pub sku_material_id: String,
    /// Coupon value, at least 1.
    pub discount: f64,
    /// Total number of coupons.
    pub amount: u32,
    /// End of the claim period, `yyyy-MM-dd HH`.
    pub receive_end_time: String,
    /// Start of the claim period, `yyyy-MM-dd HH`.
    pub receive_start_time: String,
    /// 1 to bind all skus of the same spu, 0 otherwise.
    pub is_spu: u32,
    /// 1 relative validity (`effective_days`), 2 absolute validity.
    pub expire_type: u32,
    /// -1 unlimited claims per link, 1 a single claim.
    pub share: i32,
    /// Optional fields.
    #[serde(flatten)]
    pub options: GiftCouponOptions,
}

/// Stops a gift coupon (`jd.union.open.coupon.gift.stop`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.coupon.gift.stop", wrap = "couponReq")]
#[serde(rename_all = "camelCase")]
pub struct GiftCouponStopRequest {
    /// Gift coupon batch key.
    pub gift_coupon_key: String,
}
