use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Official union activities (`jd.union.open.activity.query`). All fields are optional.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder, UnionRequest)]
#[jd(method = "jd.union.open.activity.query", wrap = "activityReq")]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Activity pool id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<u64>,
    /// Day the activity is active on, `yyyy-MM-dd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_date: Option<String>,
}

/// Personalized activity recommendation (`jd.union.open.activity.recommend.query`).
/// All fields are optional.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder, UnionRequest)]
#[jd(method = "jd.union.open.activity.recommend.query", wrap = "req")]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecommendQuery {
    /// Device id of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Type of `user_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_type: Option<u32>,
    /// Order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
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
    pub position_id: Option<u64>,
    /// 1 to include click urls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_click_url: Option<u32>,
    /// Image width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    /// Image height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}

/// Bonus activities of the last three months (`jd.union.open.activity.bonus.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.activity.bonus.query", wrap = "req")]
#[serde(rename_all = "camelCase")]
pub struct ActivityBonusQueryRequest {
    /// Activity start, milliseconds since the epoch, within the last 90 days.
    pub begin_time: i64,
    /// Activity end, milliseconds since the epoch.
    pub end_time: i64,
    /// Page number.
    pub page_index: u32,
    /// Page size.
    pub page_size: u32,
    /// Bonus activity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u64>,
}
