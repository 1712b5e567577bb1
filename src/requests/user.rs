use serde::Serialize;

use crate::UnionRequest;

/// Checks whether a device belongs to a registered JD user
/// (`jd.union.open.user.register.validate`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.user.register.validate", wrap = "userStateReq")]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterValidateRequest {
    /// Device id of the user.
    pub user_id: String,
    /// Type of `user_id`, e.g. 8 for an Android imei or 32 for an iOS idfa.
    pub user_id_type: u32,
}

/// Creates a PID for a sub promoter (`jd.union.open.user.pid.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.user.pid.get", wrap = "pidReq")]
#[serde(rename_all = "camelCase")]
pub struct UserPidGetRequest {
    /// Union id.
    pub union_id: u64,
    /// Union id of the sub promoter.
    pub child_union_id: u64,
    /// 1 app promotion, 2 chat tool promotion.
    pub promotion_type: u32,
    /// App name of the sub promoter, required for app promotion.
    pub media_name: String,
    /// Position name, created when missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_name: Option<String>,
}
