use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::UnionRequest;

/// Fetches an invite code (`jd.union.open.channel.invitecode.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.channel.invitecode.get", wrap = "channelInviteReq")]
#[serde(rename_all = "camelCase")]
pub struct InviteCodeGetRequest {
    /// 0 channel invite.
    pub invite_type: u32,
    /// 0 general filing.
    pub channel_type: u32,
}

/// Creates a channel relation id (`jd.union.open.channel.relation.get`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.channel.relation.get", wrap = "channelRelationGetReq")]
#[serde(rename_all = "camelCase")]
pub struct ChannelRelationGetRequest {
    /// Invite code.
    pub invite_code: String,
    /// Note, up to 15 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Lists channel relations (`jd.union.open.channel.relation.query`). All fields are optional.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, TypedBuilder, UnionRequest)]
#[jd(method = "jd.union.open.channel.relation.query", wrap = "channelRelationQueryReq")]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
pub struct ChannelRelationQuery {
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Channel relation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<u64>,
}
