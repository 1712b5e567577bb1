use serde::Serialize;

use crate::UnionRequest;

/// Page size [`PositionQueryRequest`] falls back to.
pub const DEFAULT_POSITION_PAGE_SIZE: u32 = 20;

/// Creates promotion positions in bulk (`jd.union.open.position.create`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.position.create", wrap = "positionReq")]
#[serde(rename_all = "camelCase")]
pub struct PositionCreateRequest {
    /// Union id the positions are created for.
    pub union_id: u64,
    /// 3 private positions, 4 positions shown in the union backend.
    pub union_type: u32,
    /// Authorization key of the union id.
    pub key: String,
    /// Site type: 1 website, 2 app, 3 shopping guide, 4 chat tool.
    #[serde(rename = "type")]
    pub kind: u32,
    /// Position names, at most 50.
    pub space_name_list: Vec<String>,
    /// Site id, required unless `kind` is 4.
    pub site_id: u64,
}

/// Lists promotion positions (`jd.union.open.position.query`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, UnionRequest)]
#[jd(method = "jd.union.open.position.query", wrap = "positionReq")]
#[serde(rename_all = "camelCase")]
pub struct PositionQueryRequest {
    /// Union id to query.
    pub union_id: u64,
    /// Authorization key of the union id.
    pub key: String,
    /// 3 private positions, 4 positions shown in the union backend.
    pub union_type: u32,
    /// Page number, at most 100.
    pub page_index: u32,
    /// Page size, at most 100.
    pub page_size: u32,
}
