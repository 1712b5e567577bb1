//! Typed operations of the JD Union open API.
//!
//! Each method takes the required vendor fields positionally and the optional ones as an
//! options struct (use `Default::default()` or its builder), then sends the matching
//! request from [`crate::requests`].

use crate::requests::*;
use crate::{JdUnionClient, UnionResponse, UnionResult};

impl JdUnionClient {
    /// Promotion link for websites and apps.
    pub async fn promotion_common_get(
        &self,
        material_id: &str,
        site_id: u64,
        options: PromotionCommonOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&PromotionCommonGetRequest {
            material_id: material_id.to_string(),
            site_id,
            options,
        })
        .await
    }

    /// Promotion link for social media.
    pub async fn promotion_bysubunionid_get(
        &self,
        material_id: &str,
        options: PromotionLinkOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&PromotionBySubUnionIdGetRequest {
            material_id: material_id.to_string(),
            options,
        })
        .await
    }

    /// Promotion link created by a tool vendor for the promoter `union_id`.
    pub async fn promotion_byunionid_get(
        &self,
        material_id: &str,
        union_id: u64,
        options: PromotionLinkOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&PromotionByUnionIdGetRequest {
            material_id: material_id.to_string(),
            union_id,
            options,
        })
        .await
    }

    /// Curated goods of the channel `elite_id`.
    pub async fn goods_jingfen_query(
        &self,
        elite_id: u32,
        options: JingfenQueryOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&JingfenQueryRequest { elite_id, options }).await
    }

    /// Goods and coupon search.
    pub async fn goods_query(&self, query: GoodsQuery) -> UnionResult<UnionResponse> {
        self.execute(&query).await
    }

    /// Personalized goods recommendation ("猜你喜欢").
    pub async fn goods_material_query(
        &self,
        elite_id: u32,
        options: MaterialQueryOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&MaterialQueryRequest { elite_id, options }).await
    }

    /// Promoted goods by sku id. The ids are sent as one comma separated string.
    pub async fn goods_promotiongoodsinfo_query<I>(&self, skus: I) -> UnionResult<UnionResponse>
    where
        I: IntoIterator<Item = u64>,
    {
        self.execute(&PromotionGoodsInfoQueryRequest::new(skus))
            .await
    }

    /// Child categories of `parent_id` on level `grade`.
    pub async fn category_goods_get(
        &self,
        parent_id: u64,
        grade: u32,
    ) -> UnionResult<UnionResponse> {
        self.execute(&CategoryGoodsGetRequest { parent_id, grade })
            .await
    }

    /// Goods details of up to 10 skus.
    pub async fn goods_bigfield_query<I>(
        &self,
        sku_ids: I,
        fields: Option<Vec<String>>,
    ) -> UnionResult<UnionResponse>
    where
        I: IntoIterator<Item = u64>,
    {
        self.execute(&BigFieldQueryRequest {
            sku_ids: sku_ids.into_iter().collect(),
            fields,
        })
        .await
    }

    /// Platform, value, validity and stock of coupons.
    pub async fn coupon_query<I, S>(&self, coupon_urls: I) -> UnionResult<UnionResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.execute(&CouponQueryRequest::new(coupon_urls)).await
    }

    /// Official union activities.
    pub async fn activity_query(&self, query: ActivityQuery) -> UnionResult<UnionResponse> {
        self.execute(&query).await
    }

    /// Personalized activity recommendation.
    pub async fn activity_recommend_query(
        &self,
        query: ActivityRecommendQuery,
    ) -> UnionResult<UnionResponse> {
        self.execute(&query).await
    }

    /// Activity intelligence.
    pub async fn promotion_intelligence_query(
        &self,
        query: IntelligenceQuery,
    ) -> UnionResult<UnionResponse> {
        self.execute(&query).await
    }

    /// Activity intelligence on behalf of the promoter `union_id`.
    pub async fn promotion_tools_intelligence_query(
        &self,
        union_id: u64,
        query: IntelligenceQuery,
    ) -> UnionResult<UnionResponse> {
        self.execute(&ToolsIntelligenceQueryRequest { union_id, query })
            .await
    }

    /// Promotion orders and commissions.
    ///
    /// `kind` selects the time the range applies to: 1 order time, 2 completion time,
    /// 3 update time.
    pub async fn order_row_query(
        &self,
        page_index: u32,
        kind: u32,
        start_time: &str,
        end_time: &str,
        options: OrderRowOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&OrderRowQueryRequest {
            page_index,
            kind,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            options,
        })
        .await
    }

    /// Bonus orders. Times are milliseconds since the epoch.
    #[allow(clippy::too_many_arguments)]
    pub async fn order_bonus_query(
        &self,
        opt_type: u32,
        start_time: i64,
        end_time: i64,
        page_no: u32,
        page_size: u32,
        sort_value: &str,
        activity_id: Option<u64>,
    ) -> UnionResult<UnionResponse> {
        self.execute(&OrderBonusQueryRequest {
            opt_type,
            start_time,
            end_time,
            page_no,
            page_size,
            sort_value: sort_value.to_string(),
            activity_id,
        })
        .await
    }

    /// Red packet effect data.
    pub async fn statistics_redpacket_query(
        &self,
        start_date: &str,
        end_date: &str,
        page_index: u32,
        page_size: u32,
        options: RedpacketQueryOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&RedpacketQueryRequest {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            page_index,
            page_size,
            options,
        })
        .await
    }

    /// Orders a tool vendor brought in for other promoters.
    pub async fn order_agent_query(
        &self,
        page_index: u32,
        page_size: u32,
        kind: u32,
        start_time: &str,
        end_time: &str,
        fields: Option<&str>,
    ) -> UnionResult<UnionResponse> {
        self.execute(&OrderAgentQueryRequest {
            page_index,
            page_size,
            kind,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            fields: fields.map(str::to_string),
        })
        .await
    }

    /// Red packet effect data of links converted for other promoters.
    pub async fn statistics_redpacket_agent_query(
        &self,
        start_date: &str,
        end_date: &str,
        page_index: u32,
        page_size: u32,
        options: RedpacketAgentOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&RedpacketAgentQueryRequest {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            page_index,
            page_size,
            options,
        })
        .await
    }

    /// Bonus activities of the last three months. Times are milliseconds since the epoch.
    pub async fn activity_bonus_query(
        &self,
        begin_time: i64,
        end_time: i64,
        page_index: u32,
        page_size: u32,
        activity_id: Option<u64>,
    ) -> UnionResult<UnionResponse> {
        self.execute(&ActivityBonusQueryRequest {
            begin_time,
            end_time,
            page_index,
            page_size,
            activity_id,
        })
        .await
    }

    /// Bonus amounts of the last twelve months.
    pub async fn statistics_activity_bonus_query(
        &self,
        activity_id: u64,
    ) -> UnionResult<UnionResponse> {
        self.execute(&ActivityBonusStatisticsRequest { activity_id })
            .await
    }

    /// Creates a gift coupon.
    #[allow(clippy::too_many_arguments)]
    pub async fn coupon_gift_get(
        &self,
        sku_material_id: &str,
        discount: f64,
        amount: u32,
        receive_start_time: &str,
        receive_end_time: &str,
        is_spu: u32,
        expire_type: u32,
        share: i32,
        options: GiftCouponOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&GiftCouponGetRequest {
            sku_material_id: sku_material_id.to_string(),
            discount,
            amount,
            receive_end_time: receive_end_time.to_string(),
            receive_start_time: receive_start_time.to_string(),
            is_spu,
            expire_type,
            share,
            options,
        })
        .await
    }

    /// Stops a gift coupon.
    pub async fn coupon_gift_stop(&self, gift_coupon_key: &str) -> UnionResult<UnionResponse> {
        self.execute(&GiftCouponStopRequest {
            gift_coupon_key: gift_coupon_key.to_string(),
        })
        .await
    }

    /// Real time promotion data of gift coupons, by sku or by batch key.
    pub async fn statistics_giftcoupon_query(
        &self,
        sku_id: Option<u64>,
        gift_coupon_key: Option<&str>,
        options: GiftCouponStatisticsOptions,
    ) -> UnionResult<UnionResponse> {
        self.execute(&GiftCouponStatisticsRequest {
            sku_id,
            gift_coupon_key: gift_coupon_key.map(str::to_string),
            options,
        })
        .await
    }

    /// Checks whether a device belongs to a registered JD user.
    pub async fn user_register_validate(
        &self,
        user_id: &str,
        user_id_type: u32,
    ) -> UnionResult<UnionResponse> {
        self.execute(&UserRegisterValidateRequest {
            user_id: user_id.to_string(),
            user_id_type,
        })
        .await
    }

    /// Creates promotion positions in bulk.
    pub async fn position_create<I, S>(
        &self,
        union_id: u64,
        key: &str,
        union_type: u32,
        kind: u32,
        space_names: I,
        site_id: u64,
    ) -> UnionResult<UnionResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.execute(&PositionCreateRequest {
            union_id,
            union_type,
            key: key.to_string(),
            kind,
            space_name_list: space_names.into_iter().map(Into::into).collect(),
            site_id,
        })
        .await
    }

    /// Lists promotion positions, 20 per page unless `page_size` is given.
    pub async fn position_query(
        &self,
        union_id: u64,
        key: &str,
        union_type: u32,
        page_index: u32,
        page_size: Option<u32>,
    ) -> UnionResult<UnionResponse> {
        self.execute(&PositionQueryRequest {
            union_id,
            key: key.to_string(),
            union_type,
            page_index,
            page_size: page_size.unwrap_or(DEFAULT_POSITION_PAGE_SIZE),
        })
        .await
    }

    /// Creates a PID for the sub promoter `child_union_id`.
    pub async fn user_pid_get(
        &self,
        union_id: u64,
        child_union_id: u64,
        promotion_type: u32,
        media_name: &str,
        position_name: Option<&str>,
    ) -> UnionResult<UnionResponse> {
        self.execute(&UserPidGetRequest {
            union_id,
            child_union_id,
            promotion_type,
            media_name: media_name.to_string(),
            position_name: position_name.map(str::to_string),
        })
        .await
    }

    /// Fetches an invite code.
    pub async fn channel_invitecode_get(
        &self,
        invite_type: u32,
        channel_type: u32,
    ) -> UnionResult<UnionResponse> {
        self.execute(&InviteCodeGetRequest {
            invite_type,
            channel_type,
        })
        .await
    }

    /// Creates a channel relation id from an invite code.
    pub async fn channel_relation_get(
        &self,
        invite_code: &str,
        note: Option<&str>,
    ) -> UnionResult<UnionResponse> {
        self.execute(&ChannelRelationGetRequest {
            invite_code: invite_code.to_string(),
            note: note.map(str::to_string),
        })
        .await
    }

    /// Lists channel relations.
    pub async fn channel_relation_query(
        &self,
        query: ChannelRelationQuery,
    ) -> UnionResult<UnionResponse> {
        self.execute(&query).await
    }
}
