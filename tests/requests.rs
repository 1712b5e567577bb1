use jd_union_rs::requests::*;
use jd_union_rs::UnionRequest;

#[test]
fn test_unset_options_are_omitted() {
    let request = PromotionCommonGetRequest {
        material_id: "https://item.jd.com/100012043978.html".to_string(),
        site_id: 4100000001,
        options: PromotionCommonOptions::default(),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"promotionCodeReq":{"materialId":"https://item.jd.com/100012043978.html","siteId":4100000001}}"#
    );
}

#[test]
fn test_required_fields_come_first() {
    let request = PromotionByUnionIdGetRequest {
        material_id: "https://u.jd.com/abc".to_string(),
        union_id: 1000000,
        options: PromotionLinkOptions::builder()
            .chain_type(3)
            .sub_union_id("wechat".to_string())
            .build(),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"promotionCodeReq":{"materialId":"https://u.jd.com/abc","unionId":1000000,"subUnionId":"wechat","chainType":3}}"#
    );
}

#[test]
fn test_sku_ids_are_joined() {
    let request = PromotionGoodsInfoQueryRequest::new([1, 2, 3]);

    assert_eq!(request.sku_ids, "1,2,3");
    assert_eq!(request.param_json().unwrap(), r#"{"skuIds":"1,2,3"}"#);
    assert_eq!(
        PromotionGoodsInfoQueryRequest::new(Vec::new()).param_json().unwrap(),
        r#"{"skuIds":""}"#
    );
}

#[test]
fn test_coupon_urls_are_passed_through() {
    let request = CouponQueryRequest::new(["https://coupon.jd.com/b", "https://coupon.jd.com/a"]);

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"couponUrls":["https://coupon.jd.com/b","https://coupon.jd.com/a"]}"#
    );
}

#[test]
fn test_bigfield_keeps_sku_sequence() {
    let request = BigFieldQueryRequest {
        sku_ids: vec![3, 1, 2],
        fields: Some(vec!["categoryInfo".to_string(), "imageInfo".to_string()]),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"goodsReq":{"skuIds":[3,1,2],"fields":["categoryInfo","imageInfo"]}}"#
    );
}

#[test]
fn test_vendor_spelling_of_goods_query_fields() {
    let query = GoodsQuery::builder()
        .keyword("手机".to_string())
        .price_from(100.0)
        .price_to(200.5)
        .is_pg(1)
        .build();

    assert_eq!(
        query.param_json().unwrap(),
        r#"{"goodsReqDTO":{"keyword":"手机","pricefrom":100.0,"priceto":200.5,"isPG":1}}"#
    );
    assert_eq!(GoodsQuery::METHOD, "jd.union.open.goods.query");
}

#[test]
fn test_type_fields_are_renamed() {
    let request = OrderRowQueryRequest {
        page_index: 1,
        kind: 3,
        start_time: "2024-01-01 10:00:00".to_string(),
        end_time: "2024-01-01 11:00:00".to_string(),
        options: OrderRowOptions::builder().page_size(200).build(),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"orderReq":{"pageIndex":1,"type":3,"startTime":"2024-01-01 10:00:00","endTime":"2024-01-01 11:00:00","pageSize":200}}"#
    );
}

#[test]
fn test_gift_coupon_field_order() {
    let request = GiftCouponGetRequest {
        sku_material_id: "100012043978".to_string(),
        discount: 1.5,
        amount: 100,
        receive_end_time: "2024-01-03 23".to_string(),
        receive_start_time: "2024-01-01 00".to_string(),
        is_spu: 1,
        expire_type: 1,
        share: -1,
        options: GiftCouponOptions::builder().effective_days(3).build(),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"couponReq":{"skuMaterialId":"100012043978","discount":1.5,"amount":100,"receiveEndTime":"2024-01-03 23","receiveStartTime":"2024-01-01 00","isSpu":1,"expireType":1,"share":-1,"effectiveDays":3}}"#
    );
}

#[test]
fn test_tools_intelligence_puts_union_id_first() {
    let request = ToolsIntelligenceQueryRequest {
        union_id: 42,
        query: IntelligenceQuery::builder()
            .cid1_list(vec![1315, 652])
            .page_index(1)
            .build(),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"req":{"unionId":42,"cid1List":[1315,652],"pageIndex":1}}"#
    );
}

#[test]
fn test_all_optional_requests_serialize_empty() {
    assert_eq!(
        ActivityQuery::default().param_json().unwrap(),
        r#"{"activityReq":{}}"#
    );
    assert_eq!(
        ChannelRelationQuery::default().param_json().unwrap(),
        r#"{"channelRelationQueryReq":{}}"#
    );
    assert_eq!(
        ActivityRecommendQuery::default().param_json().unwrap(),
        r#"{"req":{}}"#
    );
}

#[test]
fn test_methods_and_wrappers() {
    assert_eq!(
        PromotionCommonGetRequest::METHOD,
        "jd.union.open.promotion.common.get"
    );
    assert_eq!(PromotionCommonGetRequest::WRAP, Some("promotionCodeReq"));
    assert_eq!(CouponQueryRequest::WRAP, None);
    assert_eq!(PromotionGoodsInfoQueryRequest::WRAP, None);
    assert_eq!(
        RedpacketAgentQueryRequest::WRAP,
        Some("effectDataAgentReq")
    );
    assert_eq!(UserPidGetRequest::WRAP, Some("pidReq"));
    assert_eq!(
        ChannelRelationGetRequest::METHOD,
        "jd.union.open.channel.relation.get"
    );
}

#[test]
fn test_either_or_gift_coupon_statistics() {
    let request = GiftCouponStatisticsRequest {
        sku_id: None,
        gift_coupon_key: Some("0a1b2c".to_string()),
        options: GiftCouponStatisticsOptions::default(),
    };

    assert_eq!(
        request.param_json().unwrap(),
        r#"{"effectDataReq":{"giftCouponKey":"0a1b2c"}}"#
    );
}
