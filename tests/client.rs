mod common;

use std::time::Duration;

use common::{echo, Reply, StubServer, APP_KEY};
use jd_union_rs::requests::{ChannelRelationQuery, GoodsQuery, PromotionCommonOptions};
use jd_union_rs::{JdUnionClient, JdUnionError, UnionRequest, UnionResponse};
use serde_json::json;

#[tokio::test]
async fn test_success_payload_is_unwrapped() {
    let server = StubServer::start(echo).await;
    let client = server.client();

    let response = client
        .request("jd.union.open.goods.query", &json!({ "goodsReqDTO": { "keyword": "键盘" } }))
        .await
        .unwrap();

    let payload = response.success().unwrap();
    assert_eq!(payload["code"], "0");
    assert_eq!(payload["method"], "jd.union.open.goods.query");
    assert_eq!(payload["param_json"]["goodsReqDTO"]["keyword"], "键盘");
    assert_eq!(payload["sign_ok"], true);
}

#[tokio::test]
async fn test_common_parameters_are_sent() {
    let server = StubServer::start(|call| {
        let mut body = serde_json::Map::new();
        body.insert(
            jd_union_rs::response_field_name(call.method()),
            json!({
                "keys": call.query.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>(),
                "app_key": call.get("app_key"),
                "format": call.get("format"),
                "sign_method": call.get("sign_method"),
                "v": call.get("v"),
                "timestamp": call.get("timestamp"),
            }),
        );
        Reply::json(serde_json::Value::Object(body))
    })
    .await;

    let response = server
        .client()
        .request("jd.union.open.category.goods.get", &json!({}))
        .await
        .unwrap();
    let payload = response.success().unwrap();

    assert_eq!(
        payload["keys"],
        json!([
            "360buy_param_json",
            "app_key",
            "format",
            "method",
            "sign_method",
            "timestamp",
            "v",
            "sign"
        ])
    );
    assert_eq!(payload["app_key"], APP_KEY);
    assert_eq!(payload["format"], "json");
    assert_eq!(payload["sign_method"], "md5");
    assert_eq!(payload["v"], "1.0");
    let timestamp = payload["timestamp"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[tokio::test]
async fn test_vendor_error_is_returned_as_value() {
    let server = StubServer::start(|_| {
        Reply::json(json!({
            "error_response": { "code": 1, "msg": "bad sign" }
        }))
    })
    .await;

    let response = server
        .client()
        .goods_query(GoodsQuery::default())
        .await
        .unwrap();

    assert!(response.is_error());
    assert_eq!(
        response,
        UnionResponse::Error(json!({ "code": 1, "msg": "bad sign" }))
    );
    let error = response.error_response().unwrap().unwrap();
    assert_eq!(error.code, "1");
}

#[tokio::test]
async fn test_vendor_error_wins_over_payload() {
    let server = StubServer::start(|call| {
        let mut body = serde_json::Map::new();
        body.insert(
            jd_union_rs::response_field_name(call.method()),
            json!({ "code": "0" }),
        );
        body.insert(
            "error_response".to_string(),
            json!({ "code": "67", "zh_desc": "平台连接后端服务不可用" }),
        );
        Reply::json(serde_json::Value::Object(body))
    })
    .await;

    let response = server
        .client()
        .channel_relation_query(ChannelRelationQuery::default())
        .await
        .unwrap();

    assert!(response.is_error());
    assert_eq!(response.success(), None);
}

#[tokio::test]
async fn test_empty_error_envelope_is_not_an_error() {
    let server = StubServer::start(|call| {
        let mut body = serde_json::Map::new();
        body.insert("error_response".to_string(), serde_json::Value::Null);
        body.insert(
            jd_union_rs::response_field_name(call.method()),
            json!({ "code": "0", "result": [] }),
        );
        Reply::json(serde_json::Value::Object(body))
    })
    .await;

    let response = server.client().category_goods_get(0, 0).await.unwrap();

    assert_eq!(
        response,
        UnionResponse::Success(Some(json!({ "code": "0", "result": [] })))
    );
}

#[tokio::test]
async fn test_unknown_route_is_an_http_status_error() {
    let server = StubServer::start(echo).await;
    let client = JdUnionClient::builder()
        .app_key(APP_KEY)
        .secret(common::SECRET)
        .endpoint(&server.endpoint().replace("/routerjson", "/elsewhere"))
        .build();

    let err = client
        .request("jd.union.open.activity.query", &json!({}))
        .await
        .unwrap_err();

    match err {
        JdUnionError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_payload_is_none() {
    let server = StubServer::start(|_| Reply::json(json!({ "something_else": {} }))).await;

    let response = server
        .client()
        .request("jd.union.open.activity.query", &json!({ "activityReq": {} }))
        .await
        .unwrap();

    assert_eq!(response, UnionResponse::Success(None));
}

#[tokio::test]
async fn test_malformed_body_is_a_json_error() {
    let server = StubServer::start(|_| Reply::raw(200, "<html>not json</html>")).await;

    let err = server
        .client()
        .request("jd.union.open.activity.query", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, JdUnionError::Json(_)));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = StubServer::start(|_| Reply::raw(500, "upstream down")).await;

    let err = server
        .client()
        .request("jd.union.open.activity.query", &json!({}))
        .await
        .unwrap_err();

    match err {
        JdUnionError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = StubServer::start(|call| echo(call).delayed(Duration::from_secs(2))).await;
    let client = server.client().with_timeout(Duration::from_millis(200));

    let err = client
        .request("jd.union.open.activity.query", &json!({}))
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected a timeout, got {err:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = JdUnionClient::builder()
        .app_key(APP_KEY)
        .secret(common::SECRET)
        .endpoint(&format!("http://{}/routerjson", addr))
        .build();

    let err = client
        .request("jd.union.open.activity.query", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, JdUnionError::Transport(_)));
}

#[tokio::test]
async fn test_concurrent_calls_keep_their_own_method() {
    let server = StubServer::start(|call| {
        let delay = if call.method() == "jd.union.open.goods.query" {
            Duration::from_millis(300)
        } else {
            Duration::ZERO
        };
        echo(call).delayed(delay)
    })
    .await;
    let client = server.client();

    let (slow, fast) = tokio::join!(
        client.goods_query(GoodsQuery::builder().keyword("慢".to_string()).build()),
        client.category_goods_get(0, 0),
    );

    let slow = slow.unwrap();
    let slow = slow.success().unwrap();
    assert_eq!(slow["method"], "jd.union.open.goods.query");
    assert_eq!(slow["param_json"]["goodsReqDTO"]["keyword"], "慢");
    assert_eq!(slow["sign_ok"], true);

    let fast = fast.unwrap();
    let fast = fast.success().unwrap();
    assert_eq!(fast["method"], "jd.union.open.category.goods.get");
    assert_eq!(fast["param_json"], json!({ "req": { "parentId": 0, "grade": 0 } }));
    assert_eq!(fast["sign_ok"], true);
}

#[tokio::test]
async fn test_many_concurrent_calls_on_shared_client() {
    let server = StubServer::start(echo).await;
    let client = server.client();

    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let response = if i % 2 == 0 {
                    client.goods_promotiongoodsinfo_query([i]).await
                } else {
                    client.statistics_activity_bonus_query(i).await
                };
                (i, response.unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, response) = handle.await.unwrap();
        let payload = response.success().unwrap();
        if i % 2 == 0 {
            assert_eq!(payload["method"], "jd.union.open.goods.promotiongoodsinfo.query");
            assert_eq!(payload["param_json"], json!({ "skuIds": i.to_string() }));
        } else {
            assert_eq!(payload["method"], "jd.union.open.statistics.activity.bonus.query");
            assert_eq!(payload["param_json"], json!({ "req": { "activityId": i } }));
        }
        assert_eq!(payload["sign_ok"], true);
    }
}

#[tokio::test]
async fn test_typed_operations_send_their_shapes() {
    let server = StubServer::start(echo).await;
    let client = server.client();

    let response = client
        .goods_promotiongoodsinfo_query([1, 2, 3])
        .await
        .unwrap();
    assert_eq!(
        response.success().unwrap()["param_json"],
        json!({ "skuIds": "1,2,3" })
    );

    let response = client
        .coupon_query(["https://coupon.jd.com/1", "https://coupon.jd.com/2"])
        .await
        .unwrap();
    assert_eq!(
        response.success().unwrap()["param_json"],
        json!({ "couponUrls": ["https://coupon.jd.com/1", "https://coupon.jd.com/2"] })
    );

    let response = client
        .promotion_common_get(
            "https://item.jd.com/1.html",
            4100000001,
            PromotionCommonOptions::builder().position_id(9).build(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.success().unwrap()["param_json"],
        json!({
            "promotionCodeReq": {
                "materialId": "https://item.jd.com/1.html",
                "siteId": 4100000001u64,
                "positionId": 9
            }
        })
    );

    let response = client
        .position_query(1000, "auth-key", 3, 1, None)
        .await
        .unwrap();
    assert_eq!(
        response.success().unwrap()["param_json"],
        json!({
            "positionReq": {
                "unionId": 1000,
                "key": "auth-key",
                "unionType": 3,
                "pageIndex": 1,
                "pageSize": 20
            }
        })
    );

    let response = client
        .order_agent_query(1, 100, 1, "2024-01-01 10:00:00", "2024-01-01 10:20:00", None)
        .await
        .unwrap();
    let payload = response.success().unwrap();
    assert_eq!(payload["method"], "jd.union.open.order.agent.query");
    assert_eq!(payload["param_json"]["orderReq"]["type"], 1);
    assert!(payload["param_json"]["orderReq"].get("fields").is_none());
}

#[tokio::test]
async fn test_request_trait_sends_itself() {
    let server = StubServer::start(echo).await;
    let client = server.client();

    let query = ChannelRelationQuery::builder().page_index(2).build();
    let response = query.send(&client).await.unwrap();
    let payload = response.success().unwrap();

    assert_eq!(payload["method"], ChannelRelationQuery::METHOD);
    assert_eq!(
        payload["param_json"],
        json!({ "channelRelationQueryReq": { "pageIndex": 2 } })
    );
}

#[tokio::test]
async fn test_raw_response_is_available() {
    let server = StubServer::start(echo).await;

    let response = server
        .client()
        .request_as_response("jd.union.open.activity.query", &json!({}))
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("jd_union_open_activity_query_responce").is_some());
}

#[tokio::test]
#[ignore = "calls the live JD Union API, needs JD_UNION_APP_KEY and JD_UNION_SECRET"]
async fn test_live_category_query() {
    dotenvy::from_filename("tests/.env").ok();

    let _guard = init_tracing_opentelemetry::TracingConfig::testing()
        .init_subscriber()
        .unwrap();

    let client = JdUnionClient::from_env().unwrap();
    let response = client.category_goods_get(0, 0).await.unwrap();

    tracing::debug!("Response: {:?}", response);
    match response {
        UnionResponse::Success(payload) => assert!(payload.is_some()),
        UnionResponse::Error(error) => panic!("rejected: {error}"),
    }
}
