use jd_union_rs::requests::{GoodsQuery, OrderRowOptions};
use jd_union_rs::{JdUnionClient, UnionResponse};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub code: i64,
    pub message: Option<String>,
    pub get_result: Option<String>,
}

async fn get_json_value(client: &JdUnionClient) {
    let response = client
        .request(
            "jd.union.open.category.goods.get",
            &json!({ "req": { "parentId": 0, "grade": 0 } }),
        )
        .await
        .unwrap();

    println!("{:#?}", response);
}

async fn get_deserialized_value(client: &JdUnionClient) {
    let response = client.category_goods_get(0, 0).await.unwrap();

    match response.deserialize_success::<CategoryResult>() {
        Ok(Some(result)) => println!("{:#?}", result),
        Ok(None) => println!("rejected: {:?}", response.error_response()),
        Err(err) => eprintln!("unexpected payload: {}", err),
    }
}

async fn search_goods(client: &JdUnionClient) {
    let query = GoodsQuery::builder()
        .keyword("机械键盘".to_string())
        .is_coupon(1)
        .page_index(1)
        .page_size(10)
        .build();

    match client.goods_query(query).await.unwrap() {
        UnionResponse::Success(payload) => println!("{:#?}", payload),
        UnionResponse::Error(error) => eprintln!("rejected: {}", error),
    }
}

async fn latest_orders(client: &JdUnionClient) {
    let end = chrono::Local::now();
    let start = end - chrono::Duration::minutes(30);
    let format = "%Y-%m-%d %H:%M:%S";

    let response = client
        .order_row_query(
            1,
            1,
            &start.format(format).to_string(),
            &end.format(format).to_string(),
            OrderRowOptions::builder().page_size(20).build(),
        )
        .await
        .unwrap();

    println!("{:#?}", response);
}

#[tokio::main]
async fn main() {
    dotenvy::from_filename("tests/.env").ok();

    let client = JdUnionClient::from_env().expect("JD_UNION_APP_KEY or JD_UNION_SECRET not set");

    get_json_value(&client).await;
    get_deserialized_value(&client).await;
    search_goods(&client).await;
    latest_orders(&client).await;
}
