use jd_union_rs::requests::PromotionGoodsInfoQueryRequest;
use jd_union_rs::{JdUnionClient, RequestToHttpString, UnionRequest};

#[tokio::main]
async fn main() {
    let app_key = std::env::var("JD_UNION_APP_KEY").expect("JD_UNION_APP_KEY not set");
    let secret = std::env::var("JD_UNION_SECRET").expect("JD_UNION_SECRET not set");

    let client = JdUnionClient::new(&app_key, &secret);

    let request = PromotionGoodsInfoQueryRequest::new([100012043978, 100008348542]);
    let prepared = client
        .prepare_request(PromotionGoodsInfoQueryRequest::METHOD, &request)
        .expect("invalid request");

    println!("{}", prepared.to_http_string().unwrap());
}
