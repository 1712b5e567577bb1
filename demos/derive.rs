use jd_union_rs::{JdUnionClient, UnionRequest};

/// A method the client has no typed operation for.
#[derive(UnionRequest, serde::Serialize, Debug, Clone)]
#[jd(method = "jd.union.open.goods.seckill.query", wrap = "goodsReq")]
#[serde(rename_all = "camelCase")]
pub struct SeckillQuery {
    pub page_index: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_begin_seckill: Option<u32>,
}

#[tokio::main]
async fn main() {
    // Construct a new client from JD_UNION_APP_KEY and JD_UNION_SECRET.
    let client = JdUnionClient::from_env().unwrap();

    let query = SeckillQuery {
        page_index: 1,
        page_size: 20,
        is_begin_seckill: Some(1),
    };

    println!("{}", query.param_json().unwrap());

    // Send it like any typed request.
    let response = query.send(&client).await.unwrap();
    if let Some(error) = response.error_response().unwrap() {
        eprintln!("{}: {:?}", error.code, error.message());
        return;
    }

    println!("{:#?}", response.success());
}
