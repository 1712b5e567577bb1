use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::client::JdUnionClient;
use crate::responses::UnionResponse;
use crate::UnionResult;

/// Trait for the UnionRequest derive macro.
///
/// Binds a serializable request struct to a vendor method. The struct is sent as
/// `360buy_param_json`, nested under [`UnionRequest::WRAP`] when set.
#[jd_union_rs::async_trait]
pub trait UnionRequest: Serialize + Send + Sync {
    /// The vendor method, e.g. `jd.union.open.goods.query`.
    const METHOD: &'static str;
    /// The request object key the struct is nested under, e.g. `goodsReq`.
    const WRAP: Option<&'static str> = None;

    /// Serializes the business parameters as they are sent.
    fn param_json(&self) -> UnionResult<String> {
        let json = match Self::WRAP {
            Some(key) => serde_json::to_string(&Wrapped { key, inner: self })?,
            None => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// Sends this request with the given client.
    async fn send(&self, client: &JdUnionClient) -> UnionResult<UnionResponse> {
        client.execute(self).await
    }
}

/// A single-entry object `{ key: inner }`, keeping the field order of `inner`.
struct Wrapped<'a, T: ?Sized> {
    key: &'static str,
    inner: &'a T,
}

impl<T> Serialize for Wrapped<'_, T>
where
    T: Serialize + ?Sized,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.inner)?;
        map.end()
    }
}
