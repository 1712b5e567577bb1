use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::UnionResult;

/// Key of the envelope the vendor uses to report business errors.
pub const ERROR_RESPONSE_KEY: &str = "error_response";

/// Suffix of the success envelope key. The misspelling is the vendor's.
pub const RESPONSE_SUFFIX: &str = "_responce";

/// Returns the key the success payload of `method` is nested under.
///
/// `jd.union.open.goods.query` becomes `jd_union_open_goods_query_responce`.
pub fn response_field_name(method: &str) -> String {
    let mut field = method.replace('.', "_");
    field.push_str(RESPONSE_SUFFIX);
    field
}

/// An unwrapped response of the JD Union API.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionResponse {
    /// The vendor rejected the call. Contains the `error_response` object verbatim.
    Error(Value),
    /// The payload found under `<method>_responce`, `None` if the vendor omitted it.
    Success(Option<Value>),
}

impl UnionResponse {
    /// Unwraps a parsed response body of a call to `method`.
    pub fn from_body(method: &str, mut body: Value) -> Self {
        let Some(object) = body.as_object_mut() else {
            return UnionResponse::Success(None);
        };

        // An empty `error_response` (null, false, 0 or "") does not mark a failure.
        match object.remove(ERROR_RESPONSE_KEY) {
            Some(error) if reports_error(&error) => return UnionResponse::Error(error),
            _ => {}
        }

        UnionResponse::Success(object.remove(&response_field_name(method)))
    }

    /// Returns whether the vendor reported an error.
    pub fn is_error(&self) -> bool {
        matches!(self, UnionResponse::Error(_))
    }

    /// Returns the unwrapped value regardless of its kind, i.e. either the error object or
    /// the success payload.
    pub fn into_value(self) -> Option<Value> {
        match self {
            UnionResponse::Error(error) => Some(error),
            UnionResponse::Success(payload) => payload,
        }
    }

    /// Returns the success payload, if any.
    pub fn success(&self) -> Option<&Value> {
        match self {
            UnionResponse::Success(payload) => payload.as_ref(),
            UnionResponse::Error(_) => None,
        }
    }

    /// Parses the vendor error, if this is one.
    pub fn error_response(&self) -> UnionResult<Option<ErrorResponse>> {
        match self {
            UnionResponse::Error(error) => Ok(Some(ErrorResponse::deserialize(error)?)),
            UnionResponse::Success(_) => Ok(None),
        }
    }

    /// Deserializes the success payload to the type `T`.
    ///
    /// Returns `Ok(None)` for vendor errors and for missing payloads.
    pub fn deserialize_success<T>(&self) -> UnionResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.success() {
            Some(payload) => Ok(Some(T::deserialize(payload)?)),
            None => Ok(None),
        }
    }
}

/// The body of an `error_response`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// The error code. Sent as a number or a string depending on the failing layer.
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    /// Chinese description of the error.
    pub zh_desc: Option<String>,
    /// English description of the error.
    pub en_desc: Option<String>,
    /// Any other field, e.g. `msg`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorResponse {
    /// Returns the most descriptive message available.
    pub fn message(&self) -> Option<&str> {
        self.en_desc
            .as_deref()
            .or(self.zh_desc.as_deref())
            .or_else(|| self.extra.get("msg").and_then(Value::as_str))
    }
}

fn reports_error(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(code) => Ok(code),
        Value::Number(code) => Ok(code.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number as error code, got {other}"
        ))),
    }
}
