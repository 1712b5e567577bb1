use std::collections::BTreeMap;

use crate::sign::Sign;
use crate::Credentials;

/// Query key of the remote method name.
pub const METHOD_KEY: &str = "method";
/// Query key of the application key.
pub const APP_KEY_KEY: &str = "app_key";
/// Query key of the request timestamp.
pub const TIMESTAMP_KEY: &str = "timestamp";
/// Query key of the response format.
pub const FORMAT_KEY: &str = "format";
/// Query key of the API version.
pub const VERSION_KEY: &str = "v";
/// Query key of the signing algorithm.
pub const SIGN_METHOD_KEY: &str = "sign_method";
/// Query key of the JSON serialized business parameters.
pub const PARAM_JSON_KEY: &str = "360buy_param_json";
/// Query key of the signature.
pub const SIGN_KEY: &str = "sign";

/// The only response format the client understands.
pub const FORMAT: &str = "json";
/// The API version the client speaks.
pub const API_VERSION: &str = "1.0";
/// The signing algorithm the client uses.
pub const SIGN_METHOD: &str = "md5";

/// The protocol level parameters of a single call.
///
/// Keys are kept in ascending order, which is the order they are signed and sent in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonParameters {
    inner: BTreeMap<String, String>,
}

impl CommonParameters {
    /// Assembles the common parameters for one call of `method`.
    pub fn new(
        method: &str,
        credentials: &Credentials,
        timestamp: &str,
        param_json: String,
    ) -> Self {
        Self::default()
            .param(METHOD_KEY, method)
            .param(APP_KEY_KEY, credentials.app_key.as_str())
            .param(TIMESTAMP_KEY, timestamp)
            .param(FORMAT_KEY, FORMAT)
            .param(VERSION_KEY, API_VERSION)
            .param(SIGN_METHOD_KEY, SIGN_METHOD)
            .param(PARAM_JSON_KEY, param_json)
    }

    /// Adds a parameter, replacing any previous value of the same key
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Iterates over all parameters in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Finalizes the parameters by signing them with the application secret.
    pub fn sign(self, secret: &str) -> SignedParameters {
        let sign = Sign::new(&self, secret);
        SignedParameters { params: self, sign }
    }
}

impl<K, V> FromIterator<(K, V)> for CommonParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Common parameters together with their signature. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParameters {
    params: CommonParameters,
    sign: Sign,
}

impl SignedParameters {
    /// Returns the signature
    pub fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the signed parameters
    pub fn params(&self) -> &CommonParameters {
        &self.params
    }

    /// Iterates over the query pairs in the order they are sent: the sorted common
    /// parameters followed by `sign`.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .chain(std::iter::once((SIGN_KEY, self.sign.hash.as_str())))
    }
}
