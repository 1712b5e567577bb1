use std::time::Duration;

use serde::Serialize;
use typed_builder::TypedBuilder;
use url::Url;

use crate::credentials::Credentials;
use crate::error::JdUnionError;
use crate::params::{CommonParameters, SignedParameters, SIGN_KEY};
use crate::responses::UnionResponse;
use crate::sign::timestamp_now;
use crate::traits::UnionRequest;
use crate::UnionResult;

/// The router endpoint of the JD open platform.
pub const DEFAULT_ENDPOINT: &str = "https://api.jd.com/routerjson";

/// Environment variable overriding the endpoint in [`JdUnionClient::from_env`].
pub const ENDPOINT_VAR: &str = "JD_UNION_ENDPOINT";

/// The internal builder for constructing a `JdUnionClient`
#[derive(TypedBuilder)]
#[builder(build_method(into = JdUnionClient))]
pub struct InternalJdUnionClient {
    /// Application key, assigned by the JD open platform
    #[builder(setter(transform = |app_key: &str| app_key.to_string()))]
    app_key: String,
    /// Application secret, used to sign every request
    #[builder(setter(transform = |secret: &str| secret.to_string()))]
    secret: String,
    /// Full URL of the router endpoint
    #[builder(
        default = DEFAULT_ENDPOINT.to_string(),
        setter(transform = |endpoint: &str| endpoint.to_string())
    )]
    endpoint: String,
    /// Timeout for a single call
    #[builder(default = Duration::from_secs(60))]
    timeout: Duration,
}

/// The web client to consume the JD Union open API
///
/// Cloning is cheap and clones share the underlying connection pool. Calls carry all of
/// their state with them, so one client can serve any number of concurrent calls.
#[derive(Clone, Debug)]
pub struct JdUnionClient {
    /// Credentials of the client
    credentials: Credentials,
    /// Full URL of the router endpoint
    endpoint: String,
    /// Timeout for a single call
    timeout: Duration,
    /// The client
    client: reqwest::Client,
}

impl From<InternalJdUnionClient> for JdUnionClient {
    fn from(client: InternalJdUnionClient) -> Self {
        JdUnionClient {
            credentials: Credentials {
                app_key: client.app_key,
                secret: client.secret,
            },
            endpoint: client.endpoint,
            timeout: client.timeout,
            client: reqwest::Client::new(),
        }
    }
}

impl JdUnionClient {
    /// Creates a builder for the client
    pub fn builder() -> InternalJdUnionClientBuilder {
        InternalJdUnionClient::builder()
    }

    /// Creates a client for the default endpoint with the default timeout
    pub fn new(app_key: &str, secret: &str) -> JdUnionClient {
        JdUnionClient::builder()
            .app_key(app_key)
            .secret(secret)
            .build()
    }

    /// Creates a client from `JD_UNION_APP_KEY`, `JD_UNION_SECRET` and, if set,
    /// `JD_UNION_ENDPOINT`.
    pub fn from_env() -> UnionResult<JdUnionClient> {
        let credentials = Credentials::from_env()?;
        let endpoint =
            std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Ok(JdUnionClient::builder()
            .app_key(&credentials.app_key)
            .secret(&credentials.secret)
            .endpoint(&endpoint)
            .build())
    }

    /// Returns the credentials of the client.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the timeout applied to each call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns a client sharing this one's connection pool with a different per-call timeout.
    pub fn with_timeout(&self, timeout: Duration) -> JdUnionClient {
        JdUnionClient {
            timeout,
            ..self.clone()
        }
    }

    /// Assembles and signs the common parameters of a call to `method`.
    pub fn signed_parameters(
        &self,
        method: &str,
        param_json: String,
        timestamp: &str,
    ) -> SignedParameters {
        CommonParameters::new(method, &self.credentials, timestamp, param_json)
            .sign(&self.credentials.secret)
    }

    /// Builds the full request URL from signed parameters.
    pub fn signed_url(&self, signed: &SignedParameters) -> UnionResult<Url> {
        Ok(Url::parse_with_params(&self.endpoint, signed.query_pairs())?)
    }

    /// Prepares a signed request for `method` without sending it, using the given timestamp.
    pub fn prepare_request_at<P>(
        &self,
        method: &str,
        params: &P,
        timestamp: &str,
    ) -> UnionResult<reqwest::Request>
    where
        P: Serialize + ?Sized,
    {
        let param_json = serde_json::to_string(params)?;
        self.build_request(method, param_json, timestamp)
    }

    /// Prepares a signed request for `method` without sending it.
    pub fn prepare_request<P>(&self, method: &str, params: &P) -> UnionResult<reqwest::Request>
    where
        P: Serialize + ?Sized,
    {
        self.prepare_request_at(method, params, &timestamp_now())
    }

    /// Calls `method` with an arbitrary business parameter object and unwraps the response.
    pub async fn request<P>(&self, method: &str, params: &P) -> UnionResult<UnionResponse>
    where
        P: Serialize + ?Sized,
    {
        let param_json = serde_json::to_string(params)?;
        self.dispatch(method, param_json).await
    }

    /// Sends a typed request and unwraps the response.
    pub async fn execute<R>(&self, request: &R) -> UnionResult<UnionResponse>
    where
        R: UnionRequest + ?Sized,
    {
        let param_json = request.param_json()?;
        self.dispatch(R::METHOD, param_json).await
    }

    /// Calls `method` and returns the raw response object.
    pub async fn request_as_response<P>(
        &self,
        method: &str,
        params: &P,
    ) -> UnionResult<reqwest::Response>
    where
        P: Serialize + ?Sized,
    {
        let request = self.prepare_request(method, params)?;
        Ok(self.client.execute(request).await?)
    }

    fn build_request(
        &self,
        method: &str,
        param_json: String,
        timestamp: &str,
    ) -> UnionResult<reqwest::Request> {
        let signed = self.signed_parameters(method, param_json, timestamp);
        let url = self.signed_url(&signed)?;
        Ok(self.client.get(url).timeout(self.timeout).build()?)
    }

    #[tracing::instrument(name = "jd_union.dispatch", skip_all, fields(method = %method))]
    async fn dispatch(&self, method: &str, param_json: String) -> UnionResult<UnionResponse> {
        let request = self.build_request(method, param_json, &timestamp_now())?;
        tracing::debug!(
            url = %redacted_url(request.url()),
            timeout = ?self.timeout,
            "sending request"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(JdUnionError::HttpStatus { status, body });
        }

        let body: serde_json::Value = serde_json::from_str(&body)?;
        let response = UnionResponse::from_body(method, body);
        if let UnionResponse::Error(error) = &response {
            tracing::warn!(%error, "JD Union API reported an error");
        }

        Ok(response)
    }
}

/// The request URL without its signature, for logging.
fn redacted_url(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SIGN_KEY)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
